//! Pairing of guests with their RSVP status.
//!
//! RSVPs that name their guest are matched by `guestId`. The service has
//! also been seen to return RSVPs without one; in that case there is
//! nothing to join on and guest `i` is paired with RSVP `i`, which only
//! holds if both lists come back in the same order.

use crate::model::{Guest, GuestId, Rsvp};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct GuestRsvp {
    pub guest: Guest,
    pub status: String,
}

/// Pairs guests with RSVPs, keeping the guest order.
///
/// Guests without a matching RSVP are left out, so for a consistent data
/// set the result has `min(guests.len(), rsvps.len())` entries.
pub fn pair_guests_with_rsvps(guests: &[Guest], rsvps: &[Rsvp]) -> Vec<GuestRsvp> {
    if rsvps.iter().all(|rsvp| rsvp.guest_id.is_some()) {
        join_by_guest_id(guests, rsvps)
    } else {
        pair_by_position(guests, rsvps)
    }
}

fn join_by_guest_id(guests: &[Guest], rsvps: &[Rsvp]) -> Vec<GuestRsvp> {
    // first RSVP wins when a guest answered twice
    let mut by_guest: HashMap<GuestId, &Rsvp> = HashMap::new();
    for rsvp in rsvps {
        if let Some(guest_id) = rsvp.guest_id {
            by_guest.entry(guest_id).or_insert(rsvp);
        }
    }

    guests
        .iter()
        .filter_map(|guest| {
            by_guest.get(&guest.id).map(|rsvp| GuestRsvp {
                guest: guest.clone(),
                status: rsvp.status.clone(),
            })
        })
        .collect()
}

fn pair_by_position(guests: &[Guest], rsvps: &[Rsvp]) -> Vec<GuestRsvp> {
    guests
        .iter()
        .zip(rsvps)
        .map(|(guest, rsvp)| GuestRsvp {
            guest: guest.clone(),
            status: rsvp.status.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartyId, RsvpId};
    use pretty_assertions::assert_eq;

    fn guest(id: u64, name: &str) -> Guest {
        Guest {
            id: GuestId(id),
            name: name.to_string(),
            party_id: PartyId(1),
            email: None,
            phone: None,
        }
    }

    fn rsvp(id: u64, status: &str, guest_id: Option<u64>) -> Rsvp {
        Rsvp {
            id: RsvpId(id),
            status: status.to_string(),
            party_id: PartyId(1),
            guest_id: guest_id.map(GuestId),
        }
    }

    fn names_and_statuses(pairs: &[GuestRsvp]) -> Vec<(&str, &str)> {
        pairs
            .iter()
            .map(|pair| (pair.guest.name.as_str(), pair.status.as_str()))
            .collect()
    }

    #[test]
    fn joins_on_guest_id_regardless_of_order() {
        let guests = vec![guest(1, "Ann"), guest(2, "Bob")];
        let rsvps = vec![rsvp(10, "maybe", Some(2)), rsvp(11, "attending", Some(1))];

        let pairs = pair_guests_with_rsvps(&guests, &rsvps);

        assert_eq!(
            names_and_statuses(&pairs),
            vec![("Ann", "attending"), ("Bob", "maybe")]
        );
    }

    #[test]
    fn falls_back_to_position_without_guest_ids() {
        let guests = vec![guest(1, "Ann"), guest(2, "Bob")];
        let rsvps = vec![rsvp(10, "maybe", None), rsvp(11, "attending", Some(1))];

        let pairs = pair_guests_with_rsvps(&guests, &rsvps);

        assert_eq!(
            names_and_statuses(&pairs),
            vec![("Ann", "maybe"), ("Bob", "attending")]
        );
    }

    #[test]
    fn pair_count_is_the_shorter_list() {
        let guests = vec![guest(1, "Ann"), guest(2, "Bob"), guest(3, "Cid")];
        let keyed = vec![rsvp(10, "attending", Some(3)), rsvp(11, "declined", Some(1))];
        let positional = vec![rsvp(10, "attending", None)];

        assert_eq!(pair_guests_with_rsvps(&guests, &keyed).len(), 2);
        assert_eq!(pair_guests_with_rsvps(&guests, &positional).len(), 1);
        assert_eq!(pair_guests_with_rsvps(&guests[..1], &keyed).len(), 1);
    }

    #[test]
    fn duplicate_answers_keep_the_first() {
        let guests = vec![guest(1, "Ann")];
        let rsvps = vec![rsvp(10, "maybe", Some(1)), rsvp(11, "attending", Some(1))];

        assert_eq!(
            names_and_statuses(&pair_guests_with_rsvps(&guests, &rsvps)),
            vec![("Ann", "maybe")]
        );
    }

    #[test]
    fn no_rsvps_means_no_pairs() {
        assert!(pair_guests_with_rsvps(&[guest(1, "Ann")], &[]).is_empty());
    }
}
