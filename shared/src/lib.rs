pub mod endpoints;
pub mod join;
pub mod model;

pub use endpoints::Endpoints;
pub use join::{pair_guests_with_rsvps, GuestRsvp};
pub use model::{Gift, GiftId, Guest, GuestId, NewParty, Party, PartyId, Rsvp, RsvpId};

/// Everything the detail panel needs about one party.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyDetails {
    pub party: Party,
    pub guests: Vec<GuestRsvp>,
    pub gifts: Vec<Gift>,
}

impl PartyDetails {
    pub fn new(party: Party, guests: &[Guest], rsvps: &[Rsvp], gifts: Vec<Gift>) -> Self {
        let gifts = gifts
            .into_iter()
            .filter(|gift| gift.party_id == party.id)
            .collect();
        PartyDetails {
            guests: pair_guests_with_rsvps(guests, rsvps),
            party,
            gifts,
        }
    }
}
