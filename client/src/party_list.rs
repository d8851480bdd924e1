use seed::{self, prelude::*, *};
use shared::{Endpoints, Party, PartyId};

use crate::api;

#[derive(Default)]
pub struct Model {
    pub parties: Vec<Party>,
    pub loaded: bool,
}

impl Model {
    pub fn contains(&self, id: PartyId) -> bool {
        self.parties.iter().any(|party| party.id == id)
    }
}

pub enum Msg {
    NoAction,
    Refresh,
    Fetched(api::Result<Vec<Party>>),
    ShowDetails(PartyId),
    Delete(PartyId),
    Deleted(PartyId, api::Result<()>),
}

/// Whether handling `msg` ends with a fresh copy of the list being fetched.
/// A delete is always followed by one, whether it worked or not.
pub fn reloads_list(msg: &Msg) -> bool {
    matches!(msg, Msg::Refresh | Msg::Deleted(..))
}

pub fn update(msg: Msg, model: &mut Model, endpoints: &Endpoints, orders: &mut impl Orders<Msg>) {
    let reload = reloads_list(&msg);
    match msg {
        Msg::NoAction | Msg::Refresh => {}

        Msg::Fetched(Ok(parties)) => {
            log::debug!("loaded {} parties", parties.len());
            model.parties = parties;
            model.loaded = true;
        }

        Msg::Fetched(Err(e)) => {
            // keep showing whatever was there before
            log::error!("could not load parties: {}", e);
            model.loaded = true;
        }

        // opened by the parent, which owns the detail panels
        Msg::ShowDetails(_) => {
            orders.skip();
        }

        Msg::Delete(id) => {
            orders.skip().perform_cmd(delete_request(endpoints.clone(), id));
        }

        Msg::Deleted(id, result) => {
            match result {
                Ok(()) => log::info!("deleted party {}", id),
                Err(e) => log::error!("could not delete party {}: {}", id, e),
            }
        }
    }

    if reload {
        orders.skip().perform_cmd(list_request(endpoints.clone()));
    }
}

pub async fn list_request(endpoints: Endpoints) -> Msg {
    Msg::Fetched(api::list_parties(&endpoints).await)
}

async fn delete_request(endpoints: Endpoints, id: PartyId) -> Msg {
    Msg::Deleted(id, api::delete_party(&endpoints, id).await)
}

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    nodes![
        nav_bar(model),
        div![
            id!("party-container"),
            attrs! {At::Class => "list-group", At::Style => "margin-top: -1px !important"},
            model.parties.iter().map(party_view),
        ]
    ]
}

fn party_view(party: &Party) -> Node<Msg> {
    let id = party.id;
    div![
        attrs! {At::Class => "party list-group-item"},
        h2![party.name.as_str()],
        p![party.description.as_str()],
        p![party.display_date()],
        p![party.time.as_str()],
        p![party.location.as_str()],
        button![
            attrs! {At::Class => "details-button btn btn-secondary", At::from("data-id") => id.to_string()},
            ev(Ev::Click, move |_| Msg::ShowDetails(id)),
            "See Details"
        ],
        button![
            attrs! {At::Class => "delete-button btn btn-danger float-right", At::from("data-id") => id.to_string()},
            ev(Ev::Click, move |_| {
                if window().confirm_with_message("Sure?").unwrap_or(false) {
                    Msg::Delete(id)
                } else {
                    Msg::NoAction
                }
            }),
            "Delete"
        ],
    ]
}

fn nav_bar(model: &Model) -> Node<Msg> {
    nav![
        attrs! {At::Class => "navbar navbar-light bg-white border rounded-top mt-1"},
        a!["Parties", attrs! {At::Class => "navbar-brand"}],
        if !model.loaded {
            div![
                attrs![At::Class => "spinner-border text-secondary"],
                span![attrs![At::Class => "sr-only"], "Loading..."],
            ]
        } else {
            span![
                attrs! {At::Class => "badge badge-secondary"},
                model.parties.len().to_string()
            ]
        }
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use serde_json::json;

    #[test]
    fn delete_is_followed_by_a_reload_either_way() {
        assert!(reloads_list(&Msg::Deleted(PartyId(1), Ok(()))));
        assert!(reloads_list(&Msg::Deleted(PartyId(1), Err(ApiError::Status(500)))));
        assert!(reloads_list(&Msg::Refresh));
    }

    #[test]
    fn other_messages_do_not_reload() {
        assert!(!reloads_list(&Msg::Delete(PartyId(1))));
        assert!(!reloads_list(&Msg::ShowDetails(PartyId(1))));
        assert!(!reloads_list(&Msg::Fetched(Ok(vec![]))));
        assert!(!reloads_list(&Msg::NoAction));
    }

    #[test]
    fn contains_looks_up_by_id() {
        let model = Model {
            parties: serde_json::from_value(json!([
                { "id": 1, "name": "Bash" },
                { "id": 2, "name": "Brunch" }
            ]))
            .unwrap(),
            loaded: true,
        };

        assert!(model.contains(PartyId(2)));
        assert!(!model.contains(PartyId(3)));
    }
}
