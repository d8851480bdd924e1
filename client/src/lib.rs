use seed::{prelude::*, *};
use shared::{Endpoints, PartyId};

mod api;
mod config;
mod party_detail;
mod party_form;
mod party_list;

use config::Config;

// ------ ------
//     Init
// ------ ------

fn init(_: Url, orders: &mut impl Orders<Msg>, config: Config) -> Model {
    log::info!("using party service at {}", config.endpoints.base());

    orders
        .proxy(Msg::PartyList)
        .perform_cmd(party_list::list_request(config.endpoints.clone()));

    Model {
        endpoints: config.endpoints,
        party_list: party_list::Model::default(),
        party_detail: party_detail::Model::default(),
        party_form: party_form::Model::default(),
    }
}

// ------ ------
//     Model
// ------ ------

struct Model {
    endpoints: Endpoints,
    party_list: party_list::Model,
    party_detail: party_detail::Model,
    party_form: party_form::Model,
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    PartyList(party_list::Msg),
    PartyDetail(party_detail::Msg),
    PartyForm(party_form::Msg),
}

/// The list message a form message leads to once it has been handled.
/// The list is reloaded after every create call, whether it worked or not.
fn list_follow_up(msg: &party_form::Msg) -> Option<party_list::Msg> {
    match msg {
        party_form::Msg::Created(_) => Some(party_list::Msg::Refresh),
        _ => None,
    }
}

/// A new list replaces the old one, so panels of parties that are gone
/// have to be closed.
fn prunes_panels(msg: &party_list::Msg) -> bool {
    matches!(msg, party_list::Msg::Fetched(Ok(_)))
}

fn close_stale_panels(panels: &mut party_detail::Model, list: &party_list::Model) {
    panels.retain_parties(|id| list.contains(id));
}

/// Details that arrive after their party left the list are not shown.
fn accept_details(list: &party_list::Model, id: PartyId) -> bool {
    list.contains(id)
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::PartyList(party_list::Msg::ShowDetails(id)) => {
            orders.send_msg(Msg::PartyDetail(party_detail::Msg::Open(id)));
        }

        Msg::PartyList(msg) => {
            let prune = prunes_panels(&msg);
            party_list::update(
                msg,
                &mut model.party_list,
                &model.endpoints,
                &mut orders.proxy(Msg::PartyList),
            );
            if prune {
                close_stale_panels(&mut model.party_detail, &model.party_list);
            }
        }

        Msg::PartyDetail(party_detail::Msg::Loaded(id, _))
            if !accept_details(&model.party_list, id) =>
        {
            log::debug!("party {} is gone, dropping its details", id);
            orders.skip();
        }

        Msg::PartyDetail(msg) => {
            party_detail::update(
                msg,
                &mut model.party_detail,
                &model.endpoints,
                &mut orders.proxy(Msg::PartyDetail),
            );
        }

        Msg::PartyForm(msg) => {
            let follow_up = list_follow_up(&msg);
            party_form::update(
                msg,
                &mut model.party_form,
                &model.endpoints,
                &mut orders.proxy(Msg::PartyForm),
            );
            if let Some(list_msg) = follow_up {
                orders.send_msg(Msg::PartyList(list_msg));
            }
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> impl IntoNodes<Msg> {
    div![
        style! {
            St::FontFamily => "sans-serif";
            St::MaxWidth => px(650);
            St::Margin => "auto";
        },
        party_list::view(&model.party_list).map_msg(Msg::PartyList),
        party_detail::view(&model.party_detail).map_msg(Msg::PartyDetail),
        party_form::view(&model.party_form).map_msg(Msg::PartyForm),
    ]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = Config::from_build_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }

    App::start(
        "app",
        move |url, orders| init(url, orders, config),
        update,
        view,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ApiError;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared::{Party, PartyDetails};

    fn parties(ids: &[u64]) -> Vec<Party> {
        ids.iter()
            .map(|id| serde_json::from_value(json!({ "id": id, "name": "Bash" })).unwrap())
            .collect()
    }

    fn list(ids: &[u64]) -> party_list::Model {
        party_list::Model {
            parties: parties(ids),
            loaded: true,
        }
    }

    fn is_refresh(msg: Option<party_list::Msg>) -> bool {
        matches!(msg, Some(party_list::Msg::Refresh))
    }

    #[test]
    fn create_is_followed_by_one_refresh_either_way() {
        let created = party_form::Msg::Created(Ok(parties(&[5]).remove(0)));
        let failed = party_form::Msg::Created(Err(ApiError::Network("offline".to_string())));

        assert!(is_refresh(list_follow_up(&created)));
        assert!(is_refresh(list_follow_up(&failed)));
    }

    #[test]
    fn editing_and_submitting_do_not_refresh() {
        assert!(list_follow_up(&party_form::Msg::NameChanged("Bash".to_string())).is_none());
        assert!(list_follow_up(&party_form::Msg::Submit).is_none());
    }

    #[test]
    fn details_of_parties_no_longer_listed_are_dropped() {
        let current = list(&[1, 2]);

        assert!(accept_details(&current, PartyId(2)));
        assert!(!accept_details(&current, PartyId(3)));
        assert!(!accept_details(&party_list::Model::default(), PartyId(1)));
    }

    #[test]
    fn refreshed_list_closes_panels_of_deleted_party() {
        let mut panels = party_detail::Model::default();
        for id in &[1, 2] {
            panels.open(PartyDetails::new(parties(&[*id]).remove(0), &[], &[], vec![]));
        }

        let fetched = party_list::Msg::Fetched(Ok(parties(&[2])));
        assert!(prunes_panels(&fetched));
        close_stale_panels(&mut panels, &list(&[2]));

        let open: Vec<PartyId> = panels
            .panels()
            .iter()
            .map(|panel| panel.details.party.id)
            .collect();
        assert_eq!(open, vec![PartyId(2)]);
    }

    #[test]
    fn failed_refresh_keeps_panels() {
        let failed = party_list::Msg::Fetched(Err(ApiError::Status(503)));
        assert!(!prunes_panels(&failed));
    }
}
