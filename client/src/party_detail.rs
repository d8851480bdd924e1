use seed::{self, prelude::*, *};
use shared::{Endpoints, PartyDetails, PartyId};

use crate::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelKey(u32);

pub struct Panel {
    pub key: PanelKey,
    pub details: PartyDetails,
}

/// Open detail panels, oldest first.
#[derive(Default)]
pub struct Model {
    panels: Vec<Panel>,
    next_key: u32,
}

impl Model {
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn open(&mut self, details: PartyDetails) -> PanelKey {
        let key = PanelKey(self.next_key);
        self.next_key = self.next_key.wrapping_add(1);
        self.panels.push(Panel { key, details });
        key
    }

    /// Removes the panel with `key`; other panels stay untouched.
    pub fn close(&mut self, key: PanelKey) -> bool {
        let before = self.panels.len();
        self.panels.retain(|panel| panel.key != key);
        self.panels.len() != before
    }

    /// Drops panels of parties for which `keep` returns false.
    pub fn retain_parties(&mut self, keep: impl Fn(PartyId) -> bool) {
        self.panels.retain(|panel| keep(panel.details.party.id));
    }
}

pub enum Msg {
    Open(PartyId),
    Loaded(PartyId, api::Result<PartyDetails>),
    Close(PanelKey),
}

pub fn update(msg: Msg, model: &mut Model, endpoints: &Endpoints, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Open(id) => {
            orders.skip().perform_cmd(details_request(endpoints.clone(), id));
        }

        Msg::Loaded(id, Ok(details)) => {
            log::debug!(
                "party {} has {} answered guests and {} gifts",
                id,
                details.guests.len(),
                details.gifts.len()
            );
            model.open(details);
        }

        Msg::Loaded(id, Err(e)) => {
            log::error!("could not load details of party {}: {}", id, e);
            orders.skip();
        }

        Msg::Close(key) => {
            model.close(key);
        }
    }
}

async fn details_request(endpoints: Endpoints, id: PartyId) -> Msg {
    Msg::Loaded(id, api::party_details(&endpoints, id).await)
}

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    model.panels().iter().map(panel_view).collect()
}

fn panel_view(panel: &Panel) -> Node<Msg> {
    let key = panel.key;
    let party = &panel.details.party;
    div![
        attrs! {At::Class => "party-details card shadow"},
        style! {
            St::Position => "fixed";
            St::Top => px(40);
            St::Left => "50%";
            St::Transform => "translateX(-50%)";
            St::MinWidth => px(320);
            St::Padding => px(16);
            St::BackgroundColor => "white";
            St::ZIndex => "10";
        },
        h2![party.name.as_str()],
        p![party.description.as_str()],
        p![party.location.as_str()],
        p![party.time.as_str()],
        p![party.display_date()],
        h3!["Guests:"],
        ul![panel.details.guests.iter().map(|pair| li![
            div![pair.guest.name.as_str()],
            div![pair.status.as_str()],
        ])],
        if panel.details.gifts.is_empty() {
            empty![]
        } else {
            div![
                h3!["Gifts:"],
                ul![panel.details.gifts.iter().map(|gift| li![
                    div![gift.name.as_str()],
                    div![gift.description.as_str()],
                ])],
            ]
        },
        button![
            attrs! {At::Class => "close-button btn btn-secondary"},
            ev(Ev::Click, move |_| Msg::Close(key)),
            "Close"
        ],
    ]
}
