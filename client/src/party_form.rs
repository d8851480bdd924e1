use seed::{self, prelude::*, *};
use shared::{Endpoints, NewParty, Party};
use thiserror::Error;

use crate::api;

#[derive(Debug, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Current values of the creation form fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

impl Model {
    /// Empties every field and turns the old values into a create request.
    pub fn take_draft(&mut self) -> Result<NewParty, FormError> {
        let draft = std::mem::take(self);
        for (label, value) in [
            ("name", &draft.name),
            ("date", &draft.date),
            ("time", &draft.time),
            ("location", &draft.location),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::Missing(label));
            }
        }

        Ok(NewParty {
            name: draft.name,
            description: draft.description,
            location: draft.location,
            date: draft.date,
            time: draft.time,
        })
    }
}

pub enum Msg {
    NameChanged(String),
    DateChanged(String),
    TimeChanged(String),
    LocationChanged(String),
    DescriptionChanged(String),
    Submit,
    Created(api::Result<Party>),
}

pub fn update(msg: Msg, model: &mut Model, endpoints: &Endpoints, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::NameChanged(name) => model.name = name,
        Msg::DateChanged(date) => model.date = date,
        Msg::TimeChanged(time) => model.time = time,
        Msg::LocationChanged(location) => model.location = location,
        Msg::DescriptionChanged(description) => model.description = description,

        Msg::Submit => match model.take_draft() {
            Ok(party) => {
                orders.perform_cmd(create_request(endpoints.clone(), party));
            }
            Err(e) => log::warn!("party not created: {}", e),
        },

        Msg::Created(Ok(party)) => {
            log::info!("created party {}", party.id);
            let notice = format!("{} was created with ID: {}", party.name, party.id);
            if let Err(e) = window().alert_with_message(&notice) {
                log::warn!("could not show alert: {:?}", e);
            }
        }

        Msg::Created(Err(e)) => {
            log::error!("could not create party: {}", e);
            orders.skip();
        }
    }
}

async fn create_request(endpoints: Endpoints, party: NewParty) -> Msg {
    Msg::Created(api::create_party(&endpoints, &party).await)
}

pub fn view(model: &Model) -> Node<Msg> {
    form![
        id!("new-party-form"),
        attrs! {At::Class => "border rounded-bottom p-3", At::Style => "margin-top: -1px !important"},
        ev(Ev::Submit, |event| {
            event.prevent_default();
            Msg::Submit
        }),
        field("name", "Party Name:", "text", &model.name, Msg::NameChanged),
        field("date", "Date", "date", &model.date, Msg::DateChanged),
        field("time", "Time", "time", &model.time, Msg::TimeChanged),
        field("location", "Location:", "text", &model.location, Msg::LocationChanged),
        div![
            attrs! {At::Class => "form-group"},
            label![attrs! {At::For => "description"}, "Description:"],
            textarea![
                input_ev(Ev::Input, Msg::DescriptionChanged),
                attrs! {
                    At::Id => "description",
                    At::Name => "description",
                    At::Class => "form-control",
                    At::Value => model.description,
                },
            ],
        ],
        button![
            attrs! {At::Type => "submit", At::Class => "btn btn-primary"},
            "Create new party"
        ],
    ]
}

fn field(
    name: &str,
    label_text: &str,
    input_type: &str,
    value: &str,
    on_input: impl FnOnce(String) -> Msg + Clone + 'static,
) -> Node<Msg> {
    div![
        attrs! {At::Class => "form-group"},
        label![attrs! {At::For => name}, label_text],
        input![
            input_ev(Ev::Input, on_input),
            attrs! {
                At::Id => name,
                At::Name => name,
                At::Type => input_type,
                At::Class => "form-control",
                At::Value => value,
                At::Required => AtValue::None,
            },
        ],
    ]
}
