use crate::model::PartyId;

pub const DEFAULT_BASE_URL: &str = "https://fsa-async-await.herokuapp.com/api/workshop";

/// URLs of the remote party service, relative to one base.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Endpoints {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn parties(&self) -> String {
        format!("{}/parties", self.base)
    }

    pub fn party(&self, id: PartyId) -> String {
        format!("{}/parties/{}", self.base, id)
    }

    pub fn guests_by_party(&self, id: PartyId) -> String {
        format!("{}/guests/party/{}", self.base, id)
    }

    pub fn rsvps_by_party(&self, id: PartyId) -> String {
        format!("{}/rsvps/party/{}", self.base, id)
    }

    pub fn gifts(&self) -> String {
        format!("{}/gifts", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(DEFAULT_BASE_URL)
    }
}
