use seed::browser::fetch::{FetchError, Method, Request};
use serde::de::DeserializeOwned;
use shared::{Endpoints, Gift, Guest, NewParty, Party, PartyDetails, PartyId, Rsvp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::JsonError(e) => ApiError::Decode(format!("{:?}", e)),
            FetchError::StatusError(status) => ApiError::Status(status.code),
            other => ApiError::Network(format!("{:?}", other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

async fn get_json<T: DeserializeOwned + 'static>(url: String) -> Result<T> {
    let data = Request::new(url)
        .method(Method::Get)
        .fetch()
        .await?
        .check_status()?
        .json()
        .await?;
    Ok(data)
}

pub async fn list_parties(endpoints: &Endpoints) -> Result<Vec<Party>> {
    get_json(endpoints.parties()).await
}

pub async fn get_party(endpoints: &Endpoints, id: PartyId) -> Result<Party> {
    get_json(endpoints.party(id)).await
}

pub async fn create_party(endpoints: &Endpoints, party: &NewParty) -> Result<Party> {
    let created = Request::new(endpoints.parties())
        .method(Method::Post)
        .json(party)?
        .fetch()
        .await?
        .check_status()?
        .json()
        .await?;
    Ok(created)
}

/// The service answers with the removed record; only the status matters here.
pub async fn delete_party(endpoints: &Endpoints, id: PartyId) -> Result<()> {
    Request::new(endpoints.party(id))
        .method(Method::Delete)
        .fetch()
        .await?
        .check_status()?;
    Ok(())
}

pub async fn list_guests(endpoints: &Endpoints, party: PartyId) -> Result<Vec<Guest>> {
    get_json(endpoints.guests_by_party(party)).await
}

pub async fn list_rsvps(endpoints: &Endpoints, party: PartyId) -> Result<Vec<Rsvp>> {
    get_json(endpoints.rsvps_by_party(party)).await
}

/// There is no per-party gift route; callers filter by `party_id`.
pub async fn list_gifts(endpoints: &Endpoints) -> Result<Vec<Gift>> {
    get_json(endpoints.gifts()).await
}

/// Fetches a party together with its guests, RSVPs and gifts.
///
/// The four requests run concurrently. Missing gifts are not fatal.
pub async fn party_details(endpoints: &Endpoints, id: PartyId) -> Result<PartyDetails> {
    let (party, guests, rsvps, gifts) = futures::join!(
        get_party(endpoints, id),
        list_guests(endpoints, id),
        list_rsvps(endpoints, id),
        list_gifts(endpoints),
    );

    let gifts = gifts.unwrap_or_else(|e| {
        log::warn!("could not load gifts of party {}: {}", id, e);
        vec![]
    });

    Ok(PartyDetails::new(party?, &guests?, &rsvps?, gifts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_errors_keep_the_serde_message() {
        let serde_error = serde_json::from_str::<Party>("{").unwrap_err();
        let message = serde_error.to_string();

        match ApiError::from(FetchError::SerdeError(serde_error)) {
            ApiError::Decode(decoded) => assert_eq!(decoded, message),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "unexpected status 404");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "network error: offline"
        );
    }
}
