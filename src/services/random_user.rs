use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::fmt;

/// randomuser.me API endpoint
pub const RANDOM_USER_ENDPOINT: &str = "https://randomuser.me/api/";

/// Message shown to the user for any failed fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch user. Please try again.";

// =============================================================================
// Wire types
// =============================================================================

/// Response envelope from randomuser.me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUserRecord>,
}

/// A single generated user. Only the fields the card shows are modelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserRecord {
    pub name: RandomUserName,
    pub email: String,
    pub location: RandomUserLocation,
    pub picture: RandomUserPicture,
    pub login: RandomUserLogin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserLocation {
    pub street: RandomUserStreet,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserStreet {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserPicture {
    pub large: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserLogin {
    pub uuid: String,
}

// =============================================================================
// Display model
// =============================================================================

/// Render-ready shape of one fetched user, rebuilt in full on every fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProfile {
    pub name: String,
    pub email: String,
    pub address: String,
    pub image_url: String,
    pub reference_id: String,
}

impl From<&RandomUserRecord> for DisplayProfile {
    fn from(record: &RandomUserRecord) -> Self {
        let location = &record.location;
        Self {
            name: format!("{} {}", record.name.first, record.name.last),
            email: record.email.clone(),
            address: format!(
                "{} {}, {}, {}",
                location.street.number, location.street.name, location.city, location.country
            ),
            image_url: record.picture.large.clone(),
            reference_id: record.login.uuid.clone(),
        }
    }
}

/// Parse a response body and map its first record
pub fn parse_profile(body: &str) -> Result<DisplayProfile, FetchError> {
    let response: RandomUserResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    response
        .results
        .first()
        .map(DisplayProfile::from)
        .ok_or(FetchError::EmptyResults)
}

// =============================================================================
// Errors
// =============================================================================

/// Fetch/parse failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request never produced a response
    Network(String),
    /// Non-2xx response
    Status { code: u16, text: String },
    /// Body was not the expected JSON shape
    Decode(String),
    /// Envelope parsed but held no records
    EmptyResults,
}

impl FetchError {
    /// The static string surfaced in the widget, whatever the cause
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Request failed: {}", msg),
            Self::Status { code, text } => write!(f, "HTTP error: {} {}", code, text),
            Self::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
            Self::EmptyResults => write!(f, "Response contained no users"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// Sources
// =============================================================================

/// Anything that can produce one display profile per call
#[async_trait(?Send)]
pub trait ProfileSource {
    async fn fetch_profile(&self) -> Result<DisplayProfile, FetchError>;
}

/// HTTP client for randomuser.me
#[derive(Debug, Clone, PartialEq)]
pub struct RandomUserApi {
    endpoint: String,
}

impl RandomUserApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for RandomUserApi {
    fn default() -> Self {
        Self::new(RANDOM_USER_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl ProfileSource for RandomUserApi {
    async fn fetch_profile(&self) -> Result<DisplayProfile, FetchError> {
        log::debug!("Requesting random user from {}", self.endpoint);

        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                code: response.status(),
                text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        parse_profile(&body)
    }
}
