//! Remote scoring API client
//!
//! The scoring service is an opaque external collaborator: every call either
//! returns a fully-materialized JSON array or fails atomically. No retries
//! and no partial results; callers log failures and fall back to empty data.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use crate::session::SessionUser;
use nerdrats_core::Track;

/// Base URL of the scoring service.
pub const API_BASE_URL: &str = "https://nerds-rats-hackathon.onrender.com";

/// Endpoint path for one ranking track.
#[must_use]
pub fn ranking_url(track: Track) -> String {
    match track {
        Track::Distance => format!("{API_BASE_URL}/rankings/distance"),
        Track::Keydowns => format!("{API_BASE_URL}/rankings/keydowns"),
    }
}

/// Endpoint path for the email login lookup.
///
/// The address is percent-encoded: `#`, `?` or `/` in a raw email would
/// truncate or reroute the request path.
#[must_use]
pub fn user_by_email_url(email: &str) -> String {
    let encoded = String::from(js_sys::encode_uri_component(email));
    format!("{API_BASE_URL}/user-by-email/{encoded}")
}

/// Whether a player moved up, down, or held position since the last refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankChange {
    Up,
    Down,
    #[default]
    Same,
}

impl RankChange {
    /// Map the service's Portuguese status strings; anything unrecognized
    /// reads as "held position".
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "subiu" => Self::Up,
            "desceu" => Self::Down,
            _ => Self::Same,
        }
    }
}

fn rank_change_from_status<'de, D>(deserializer: D) -> Result<RankChange, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let status = String::deserialize(deserializer)?;
    Ok(RankChange::from_status(&status))
}

/// One row of a ranking response.
///
/// The service reports the metric in a per-track field: `distance` (km) for
/// the distance ranking, `words` (key presses) for the keydown ranking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingEntry {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub words: Option<u64>,
    #[serde(default, deserialize_with = "rank_change_from_status")]
    pub status: RankChange,
}

impl RankingEntry {
    /// The comparable metric value for one track; absent fields coalesce to 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn metric(&self, track: Track) -> f64 {
        match track {
            Track::Distance => self.distance.unwrap_or(0.0),
            Track::Keydowns => self.words.unwrap_or(0) as f64,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response decoding error: {0}")]
    Decode(String),
}

/// Fetch one ranking track from the scoring service.
///
/// # Errors
///
/// Returns an error if the request fails, the service responds with a
/// non-success status, or the body does not decode as a ranking array.
#[allow(clippy::future_not_send)]
pub async fn fetch_rankings(track: Track) -> Result<Vec<RankingEntry>, ApiError> {
    fetch_json(&ranking_url(track)).await
}

/// Look up a user record by login email.
///
/// The service answers with an array; the first element carrying an id is the
/// matched user, an empty array means the email is unknown.
///
/// # Errors
///
/// Returns an error if the request fails, the service responds with a
/// non-success status, or the body does not decode.
#[allow(clippy::future_not_send)]
pub async fn fetch_user_by_email(email: &str) -> Result<Option<SessionUser>, ApiError> {
    let users: Vec<SessionUser> = fetch_json(&user_by_email_url(email)).await?;
    Ok(users.into_iter().find(|user| !user.id.is_empty()))
}

#[allow(clippy::future_not_send)]
async fn fetch_json<T>(url: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let json_promise = response
        .json()
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;
    let json_value = JsFuture::from(json_promise)
        .await
        .map_err(|err| ApiError::Request(dom::js_error_message(&err)))?;

    serde_wasm_bindgen::from_value(json_value).map_err(|err| ApiError::Decode(err.to_string()))
}
