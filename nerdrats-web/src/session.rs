//! Logged-in user session
//!
//! The authenticated user record lives in `sessionStorage` under a single
//! key. Business logic never reads it directly: pages load the record here
//! and hand an immutable [`UserProgress`] snapshot to the core.

use serde::{Deserialize, Serialize};

use crate::dom;
use nerdrats_core::UserProgress;

/// `sessionStorage` key holding the logged-in user record.
pub const SESSION_KEY: &str = "nerdrats_user";

/// The user record returned by the login lookup and persisted for the session.
///
/// `quant_dist` and `quant_keys` are the cumulative metrics the badge logic
/// consumes; everything else is display-only. Missing numeric fields read as
/// 0 rather than failing the whole record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_github: String,
    #[serde(default)]
    pub quant_dist: f64,
    #[serde(default)]
    pub quant_keys: u64,
}

impl SessionUser {
    /// Immutable progress snapshot for the badge evaluator.
    #[must_use]
    pub const fn progress(&self) -> UserProgress {
        UserProgress::new(self.quant_dist, self.quant_keys)
    }

    /// Preferred display name: the GitHub handle when the profile has one.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.user_github.is_empty() {
            &self.name
        } else {
            &self.user_github
        }
    }
}

/// Load the logged-in user from session storage.
///
/// A missing key means logged-out. A record that no longer parses is cleared
/// and also treated as logged-out; a stale broken record must not wedge the
/// login flow.
#[must_use]
pub fn load_user() -> Option<SessionUser> {
    let storage = dom::session_storage().ok()?;
    let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding malformed session record: {err}");
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

/// Persist the logged-in user for this tab's session.
pub fn store_user(user: &SessionUser) {
    let Ok(storage) = dom::session_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(raw) => {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
        Err(err) => dom::console_error(&format!("failed to serialize session user: {err}")),
    }
}

/// Remove the logged-in user (logout).
pub fn clear_user() {
    if let Ok(storage) = dom::session_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_record_parses_api_shape() {
        let user: SessionUser = serde_json::from_str(
            r#"{
                "id": "7",
                "name": "Carlos Silva",
                "email": "carlos@nerdrats.dev",
                "user_github": "csilva",
                "quant_dist": 42.5,
                "quant_keys": 31337
            }"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "csilva");
        let progress = user.progress();
        assert!((progress.distance_km - 42.5).abs() < f64::EPSILON);
        assert_eq!(progress.keydowns, 31_337);
    }

    #[test]
    fn missing_metrics_coalesce_to_zero() {
        let user: SessionUser =
            serde_json::from_str(r#"{ "id": "1", "name": "Ana" }"#).unwrap();
        assert_eq!(user.display_name(), "Ana");
        assert_eq!(user.progress(), UserProgress::new(0.0, 0));
    }
}
