//! User progress snapshot
use serde::{Deserialize, Serialize};

use crate::badge::Track;

/// Immutable snapshot of one user's cumulative metrics.
///
/// Produced by the session layer at call time and passed by value into the
/// evaluator; the core never reads ambient storage. Missing numeric fields in
/// the source record deserialize to 0 (deliberate leniency, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProgress {
    /// Cumulative mouse distance, in kilometers.
    #[serde(default)]
    pub distance_km: f64,
    /// Cumulative key presses.
    #[serde(default)]
    pub keydowns: u64,
}

impl UserProgress {
    #[must_use]
    pub const fn new(distance_km: f64, keydowns: u64) -> Self {
        Self {
            distance_km,
            keydowns,
        }
    }

    /// The metric value for one track, as the comparable number the
    /// evaluator consumes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Key counts stay far below 2^52.
    pub fn metric(&self, track: Track) -> f64 {
        match track {
            Track::Distance => self.distance_km,
            Track::Keydowns => self.keydowns as f64,
        }
    }
}
