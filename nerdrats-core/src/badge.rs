//! Badge catalog model and loading
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The metric a badge is defined against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    /// Cumulative mouse distance, in kilometers.
    Distance,
    /// Cumulative key presses.
    Keydowns,
}

impl Track {
    /// Human-readable label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Keydowns => "keydowns",
        }
    }
}

/// A single badge definition.
///
/// One explicit type tagged by [`Track`] rather than a record with optional
/// per-track fields; `threshold` is always present once the catalog has been
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub name: String,
    pub track: Track,
    /// Minimum cumulative metric value required to unlock this badge.
    pub threshold: f64,
    /// Display symbol shown on the badge chip. Opaque to logic.
    pub glyph: String,
    pub icon: String,
    pub description: String,
    pub fun_fact: String,
    pub nerd_taunt: String,
}

/// The full badge catalog: one ordered list per track.
///
/// Catalogs are loaded once from a bundled JSON resource and never mutated.
/// Input order within a track is not assumed sorted; it only serves as the
/// deterministic tie-break for equal thresholds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BadgeCatalog {
    pub distance: Vec<BadgeDefinition>,
    pub keydowns: Vec<BadgeDefinition>,
}

/// Errors rejected at catalog-load time.
///
/// A record missing its threshold field would otherwise unlock for every
/// non-negative metric, which is a configuration mistake rather than a
/// designed "free badge".
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("badge '{name}' in the {} track has no threshold", track.label())]
    MissingThreshold { track: Track, name: String },
    #[error("badge '{name}' in the {} track has a negative threshold ({threshold})", track.label())]
    NegativeThreshold {
        track: Track,
        name: String,
        threshold: f64,
    },
}

/// On-disk badge record, shaped like the original `badge.json` entries.
///
/// The threshold lives in a per-track numeric field (`distance` km or
/// `keydowns` count) and the glyph in a field named `badge`.
#[derive(Debug, Clone, Deserialize)]
struct RawBadge {
    name: String,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    keydowns: Option<f64>,
    #[serde(default)]
    badge: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "funFact")]
    fun_fact: String,
    #[serde(default, rename = "nerdTaunt")]
    nerd_taunt: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    distance: Vec<RawBadge>,
    #[serde(default)]
    keydowns: Vec<RawBadge>,
}

impl RawBadge {
    fn into_definition(self, track: Track) -> Result<BadgeDefinition, CatalogError> {
        let threshold = match track {
            Track::Distance => self.distance,
            Track::Keydowns => self.keydowns,
        }
        .ok_or_else(|| CatalogError::MissingThreshold {
            track,
            name: self.name.clone(),
        })?;

        if threshold < 0.0 {
            return Err(CatalogError::NegativeThreshold {
                track,
                name: self.name,
                threshold,
            });
        }

        Ok(BadgeDefinition {
            name: self.name,
            track,
            threshold,
            glyph: self.badge,
            icon: self.icon,
            description: self.description,
            fun_fact: self.fun_fact,
            nerd_taunt: self.nerd_taunt,
        })
    }
}

impl BadgeCatalog {
    /// Create an empty catalog (useful for tests and load-failure fallback).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and validate a catalog from its JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed, or if any record is
    /// missing its per-track threshold field or carries a negative threshold.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Ok(Self {
            distance: convert_track(raw.distance, Track::Distance)?,
            keydowns: convert_track(raw.keydowns, Track::Keydowns)?,
        })
    }

    /// The badge list for one track.
    #[must_use]
    pub fn track(&self, track: Track) -> &[BadgeDefinition] {
        match track {
            Track::Distance => &self.distance,
            Track::Keydowns => &self.keydowns,
        }
    }

    /// Total number of badge definitions across both tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distance.len() + self.keydowns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty() && self.keydowns.is_empty()
    }
}

fn convert_track(raw: Vec<RawBadge>, track: Track) -> Result<Vec<BadgeDefinition>, CatalogError> {
    raw.into_iter()
        .map(|badge| badge.into_definition(track))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_original_field_names() {
        let json = r#"{
            "distance": [
                {
                    "name": "5K",
                    "distance": 5,
                    "badge": "🏃",
                    "icon": "run",
                    "description": "Five kilometers of cursor mileage",
                    "funFact": "That is roughly 19 million pixels.",
                    "nerdTaunt": "Your mouse has seen more of the world than you."
                }
            ],
            "keydowns": [
                { "name": "Clacker", "keydowns": 1000, "badge": "⌨️" }
            ]
        }"#;

        let catalog = BadgeCatalog::from_json(json).unwrap();
        assert_eq!(catalog.distance.len(), 1);
        assert_eq!(catalog.keydowns.len(), 1);

        let five_k = &catalog.distance[0];
        assert_eq!(five_k.track, Track::Distance);
        assert!((five_k.threshold - 5.0).abs() < f64::EPSILON);
        assert_eq!(five_k.glyph, "🏃");
        assert_eq!(five_k.nerd_taunt, "Your mouse has seen more of the world than you.");

        assert_eq!(catalog.keydowns[0].track, Track::Keydowns);
    }

    #[test]
    fn missing_threshold_is_a_load_error() {
        let json = r#"{ "distance": [ { "name": "Freebie", "badge": "🎁" } ] }"#;
        let err = BadgeCatalog::from_json(json).unwrap_err();
        match err {
            CatalogError::MissingThreshold { track, name } => {
                assert_eq!(track, Track::Distance);
                assert_eq!(name, "Freebie");
            }
            other => panic!("expected MissingThreshold, got {other}"),
        }
    }

    #[test]
    fn wrong_track_field_does_not_satisfy_threshold() {
        // A keydowns-style record placed in the distance collection still has
        // no distance threshold.
        let json = r#"{ "distance": [ { "name": "Mixed", "keydowns": 500 } ] }"#;
        assert!(matches!(
            BadgeCatalog::from_json(json),
            Err(CatalogError::MissingThreshold { .. })
        ));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let json = r#"{ "keydowns": [ { "name": "Debt", "keydowns": -1 } ] }"#;
        assert!(matches!(
            BadgeCatalog::from_json(json),
            Err(CatalogError::NegativeThreshold { .. })
        ));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let catalog = BadgeCatalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
