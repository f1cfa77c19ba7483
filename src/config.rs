//! # Setup configuration
//!
//! How a board-setup routine picks its starting position, read from TOML:
//!
//! ```toml
//! [setup]
//! selection = "fixed"   # or "random"
//! id = 518              # only for "fixed"
//! arrangement = "RNBQKBNR"  # alternative to id, only for "fixed"
//! seed = 42             # optional, only for "random"
//! ```
//!
//! A missing `[setup]` table means an unseeded random pick.

use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::model::{
    backrank::{BackRank, Chess960Id},
    error::SetupError,
    setup::StartingPosition,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    #[default]
    Random,
    Fixed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub setup: SetupSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupSection {
    pub selection: Selection,
    /// Position for [`Selection::Fixed`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u16>,
    /// Back rank for [`Selection::Fixed`], used when no id is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrangement: Option<BackRank>,
    /// Seed for [`Selection::Random`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SetupConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, SetupError> {
        let config: Self = toml::from_str(s)?;
        tracing::debug!(?config, "loaded setup configuration");
        Ok(config)
    }

    /// A fixed position.
    pub fn fixed(id: Chess960Id) -> Self {
        Self {
            setup: SetupSection {
                selection: Selection::Fixed,
                id: Some(id.get()),
                arrangement: None,
                seed: None,
            },
        }
    }

    /// Set up the board as configured.
    ///
    /// A fixed selection given both an id and an arrangement only succeeds
    /// when the two name the same position. Fields that do not apply to
    /// the selected mode are logged and ignored.
    pub fn starting_position(&self) -> Result<StartingPosition, SetupError> {
        let SetupSection {
            selection,
            id,
            arrangement,
            seed,
        } = self.setup;
        match selection {
            Selection::Fixed => {
                if let Some(seed) = seed {
                    tracing::warn!(seed, "seed has no effect on a fixed selection");
                }
                match (id, arrangement) {
                    (Some(id), arrangement) => {
                        let pos = StartingPosition::from_id(id).inspect_err(|_| {
                            tracing::warn!(id, "configured chess960 id is out of range");
                        })?;
                        match arrangement {
                            Some(rank) if rank != *pos.back_rank() => {
                                Err(SetupError::ConflictingSelection {
                                    id,
                                    arrangement: rank,
                                })
                            }
                            _ => Ok(pos),
                        }
                    }
                    (None, Some(rank)) => Ok(StartingPosition::from_back_rank(rank)?),
                    (None, None) => Err(SetupError::MissingId),
                }
            }
            Selection::Random => {
                if id.is_some() || arrangement.is_some() {
                    tracing::warn!(
                        ?id,
                        ?arrangement,
                        "fixed position has no effect on a random selection"
                    );
                }
                Ok(match seed {
                    Some(seed) => StartingPosition::random(&mut SmallRng::seed_from_u64(seed)),
                    None => StartingPosition::random(&mut rand::rng()),
                })
            }
        }
    }
}
