use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    constants::{DEFAULT_PLAYERS, DEFAULT_RATING},
    structures::player_stats::PlayerStats
};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster file: {0}")]
    Parse(#[from] serde_json::Error)
}

/// Ordered list of player display names eligible for team assignment.
///
/// Plain data with no identifiers and no uniqueness guarantee: near-duplicate
/// entries coexist. Order carries no meaning. There is no runtime mutation
/// API; swapping the list means constructing a new roster, usually from a
/// file passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>
}

impl Roster {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Loads a roster from a file containing a JSON array of names
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let contents = fs::read_to_string(path)?;
        let names: Vec<String> = serde_json::from_str(&contents)?;

        Ok(Self { names })
    }

    /// Read-only view of the names, in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Seeds every roster name with [`DEFAULT_RATING`]
    pub fn to_players(&self) -> Vec<PlayerStats> {
        self.names
            .iter()
            .map(|name| PlayerStats {
                name: name.clone(),
                rating: DEFAULT_RATING
            })
            .collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            names: DEFAULT_PLAYERS.iter().map(|s| s.to_string()).collect()
        }
    }
}
