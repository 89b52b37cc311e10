use serde::{Deserialize, Serialize};

/// One player's display name and scalar skill rating.
///
/// Names are display data, not identifiers: two entries may share a name or
/// differ only by a parenthetical variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    pub rating: f64
}
