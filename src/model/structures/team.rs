use serde::{Deserialize, Serialize};

use crate::model::structures::player_stats::PlayerStats;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub players: Vec<PlayerStats>
}

impl Team {
    pub fn new(players: Vec<PlayerStats>) -> Self {
        Self { players }
    }

    pub fn total_rating(&self) -> f64 {
        self.players.iter().map(|p| p.rating).sum()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Result of one balancing pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamSplit {
    pub red: Team,
    pub blue: Team
}

impl TeamSplit {
    /// Absolute difference between the two teams' total ratings
    pub fn rating_gap(&self) -> f64 {
        (self.red.total_rating() - self.blue.total_rating()).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, rating: f64) -> PlayerStats {
        PlayerStats {
            name: name.to_string(),
            rating
        }
    }

    #[test]
    fn test_total_rating() {
        let team = Team::new(vec![player("a", 1000.0), player("b", 1250.0)]);

        assert_eq!(team.total_rating(), 2250.0);
    }

    #[test]
    fn test_empty_team_total_rating() {
        assert_eq!(Team::default().total_rating(), 0.0);
    }

    #[test]
    fn test_rating_gap_is_symmetric() {
        let split = TeamSplit {
            red: Team::new(vec![player("a", 1000.0)]),
            blue: Team::new(vec![player("b", 1300.0)])
        };

        let mirrored = TeamSplit {
            red: split.blue.clone(),
            blue: split.red.clone()
        };

        assert_eq!(split.rating_gap(), 300.0);
        assert_eq!(split.rating_gap(), mirrored.rating_gap());
    }
}
