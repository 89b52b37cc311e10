use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Games the balancer knows about. Currently a tag only: no behavior
/// branches on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Game {
    #[serde(rename = "VALORANT")]
    Valorant
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::model::structures::game::Game;

    #[test]
    fn test_wire_tag() {
        assert_eq!(serde_json::to_string(&Game::Valorant).unwrap(), "\"VALORANT\"");
    }

    #[test]
    fn test_deserialize_wire_tag() {
        let game: Game = serde_json::from_str("\"VALORANT\"").unwrap();
        assert_eq!(game, Game::Valorant);
    }

    #[test]
    fn test_enumerate() {
        let games = Game::iter().collect::<Vec<_>>();
        assert_eq!(games, vec![Game::Valorant]);
    }
}
