use itertools::Itertools;
use rand::{seq::IndexedRandom, Rng};

use crate::{
    api::api_structs::MapDescriptor,
    model::structures::{
        player_stats::PlayerStats,
        team::{Team, TeamSplit}
    }
};

pub mod constants;
pub mod roster;
pub mod structures;

/// Splits `players` into two teams whose sizes differ by at most one,
/// minimizing the gap between total team ratings.
///
/// Rosters up to [`constants::EXHAUSTIVE_SPLIT_LIMIT`] players are solved
/// exactly by scoring every half-size subset; larger rosters fall back to
/// greedy descending assignment.
pub fn balance_teams(players: &[PlayerStats]) -> TeamSplit {
    if players.len() <= constants::EXHAUSTIVE_SPLIT_LIMIT {
        exhaustive_split(players)
    } else {
        greedy_split(players)
    }
}

/// Picks one map uniformly from the subset currently in rotation
pub fn pick_map<'a, R: Rng + ?Sized>(rng: &mut R, maps: &'a [MapDescriptor]) -> Option<&'a MapDescriptor> {
    let pool: Vec<&MapDescriptor> = maps.iter().filter(|m| m.in_rotation).collect();

    pool.choose(rng).copied()
}

fn exhaustive_split(players: &[PlayerStats]) -> TeamSplit {
    let total: f64 = players.iter().map(|p| p.rating).sum();
    let half = players.len() / 2;

    // Fixing the red team at floor(n / 2) players covers every balanced
    // partition up to team naming
    let mut best: Option<(f64, Vec<usize>)> = None;
    for subset in (0..players.len()).powerset() {
        if subset.len() != half {
            continue;
        }

        let red_total: f64 = subset.iter().map(|&i| players[i].rating).sum();
        let gap = (total - 2.0 * red_total).abs();

        match &best {
            Some((best_gap, _)) if *best_gap <= gap => {}
            _ => best = Some((gap, subset))
        }
    }

    let red_indices = best.map(|(_, subset)| subset).unwrap_or_default();

    let mut red = Vec::with_capacity(half);
    let mut blue = Vec::with_capacity(players.len() - half);
    for (i, player) in players.iter().enumerate() {
        if red_indices.contains(&i) {
            red.push(player.clone());
        } else {
            blue.push(player.clone());
        }
    }

    TeamSplit {
        red: Team::new(red),
        blue: Team::new(blue)
    }
}

fn greedy_split(players: &[PlayerStats]) -> TeamSplit {
    let capacity = players.len().div_ceil(2);

    let mut sorted: Vec<&PlayerStats> = players.iter().collect();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let mut red = Team::default();
    let mut blue = Team::default();

    // Strongest player first, always onto the lighter open team
    for player in sorted {
        let pick_red = match (red.len() < capacity, blue.len() < capacity) {
            (true, false) => true,
            (false, true) => false,
            _ => red.total_rating() <= blue.total_rating()
        };

        if pick_red {
            red.players.push(player.clone());
        } else {
            blue.players.push(player.clone());
        }
    }

    TeamSplit { red, blue }
}
