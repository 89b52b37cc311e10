/// Rating assigned to a roster player with no recorded history
pub const DEFAULT_RATING: f64 = 1000.0;

/// Largest roster for which the balancer searches every half-size split.
/// 16 players means at most 2^16 candidate subsets per pass
pub const EXHAUSTIVE_SPLIT_LIMIT: usize = 16;

/// Built-in roster, latest known revision. Near-duplicate entries are kept
/// as-is: names carry no identifiers and no dedup is performed
pub const DEFAULT_PLAYERS: [&str; 25] = [
    "Cayd",
    "Chopsticks",
    "Cloudy",
    "Doxa",
    "Drew Chili",
    "Duck",
    "G-blower",
    "Gabe",
    "Hudson",
    "Konky",
    "Lil Bippy",
    "Lil Bippy (Intoxicated)",
    "Luci",
    "Mr29Torq",
    "Omx",
    "PurpleChair",
    "Sham",
    "Trigger444",
    "Tyler",
    "Will",
    "WillHuh",
    "Willow",
    "Wishy",
    "Xanax",
    "Xander"
];
