//! Badge styling for leaderboard ranks and workout difficulty.

#[cfg(test)]
#[path = "badges_test.rs"]
mod badges_test;

/// Visual tier of a leaderboard rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl RankTier {
    pub fn for_rank(rank: i64) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::Standard,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Gold => "bg-warning text-dark",
            Self::Silver => "bg-secondary text-white",
            Self::Bronze => "bg-danger text-white",
            Self::Standard => "bg-primary",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
            Self::Standard => "🏅",
        }
    }
}

/// Contextual color name for a workout difficulty (case-insensitive).
pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty.trim().to_ascii_lowercase().as_str() {
        "beginner" => "success",
        "intermediate" => "warning",
        "advanced" => "danger",
        _ => "secondary",
    }
}
