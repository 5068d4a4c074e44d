//! Score constants
//!
//! These values are kept exactly as tuned for the classroom engine. Several
//! of them overlap (a line with two engine marks is worth as much as a win
//! found at depth 0), which makes some positions misjudged at the cutoff.

/// Score constants for evaluation, ordering and search
pub struct Score;

impl Score {
    // Search
    /// Terminal value base: a win found at `depth` scores `WIN - depth`
    pub const WIN: i32 = 100;
    /// Base of the per-line control score (`LINE_BASE^count`)
    pub const LINE_BASE: i32 = 10;

    // Move ordering
    /// Engine mark here completes a line
    pub const WINNING_MOVE: i32 = 10_000;
    /// Human mark here would complete a line
    pub const BLOCKING_MOVE: i32 = 9_000;
    /// One of the four fixed central cells
    pub const CENTER_BONUS: i32 = 100;
    /// Own mark met while walking out from a candidate
    pub const NEIGHBOR_OWN: i32 = 2;
    /// Empty cell met while walking out from a candidate
    pub const NEIGHBOR_EMPTY: i32 = 1;
    /// Multiplier applied to the summed walk scores
    pub const DIRECTION_WEIGHT: i32 = 10;
}

/// Value of a terminal position reached at `depth`.
///
/// `winner_sign` is +1 for an engine win and -1 for a human win. Shallower
/// wins score higher; shallower losses score lower.
#[inline]
pub fn terminal_score(winner_sign: i32, depth: u8) -> i32 {
    winner_sign * (Score::WIN - i32::from(depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_score_prefers_fast_wins() {
        assert_eq!(terminal_score(1, 0), 100);
        assert_eq!(terminal_score(1, 3), 97);
        assert!(terminal_score(1, 1) > terminal_score(1, 2));
    }

    #[test]
    fn test_terminal_score_defers_losses() {
        assert_eq!(terminal_score(-1, 1), -99);
        assert!(terminal_score(-1, 3) > terminal_score(-1, 1));
    }

    #[test]
    fn test_ordering_ladder() {
        assert!(Score::WINNING_MOVE > Score::BLOCKING_MOVE);
        // Best positional score on 4x4: center + 8 walks of 3 own marks
        let positional = Score::CENTER_BONUS + 8 * 3 * Score::NEIGHBOR_OWN * Score::DIRECTION_WEIGHT;
        assert!(positional < Score::BLOCKING_MOVE);
    }
}
