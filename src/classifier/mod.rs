use log::debug;

use crate::config::PatternSettings;
use crate::domain::SetScorePair;

const PLAYERS: usize = 2;
const SETS: usize = 3;

/// Decides whether a match is a squeeze sweep.
///
/// One player must score exactly `winner_points` in every set while the other
/// stays at or under the per-set ceiling. The same player has to win all
/// three sets; either player may be that winner.
#[derive(Debug, Clone, Default)]
pub struct SweepClassifier {
    pattern: PatternSettings,
}

impl SweepClassifier {
    pub fn new(pattern: PatternSettings) -> Self {
        Self { pattern }
    }

    pub fn classify(&self, pairs: &[SetScorePair]) -> bool {
        let [first, second] = pairs else {
            debug!("Expected {} players, found {}", PLAYERS, pairs.len());
            return false;
        };

        if first.points.len() != SETS || second.points.len() != SETS {
            debug!(
                "Expected {} sets, found {} and {}",
                SETS,
                first.points.len(),
                second.points.len()
            );
            return false;
        }

        self.swept_by(&first.points, &second.points) || self.swept_by(&second.points, &first.points)
    }

    fn swept_by(&self, winner: &[u32], loser: &[u32]) -> bool {
        winner
            .iter()
            .zip(loser)
            .zip(self.pattern.loser_ceilings)
            .all(|((&won, &lost), ceiling)| won == self.pattern.winner_points && lost <= ceiling)
    }
}
