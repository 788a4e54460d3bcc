use serde::{Deserialize, Serialize};

/// Qualitative band assigned from the numeric score, first match top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Band {
    Good,
    Medium,
    Low,
}

impl Band {
    /// Band for a score in [0, 100]: >= 80 GOOD, >= 50 MEDIUM, else LOW.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Band::Good
        } else if score >= 50 {
            Band::Medium
        } else {
            Band::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Good => "GOOD",
            Band::Medium => "MEDIUM",
            Band::Low => "LOW",
        }
    }
}

/// Overall security score for one run, derived from the host-check risk
/// count and the log error/warning counts. Never persisted; recomputed on
/// every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub score: u8,
    pub band: Band,
}

impl Scorecard {
    /// Linear penalty model, clamped at zero:
    /// `100 - 10*risks - 15*errors - 5*warnings`.
    pub fn from_counts(risks: usize, errors: usize, warnings: usize) -> Self {
        let penalty = 10 * risks + 15 * errors + 5 * warnings;
        let score = 100usize.saturating_sub(penalty) as u8;
        Scorecard {
            score,
            band: Band::from_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_run_scores_full() {
        let card = Scorecard::from_counts(0, 0, 0);
        assert_eq!(card.score, 100);
        assert_eq!(card.band, Band::Good);
    }

    #[test]
    fn penalties_are_linear() {
        // 100 - 20 - 15 - 15
        let card = Scorecard::from_counts(2, 1, 3);
        assert_eq!(card.score, 50);
        assert_eq!(card.band, Band::Medium);
    }

    #[test]
    fn score_clamps_at_zero() {
        let card = Scorecard::from_counts(10, 0, 0);
        assert_eq!(card.score, 0);
        assert_eq!(card.band, Band::Low);

        let card = Scorecard::from_counts(100, 100, 100);
        assert_eq!(card.score, 0);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(Band::from_score(80), Band::Good);
        assert_eq!(Band::from_score(79), Band::Medium);
        assert_eq!(Band::from_score(50), Band::Medium);
        assert_eq!(Band::from_score(49), Band::Low);
    }
}
