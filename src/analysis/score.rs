use crate::models::{Band, Scorecard};
use crate::reporting::console;

/// Derives the overall scorecard and prints the one-line assessment, colored
/// by band.
pub fn assess(risks: usize, errors: usize, warnings: usize) -> Scorecard {
    console::section("Overall assessment");

    let card = Scorecard::from_counts(risks, errors, warnings);
    let line = format!("Security level: {} ({}/100)", card.band.label(), card.score);
    match card.band {
        Band::Good => console::ok(&line),
        Band::Medium => console::warn(&line),
        Band::Low => console::fail(&line),
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assess_returns_the_derived_card() {
        let card = assess(2, 1, 3);
        assert_eq!(card.score, 50);
        assert_eq!(card.band, Band::Medium);
    }

    #[test]
    fn assess_is_deterministic() {
        assert_eq!(assess(1, 2, 3), assess(1, 2, 3));
    }
}
