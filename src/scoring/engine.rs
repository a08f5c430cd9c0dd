use super::config::ScoreTable;
use super::error::ScoreError;
use super::query::{CardTally, MalignancyPercent, ScoreQuery, SizeRange};

/// Every intermediate value of a score calculation, for verbose output.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub malignancy: MalignancyPercent,
    pub cards: Vec<CardTally>,
    pub range: SizeRange,
    pub deck_size: u64,
    pub steps_outside: i64,
    pub base_accuracy_bonus: f64, // after deck size penalties
    pub card_points: i64,
    pub accuracy_bonus: i64,
    pub fixed_points: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: i64,
    pub breakdown: ScoreBreakdown,
}

/// Calculate the final score for a query such as `5L 9R 3U 6C 2X 145% 24-26`.
///
/// Card points are rounded up per tier after malignancy, the accuracy bonus
/// is floored after deck size penalties, and nothing is clamped: a deck far
/// outside its range can push the accuracy bonus, and the score, negative.
///
/// All arithmetic on points runs in `f64` so rounding matches the game's own
/// calculator exactly, e.g. `50 * 1.1` rounds up to 56.
pub fn calculate_score(query: &str, table: &ScoreTable) -> Result<ScoreResult, ScoreError> {
    let parsed = ScoreQuery::parse(query)?;
    tracing::debug!(malignancy = %parsed.malignancy, "parsed malignancy");
    let tokens: Vec<String> = parsed.cards.iter().map(|c| c.to_string()).collect();
    tracing::debug!(cards = ?tokens, "parsed cards");
    tracing::debug!(range = %parsed.range, "parsed range");

    let multiplier = parsed.malignancy.multiplier();

    let mut card_points = 0.0_f64;
    for tally in &parsed.cards {
        let points = table.points.for_tier(tally.tier) as f64;
        card_points += tally.count as f64 * (points * multiplier).ceil();
    }
    let deck_size = parsed.deck_size();

    let steps_outside = steps_outside(deck_size, parsed.range)?;
    let base_accuracy_bonus =
        table.base_accuracy_bonus as f64 - steps_outside as f64 * table.penalty_step();
    tracing::debug!(deck_size, steps_outside, base_accuracy_bonus, "applied accuracy penalty");

    let accuracy_bonus = (base_accuracy_bonus * multiplier).floor();
    let fixed_points = table.fixed_points();
    let score = (card_points + accuracy_bonus + fixed_points as f64).floor() as i64;

    tracing::debug!(
        card_bonus = card_points,
        accuracy_bonus,
        fixed_points,
        final_score = score,
        "calculated score"
    );

    Ok(ScoreResult {
        score,
        breakdown: ScoreBreakdown {
            malignancy: parsed.malignancy,
            deck_size,
            steps_outside,
            base_accuracy_bonus,
            card_points: card_points as i64,
            accuracy_bonus: accuracy_bonus as i64,
            fixed_points,
            cards: parsed.cards,
            range: parsed.range,
        },
    })
}

/// Number of half-window steps between the deck size and the nearest bound.
///
/// The window is the distance from the range midpoint (rounded down) to the
/// upper bound, inclusive. Sizes inside the range take no steps. An inverted
/// range can give a negative window, and so a negative step count that raises
/// the accuracy bonus.
fn steps_outside(deck_size: u64, range: SizeRange) -> Result<i64, ScoreError> {
    if range.contains(deck_size) {
        return Ok(0);
    }

    let size = deck_size as i64;
    let min = range.min as i64;
    let max = range.max as i64;
    let middle = (min + max).div_euclid(2);
    let window = max - middle + 1;
    if window == 0 {
        return Err(ScoreError::EmptyWindow {
            min: range.min,
            max: range.max,
        });
    }

    let distance = if size < min { min - size } else { size - max };
    Ok((distance as f64 / window as f64).ceil() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(query: &str) -> i64 {
        calculate_score(query, &ScoreTable::default()).unwrap().score
    }

    fn card_points(query: &str) -> i64 {
        calculate_score(query, &ScoreTable::default())
            .unwrap()
            .breakdown
            .card_points
    }

    #[test]
    fn test_deck_inside_range() {
        let result = calculate_score("5L 9R 3U 6C 2X 145% 24-26", &ScoreTable::default()).unwrap();
        assert_eq!(result.score, 16218);
        assert_eq!(result.breakdown.card_points, 5868);
        assert_eq!(result.breakdown.accuracy_bonus, 7350);
        assert_eq!(result.breakdown.base_accuracy_bonus, 3000.0);
        assert_eq!(result.breakdown.fixed_points, 3000);
        assert_eq!(result.breakdown.deck_size, 25);
        assert_eq!(result.breakdown.steps_outside, 0);
    }

    #[test]
    fn test_deck_far_above_range_goes_negative() {
        // 47 cards against 24-26: window 2, 21 over, 11 steps, 3000 - 3300
        let result = calculate_score("45L 1R 1U 150% 24-26", &ScoreTable::default()).unwrap();
        assert_eq!(result.breakdown.card_points, 19596);
        assert_eq!(result.breakdown.steps_outside, 11);
        assert_eq!(result.breakdown.base_accuracy_bonus, -300.0);
        assert_eq!(result.breakdown.accuracy_bonus, -750);
        assert_eq!(result.score, 21846);
    }

    #[test]
    fn test_deck_below_range() {
        // 3 cards against 10-12: window 2, 7 under, 4 steps
        let result = calculate_score("3C 0% 10-12", &ScoreTable::default()).unwrap();
        assert_eq!(result.breakdown.steps_outside, 4);
        assert_eq!(result.breakdown.base_accuracy_bonus, 1800.0);
        assert_eq!(result.score, 4950);
    }

    #[test]
    fn test_wide_range_penalty() {
        // 3 cards against 10-20: middle 15, window 6, 7 under, 2 steps
        assert_eq!(score("3M 0% 10-20"), 5550);
    }

    #[test]
    fn test_float_rounding_matches_game() {
        // 50 * 1.1 is 55.00000000000001 in floating point, which rounds up to 56
        assert_eq!(card_points("1C 10% 1-1"), 56);
        assert_eq!(score("1C 10% 1-1"), 6356);
    }

    #[test]
    fn test_fractional_malignancy() {
        assert_eq!(score("10L 37% 30-40"), 7796);
        assert_eq!(score("12R 5L 33% 20-24"), 9538);
        assert_eq!(score("1R 29% 1-1"), 7016);
    }

    #[test]
    fn test_every_tier_once() {
        // 170 + 113 + 75 + 50 + 50 + 0, doubled by 100%
        let result = calculate_score("1L 1R 1U 1C 1M 1X 100% 6-6", &ScoreTable::default()).unwrap();
        assert_eq!(result.breakdown.card_points, 916);
        assert_eq!(result.score, 9916);
    }

    #[test]
    fn test_unscored_tier_adds_size_only() {
        let with = calculate_score("1L 5X 0% 6-6", &ScoreTable::default()).unwrap();
        let without = calculate_score("1L 0% 6-6", &ScoreTable::default()).unwrap();
        assert_eq!(with.breakdown.card_points, without.breakdown.card_points);
        assert_eq!(with.breakdown.deck_size, 6);
        assert!(with.score > without.score);
    }

    #[test]
    fn test_zero_counts() {
        assert_eq!(score("0L 0% 0-0"), 6000);
    }

    #[test]
    fn test_unknown_letters_contribute_nothing() {
        assert_eq!(score("1Z 2L 10% 1-2"), 6676);
        assert_eq!(score("1Z 2L 10% 1-2"), score("2L 10% 1-2"));
    }

    #[test]
    fn test_inverted_range_with_window() {
        // 10-9: middle 9, window 1; 5 below min 10 is 5 steps
        assert_eq!(score("5C 0% 10-9"), 4750);
    }

    #[test]
    fn test_inverted_range_with_negative_window() {
        // 20-5: middle 12, window -6; 17 below min 20 is ceil(17 / -6) = -2 steps
        let result = calculate_score("3C 0% 20-5", &ScoreTable::default()).unwrap();
        assert_eq!(result.breakdown.steps_outside, -2);
        assert_eq!(result.breakdown.base_accuracy_bonus, 3600.0);
        assert_eq!(result.score, 6750);
    }

    #[test]
    fn test_inverted_range_without_window() {
        // 10-7: middle 8, window 0
        let err = calculate_score("5C 0% 10-7", &ScoreTable::default()).unwrap_err();
        assert_eq!(err, ScoreError::EmptyWindow { min: 10, max: 7 });
    }

    #[test]
    fn test_missing_tokens() {
        let table = ScoreTable::default();
        assert_eq!(calculate_score("5L 9R 24-26", &table), Err(ScoreError::MissingMalignancy));
        assert_eq!(calculate_score("5L 9R 145%", &table), Err(ScoreError::MissingRange));
        assert_eq!(calculate_score("145% 24-26", &table), Err(ScoreError::MissingCardTokens));
    }

    #[test]
    fn test_increasing_any_count_never_lowers_card_points() {
        let base = [3u32, 2, 4, 1, 5, 6];
        for percent in [0u32, 10, 37, 145, 250] {
            for (i, tier) in crate::scoring::Tier::ALL.iter().enumerate() {
                let build = |bump: u32| {
                    let cards: Vec<String> = crate::scoring::Tier::ALL
                        .iter()
                        .zip(base.iter())
                        .enumerate()
                        .map(|(j, (t, n))| {
                            let n = if j == i { n + bump } else { *n };
                            format!("{}{}", n, t.letter())
                        })
                        .collect();
                    format!("{} {}% 20-25", cards.join(" "), percent)
                };
                let before = card_points(&build(0));
                let after = card_points(&build(1));
                assert!(after >= before, "tier {:?} at {}%", tier, percent);
            }
        }
    }

    #[test]
    fn test_penalty_is_symmetric() {
        // 10-14: middle 12, window 3
        let range = SizeRange { min: 10, max: 14 };
        for distance in 1..10u64 {
            let below = steps_outside(10 - distance, range).unwrap();
            let above = steps_outside(14 + distance, range).unwrap();
            assert_eq!(below, above, "distance {}", distance);
        }
        assert_eq!(score("7C 0% 10-14"), score("17C 0% 10-14"));
    }

    #[test]
    fn test_steps_outside_rounds_up() {
        let range = SizeRange { min: 24, max: 26 };
        assert_eq!(steps_outside(25, range).unwrap(), 0);
        assert_eq!(steps_outside(27, range).unwrap(), 1);
        assert_eq!(steps_outside(28, range).unwrap(), 1);
        assert_eq!(steps_outside(29, range).unwrap(), 2);
        assert_eq!(steps_outside(22, range).unwrap(), 1);
        assert_eq!(steps_outside(21, range).unwrap(), 2);
    }

    #[test]
    fn test_same_query_same_score() {
        let query = "5L 9R 3U 6C 2X 145% 24-26";
        let table = ScoreTable::default();
        assert_eq!(calculate_score(query, &table), calculate_score(query, &table));
    }

    #[test]
    fn test_custom_table() {
        let mut table = ScoreTable::default();
        table.points.legendary = 100;
        table.victory_bonus = 0;
        table.penalty_percent = 50;
        // 2 cards against 4-4: window 1, 2 steps of 1500
        let result = calculate_score("2L 0% 4-4", &table).unwrap();
        assert_eq!(result.breakdown.card_points, 200);
        assert_eq!(result.breakdown.base_accuracy_bonus, 0.0);
        assert_eq!(result.score, 2200);
    }
}
