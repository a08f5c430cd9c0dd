use super::config::ScoreTable;

/// Validate a score table loaded from config.
/// Returns all validation errors at once (not just the first).
pub fn validate_score_table(table: &ScoreTable) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if table.base_accuracy_bonus < 0 {
        errors.push("scoring.base_accuracy_bonus: must be non-negative".to_string());
    }

    if table.completion_bonus < 0 {
        errors.push("scoring.completion_bonus: must be non-negative".to_string());
    }

    if table.victory_bonus < 0 {
        errors.push("scoring.victory_bonus: must be non-negative".to_string());
    }

    if table.penalty_percent > 100 {
        errors.push(format!(
            "scoring.penalty_percent: must be at most 100, got {}",
            table.penalty_percent
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
