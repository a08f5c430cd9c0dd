use serde::{Deserialize, Serialize};

use super::query::Tier;

/// Point table and bonuses used by the score calculator.
///
/// Every field has a default matching the in-game rules, so a config file
/// only needs to list the values it changes.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   points:
///     legendary: 170
///     rare: 113
///   base_accuracy_bonus: 3000
///   penalty_percent: 10
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreTable {
    /// Base points per card tier, before malignancy
    pub points: TierPoints,

    /// Accuracy bonus before deck size penalties and malignancy
    pub base_accuracy_bonus: i64,

    /// Flat bonus for completing the run
    pub completion_bonus: i64,

    /// Flat bonus for beating the final encounter
    pub victory_bonus: i64,

    /// Share of the base accuracy bonus lost per window step outside the range
    pub penalty_percent: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            points: TierPoints::default(),
            base_accuracy_bonus: 3000,
            completion_bonus: 2000,
            victory_bonus: 1000,
            penalty_percent: 10,
        }
    }
}

impl ScoreTable {
    /// Points added regardless of deck composition.
    pub fn fixed_points(&self) -> i64 {
        self.completion_bonus + self.victory_bonus
    }

    /// Accuracy bonus lost per step outside the target range.
    pub fn penalty_step(&self) -> f64 {
        self.base_accuracy_bonus as f64 * (self.penalty_percent as f64 / 100.0)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TierPoints {
    pub legendary: u32,
    pub rare: u32,
    pub uncommon: u32,
    pub common: u32,
    pub monster: u32,
    pub unscored: u32,
}

impl Default for TierPoints {
    fn default() -> Self {
        Self {
            legendary: 170,
            rare: 113,
            uncommon: 75,
            common: 50,
            monster: 50,
            unscored: 0,
        }
    }
}

impl TierPoints {
    pub fn for_tier(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Legendary => self.legendary,
            Tier::Rare => self.rare,
            Tier::Uncommon => self.uncommon,
            Tier::Common => self.common,
            Tier::Monster => self.monster,
            Tier::Unscored => self.unscored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ScoreTable::default();
        assert_eq!(table.points.for_tier(Tier::Legendary), 170);
        assert_eq!(table.points.for_tier(Tier::Rare), 113);
        assert_eq!(table.points.for_tier(Tier::Uncommon), 75);
        assert_eq!(table.points.for_tier(Tier::Common), 50);
        assert_eq!(table.points.for_tier(Tier::Monster), 50);
        assert_eq!(table.points.for_tier(Tier::Unscored), 0);
        assert_eq!(table.base_accuracy_bonus, 3000);
        assert_eq!(table.fixed_points(), 3000);
        assert_eq!(table.penalty_step(), 300.0);
    }

    #[test]
    fn test_partial_table_parse() {
        let yaml = r#"
points:
  legendary: 200
penalty_percent: 20
"#;
        let table: ScoreTable = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(table.points.legendary, 200);
        assert_eq!(table.points.rare, 113);
        assert_eq!(table.penalty_percent, 20);
        assert_eq!(table.base_accuracy_bonus, 3000);
        assert_eq!(table.penalty_step(), 600.0);
    }

    #[test]
    fn test_empty_table_parse() {
        let table: ScoreTable = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(table, ScoreTable::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ScoreTable, _> = serde_saphyr::from_str("bonus: 5");
        assert!(result.is_err());
    }

    #[test]
    fn test_table_serde_roundtrip() {
        let table = ScoreTable::default();
        let yaml = serde_saphyr::to_string(&table).unwrap();
        let parsed: ScoreTable = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(table, parsed);
    }
}
