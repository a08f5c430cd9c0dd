pub mod config;
pub mod engine;
pub mod error;
pub mod query;
pub mod validation;

pub use config::{ScoreTable, TierPoints};
pub use engine::{calculate_score, ScoreBreakdown, ScoreResult};
pub use error::ScoreError;
pub use query::{CardTally, MalignancyPercent, ScoreQuery, SizeRange, Tier};
pub use validation::validate_score_table;
