pub mod report;
pub mod stats;

pub use report::{render_html, write_report, DEFAULT_REPORT_FILE, TEMPLATE};
pub use stats::{clean_winner, ChallengeEntry, ChallengeStats, Difficulty, Progress};
