use thiserror::Error;

/// Reasons a score query cannot be evaluated.
///
/// Each variant names the missing or malformed piece so callers can tell the
/// user exactly which part of the query to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// No `<count><tier>` token such as `5L` was found.
    #[error("no valid cards found in the input (expected tokens like 5L 9R 3U, tiers: L R U C M X)")]
    MissingCardTokens,

    /// No `<digits>%` token was found.
    #[error("malignancy percentage not found in the input (expected a token like 145%)")]
    MissingMalignancy,

    /// No `<digits>-<digits>` token was found.
    #[error("deck size range not found in the input (expected a token like 24-26)")]
    MissingRange,

    /// A digit run is too long to fit the counter type.
    #[error("number in '{token}' is too large")]
    NumberOutOfRange { token: String },

    /// The range midpoint sits one past the upper bound, so the penalty window is zero.
    #[error("deck size range {min}-{max} has an empty window")]
    EmptyWindow { min: u32, max: u32 },
}
