//! Extraction errors.
//!
//! None of these escape [`crate::extract_drill_from_content`]; they describe
//! why a single candidate block was skipped and are surfaced through
//! `tracing` and the `normalize` CLI command.

/// Why a parsed value is not drill-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateFailure {
    #[error("value is not a JSON object")]
    NotAnObject,

    #[error("neither `name` nor `title` is a string")]
    MissingName,

    #[error("`pitch` is missing or not an object")]
    MissingPitch,

    #[error("`players` is missing or not an array")]
    MissingPlayers,

    #[error("`players` is empty")]
    EmptyPlayers,

    #[error("`sequence` is missing or not an array")]
    MissingSequence,

    #[error("`sequence` is empty")]
    EmptySequence,
}

/// Why a candidate block produced no drill.
#[derive(Debug, thiserror::Error)]
pub enum CandidateError {
    #[error("invalid JSON after sanitizing: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("not a drill: {0}")]
    NotDrillShaped(#[from] GateFailure),
}
