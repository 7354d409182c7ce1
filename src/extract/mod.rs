//! Drill extraction pipeline for assistant messages.
//!
//! Takes the raw text of an LLM reply, finds fenced blocks that describe a
//! drill diagram, and returns the display-safe text alongside every drill
//! that survived normalization.
//!
//! # Pipeline
//!
//! 1. [`blocks`] scans for fences: drill-labeled first, then ` ```json `,
//!    then any fence. Later passes only run while no drill has been found.
//! 2. [`sanitize`] repairs trailing commas and `//` comments.
//! 3. The body is parsed with `serde_json`, retrying once with overflowing
//!    number literals nulled.
//! 4. [`normalize`] gates and coerces the value into a [`DrillSchema`].
//!
//! Drill-labeled blocks are always removed from the display text. Blocks
//! found by the fallback passes are only removed when they produced a drill.
//!
//! Extraction never fails. A candidate that does not parse or is not
//! drill-shaped is logged at `debug` and skipped.

pub mod blocks;
mod config;
pub mod normalize;
pub mod sanitize;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::CandidateError;
use crate::schema::DrillSchema;

pub use blocks::BlockPass;
pub use config::ExtractionConfig;
pub use normalize::{normalize_drill, try_normalize_drill};
pub use sanitize::sanitize;

/// Result of scanning one message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrillExtraction {
    /// Message text with drill blocks removed.
    pub clean_content: String,
    /// Every drill found, in document order.
    pub drills: Vec<DrillSchema>,
}

impl DrillExtraction {
    /// The first drill found, if any.
    pub fn drill(&self) -> Option<&DrillSchema> {
        self.drills.first()
    }
}

impl Serialize for DrillExtraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DrillExtraction", 3)?;
        state.serialize_field("cleanContent", &self.clean_content)?;
        state.serialize_field("drill", &self.drill())?;
        state.serialize_field("drills", &self.drills)?;
        state.end()
    }
}

/// Runs the extraction passes with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct DrillExtractor {
    config: ExtractionConfig,
}

impl DrillExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract drills from a message.
    pub fn extract(&self, content: &str) -> DrillExtraction {
        let mut clean = content.to_string();
        let mut drills = Vec::new();
        let mut removed_any = false;

        for pass in self.config.passes() {
            let outcome = run_pass(&clean, pass);
            if !outcome.removed.is_empty() {
                clean = blocks::remove_ranges(&clean, &outcome.removed);
                removed_any = true;
            }
            drills.extend(outcome.drills);

            if !drills.is_empty() {
                break;
            }
        }

        if removed_any {
            clean = clean.trim().to_string();
        }

        debug!(drills = drills.len(), "extraction finished");
        DrillExtraction {
            clean_content: clean,
            drills,
        }
    }
}

/// Extract drills from a message using the default configuration.
pub fn extract_drill_from_content(content: &str) -> DrillExtraction {
    DrillExtractor::default().extract(content)
}

/// Sanitize and parse one block body.
///
/// A body that only fails to parse because of out-of-range number literals
/// is retried with those literals nulled.
pub fn parse_lenient(body: &str) -> Result<Value, serde_json::Error> {
    let sanitized = sanitize(body);
    match serde_json::from_str(&sanitized) {
        Ok(value) => Ok(value),
        Err(e) => {
            let repaired = sanitize::null_overflowing_numbers(&sanitized);
            if repaired == sanitized {
                return Err(e);
            }
            trace!("retrying candidate with overflowing numbers nulled");
            serde_json::from_str(&repaired)
        }
    }
}

/// Sanitize, parse and normalize one block body.
pub fn parse_candidate(body: &str) -> Result<DrillSchema, CandidateError> {
    let value = parse_lenient(body)?;
    Ok(try_normalize_drill(&value)?)
}

struct PassOutcome {
    drills: Vec<DrillSchema>,
    removed: Vec<std::ops::Range<usize>>,
}

fn run_pass(text: &str, pass: BlockPass) -> PassOutcome {
    let mut outcome = PassOutcome {
        drills: Vec::new(),
        removed: Vec::new(),
    };

    for block in blocks::find_blocks(text, pass) {
        match parse_candidate(block.body) {
            Ok(drill) => {
                debug!(pass = pass.name(), drill = %drill.name, "candidate normalized");
                outcome.drills.push(drill);
                outcome.removed.push(block.range);
            }
            Err(e) => {
                debug!(pass = pass.name(), error = %e, "candidate skipped");
                if pass.strips_failed_blocks() {
                    outcome.removed.push(block.range);
                }
            }
        }
    }

    outcome
}
