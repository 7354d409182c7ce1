//! Drillcraft - drill diagram extraction for coaching chat.
//!
//! Language models describe animated drill diagrams as JSON inside fenced
//! code blocks. That JSON is often slightly wrong: trailing commas, numbers
//! as strings, misspelled colors, missing ids. This crate finds those
//! blocks, repairs what can be repaired, rejects what is not a drill, and
//! hands back display-safe text plus validated [`DrillSchema`] values.
//!
//! ```
//! let message = "Try this:\n```drill\n{\"name\":\"Rondo\",\"pitch\":{},\"players\":[{}],\"sequence\":[{}]}\n```";
//! let result = drillcraft::extract_drill_from_content(message);
//!
//! assert_eq!(result.clean_content, "Try this:");
//! assert_eq!(result.drill().map(|d| d.name.as_str()), Some("Rondo"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod schema;

pub use config::Config;
pub use error::{CandidateError, GateFailure};
pub use extract::{
    extract_drill_from_content, normalize_drill, sanitize, try_normalize_drill, DrillExtraction,
    DrillExtractor, ExtractionConfig,
};
pub use schema::DrillSchema;
