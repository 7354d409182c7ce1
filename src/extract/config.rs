//! Configuration for the drill extraction pipeline.

use serde::{Deserialize, Serialize};

use super::blocks::BlockPass;

/// Configuration for the drill extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fall back to ` ```json ` blocks when no drill fence yields a drill
    pub json_fallback: bool,
    /// Fall back to any fenced block when the json pass yields nothing
    pub any_fence_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            json_fallback: true,
            any_fence_fallback: true,
        }
    }
}

impl ExtractionConfig {
    /// Passes to run, in order.
    pub fn passes(&self) -> Vec<BlockPass> {
        let mut passes = vec![BlockPass::Explicit];
        if self.json_fallback {
            passes.push(BlockPass::Json);
        }
        if self.any_fence_fallback {
            passes.push(BlockPass::AnyFence);
        }
        passes
    }
}
