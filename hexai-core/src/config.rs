//! Search engine configuration

use serde::{Deserialize, Serialize};

/// Deepest search accepted by `validate`; beyond this even 3x3 is slow
pub const MAX_DEPTH: u32 = 8;

/// Settings passed into the minimax player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies to search before falling back to the path heuristic
    pub depth: u32,
    /// Score root moves on the rayon pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Reject settings the engine can't finish in reasonable time
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.depth <= MAX_DEPTH,
            "search depth {} exceeds the maximum of {}",
            self.depth,
            MAX_DEPTH
        );
        Ok(())
    }
}
