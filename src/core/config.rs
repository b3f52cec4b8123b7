//! Engine configuration.
//!
//! Board dimensions and starting stones are fixed rules, not configuration.
//! What is configurable is host-facing pacing and engine diagnostics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pause a host should present before executing a CPU move, in milliseconds.
    /// The engine itself never sleeps.
    pub cpu_thinking_ms: u64,

    /// Per-stone animation step for hosts that animate sowing, in milliseconds.
    pub animation_step_ms: u64,

    /// Check stone conservation and store monotonicity after every move,
    /// panicking on violation. Always on in debug builds.
    pub verify_invariants: bool,

    /// Keep an in-memory record of each move in the current game.
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cpu_thinking_ms: 1000,
            animation_step_ms: 300,
            verify_invariants: cfg!(debug_assertions),
            record_history: true,
        }
    }
}

impl EngineConfig {
    /// Set the CPU thinking delay.
    #[must_use]
    pub fn with_cpu_thinking_ms(mut self, ms: u64) -> Self {
        self.cpu_thinking_ms = ms;
        self
    }

    /// Set the per-stone animation step.
    #[must_use]
    pub fn with_animation_step_ms(mut self, ms: u64) -> Self {
        self.animation_step_ms = ms;
        self
    }

    /// Enable or disable invariant checks in release builds.
    #[must_use]
    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }

    /// Enable or disable move history.
    #[must_use]
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// CPU thinking delay as a `Duration`.
    #[must_use]
    pub fn cpu_thinking_time(&self) -> Duration {
        Duration::from_millis(self.cpu_thinking_ms)
    }

    /// Animation step as a `Duration`.
    #[must_use]
    pub fn animation_step(&self) -> Duration {
        Duration::from_millis(self.animation_step_ms)
    }

    /// Zero delays, for tests and headless self-play.
    #[must_use]
    pub fn instant() -> Self {
        Self::default().with_cpu_thinking_ms(0).with_animation_step_ms(0)
    }
}
