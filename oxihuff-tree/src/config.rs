//! Codec configuration.
//!
//! The stream format itself is fixed; configuration only controls how much
//! diagnostic output the encoder and decoder send to the `log` facade.

/// How much the codec reports about its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DebugLevel {
    /// Nothing.
    #[default]
    Off,
    /// One summary line per pipeline stage (`log::debug!`).
    Low,
    /// Summaries plus every leaf code and header leaf (`log::trace!`).
    High,
}

/// Huffman codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HuffConfig {
    /// Diagnostic verbosity.
    pub debug: DebugLevel,
}

impl HuffConfig {
    /// Quiet configuration.
    pub const DEFAULT: Self = Self {
        debug: DebugLevel::Off,
    };

    /// Stage summaries.
    pub const VERBOSE: Self = Self {
        debug: DebugLevel::Low,
    };

    /// Stage summaries and per-symbol detail.
    pub const TRACE: Self = Self {
        debug: DebugLevel::High,
    };

    /// Create a configuration with the given verbosity.
    pub fn new(debug: DebugLevel) -> Self {
        Self { debug }
    }

    /// True if stage summaries should be logged.
    pub fn summaries(&self) -> bool {
        self.debug >= DebugLevel::Low
    }

    /// True if per-symbol detail should be logged.
    pub fn details(&self) -> bool {
        self.debug >= DebugLevel::High
    }
}
