//! Pane options supplied by the host.
//!
//! Every field has a default, so `{}` (or no options at all) yields a pane
//! that settles over 300 ms and positions content with `translate3d`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_DURATION_MS;
use crate::error::PaneError;

/// How the DOM transformer positions the content element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// `transform: translate3d(x, y, 0)`; composited on the GPU where available.
    #[default]
    Translate3d,
    /// `transform: translate(x, y)`.
    Translate,
    /// Absolute `left` / `top` for engines without CSS transforms.
    Position,
}

impl TransformMode {
    /// Style declarations placing an element at `(x, y)`.
    #[must_use]
    pub fn style(self, x: f64, y: f64) -> Vec<(&'static str, String)> {
        match self {
            Self::Translate3d => vec![("transform", format!("translate3d({x}px,{y}px,0)"))],
            Self::Translate => vec![("transform", format!("translate({x}px,{y}px)"))],
            Self::Position => vec![("left", format!("{x}px")), ("top", format!("{y}px"))],
        }
    }

    /// Style declaration animating subsequent placements over `ms` milliseconds.
    #[must_use]
    pub fn transition(self, ms: u32) -> (&'static str, String) {
        match self {
            Self::Translate3d | Self::Translate => ("transition", format!("{ms}ms transform")),
            Self::Position => ("transition", format!("{ms}ms left, {ms}ms top")),
        }
    }
}

/// Host-configurable pane options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaneConfig {
    /// Settle animation after release, in milliseconds.
    pub duration_ms: u32,
    /// Visual positioning strategy for the DOM transformer.
    pub transform: TransformMode,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_DURATION_MS, transform: TransformMode::default() }
    }
}

impl PaneConfig {
    /// Parse options from a JSON object such as `{"duration_ms": 150}`.
    ///
    /// Blank input yields the defaults; unknown fields are rejected.
    pub fn from_json(raw: &str) -> Result<Self, PaneError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
