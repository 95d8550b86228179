//! Pluggable length metrics.

use chunkwise_core::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Function measuring a text fragment in caller-defined units.
pub type LengthFn = Arc<dyn Fn(&str) -> usize + Send + Sync>;

/// How chunk sizes are measured.
#[derive(Clone, Default)]
pub enum LengthMetric {
    /// Unicode code points
    #[default]
    Chars,

    /// UTF-8 bytes
    Bytes,

    /// Extended grapheme clusters
    Graphemes,

    /// Caller-supplied function, e.g. a token counter
    Custom(LengthFn),
}

impl LengthMetric {
    /// Wrap a closure as a custom metric.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        LengthMetric::Custom(Arc::new(f))
    }

    /// Measure a fragment.
    pub fn measure(&self, text: &str) -> usize {
        match self {
            LengthMetric::Chars => text.chars().count(),
            LengthMetric::Bytes => text.len(),
            LengthMetric::Graphemes => text.graphemes(true).count(),
            LengthMetric::Custom(f) => f(text),
        }
    }

    /// Whether the metric counts code points, so that code-point slicing
    /// alone already satisfies it.
    pub(crate) fn is_chars(&self) -> bool {
        matches!(self, LengthMetric::Chars)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LengthMetric::Chars => "chars",
            LengthMetric::Bytes => "bytes",
            LengthMetric::Graphemes => "graphemes",
            LengthMetric::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for LengthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LengthMetric::{}", self.name())
    }
}

impl FromStr for LengthMetric {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "chars" | "characters" | "codepoints" => Ok(LengthMetric::Chars),
            "bytes" => Ok(LengthMetric::Bytes),
            "graphemes" => Ok(LengthMetric::Graphemes),
            other => Err(AppError::Config(format!(
                "Unknown length metric: {}. Supported: chars, bytes, graphemes",
                other
            ))),
        }
    }
}
