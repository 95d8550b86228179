//! Strategy selection.

use crate::config::SplitterConfig;
use crate::splitters::{AdaptiveSplitter, ChunkSplitter, RecursiveSplitter};
use chunkwise_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which raw splitting algorithm runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Separator hierarchy with recursive subdivision
    #[default]
    Recursive,

    /// Greedy paragraph packing
    Adaptive,
}

impl Strategy {
    /// Select the splitter implementing this strategy.
    pub fn splitter(&self) -> Box<dyn ChunkSplitter> {
        match self {
            Strategy::Recursive => Box::new(RecursiveSplitter),
            Strategy::Adaptive => Box::new(AdaptiveSplitter),
        }
    }

    /// Run the strategy over `text`.
    pub fn run(&self, text: &str, config: &SplitterConfig) -> Vec<String> {
        let splitter = self.splitter();
        let _span = tracing::debug_span!("split", strategy = splitter.name()).entered();
        splitter.split(text, config)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "adaptive" | "paragraph" => Ok(Strategy::Adaptive),
            other => Err(AppError::Config(format!(
                "Unknown strategy: {}. Supported: recursive, adaptive",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert_eq!(Strategy::Recursive.splitter().name(), "recursive");
        assert_eq!(Strategy::Adaptive.splitter().name(), "adaptive");
    }

    #[test]
    fn test_run_strategies_differ() {
        let config = SplitterConfig::builder().chunk_size(12).build().unwrap();
        let text = "one\n\ntwo\n\nthree";

        let recursive = Strategy::Recursive.run(text, &config);
        let adaptive = Strategy::Adaptive.run(text, &config);

        assert_eq!(recursive, vec!["one\n\ntwo\n\nth", "ree"]);
        assert_eq!(adaptive, vec!["one\n\ntwo", "three"]);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("Adaptive".parse::<Strategy>().unwrap(), Strategy::Adaptive);
        assert!(matches!("greedy".parse::<Strategy>(), Err(AppError::Config(_))));
    }
}
