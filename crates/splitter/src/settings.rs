//! Bridge between the file/env chunking section and splitter configuration.

use crate::config::SplitterConfig;
use crate::language::{separators_for_language, Language};
use crate::metric::LengthMetric;
use crate::pipeline::Strategy;
use crate::separator::Separator;
use chunkwise_core::{AppResult, ChunkingConfig, SeparatorConfig};

/// Fully resolved chunking settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub language: Language,
    pub strategy: Strategy,
    pub config: SplitterConfig,
}

impl Settings {
    /// Resolve a chunking section.
    ///
    /// Language defaults come first; explicit fields override them. A
    /// non-empty custom separator list replaces the language table.
    pub fn resolve(chunking: &ChunkingConfig) -> AppResult<Self> {
        let language = match chunking.language.as_deref() {
            Some(tag) => tag.parse()?,
            None => Language::Default,
        };
        Self::resolve_for(chunking, language)
    }

    /// Resolve a chunking section for an explicit language, ignoring the
    /// section's own language tag.
    pub fn resolve_for(chunking: &ChunkingConfig, language: Language) -> AppResult<Self> {
        let strategy = match chunking.strategy.as_deref() {
            Some(name) => name.parse()?,
            None => Strategy::default(),
        };

        let mut builder = SplitterConfig::for_language(language)?.into_builder();

        if !chunking.separators.is_empty() {
            let separators = chunking
                .separators
                .iter()
                .map(|s| Separator::new(s.pattern.as_str(), s.regex))
                .collect::<AppResult<Vec<_>>>()?;
            builder = builder.with_separators(separators);
        }
        if let Some(size) = chunking.chunk_size {
            builder = builder.chunk_size(size);
        }
        if let Some(overlap) = chunking.overlap {
            builder = builder.overlap(overlap);
        }
        if let Some(keep) = chunking.keep_separator {
            builder = builder.keep_separator(keep);
        }
        if let Some(metric) = chunking.metric.as_deref() {
            builder = builder.length(metric.parse::<LengthMetric>()?);
        }

        let config = builder.build()?;
        tracing::debug!(
            "Resolved chunking settings: language={}, strategy={}, chunk_size={}, overlap={}",
            language,
            strategy,
            config.chunk_size(),
            config.overlap()
        );

        Ok(Self {
            language,
            strategy,
            config,
        })
    }

    /// Describe these settings as a chunking section.
    ///
    /// Separators are written out only when they differ from the language
    /// table. A custom metric has no textual form and is omitted.
    pub fn to_chunking(&self) -> ChunkingConfig {
        let table = separators_for_language(self.language).unwrap_or_default();
        let separators = if self.config.separators() == table.as_slice() {
            Vec::new()
        } else {
            self.config
                .separators()
                .iter()
                .map(|s| SeparatorConfig {
                    pattern: s.pattern().to_string(),
                    regex: s.is_regex(),
                })
                .collect()
        };

        let metric = match self.config.length() {
            LengthMetric::Custom(_) => None,
            other => Some(other.name().to_string()),
        };

        ChunkingConfig {
            language: Some(self.language.to_string()),
            strategy: Some(self.strategy.to_string()),
            metric,
            chunk_size: Some(self.config.chunk_size()),
            overlap: Some(self.config.overlap()),
            keep_separator: Some(self.config.keep_separator()),
            separators,
        }
    }
}
