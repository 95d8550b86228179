//! Splitter configuration.

use crate::language::{separators_for_language, Language};
use crate::metric::LengthMetric;
use crate::separator::Separator;
use chunkwise_core::{AppError, AppResult};

/// Chunk size used for plain text.
pub const DEFAULT_CHUNK_SIZE: usize = 1200;

/// Chunk size used for every language with a separator table.
pub const LANGUAGE_CHUNK_SIZE: usize = 1000;

/// Overlap used by the language factories.
pub const DEFAULT_OVERLAP: usize = 100;

/// Immutable splitter configuration.
///
/// Separators are compiled when the configuration is built, so a bad pattern
/// is reported here and never during splitting. The value is `Send + Sync`
/// and can be shared by concurrent callers.
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    separators: Vec<Separator>,
    keep_separator: bool,
    chunk_size: usize,
    overlap: usize,
    length: LengthMetric,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            separators: Vec::new(),
            keep_separator: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            length: LengthMetric::Chars,
        }
    }
}

impl SplitterConfig {
    /// Start a configuration from scratch: no separators, no overlap,
    /// `DEFAULT_CHUNK_SIZE`, character metric.
    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::default()
    }

    /// Ready-to-use configuration for a language tag.
    ///
    /// `Language::Default` yields a size/overlap-only configuration with no
    /// separators.
    pub fn for_language(language: Language) -> AppResult<Self> {
        if language == Language::Default {
            return Ok(Self::default());
        }

        let separators = separators_for_language(language)?;
        Self::builder()
            .with_separators(separators)
            .chunk_size(LANGUAGE_CHUNK_SIZE)
            .overlap(DEFAULT_OVERLAP)
            .build()
    }

    /// Reopen this configuration for changes.
    pub fn into_builder(self) -> SplitterConfigBuilder {
        SplitterConfigBuilder {
            separators: self.separators,
            keep_separator: self.keep_separator,
            chunk_size: self.chunk_size,
            overlap: self.overlap,
            length: self.length,
        }
    }

    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    pub fn keep_separator(&self) -> bool {
        self.keep_separator
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn length(&self) -> &LengthMetric {
        &self.length
    }

    /// Measure a fragment with the configured metric.
    pub fn measure(&self, text: &str) -> usize {
        self.length.measure(text)
    }
}

/// Builder for [`SplitterConfig`].
#[derive(Debug, Clone)]
pub struct SplitterConfigBuilder {
    separators: Vec<Separator>,
    keep_separator: bool,
    chunk_size: usize,
    overlap: usize,
    length: LengthMetric,
}

impl Default for SplitterConfigBuilder {
    fn default() -> Self {
        Self {
            separators: Vec::new(),
            keep_separator: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: 0,
            length: LengthMetric::Chars,
        }
    }
}

impl SplitterConfigBuilder {
    /// Append separators compiled from `patterns`, all literal or all regex.
    ///
    /// # Example
    /// ```
    /// use chunkwise_splitter::SplitterConfig;
    ///
    /// let config = SplitterConfig::builder()
    ///     .separators(["\n\n", "\n", " ", ""], false)?
    ///     .chunk_size(200)
    ///     .build()?;
    /// assert_eq!(config.separators().len(), 4);
    /// # Ok::<(), chunkwise_core::AppError>(())
    /// ```
    pub fn separators<I, S>(mut self, patterns: I, is_regex: bool) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            self.separators.push(Separator::new(pattern, is_regex)?);
        }
        Ok(self)
    }

    /// Append a single compiled separator.
    pub fn separator(mut self, separator: Separator) -> Self {
        self.separators.push(separator);
        self
    }

    /// Replace the separator list.
    pub fn with_separators(mut self, separators: Vec<Separator>) -> Self {
        self.separators = separators;
        self
    }

    pub fn keep_separator(mut self, keep: bool) -> Self {
        self.keep_separator = keep;
        self
    }

    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    pub fn overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn length(mut self, length: LengthMetric) -> Self {
        self.length = length;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// A zero chunk size is rejected. An overlap at or above the chunk size
    /// is accepted with a warning: stitching runs once per call, so each chunk
    /// still grows by at most `overlap + 1` characters.
    pub fn build(self) -> AppResult<SplitterConfig> {
        if self.chunk_size == 0 {
            return Err(AppError::Config("chunk size must be greater than zero".into()));
        }

        if self.overlap >= self.chunk_size {
            tracing::warn!(
                "Overlap {} is not smaller than chunk size {}; overlapped chunks will exceed the chunk size",
                self.overlap,
                self.chunk_size
            );
        }

        Ok(SplitterConfig {
            separators: self.separators,
            keep_separator: self.keep_separator,
            chunk_size: self.chunk_size,
            overlap: self.overlap,
            length: self.length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_config() {
        let config = SplitterConfig::for_language(Language::Default).unwrap();
        assert!(config.separators().is_empty());
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(config.overlap(), DEFAULT_OVERLAP);
        assert_eq!(config.length().name(), "chars");
    }

    #[test]
    fn test_language_config() {
        let config = SplitterConfig::for_language(Language::Go).unwrap();
        assert_eq!(config.chunk_size(), LANGUAGE_CHUNK_SIZE);
        assert_eq!(config.overlap(), DEFAULT_OVERLAP);
        assert_eq!(config.separators()[0].pattern(), "\nfunc ");
        assert!(!config.keep_separator());
    }

    #[test]
    fn test_builder_defaults() {
        let config = SplitterConfig::builder().build().unwrap();
        assert!(config.separators().is_empty());
        assert_eq!(config.overlap(), 0);
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let result = SplitterConfig::builder().chunk_size(0).build();
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_large_overlap_is_allowed() {
        let config = SplitterConfig::builder().chunk_size(10).overlap(20).build().unwrap();
        assert_eq!(config.overlap(), 20);
    }

    #[test]
    fn test_bad_regex_separator() {
        let result = SplitterConfig::builder().separators(["[a-"], true);
        assert!(matches!(result, Err(AppError::InvalidPattern(_))));
    }

    #[test]
    fn test_into_builder_keeps_separators() {
        let config = SplitterConfig::for_language(Language::Python)
            .unwrap()
            .into_builder()
            .chunk_size(64)
            .keep_separator(true)
            .build()
            .unwrap();
        assert_eq!(config.chunk_size(), 64);
        assert!(config.keep_separator());
        assert_eq!(config.separators().len(), 6);
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SplitterConfig>();
    }
}
