//! Split command handler.
//!
//! Splits files, directories or stdin into chunks and prints them.

use clap::Args;
use chunkwise_core::{config::AppConfig, AppError, AppResult, ChunkingConfig};
use chunkwise_splitter::{Language, Settings};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ChunkingArgs;
use crate::output::ChunkRecord;

/// Split text into chunks
#[derive(Args, Debug)]
pub struct SplitCommand {
    /// Files or directories to split (reads stdin when empty)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// File extensions to include when walking directories (e.g. --ext md --ext py)
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Output as JSON Lines
    #[arg(long)]
    pub json: bool,
}

/// A piece of input text and where it came from.
#[derive(Debug)]
pub struct Source {
    pub name: String,
    pub path: Option<PathBuf>,
    pub text: String,
}

impl SplitCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing split command");
        tracing::debug!("Split options: {:?}", self);

        let chunking = self.chunking.apply(config.chunking.clone());
        let sources = if self.paths.is_empty() {
            vec![read_stdin()?]
        } else {
            collect_sources(&self.paths, &self.extensions)?
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut total = 0usize;

        for source in &sources {
            let language = self.language_for(source, &chunking)?;
            let settings = Settings::resolve_for(&chunking, language)?;
            let chunks = settings.strategy.run(&source.text, &settings.config);

            tracing::debug!(
                "{}: {} chunks (language={}, strategy={})",
                source.name,
                chunks.len(),
                settings.language,
                settings.strategy
            );

            for (position, text) in chunks.iter().enumerate() {
                let record = ChunkRecord::new(
                    &source.name,
                    position,
                    text,
                    settings.config.measure(text),
                );
                if self.json {
                    record.write_json(&mut out)?;
                } else {
                    record.write_text(&mut out)?;
                }
            }
            total += chunks.len();
        }

        out.flush()?;
        tracing::info!("Split {} sources into {} chunks", sources.len(), total);

        Ok(())
    }

    /// Explicit flag, then file extension, then the configured language.
    fn language_for(&self, source: &Source, chunking: &ChunkingConfig) -> AppResult<Language> {
        if let Some(tag) = &self.chunking.language {
            return tag.parse();
        }

        let detected = source
            .path
            .as_deref()
            .map(Language::from_path)
            .unwrap_or_default();
        if detected != Language::Default {
            return Ok(detected);
        }

        match chunking.language.as_deref() {
            Some(tag) => tag.parse(),
            None => Ok(Language::Default),
        }
    }
}

fn read_stdin() -> AppResult<Source> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(Source {
        name: "-".to_string(),
        path: None,
        text,
    })
}

/// Read the given files, and every matching file below the given directories.
///
/// Explicitly named files must be readable UTF-8; files found while walking a
/// directory are skipped with a warning when they are not.
pub fn collect_sources(paths: &[PathBuf], extensions: &[String]) -> AppResult<Vec<Source>> {
    let mut sources = Vec::new();

    for path in paths {
        if path.is_file() {
            sources.push(read_source(path)?);
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let entry_path = entry.path();
                if !entry_path.is_file() || !matches_extension(entry_path, extensions) {
                    continue;
                }
                match read_source(entry_path) {
                    Ok(source) => sources.push(source),
                    Err(e) => tracing::warn!("Skipping {:?}: {}", entry_path, e),
                }
            }
        } else {
            return Err(AppError::Config(format!("Path does not exist: {:?}", path)));
        }
    }

    tracing::debug!("Collected {} sources", sources.len());
    Ok(sources)
}

fn read_source(path: &Path) -> AppResult<Source> {
    let text = std::fs::read_to_string(path)?;
    Ok(Source {
        name: path.display().to_string(),
        path: Some(path.to_path_buf()),
        text,
    })
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command(language: Option<&str>) -> SplitCommand {
        SplitCommand {
            paths: Vec::new(),
            chunking: ChunkingArgs {
                language: language.map(str::to_string),
                ..Default::default()
            },
            extensions: Vec::new(),
            json: false,
        }
    }

    fn source(path: Option<&str>) -> Source {
        Source {
            name: path.unwrap_or("-").to_string(),
            path: path.map(PathBuf::from),
            text: String::new(),
        }
    }

    #[test]
    fn test_collect_walks_directory_with_filter() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("a.md"), "# A").unwrap();
        std::fs::write(temp.path().join("sub").join("b.py"), "def b(): pass").unwrap();
        std::fs::write(temp.path().join("c.txt"), "plain").unwrap();

        let all = collect_sources(&[temp.path().to_path_buf()], &[]).unwrap();
        assert_eq!(all.len(), 3);

        let filtered =
            collect_sources(&[temp.path().to_path_buf()], &["md".to_string(), ".py".to_string()])
                .unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| !s.name.ends_with("c.txt")));
    }

    #[test]
    fn test_collect_skips_non_utf8_in_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();
        std::fs::write(temp.path().join("ok.txt"), "fine").unwrap();

        let sources = collect_sources(&[temp.path().to_path_buf()], &[]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].text, "fine");
    }

    #[test]
    fn test_collect_missing_path() {
        let result = collect_sources(&[PathBuf::from("/no/such/input")], &[]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_language_precedence() {
        let from_config = ChunkingConfig {
            language: Some("json".to_string()),
            ..Default::default()
        };

        let cmd = command(None);
        assert_eq!(
            cmd.language_for(&source(Some("main.go")), &from_config).unwrap(),
            Language::Go
        );
        assert_eq!(
            cmd.language_for(&source(Some("notes.txt")), &from_config).unwrap(),
            Language::Json
        );
        assert_eq!(
            cmd.language_for(&source(None), &ChunkingConfig::default()).unwrap(),
            Language::Default
        );

        let forced = command(Some("markdown"));
        assert_eq!(
            forced.language_for(&source(Some("main.go")), &from_config).unwrap(),
            Language::Markdown
        );
    }

    #[test]
    fn test_unknown_language_flag() {
        let cmd = command(Some("cobol"));
        let result = cmd.language_for(&source(None), &ChunkingConfig::default());
        assert!(matches!(result, Err(AppError::UnsupportedLanguage(_))));
    }
}
