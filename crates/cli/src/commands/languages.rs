//! Languages command handler.
//!
//! Lists supported language tags and their separator tables.

use clap::Args;
use chunkwise_core::AppResult;
use chunkwise_splitter::{separators_for_language, Language, Separator};
use serde::Serialize;
use std::io::{self, Write};

/// List supported languages and their separators
#[derive(Args, Debug)]
pub struct LanguagesCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LanguageEntry {
    language: Language,
    separators: Vec<Separator>,
}

impl LanguagesCommand {
    pub fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing languages command");

        let entries = language_entries();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.json {
            serde_json::to_writer_pretty(&mut out, &entries)?;
            writeln!(out)?;
        } else {
            for entry in &entries {
                if entry.separators.is_empty() {
                    writeln!(out, "{:<10} (size-only, no separators)", entry.language)?;
                    continue;
                }
                let patterns: Vec<String> = entry
                    .separators
                    .iter()
                    .map(|s| {
                        if s.is_regex() {
                            format!("/{}/", s.pattern())
                        } else {
                            format!("{:?}", s.pattern())
                        }
                    })
                    .collect();
                writeln!(out, "{:<10} {}", entry.language, patterns.join(" "))?;
            }
        }

        Ok(())
    }
}

fn language_entries() -> Vec<LanguageEntry> {
    Language::all()
        .iter()
        .map(|&language| LanguageEntry {
            language,
            separators: separators_for_language(language).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_all_languages() {
        let entries = language_entries();
        assert_eq!(entries.len(), Language::all().len());
        assert!(entries[0].separators.is_empty());
        assert!(entries[1..].iter().all(|e| !e.separators.is_empty()));
    }

    #[test]
    fn test_entries_serialize() {
        let json = serde_json::to_value(language_entries()).unwrap();
        let markdown = json
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["language"] == "markdown")
            .unwrap();
        assert_eq!(markdown["separators"][0]["regex"], true);
    }
}
