//! Source providers: where the text of each source unit comes from.

use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;

/// One complete source unit handed to the annotation parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Usually the file path.
    pub source_id: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(source_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            text: text.into(),
        }
    }
}

/// A unit that could not be loaded. Other units are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub source_id: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct LoadedSources {
    /// Sorted by source id.
    pub units: Vec<SourceUnit>,
    pub failures: Vec<LoadFailure>,
}

pub trait SourceProvider {
    fn load(&self) -> LoadedSources;
}

/// Reads every listed file from disk.
///
/// Files are read in parallel; a file that cannot be read is recorded as a
/// `LoadFailure` instead of aborting the load.
#[derive(Debug, Clone, Default)]
pub struct FilesLoader {
    file_names: Vec<String>,
}

impl FilesLoader {
    pub fn new(file_names: impl IntoIterator<Item = String>) -> Self {
        Self {
            file_names: file_names.into_iter().collect(),
        }
    }

    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }
}

fn read_unit(file_name: &str) -> Result<SourceUnit> {
    tracing::info!("loading from {}", file_name);
    let text = fs::read_to_string(file_name)
        .with_context(|| format!("Failed to read file: {}", file_name))?;
    Ok(SourceUnit::new(file_name, text))
}

impl SourceProvider for FilesLoader {
    fn load(&self) -> LoadedSources {
        let results: Vec<_> = self
            .file_names
            .par_iter()
            .map(|file_name| (file_name, read_unit(file_name)))
            .collect();

        let mut loaded = LoadedSources::default();
        for (file_name, result) in results {
            match result {
                Ok(unit) => loaded.units.push(unit),
                Err(e) => {
                    tracing::warn!("{:#}", e);
                    loaded.failures.push(LoadFailure {
                        source_id: file_name.clone(),
                        message: format!("{:#}", e),
                    });
                }
            }
        }

        loaded.units.sort_by(|a, b| a.source_id.cmp(&b.source_id));
        loaded.failures.sort_by(|a, b| a.source_id.cmp(&b.source_id));
        loaded
    }
}

/// Units already in memory, e.g. unsaved editor buffers.
impl SourceProvider for Vec<SourceUnit> {
    fn load(&self) -> LoadedSources {
        let mut units = self.clone();
        units.sort_by(|a, b| a.source_id.cmp(&b.source_id));
        LoadedSources {
            units,
            failures: Vec::new(),
        }
    }
}
