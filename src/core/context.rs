use std::{
    cell::OnceCell,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        data::TypeMapping,
        file_scanner::scan_files,
        index::{SymbolIndex, index_units},
        loader::{FilesLoader, LoadedSources, SourceProvider},
        observer::TracingObserver,
        parsers::AnnotationParser,
    },
};

/// Orchestrates discovery, loading, and indexing for one CLI invocation.
///
/// # Pipeline
///
/// 1. **Discovery**: config-driven file scan (eager, in `new`)
/// 2. **Loading**: read every file → `sources()`
/// 3. **Indexing**: parse each unit and register its declarations → `index()`
///
/// Loading and indexing are computed on first access.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--source-root`)
/// 2. `.annopinrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory the config was searched from.
    pub root_dir: PathBuf,

    /// Files selected for indexing, sorted.
    pub files: Vec<String>,

    pub verbose: bool,

    sources: OnceCell<LoadedSources>,

    index: OnceCell<SymbolIndex>,
}

impl ScanContext {
    /// Create a new `ScanContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, parsed, or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::info!("No .annopinrc.json found, using default configuration");
        }
        let config = config_result.config;

        let base_dir = scan_base(&root_dir, &config.source_root);
        let base = base_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", base_dir))?;

        let scan_result = scan_files(base, &config.includes, &config.ignores, &config.extensions);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files.into_iter().collect(),
            verbose,
            sources: OnceCell::new(),
            index: OnceCell::new(),
        })
    }

    /// Contents of every discovered file (lazy initialization).
    pub fn sources(&self) -> &LoadedSources {
        self.sources
            .get_or_init(|| FilesLoader::new(self.files.iter().cloned()).load())
    }

    /// Symbol index built from every loaded unit (lazy initialization).
    pub fn index(&self) -> &SymbolIndex {
        self.index.get_or_init(|| {
            let parser = AnnotationParser::new(&TypeMapping::RAILS, &TracingObserver);
            let mut index = SymbolIndex::new();
            let declarations = index_units(&self.sources().units, &parser, &mut index);
            tracing::info!(
                "indexed {} model declaration(s) from {} file(s)",
                declarations,
                self.sources().units.len()
            );
            index
        })
    }
}

/// Directory to scan: the config's `sourceRoot`, relative to `root_dir`.
fn scan_base(root_dir: &Path, source_root: &str) -> PathBuf {
    let p = Path::new(source_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    if p.components().all(|c| matches!(c, Component::CurDir)) {
        return root_dir.to_path_buf();
    }
    let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
    root_dir.join(rel)
}
