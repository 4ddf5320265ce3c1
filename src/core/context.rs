use std::{
    cell::OnceCell,
    collections::{HashMap, HashSet},
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::file_scanner::scan_files,
    issues::{ParseErrorIssue, UnsortedKeysIssue},
    rules::sort_keys::{RuleOptions, check_code},
};

/// All unsorted-keys issues across the codebase, indexed by file path.
pub type AllUnsortedKeysIssues = HashMap<String, Vec<UnsortedKeysIssue>>;

/// Output of analysing every scanned file.
struct AnalysisData {
    unsorted_keys_issues: AllUnsortedKeysIssues,
    parse_errors: Vec<ParseErrorIssue>,
}

/// Analysis context shared by all commands.
///
/// Holds the merged configuration and the scanned file set. Files are read,
/// parsed and checked on first access, in parallel, and the results cached.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--directive ordered`)
/// 2. `.sortkeysrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// All source files to analyze.
    pub files: HashSet<String>,

    /// Rule settings derived from `config`.
    pub options: RuleOptions,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    analysis: OnceCell<AnalysisData>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration from the source root, applies CLI overrides and
    /// scans source files. No file is read or parsed yet.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the CLI overrides
    /// produce an invalid configuration.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --source-root arg > current directory
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;

        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(ref directive) = common_args.directive {
            config.directive = directive.clone();
        }
        if let Some(numeric_order) = common_args.numeric_order {
            config.numeric_order = numeric_order;
        }
        config.validate()?;

        let options = RuleOptions::from_config(&config)?;

        // Config's source_root is relative to the directory the config was
        // looked up from
        let scan_root = resolve_scan_root(&root_dir, &config.source_root);
        let scan_path = scan_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", scan_root))?;

        let scan_result = scan_files(scan_path, &config.includes, &config.ignores, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            options,
            verbose,
            analysis: OnceCell::new(),
        })
    }

    /// Read, parse and check every scanned file (lazy initialization).
    ///
    /// Each file gets its own `SourceMap` and swc globals inside `check_code`,
    /// so files are processed in parallel without shared state.
    fn analysis(&self) -> &AnalysisData {
        self.analysis.get_or_init(|| {
            // `self` holds a `OnceCell`, which is not `Sync`; borrow only the options
            let options = &self.options;
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let result = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| check_code(code, file_path, options));
                    (file_path.clone(), result)
                })
                .collect();

            let mut unsorted_keys_issues = HashMap::new();
            let mut parse_errors = Vec::new();

            for (file_path, result) in results {
                match result {
                    Ok(issues) => {
                        if !issues.is_empty() {
                            unsorted_keys_issues.insert(file_path, issues);
                        }
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, e);
                        }
                        parse_errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            parse_errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));

            AnalysisData {
                unsorted_keys_issues,
                parse_errors,
            }
        })
    }

    /// Unsorted-keys issues per file. Files without issues are absent.
    pub fn unsorted_keys_issues(&self) -> &AllUnsortedKeysIssues {
        &self.analysis().unsorted_keys_issues
    }

    /// Files that could not be read or parsed, sorted by path.
    pub fn parsed_files_errors(&self) -> &[ParseErrorIssue] {
        &self.analysis().parse_errors
    }
}

fn resolve_scan_root(root_dir: &Path, source_root: &str) -> PathBuf {
    let p = Path::new(source_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let rel = p.strip_prefix(".").unwrap_or(p);
    if rel.components().all(|c| matches!(c, Component::CurDir)) {
        root_dir.to_path_buf()
    } else {
        root_dir.join(rel)
    }
}
