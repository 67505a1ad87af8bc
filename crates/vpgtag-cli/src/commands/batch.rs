//! Directory-tree analysis.
//!
//! Every `.g4` file under the input directory is analyzed on its own and
//! gets its reports in the mirrored directory under the output root:
//! - `<name>_tagged.txt`: the tagged grammar
//! - `<name>_info.txt`: partition, pairs and verdict
//! - `<name>_tagged_all.txt`: exhaustive-search partition (with `--brute-force`)
//!
//! A grammar that fails to load is skipped; the run continues.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use vpgtag_lib::{Analysis, AnalysisConfig, GrammarAnalyzer, GrammarPrinter, Verdict};

use super::loader::load_grammar;

pub struct BatchArgs {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: AnalysisConfig,
}

/// Counters printed at the end of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub skipped: usize,
    pub processed: usize,
    pub left_recursive: usize,
    /// Grammars with a non-empty call set.
    pub tagged: usize,
    pub tagged_left_recursive: usize,
    pub valid: usize,
    pub valid_tagged: usize,
    pub valid_tagged_left_recursive: usize,
    pub too_large: usize,
    pub oracle_disagreements: usize,
}

impl Summary {
    fn record(&mut self, analysis: &Analysis) {
        let left_recursive = analysis.had_left_recursion;
        let valid = analysis.is_vpg();

        self.processed += 1;
        self.left_recursive += usize::from(left_recursive);
        self.valid += usize::from(valid);
        self.too_large += usize::from(analysis.verdict == Verdict::TooLarge);
        if analysis.is_tagged() {
            self.tagged += 1;
            self.tagged_left_recursive += usize::from(left_recursive);
            self.valid_tagged += usize::from(valid);
            self.valid_tagged_left_recursive += usize::from(valid && left_recursive);
        }
        if analysis.oracle.as_ref().is_some_and(|oracle| !oracle.agrees) {
            self.oracle_disagreements += 1;
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of .g4 files: {}", self.total)?;
        writeln!(f, "Skipped files: {}", self.skipped)?;
        writeln!(f, "Processed files: {}", self.processed)?;
        writeln!(f, "Grammars with left recursion: {}", self.left_recursive)?;
        writeln!(f, "Tagged grammars: {}", self.tagged)?;
        writeln!(
            f,
            "Tagged grammars with left recursion: {}",
            self.tagged_left_recursive
        )?;
        writeln!(f, "Valid grammars: {}", self.valid)?;
        writeln!(f, "Valid tagged grammars: {}", self.valid_tagged)?;
        writeln!(
            f,
            "Valid tagged grammars with left recursion: {}",
            self.valid_tagged_left_recursive
        )?;
        writeln!(f, "Too large: {}", self.too_large)?;
        writeln!(f, "Oracle disagreements: {}", self.oracle_disagreements)
    }
}

pub fn run(args: BatchArgs) {
    match analyze_tree(&args) {
        Ok(summary) => print!("{}", summary),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Analyze every grammar under `args.input_dir` and write its reports.
///
/// Fails only when the input tree cannot be listed.
pub fn analyze_tree(args: &BatchArgs) -> Result<Summary, String> {
    if !args.input_dir.is_dir() {
        return Err(format!(
            "'{}' is not a directory",
            args.input_dir.display()
        ));
    }

    let mut files = Vec::new();
    collect_grammars(&args.input_dir, &mut files)?;

    let analyzer = GrammarAnalyzer::new(args.config.clone());
    let mut summary = Summary::default();

    for path in &files {
        summary.total += 1;
        if is_lexer(path) {
            tracing::info!(path = %path.display(), "skipping lexer grammar");
            summary.skipped += 1;
            continue;
        }

        tracing::info!(path = %path.display(), "tagging");
        match process(&analyzer, args, path) {
            Ok(analysis) => summary.record(&analysis),
            Err(msg) => {
                tracing::warn!(reason = %msg, "skipped grammar");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

fn collect_grammars(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| format!("failed to read directory '{}': {}", dir.display(), e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();

    // Sort for deterministic ordering
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_grammars(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "g4") {
            files.push(path);
        }
    }
    Ok(())
}

fn is_lexer(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with("Lexer.g4"))
}

/// Report locations for one grammar.
struct ReportPaths {
    dir: PathBuf,
    tagged: PathBuf,
    info: PathBuf,
    oracle: PathBuf,
}

impl ReportPaths {
    fn new(args: &BatchArgs, grammar: &Path, stem: &str) -> Self {
        let relative = grammar
            .parent()
            .and_then(|parent| parent.strip_prefix(&args.input_dir).ok())
            .unwrap_or(Path::new(""));
        let dir = args.output_dir.join(relative);
        Self {
            tagged: dir.join(format!("{stem}_tagged.txt")),
            info: dir.join(format!("{stem}_info.txt")),
            oracle: dir.join(format!("{stem}_tagged_all.txt")),
            dir,
        }
    }
}

fn process(analyzer: &GrammarAnalyzer, args: &BatchArgs, path: &Path) -> Result<Analysis, String> {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let paths = ReportPaths::new(args, path, &stem);
    for existing in [&paths.tagged, &paths.info] {
        if existing.exists() {
            return Err(format!(
                "{}: report already exists: '{}'",
                path.display(),
                existing.display()
            ));
        }
    }

    let grammar = load_grammar(path)?;
    let analysis = analyzer.analyze(grammar);
    let report = analysis.report();

    fs::create_dir_all(&paths.dir)
        .map_err(|e| format!("failed to create '{}': {}", paths.dir.display(), e))?;
    let tagged = format!(
        "grammar {stem};\n\n{}\n",
        GrammarPrinter::new(analysis.grammar())
    );
    write_new(&paths.tagged, &tagged)?;
    write_new(&paths.info, &report.render_info())?;
    if let Some(oracle) = report.render_oracle() {
        write_new(&paths.oracle, &oracle)?;
    }

    Ok(analysis)
}

/// Write a report file, refusing to replace an existing one.
fn write_new(path: &Path, contents: &str) -> Result<(), String> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .and_then(|mut file| file.write_all(contents.as_bytes()))
        .map_err(|e| format!("failed to write '{}': {}", path.display(), e))
}
