use std::path::PathBuf;

use vpgtag_core::Colors;
use vpgtag_lib::{AnalysisConfig, GrammarAnalyzer};

use super::loader::load_or_exit;

pub struct CheckArgs {
    pub grammar_path: PathBuf,
    pub config: AnalysisConfig,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let grammar = load_or_exit(&args.grammar_path);
    let analysis = GrammarAnalyzer::new(args.config).analyze(grammar);

    println!("{}", analysis.verdict);

    if analysis.is_vpg() {
        return;
    }

    let colors = Colors::new(args.color);
    for cycle in analysis.report().cycles.iter().filter(|c| !c.valid) {
        println!(
            "  {}invalid cycle: {}{}",
            colors.dim,
            cycle.non_terminals.join(" -> "),
            colors.reset
        );
    }
    std::process::exit(1);
}
