use std::fmt::Write;
use std::path::PathBuf;

use vpgtag_core::Colors;
use vpgtag_lib::{Analysis, AnalysisConfig, GrammarAnalyzer, GrammarPrinter};

use super::loader::load_or_exit;

pub struct DumpArgs {
    pub grammar_path: PathBuf,
    pub config: AnalysisConfig,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let grammar = load_or_exit(&args.grammar_path);
    let analysis = GrammarAnalyzer::new(args.config).analyze(grammar);

    if args.json {
        match analysis.report().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render_dump(&analysis, Colors::new(args.color)));
}

/// Tagged grammar, partition, pairs, verdict and cycles.
pub fn render_dump(analysis: &Analysis, colors: Colors) -> String {
    let report = analysis.report();
    let mut out = GrammarPrinter::new(analysis.grammar())
        .colored(colors.is_enabled())
        .render();
    out.push_str("\n\n");
    out.push_str(&report.render_info());

    if !report.cycles.is_empty() {
        out.push_str("\ncycles:\n");
        for cycle in &report.cycles {
            let status = if cycle.valid { "valid" } else { "invalid" };
            writeln!(
                out,
                "  {}  {}{}{}",
                cycle.non_terminals.join(" -> "),
                colors.dim,
                status,
                colors.reset
            )
            .expect("String write never fails");
        }
    }

    if let Some(oracle) = report.render_oracle() {
        out.push_str("\nbrute force:\n");
        out.push_str(&oracle);
    }
    out
}
