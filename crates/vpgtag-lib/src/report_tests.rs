use crate::pipeline::{AnalysisConfig, GrammarAnalyzer};
use crate::report::Report;
use crate::test_utils::grammar;

fn report(src: &str, config: AnalysisConfig) -> Report {
    GrammarAnalyzer::new(config).analyze(grammar(src)).report()
}

#[test]
fn info_for_valid_grammar() {
    let report = report("s : '(' s ')' | ;", AnalysisConfig::default());

    assert_eq!(
        report.render_info(),
        "call\t['(']\nret \t[')']\npairs: \t[('(', ')')]\nValid\n"
    );
}

#[test]
fn info_for_invalid_grammar() {
    let report = report("s : s2 'x' ; s2 : s 'y' | 'z' ;", AnalysisConfig::default());

    assert_eq!(report.render_info(), "call\t[]\nret \t[]\npairs: \t[]\nInvalid\n");
    assert_eq!(report.plain, ["'x'", "'y'", "'z'"]);
}

#[test]
fn info_for_oversized_grammar() {
    let report = report(
        "s : '(' s ')' | ;",
        AnalysisConfig::default().with_max_non_terminals(0),
    );

    assert!(report.render_info().ends_with("\nToo large\n"));
    assert!(report.cycles.is_empty());
}

#[test]
fn oracle_section() {
    let plain = report("s : 'a' 'b' 'c' ;", AnalysisConfig::default());
    assert_eq!(plain.render_oracle(), None);

    let checked = report(
        "s : 'a' 'b' 'c' ;",
        AnalysisConfig::default().with_brute_force(true),
    );
    assert_eq!(
        checked.render_oracle().as_deref(),
        Some("call\t['a']\nret \t['b']\nDifferent\n")
    );
}

#[test]
fn json_layout() {
    let report = report(
        "grammar Parens; s : '(' s ')' | ;",
        AnalysisConfig::default(),
    );

    insta::assert_snapshot!(report.to_json().unwrap(), @r#"
    {
      "grammar": "Parens",
      "start": "s",
      "verdict": "vpg",
      "had_left_recursion": false,
      "non_terminals": 1,
      "call": [
        "'('"
      ],
      "ret": [
        "')'"
      ],
      "plain": [],
      "pairs": [
        [
          "'('",
          "')'"
        ]
      ],
      "cycles": [
        {
          "non_terminals": [
            "s"
          ],
          "valid": true
        }
      ]
    }
    "#);
}
