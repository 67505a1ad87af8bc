use super::{Grammar, GrammarPrinter};
use crate::test_utils::{grammar, tagged};

#[test]
fn markers_for_call_and_return() {
    let g = tagged("s : '(' s ')' | 'x'+ ;");

    assert_eq!(
        GrammarPrinter::new(&g).render(),
        "s\t: <'(' s ')'>\n\t| 'x'+\n\t;"
    );
}

#[test]
fn markers_can_be_disabled() {
    let g = tagged("s : '(' s ')' | ;");

    assert_eq!(
        GrammarPrinter::new(&g).with_tags(false).render(),
        "s\t: '(' s ')'\n\t|\n\t;"
    );
}

#[test]
fn rule_without_alternatives() {
    let g = Grammar::new("s");

    assert_eq!(GrammarPrinter::new(&g).render(), "s\n\t;");
}

#[test]
fn only_reachable_rules_printed() {
    let g = grammar("s : a ; a : 'x' ; dead : 'y' ;");

    assert_eq!(
        GrammarPrinter::new(&g).to_string(),
        "s\t: a\n\t;\n\na\t: 'x'\n\t;"
    );
}

#[test]
fn colored_output() {
    let g = tagged("s : '(' ')' ;");

    let out = GrammarPrinter::new(&g).colored(true).render();

    assert!(out.contains("\x1b["));
    assert!(out.contains("<'('"));
    assert!(out.contains("')'>"));
}
