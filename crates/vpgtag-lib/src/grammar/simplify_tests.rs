use super::GrammarPrinter;
use crate::test_utils::{language, tagged};

#[test]
fn no_calls_is_noop() {
    let mut g = tagged("s : 'x' s | ;");

    assert!(g.call().is_empty());
    assert!(g.to_simple_form().is_empty());
}

#[test]
fn short_spans_untouched() {
    let mut g = tagged("s : '(' a ')' | '(' ')' ; a : 'x' ;");

    assert!(g.to_simple_form().is_empty());
    assert_eq!(g.alternatives(g.start()).count(), 2);
}

#[test]
fn long_span_extracted_with_suffix_tags() {
    let mut g = tagged("s : '(' a a? a* ')' | ; a : 'x' ;");

    let created = g.to_simple_form();

    assert_eq!(created.len(), 1);
    assert_eq!(
        GrammarPrinter::new(&g).render(),
        concat!(
            "s\t: <'(' _L_a_a^OPTIONAL_a^STAR ')'>\n\t|\n\t;\n\n",
            "_L_a_a^OPTIONAL_a^STAR\t: a a? a*\n\t;\n\n",
            "a\t: 'x'\n\t;",
        )
    );
}

#[test]
fn identical_spans_share_one_rule() {
    let mut g = tagged("s : '(' a a a ')' | '[' a a a ']' ; a : 'x' ;");

    let created = g.to_simple_form();

    assert_eq!(created.len(), 1);
    assert_eq!(g.symbol_name(created[0]), "_L_a_a_a");
}

#[test]
fn nested_spans_simplified_recursively() {
    let src = "s : '(' '(' a a ')' a ')' | ; a : 'x' ;";
    let mut g = tagged(src);
    let before = language(&g, g.start(), 7);
    let call = g.call().clone();

    let created = g.to_simple_form();

    assert_eq!(created.len(), 2);
    assert_eq!(g.call(), &call);
    assert_eq!(language(&g, g.start(), 7), before);
    assert_eq!(
        GrammarPrinter::new(&g).render(),
        concat!(
            "s\t: <'(' _L_'('_a_a_')'_a ')'>\n\t|\n\t;\n\n",
            "_L_'('_a_a_')'_a\t: <'(' _L_a_a ')'> a\n\t;\n\n",
            "a\t: 'x'\n\t;\n\n",
            "_L_a_a\t: a a\n\t;",
        )
    );
}

#[test]
fn synthesized_rules_become_reachable() {
    let mut g = tagged("s : '(' a a a ')' ; a : 'x' ;");
    let before = g.non_terminal_count();

    g.to_simple_form();

    assert_eq!(g.non_terminal_count(), before + 1);
}

#[test]
fn colliding_span_names_keep_distinct_rules() {
    let src = "s : '(' a_b c ')' | '(' a b_c ')' ; a_b : 'x' ; c : 'y' ; a : 'z' ; b_c : 'w' ;";
    let mut g = tagged(src);
    let before = language(&g, g.start(), 4);

    let created = g.to_simple_form();

    let names: Vec<&str> = created.iter().map(|&id| g.symbol_name(id)).collect();
    assert_eq!(names, ["_L_a_b_c", "_L_a_b_c'"]);
    assert_eq!(language(&g, g.start(), 4), before);
}

#[test]
fn existing_rule_with_same_body_is_reused() {
    let mut g = tagged("s : '(' a a ')' | _L_a_a ; _L_a_a : a a ; a : 'x' ;");

    let created = g.to_simple_form();

    assert!(created.is_empty());
    assert_eq!(g.non_terminal_count(), 3);
}
