use super::{GrammarPrinter, NodeKind};
use crate::test_utils::{grammar, language, nt, render_language};

#[test]
fn detects_immediate_recursion() {
    let g = grammar("s : s 'x' ;");

    assert!(g.is_left_recursive());
    assert!(g.is_immediately_left_recursive(g.start()));
}

#[test]
fn right_recursion_is_not_left_recursion() {
    let g = grammar("s : a s | a ; a : 'x' ;");

    assert!(!g.is_left_recursive());
}

#[test]
fn indirect_recursion_not_detected() {
    let g = grammar("a : b 'x' ; b : a 'y' | 'z' ;");

    assert!(!g.is_left_recursive());
}

#[test]
fn only_reachable_rules_count_for_detection() {
    let g = grammar("s : 'x' ; dead : dead 'y' | 'z' ;");

    assert!(!g.is_left_recursive());
}

#[test]
fn rewrites_without_base_case() {
    let mut g = grammar("s : s 'x' ;");

    let created = g.remove_left_recursion();

    assert_eq!(created.len(), 1);
    assert!(!g.is_left_recursive());
    assert_eq!(
        GrammarPrinter::new(&g).render(),
        "s\t: s'\n\t;\n\ns'\t: 'x' s'\n\t|\n\t;"
    );
}

#[test]
fn rewrites_with_base_cases() {
    let mut g = grammar("e : e '+' t | e '-' t | t ; t : 'n' ;");

    g.remove_left_recursion();

    let e_prime = nt(&g, "e'");
    assert!(!g.is_left_recursive());
    assert_eq!(g.alternatives(e_prime).count(), 3);
    assert_eq!(
        GrammarPrinter::new(&g).render(),
        concat!(
            "e\t: t e'\n\t;\n\n",
            "e'\t: '+' t e'\n\t| '-' t e'\n\t|\n\t;\n\n",
            "t\t: 'n'\n\t;",
        )
    );
}

#[test]
fn unreachable_rules_rewritten_too() {
    let mut g = grammar("s : 'x' ; dead : dead 'y' | 'z' ;");

    let created = g.remove_left_recursion();

    assert_eq!(created.len(), 1);
    assert_eq!(g.symbol_name(created[0]), "dead'");
    assert!(!g.is_immediately_left_recursive(nt(&g, "dead")));
}

#[test]
fn fresh_name_avoids_collision() {
    let mut g = grammar("s : s 'x' | 'y' ;");
    g.intern_node("s'", NodeKind::NonTerminal);

    let created = g.remove_left_recursion();

    assert_eq!(g.symbol_name(created[0]), "s''");
}

#[test]
fn language_preserved() {
    let src = "a : a 'x' | a 'y' | 'b' | 'c' 'd' ;";
    let original = grammar(src);
    let mut rewritten = grammar(src);
    rewritten.remove_left_recursion();

    let before = language(&original, original.start(), 4);
    let after = language(&rewritten, rewritten.start(), 4);

    assert_eq!(before, after);
    insta::assert_snapshot!(render_language(&after), @r"
    'b'
    'b' 'x'
    'b' 'x' 'x'
    'b' 'x' 'x' 'x'
    'b' 'x' 'x' 'y'
    'b' 'x' 'y'
    'b' 'x' 'y' 'x'
    'b' 'x' 'y' 'y'
    'b' 'y'
    'b' 'y' 'x'
    'b' 'y' 'x' 'x'
    'b' 'y' 'x' 'y'
    'b' 'y' 'y'
    'b' 'y' 'y' 'x'
    'b' 'y' 'y' 'y'
    'c' 'd'
    'c' 'd' 'x'
    'c' 'd' 'x' 'x'
    'c' 'd' 'x' 'y'
    'c' 'd' 'y'
    'c' 'd' 'y' 'x'
    'c' 'd' 'y' 'y'
    ");
}
