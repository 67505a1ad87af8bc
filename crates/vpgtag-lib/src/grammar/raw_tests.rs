use indoc::indoc;

use super::{Grammar, NodeKind, RawGrammar, RawOccurrence, Suffix};
use crate::Error;
use crate::test_utils::names;

fn parens() -> RawGrammar {
    let mut raw = RawGrammar {
        name: Some("Parens".to_string()),
        start: Some("s".to_string()),
        ..RawGrammar::default()
    };
    raw.terminals.insert("(".to_string());
    raw.terminals.insert(")".to_string());
    raw.non_terminals.insert("s".to_string());
    raw.rules.insert(
        "s".to_string(),
        vec![
            vec![
                RawOccurrence::terminal("(", Suffix::None),
                RawOccurrence::non_terminal("s", Suffix::None),
                RawOccurrence::terminal(")", Suffix::None),
            ],
            vec![],
        ],
    );
    raw
}

#[test]
fn resolves_shared_nodes() {
    let g = Grammar::from_raw(&parens()).unwrap();

    let s = g.start();
    let alts: Vec<_> = g.alternatives(s).collect();
    assert_eq!(alts.len(), 2);
    assert_eq!(alts[0].occurrences()[1].node, s);
    assert!(alts[1].is_empty());
    assert_eq!(g.name(), Some("Parens"));
    assert_eq!(names(&g, g.terminals().iter().copied()), ["(", ")"]);
}

#[test]
fn missing_start_has_no_rules() {
    let raw = RawGrammar {
        start: None,
        ..parens()
    };

    let err = Grammar::from_raw(&raw).unwrap_err();

    assert!(matches!(err, Error::NoRules { ref grammar } if grammar == "Parens"));
}

#[test]
fn undeclared_start_has_no_rules() {
    let raw = RawGrammar {
        start: Some("nope".to_string()),
        ..parens()
    };

    assert!(matches!(
        Grammar::from_raw(&raw),
        Err(Error::NoRules { .. })
    ));
}

#[test]
fn unknown_symbol() {
    let mut raw = parens();
    raw.rules["s"][1].push(RawOccurrence::non_terminal("missing", Suffix::None));

    let err = Grammar::from_raw(&raw).unwrap_err();

    assert_eq!(err.to_string(), "unknown symbol `missing`");
}

#[test]
fn kind_must_match_declaration() {
    let mut raw = parens();
    raw.rules["s"][1].push(RawOccurrence::terminal("s", Suffix::None));

    assert!(matches!(
        Grammar::from_raw(&raw),
        Err(Error::UnknownSymbol { ref name }) if name == "s"
    ));
}

#[test]
fn same_name_different_kind_are_distinct() {
    let mut raw = parens();
    raw.terminals.insert("s".to_string());
    raw.rules["s"][1].push(RawOccurrence::terminal("s", Suffix::None));

    let g = Grammar::from_raw(&raw).unwrap();

    let terminal = g.find("s", NodeKind::Terminal).unwrap();
    assert_ne!(terminal, g.start());
}

#[test]
fn from_json() {
    let json = indoc! {r#"
        {
          "name": "Parens",
          "start": "s",
          "terminals": ["(", ")"],
          "non_terminals": ["s"],
          "rules": {
            "s": [
              [
                { "name": "(", "kind": "terminal" },
                { "name": "s", "kind": "non_terminal" },
                { "name": ")", "kind": "terminal" }
              ],
              []
            ]
          }
        }
    "#};

    let raw = RawGrammar::from_json(json).unwrap();

    assert_eq!(raw, parens());
}

#[test]
fn json_suffix() {
    let json = r#"{"start": "s", "terminals": ["x"], "rules": {"s": [[{"name": "x", "kind": "terminal", "suffix": "star"}]]}}"#;

    let raw = RawGrammar::from_json(json).unwrap();

    assert_eq!(raw.rules["s"][0][0].suffix, Suffix::Star);
}

#[test]
fn invalid_json() {
    let err = RawGrammar::from_json("{").unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}
