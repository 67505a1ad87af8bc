use super::lexer::{TokenKind, lex, token_text};

fn snapshot(input: &str) -> String {
    let mut out = String::new();
    for token in lex(input) {
        out.push_str(&format!("{:?} {:?}\n", token.kind, token_text(input, &token)));
    }
    out
}

#[test]
fn rule_tokens() {
    insta::assert_snapshot!(snapshot("expr : '(' expr ')' | ID ;"), @r#"
    Ident "expr"
    Colon ":"
    StringLiteral "'('"
    Ident "expr"
    StringLiteral "')'"
    Pipe "|"
    Ident "ID"
    Semi ";"
    "#);
}

#[test]
fn suffixes_and_labels() {
    insta::assert_snapshot!(snapshot("x=a? ys+=b*? c+ # Alt"), @r##"
    Ident "x"
    Assign "="
    Ident "a"
    Question "?"
    Ident "ys"
    PlusAssign "+="
    Ident "b"
    Star "*"
    Question "?"
    Ident "c"
    Plus "+"
    Pound "#"
    Ident "Alt"
    "##);
}

#[test]
fn action_block_is_one_token() {
    insta::assert_snapshot!(snapshot("a {if (x) { y(); }} b"), @r#"
    Ident "a"
    ActionBlock "{if (x) { y(); }}"
    Ident "b"
    "#);
}

#[test]
fn action_block_ignores_quoted_braces() {
    insta::assert_snapshot!(snapshot("{ s = \"}\"; } x"), @r#"
    ActionBlock "{ s = \"}\"; }"
    Ident "x"
    "#);
}

#[test]
fn bracket_block_is_one_token() {
    insta::assert_snapshot!(snapshot("r[int x] returns [String s]"), @r#"
    Ident "r"
    BracketBlock "[int x]"
    Ident "returns"
    BracketBlock "[String s]"
    "#);
}

#[test]
fn comments_and_whitespace_dropped() {
    let input = "a // line\n/* block\n comment */ b";
    insta::assert_snapshot!(snapshot(input), @r#"
    Ident "a"
    Ident "b"
    "#);
}

#[test]
fn range_and_dot() {
    insta::assert_snapshot!(snapshot("'a'..'z' . ~'x'"), @r#"
    StringLiteral "'a'"
    Range ".."
    StringLiteral "'z'"
    Dot "."
    Tilde "~"
    StringLiteral "'x'"
    "#);
}

#[test]
fn escaped_quote_in_literal() {
    let tokens = lex(r"'\''");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
}

#[test]
fn garbage_coalesced() {
    insta::assert_snapshot!(snapshot("a $$$ b"), @r#"
    Ident "a"
    Garbage "$$$"
    Ident "b"
    "#);
}

#[test]
fn unclosed_action_block_is_garbage() {
    let tokens = lex("{ never closed");
    assert_eq!(tokens[0].kind, TokenKind::Garbage);
}
