use crate::Interner;

#[test]
fn same_name_same_symbol() {
    let mut interner = Interner::new();

    let a = interner.intern("expr");
    let b = interner.intern("expr");
    let c = interner.intern("'('");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn resolve_returns_the_name() {
    let mut interner = Interner::new();

    let rule = interner.intern("_new_rule_1");
    let prime = interner.intern("s'");

    assert_eq!(interner.resolve(rule), "_new_rule_1");
    assert_eq!(interner.resolve(prime), "s'");
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();
    let sym = interner.intern("S");

    assert_eq!(interner.get("S"), Some(sym));
    assert_eq!(interner.get("S'"), None);
    assert_eq!(interner.get("S'"), None);

    let prime = interner.intern("S'");
    assert_ne!(prime, sym);
}
