use arbcalc::{
    interpreter::{
        symbol_table::{LOAD_THRESHOLD, SYMBOL_TABLE_BASE_CAPACITY, SymbolTable},
        value::core::Number,
    },
    util::hash::fnv1a,
};
use pretty_assertions::assert_eq;

/// Distinct names made of letters only, as the lexer would produce them.
fn name(i: usize) -> String {
    let mut name = String::from("v");
    let mut n = i;
    loop {
        name.push(char::from(b'a' + u8::try_from(n % 26).unwrap()));
        n /= 26;
        if n == 0 {
            break name;
        }
    }
}

#[test]
fn fnv1a_matches_reference_values() {
    assert_eq!(fnv1a(b""), 0x811c_9dc5);
    assert_eq!(fnv1a(b"a"), 0xe40c_292c);
    assert_eq!(fnv1a(b"foobar"), 0xbf9c_f968);
}

#[test]
fn insert_get_and_update() {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.get("x"), None);

    let stored = table.insert_or_update("x", &Number::from_i64(5));
    assert_eq!(stored, Number::from_i64(5));
    assert_eq!(table.insert_or_update("x", &Number::from_i64(6)), Number::from_i64(6));

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("x"), Some(&Number::from_i64(6)));
    assert!(table.contains("x"));
    assert!(!table.contains("xx"));
}

#[test]
fn resize_happens_once_when_load_passes_threshold() {
    let mut table = SymbolTable::new();
    assert_eq!(table.capacity(), SYMBOL_TABLE_BASE_CAPACITY);

    // 38 symbols fit in 64 buckets; the 39th would exceed 0.6 * 64.
    for i in 0..38 {
        table.insert_or_update(&name(i), &Number::from_i64(i64::try_from(i).unwrap()));
    }
    assert_eq!(table.capacity(), 64);

    for i in 38..50 {
        table.insert_or_update(&name(i), &Number::from_i64(i64::try_from(i).unwrap()));
    }
    assert_eq!(table.capacity(), 128);
    assert_eq!(table.len(), 50);
    assert!((table.len() as f64) <= table.capacity() as f64 * LOAD_THRESHOLD);

    for i in 0..50 {
        assert_eq!(table.get(&name(i)),
                   Some(&Number::from_i64(i64::try_from(i).unwrap())),
                   "lost {}",
                   name(i));
    }
}

#[test]
fn updates_never_trigger_a_resize() {
    let mut table = SymbolTable::new();
    for i in 0..38 {
        table.insert_or_update(&name(i), &Number::zero());
    }
    for _ in 0..10 {
        table.insert_or_update(&name(0), &Number::from_i64(1));
    }
    assert_eq!(table.capacity(), 64);
    assert_eq!(table.len(), 38);
}

#[test]
fn values_survive_a_resize_after_updates() {
    let mut table = SymbolTable::new();
    for i in 0..100 {
        table.insert_or_update(&name(i), &Number::zero());
        table.insert_or_update(&name(i), &Number::from_i64(-1));
    }
    assert_eq!(table.capacity(), 256);
    assert!(table.iter().all(|(_, value)| *value == Number::from_i64(-1)));
}

#[test]
fn clear_keeps_capacity() {
    let mut table = SymbolTable::new();
    for i in 0..60 {
        table.insert_or_update(&name(i), &Number::from_i64(1));
    }
    let capacity = table.capacity();

    table.clear();

    assert_eq!(table.len(), 0);
    assert_eq!(table.capacity(), capacity);
    for i in 0..60 {
        assert_eq!(table.get(&name(i)), None);
    }

    table.insert_or_update("again", &Number::from_i64(2));
    assert_eq!(table.get("again"), Some(&Number::from_i64(2)));
}

#[test]
fn iteration_visits_every_symbol_once() {
    let mut table = SymbolTable::new();
    for i in 0..45 {
        table.insert_or_update(&name(i), &Number::from_i64(i64::try_from(i).unwrap()));
    }

    let iter = table.iter();
    assert_eq!(iter.len(), 45);

    let mut names: Vec<&str> = iter.map(|(name, _)| name).collect();
    names.sort_unstable();
    let mut expected: Vec<String> = (0..45).map(name).collect();
    expected.sort_unstable();
    assert_eq!(names, expected);
}

#[test]
fn many_symbols_drop_cleanly() {
    let mut table = SymbolTable::new();
    for i in 0..10_000 {
        table.insert_or_update(&name(i), &Number::zero());
    }
    assert_eq!(table.len(), 10_000);
    drop(table);
}
