use moa_notation_macros::{AritySite, MacroError, MacroTable, builtin};

fn sample_args(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("x{}", i)).collect()
}

#[test]
fn test_names_are_unique() {
    let table = builtin::table();
    let mut names: Vec<_> = table.names().collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), table.len());
}

#[test]
fn test_wrong_argument_counts_always_fail() {
    for entry in builtin::table() {
        for count in [entry.arity() + 1, entry.arity().saturating_sub(1)] {
            if count == entry.arity() {
                continue;
            }
            match entry.expand(&sample_args(count)) {
                Err(MacroError::ArityMismatch {
                    expected,
                    found,
                    site: AritySite::CallSite,
                    ..
                }) => {
                    assert_eq!(expected, entry.arity());
                    assert_eq!(found, count);
                }
                other => panic!("\\{} with {} args gave {:?}", entry.name(), count, other),
            }
        }
    }
}

#[test]
fn test_arguments_appear_in_expansion() {
    for entry in builtin::table() {
        let args = sample_args(entry.arity());
        let out = entry.expand(&args).unwrap();
        for arg in &args {
            assert!(out.contains(arg.as_str()), "\\{} dropped {}", entry.name(), arg);
        }
    }
}

#[test]
fn test_lookup_never_fails() {
    let table = builtin::table();
    for name in ["", "\\", "nope", "shape2", "\\\\shape"] {
        assert!(table.lookup(name).is_none(), "{:?}", name);
    }
}

#[test]
fn test_documented_examples() {
    let mut table = MacroTable::new();
    table.register("vc", 1, "<#1>").unwrap();
    table.register("Z", 0, "\\mathbb{Z}").unwrap();
    table.register("vcc", 2, "<#1 #2>").unwrap();

    assert_eq!(table.expand("vc", &["x"]).unwrap(), "<x>");
    assert_eq!(table.expand::<&str>("Z", &[]).unwrap(), "\\mathbb{Z}");
    let err = table.expand("vcc", &["a"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "arity mismatch for '\\vcc' at call site: expected 2, got 1"
    );
}

#[test]
fn test_table_is_shareable_across_threads() {
    let table = builtin::table();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                table
                    .expand("vc", &[i.to_string()])
                    .unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<{}>", i));
    }
}

#[test]
fn test_escaped_hash_never_yields_a_placeholder() {
    let mut table = MacroTable::new();
    assert!(matches!(
        table.register("h", 0, "##1"),
        Err(MacroError::InvalidPlaceholder { offset: 0, .. })
    ));
    assert!(table.is_empty());

    table.register("hash", 0, "{##}").unwrap();
    table.register("sharp", 0, "## 1").unwrap();
    assert_eq!(table.expand::<&str>("hash", &[]).unwrap(), "{#}");
    assert_eq!(table.expand::<&str>("sharp", &[]).unwrap(), "# 1");
}
