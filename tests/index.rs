//! Test the search index model and its invariants.

#![cfg(feature = "alloc")]

use rawmem::index::{builtin, search_id};
use rawmem::{Checks, Entry, IndexError, LinkKind, Reference, SearchIndex};

const NAMES: [&str; 9] = [
    "memccpy", "memchr", "memcmp", "memcpy", "memmem", "memmove", "memrchr", "memset", "memswap",
];

fn reference<'a>(label: &'a str, file: &'a str) -> Reference<'a> {
    Reference {
        label: label.into(),
        url: "../x_8c.html#a00".into(),
        file: file.into(),
        signature: None,
        link: LinkKind::Local,
    }
}

#[test]
fn builtin_satisfies_every_invariant() {
    let index = builtin();
    assert_eq!(index.validate(Checks::all()), Ok(()));
    assert_eq!(index.len(), 9);
    let names: Vec<_> = index.iter().map(Entry::name).collect();
    assert_eq!(names, NAMES);
}

#[test]
fn builtin_has_a_declaration_and_a_definition_per_symbol() {
    for entry in &builtin() {
        let [decl, def] = entry.references() else {
            panic!("{} should have two references", entry.name());
        };
        assert_eq!(decl.page(), "../string_8h.html");
        assert_eq!(def.page(), format!("../{}_8c.html", entry.name()));
        assert_eq!(decl.file, format!("{}.c", entry.name()));
        assert_eq!(def.file, decl.file);
        for r in [decl, def] {
            let anchor = r.anchor().unwrap();
            assert_eq!(anchor.len(), 33, "{anchor}");
            assert!(anchor.starts_with('a'));
        }
    }
}

#[test]
fn display_text_matches_doxygen() {
    let index = builtin();
    let memcpy = index.get("memcpy").unwrap();
    let texts: Vec<_> = memcpy.references().iter().map(|r| r.display().to_string()).collect();
    assert_eq!(
        texts,
        [
            "memcpy(void *, const void *, size_t):&#160;memcpy.c",
            "memcpy(void *dst, const void *src, size_t n):&#160;memcpy.c",
        ]
    );

    let plain = reference("errno", "errno.c");
    assert_eq!(plain.display().to_string(), "errno:&#160;errno.c");
    assert_eq!(plain.anchor(), Some("a00"));
}

#[test]
fn get_is_exact_and_case_insensitive() {
    let index = builtin();
    assert_eq!(index.get("memmove").map(Entry::name), Some("memmove"));
    assert_eq!(index.get("MemMove").map(Entry::name), Some("memmove"));
    assert!(index.get("memmov").is_none());
    assert!(index.get("strlen").is_none());
    assert!(index.get("").is_none());
}

#[test]
fn search_matches_by_prefix_in_order() {
    let index = builtin();
    let hits = |q: &str| index.search(q).map(Entry::name).collect::<Vec<_>>();
    assert_eq!(hits("memc"), ["memccpy", "memchr", "memcmp", "memcpy"]);
    assert_eq!(hits("MEMM"), ["memmem", "memmove"]);
    assert_eq!(hits("memswap"), ["memswap"]);
    assert_eq!(hits("memswapx"), Vec::<&str>::new());
    assert_eq!(hits("str"), Vec::<&str>::new());
    assert_eq!(hits("").len(), 9);
}

#[test]
fn search_ids_escape_non_alphanumerics() {
    assert_eq!(search_id("memcpy"), "memcpy");
    assert_eq!(search_id("MemCpy2"), "memcpy2");
    assert_eq!(search_id("__memcpy_chk"), "_5f_5fmemcpy_5fchk");
    assert_eq!(search_id("operator=="), "operator_3d_3d");
}

#[test]
fn new_sorts_entries() {
    let index = SearchIndex::new([
        Entry::new("memset", [reference("memset", "memset.c")]),
        Entry::new("memchr", [reference("memchr", "memchr.c")]),
    ])
    .unwrap();
    let names: Vec<_> = index.iter().map(Entry::name).collect();
    assert_eq!(names, ["memchr", "memset"]);
}

#[test]
fn rejects_empty_key() {
    let err = SearchIndex::new([Entry::new("", [reference("", ".c")])]).unwrap_err();
    assert_eq!(err, IndexError::EmptyKey { index: 0 });
}

#[test]
fn rejects_entry_without_references() {
    let err = SearchIndex::new([Entry::new("memcpy", [])]).unwrap_err();
    assert_eq!(
        err,
        IndexError::NoReferences {
            key: "memcpy".into()
        }
    );
    assert_eq!(err.to_string(), "`memcpy` has no references");
}

#[test]
fn rejects_mismatched_label() {
    let err = SearchIndex::new([Entry::new(
        "memcpy",
        [reference("memcpy", "memcpy.c"), reference("memmove", "memcpy.c")],
    )])
    .unwrap_err();
    assert_eq!(
        err,
        IndexError::LabelMismatch {
            key: "memcpy".into(),
            reference: 1,
            label: "memmove".into(),
        }
    );
}

#[test]
fn rejects_file_not_named_after_key() {
    for file in ["string.h", "memcpy.cc", "memcpy", "xmemcpy.c"] {
        let err = SearchIndex::new([Entry::new("memcpy", [reference("memcpy", file)])]).unwrap_err();
        assert!(matches!(err, IndexError::FileMismatch { .. }), "{file}: {err}");
    }
}

#[test]
fn rejects_duplicate_keys() {
    let err = SearchIndex::new([
        Entry::new("memcpy", [reference("memcpy", "memcpy.c")]),
        Entry::new("MEMCPY", [reference("MEMCPY", "MEMCPY.c")]),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        IndexError::DuplicateKey {
            key: "MEMCPY".into()
        }
    );
}

#[test]
fn checks_can_be_relaxed() {
    let entries = || [Entry::new("memcpy", [reference("memcpy", "string.h")])];
    assert!(SearchIndex::new(entries()).is_err());
    let index = SearchIndex::with_checks(entries(), Checks::all() - Checks::FILE_MATCHES_KEY).unwrap();
    assert_eq!(index.len(), 1);
    assert!(SearchIndex::with_checks([Entry::new("", [])], Checks::empty()).is_ok());
}

#[test]
fn link_flags() {
    assert_eq!(LinkKind::from_flag(0), Some(LinkKind::External));
    assert_eq!(LinkKind::from_flag(1), Some(LinkKind::Local));
    assert_eq!(LinkKind::from_flag(2), None);
    assert_eq!(LinkKind::Local.flag(), 1);
}
