//! The search index documenting [`crate::mem`].

use alloc::borrow::Cow;

use super::{Entry, LinkKind, Reference, SearchIndex};

/// A function as Doxygen documents it: once at its prototype in `string.h`
/// and once at its definition in `<name>.c`.
struct Symbol {
    name: &'static str,
    /// Doxygen attributes both references to the file with the definition.
    file: &'static str,
    /// Prototype anchor and its unnamed parameter list.
    header: (&'static str, &'static str),
    /// Definition anchor and its named parameter list.
    source: (&'static str, &'static str),
}

static SYMBOLS: [Symbol; 9] = [
    Symbol {
        name: "memccpy",
        file: "memccpy.c",
        header: (
            "../string_8h.html#a242692b1bc991978ebe1fd84e7d4e7a6",
            "(void *, const void *, int, size_t)",
        ),
        source: (
            "../memccpy_8c.html#ac1a2a1202464f7b07d9116fd971c8c4c",
            "(void *dst, const void *src, int c, size_t n)",
        ),
    },
    Symbol {
        name: "memchr",
        file: "memchr.c",
        header: (
            "../string_8h.html#a55f618822d3f3615984dcaa02706a314",
            "(const void *, int, size_t)",
        ),
        source: (
            "../memchr_8c.html#a16d6b0bd660cc3f9910924c6b6f4af8e",
            "(const void *s, int c, size_t n)",
        ),
    },
    Symbol {
        name: "memcmp",
        file: "memcmp.c",
        header: (
            "../string_8h.html#a0849c52baadd8269575bc57e2273d862",
            "(const void *, const void *, size_t)",
        ),
        source: (
            "../memcmp_8c.html#a9e6df54ee04e18a3772335580e2ed872",
            "(const void *s1, const void *s2, size_t n)",
        ),
    },
    Symbol {
        name: "memcpy",
        file: "memcpy.c",
        header: (
            "../string_8h.html#a0a3e682eff8f0c6e8adc371f54cc9f3f",
            "(void *, const void *, size_t)",
        ),
        source: (
            "../memcpy_8c.html#a18d9a75dd16f2db6609538cb4ddedaf1",
            "(void *dst, const void *src, size_t n)",
        ),
    },
    Symbol {
        name: "memmem",
        file: "memmem.c",
        header: (
            "../string_8h.html#af1f712eaf1dad2a7cd01bd9618bd37c1",
            "(const void *, size_t, const void *, size_t)",
        ),
        source: (
            "../memmem_8c.html#a17f8ea308c456dd4b8877a1113cfeda1",
            "(const void *haystack, size_t n, const void *needle, size_t m)",
        ),
    },
    Symbol {
        name: "memmove",
        file: "memmove.c",
        header: (
            "../string_8h.html#a04322b22ff8bcfdcdcbfe87690683545",
            "(void *, const void *, size_t)",
        ),
        source: (
            "../memmove_8c.html#ab899fcd8b18646556321959b86923289",
            "(void *dst, const void *src, size_t n)",
        ),
    },
    Symbol {
        name: "memrchr",
        file: "memrchr.c",
        header: (
            "../string_8h.html#a9d5027ae678292d33280b0e0b15f2757",
            "(const void *, int, size_t)",
        ),
        source: (
            "../memrchr_8c.html#a45623070e5e0b7008d44600a283ea2ee",
            "(const void *s, int c, size_t n)",
        ),
    },
    Symbol {
        name: "memset",
        file: "memset.c",
        header: (
            "../string_8h.html#a68d2b40ef2213b9227a1ce3b81997ae5",
            "(void *, int, size_t)",
        ),
        source: (
            "../memset_8c.html#aa4075a014de11292d9105188ddbeb216",
            "(void *dst, int c, size_t n)",
        ),
    },
    Symbol {
        name: "memswap",
        file: "memswap.c",
        header: (
            "../string_8h.html#ac1a27d1b1c138692fff9ff67027bf98b",
            "(void *, void *, size_t)",
        ),
        source: (
            "../memswap_8c.html#ac2294003e975f24e74c877eae1ac07e0",
            "(void *m1, void *m2, size_t n)",
        ),
    },
];

/// The search index for `memccpy`, `memchr`, `memcmp`, `memcpy`, `memmem`,
/// `memmove`, `memrchr`, `memset`, and `memswap`.
pub fn builtin() -> SearchIndex<'static> {
    SearchIndex::from_entries(SYMBOLS.iter().map(|symbol| {
        let reference = |(url, signature): (&'static str, &'static str)| Reference {
            label: Cow::Borrowed(symbol.name),
            url: Cow::Borrowed(url),
            file: Cow::Borrowed(symbol.file),
            signature: Some(Cow::Borrowed(signature)),
            link: LinkKind::Local,
        };
        Entry::new(symbol.name, [reference(symbol.header), reference(symbol.source)])
    }))
}
