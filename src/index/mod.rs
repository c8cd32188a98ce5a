//! The Doxygen search index for the `mem` functions.
//!
//! Doxygen's HTML output ships a client-side search box backed by generated
//! `searchData` tables: for each documented symbol, a list of places it is
//! documented, such as its prototype in `string.h` and its definition in
//! its own `.c` file. This module models one such table as a
//! [`SearchIndex`], an immutable collection of [`Entry`]s sorted by search
//! id, each holding one or more [`Reference`]s.
//!
//! [`builtin`] returns the table for this crate's nine functions. See
//! [`crate::search_data`] for reading and writing the JavaScript form.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;
use smallvec::SmallVec;

mod builtin;

pub use builtin::builtin;

/// The separator Doxygen puts between a symbol and the file it's in within
/// a reference's display text.
pub const FILE_SEPARATOR: &str = ":&#160;";

/// What the numeric flag in a `searchData` reference says about its link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LinkKind {
    /// `0`: the target lives in another project, reached through a tag file.
    External = 0,
    /// `1`: the target is a page of this documentation set.
    Local = 1,
}

impl LinkKind {
    /// Decode the flag as it appears in `searchData`.
    pub const fn from_flag(flag: u32) -> Option<Self> {
        match flag {
            0 => Some(Self::External),
            1 => Some(Self::Local),
            _ => None,
        }
    }

    /// The flag as it appears in `searchData`.
    pub const fn flag(self) -> u8 {
        self as u8
    }
}

/// One place a symbol is documented.
///
/// The strings are borrowed from wherever the table came from, and only
/// owned when they had to be unescaped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference<'a> {
    /// The symbol name shown in the search results.
    pub label: Cow<'a, str>,
    /// The link target, relative to the `search` directory, including the
    /// `#` anchor.
    pub url: Cow<'a, str>,
    /// The file the symbol is attributed to, such as `memcpy.c`.
    pub file: Cow<'a, str>,
    /// The parameter list, including parentheses, if the symbol is a
    /// function.
    pub signature: Option<Cow<'a, str>>,
    /// Whether [`url`](Self::url) points into this documentation set.
    pub link: LinkKind,
}

impl Reference<'_> {
    /// The HTML fragment identifier of the symbol, after the `#`.
    pub fn anchor(&self) -> Option<&str> {
        self.url.split_once('#').map(|(_, anchor)| anchor)
    }

    /// The page [`url`](Self::url) points to, without the anchor.
    pub fn page(&self) -> &str {
        match self.url.split_once('#') {
            Some((page, _)) => page,
            None => &self.url,
        }
    }

    /// The text Doxygen shows for this reference, eg.
    /// `memcpy(void *, const void *, size_t):&#160;memcpy.c`.
    pub fn display(&self) -> impl fmt::Display + '_ {
        DisplayText(self)
    }
}

struct DisplayText<'r, 'a>(&'r Reference<'a>);

impl fmt::Display for DisplayText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        f.write_str(&r.label)?;
        if let Some(signature) = &r.signature {
            f.write_str(signature)?;
        }
        f.write_str(FILE_SEPARATOR)?;
        f.write_str(&r.file)
    }
}

/// A symbol and everywhere it is documented.
///
/// `SmallVec` makes this type, and so [`SearchIndex`], invariant in `'a`:
/// an index borrowing from a local buffer can't be unified with
/// [`builtin`]'s `SearchIndex<'static>` in one binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    id: String,
    name: Cow<'a, str>,
    references: SmallVec<[Reference<'a>; 2]>,
}

impl<'a> Entry<'a> {
    /// Construct an entry for `name`.
    pub fn new(
        name: impl Into<Cow<'a, str>>,
        references: impl IntoIterator<Item = Reference<'a>>,
    ) -> Self {
        let name = name.into();
        Self {
            id: search_id(&name),
            name,
            references: references.into_iter().collect(),
        }
    }

    /// The symbol name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The search id the search box matches queries against. See
    /// [`search_id`].
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The references, in the order Doxygen lists them.
    pub fn references(&self) -> &[Reference<'a>] {
        &self.references
    }

    /// Check this entry, the `index`th one of its table, against `checks`.
    ///
    /// [`Checks::UNIQUE_KEYS`] involves the whole table and is ignored here.
    pub fn validate(&self, index: usize, checks: Checks) -> Result<(), IndexError> {
        let key = &*self.name;
        if checks.contains(Checks::NON_EMPTY_KEY) && key.is_empty() {
            return Err(IndexError::EmptyKey { index });
        }
        if checks.contains(Checks::NON_EMPTY_REFERENCES) && self.references.is_empty() {
            return Err(IndexError::NoReferences { key: key.into() });
        }
        for (reference, r) in self.references.iter().enumerate() {
            if checks.contains(Checks::LABEL_MATCHES_KEY) && *r.label != *key {
                return Err(IndexError::LabelMismatch {
                    key: key.into(),
                    reference,
                    label: r.label.clone().into_owned(),
                });
            }
            if checks.contains(Checks::FILE_MATCHES_KEY) && r.file.strip_suffix(".c") != Some(key) {
                return Err(IndexError::FileMismatch {
                    key: key.into(),
                    reference,
                    file: r.file.clone().into_owned(),
                });
            }
        }
        Ok(())
    }
}

bitflags! {
    /// Invariants a [`SearchIndex`] can be checked against.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Checks: u8 {
        /// Every entry has a non-empty name.
        const NON_EMPTY_KEY = 1 << 0;
        /// Every reference is labelled with its entry's name.
        const LABEL_MATCHES_KEY = 1 << 1;
        /// Every reference is attributed to `<name>.c`.
        const FILE_MATCHES_KEY = 1 << 2;
        /// Every entry has at least one reference.
        const NON_EMPTY_REFERENCES = 1 << 3;
        /// No two entries share a search id.
        const UNIQUE_KEYS = 1 << 4;
    }
}

/// A violated [`Checks`] invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// See [`Checks::NON_EMPTY_KEY`].
    #[error("entry {index} has an empty name")]
    EmptyKey {
        /// Position of the entry in its table.
        index: usize,
    },
    /// See [`Checks::NON_EMPTY_REFERENCES`].
    #[error("`{key}` has no references")]
    NoReferences {
        /// The entry's name.
        key: String,
    },
    /// See [`Checks::LABEL_MATCHES_KEY`].
    #[error("reference {reference} of `{key}` is labelled `{label}`")]
    LabelMismatch {
        /// The entry's name.
        key: String,
        /// Position of the reference within the entry.
        reference: usize,
        /// The offending label.
        label: String,
    },
    /// See [`Checks::FILE_MATCHES_KEY`].
    #[error("reference {reference} of `{key}` is in `{file}`, expected `{key}.c`")]
    FileMismatch {
        /// The entry's name.
        key: String,
        /// Position of the reference within the entry.
        reference: usize,
        /// The offending file label.
        file: String,
    },
    /// See [`Checks::UNIQUE_KEYS`].
    #[error("`{key}` appears more than once")]
    DuplicateKey {
        /// The repeated name.
        key: String,
    },
}

/// An immutable search table, sorted by search id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchIndex<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> SearchIndex<'a> {
    /// Build an index from `entries` in any order, checking every invariant
    /// in [`Checks::all`].
    pub fn new(entries: impl IntoIterator<Item = Entry<'a>>) -> Result<Self, IndexError> {
        Self::with_checks(entries, Checks::all())
    }

    /// Build an index from `entries` in any order, checking only `checks`.
    pub fn with_checks(
        entries: impl IntoIterator<Item = Entry<'a>>,
        checks: Checks,
    ) -> Result<Self, IndexError> {
        let index = Self::from_entries(entries);
        if let Err(err) = index.validate(checks) {
            #[cfg(feature = "log")]
            log::debug!(target: "rawmem::index", "Rejected search index: {err}");
            return Err(err);
        }
        Ok(index)
    }

    pub(crate) fn from_entries(entries: impl IntoIterator<Item = Entry<'a>>) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        // Stable, so duplicates keep their relative order.
        entries.sort_by(|a, b| a.id.cmp(&b.id));

        #[cfg(feature = "log")]
        log::trace!(target: "rawmem::index", "Indexed {} entries", entries.len());

        Self { entries }
    }

    /// Check the index against `checks`, reporting the first violation.
    pub fn validate(&self, checks: Checks) -> Result<(), IndexError> {
        for (index, entry) in self.entries.iter().enumerate() {
            entry.validate(index, checks)?;
        }
        if checks.contains(Checks::UNIQUE_KEYS) {
            if let Some(pair) = self.entries.windows(2).find(|pair| pair[0].id == pair[1].id) {
                return Err(IndexError::DuplicateKey {
                    key: pair[1].name.clone().into_owned(),
                });
            }
        }
        Ok(())
    }

    /// Look up the entry for the symbol `name`.
    pub fn get(&self, name: &str) -> Option<&Entry<'a>> {
        let id = search_id(name);
        self.entries
            .binary_search_by(|entry| entry.id.as_str().cmp(&id))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Iterate over the entries matching `query` the way Doxygen's search
    /// box does: case-insensitively, by prefix.
    pub fn search(&self, query: &str) -> impl Iterator<Item = &Entry<'a>> + use<'_, 'a> {
        let prefix = search_id(query);
        // Matching ids are contiguous, since the entries are sorted.
        let start = self
            .entries
            .partition_point(|entry| entry.id.as_str() < prefix.as_str());
        self.entries[start..]
            .iter()
            .take_while(move |entry| entry.id.starts_with(prefix.as_str()))
    }

    /// All entries, sorted by search id.
    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }

    /// Iterate over the entries, sorted by search id.
    pub fn iter(&self) -> core::slice::Iter<'_, Entry<'a>> {
        self.entries.iter()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'s, 'a> IntoIterator for &'s SearchIndex<'a> {
    type Item = &'s Entry<'a>;
    type IntoIter = core::slice::Iter<'s, Entry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute the search id Doxygen files `name` under.
///
/// ASCII letters and digits are lowercased; every other byte becomes `_`
/// followed by its value in two lowercase hex digits, so `__memcpy_chk`
/// becomes `_5f_5fmemcpy_5fchk`.
pub fn search_id(name: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut id = String::with_capacity(name.len());
    for b in name.bytes() {
        if b.is_ascii_alphanumeric() {
            id.push(char::from(b.to_ascii_lowercase()));
        } else {
            id.push('_');
            id.push(char::from(HEX[usize::from(b >> 4)]));
            id.push(char::from(HEX[usize::from(b & 0xf)]));
        }
    }
    id
}
