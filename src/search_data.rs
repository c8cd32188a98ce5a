//! Reading and writing Doxygen's `searchData` JavaScript tables.
//!
//! Doxygen writes one `search/<kind>_<n>.js` file per initial letter, each
//! holding a single array literal:
//!
//! ```text
//! var searchData=
//! [
//!   ['memcpy',['memcpy',['../string_8h.html#a0a3e…',1,'memcpy(void *, const void *, size_t):&#160;memcpy.c'],…]]
//! ];
//! ```
//!
//! Each element is `[search id, [name, reference...]]`, and each reference
//! is `[url, link flag, display text]`.

use alloc::borrow::Cow;
use alloc::collections::BTreeSet;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::fmt;

use crate::index::{Checks, Entry, FILE_SEPARATOR, IndexError, LinkKind, Reference, SearchIndex, search_id};

/// Write `index` in Doxygen's `searchData` format.
///
/// The output is byte-for-byte what Doxygen itself generates for the same
/// table.
pub fn write_search_data<W: fmt::Write>(out: &mut W, index: &SearchIndex<'_>) -> fmt::Result {
    out.write_str("var searchData=\n[\n")?;
    for (i, entry) in index.iter().enumerate() {
        if i != 0 {
            out.write_str(",\n")?;
        }
        out.write_str("  [")?;
        write_quoted(out, &[entry.id()])?;
        out.write_str(",[")?;
        write_quoted(out, &[entry.name()])?;
        for r in entry.references() {
            out.write_str(",[")?;
            write_quoted(out, &[&*r.url])?;
            write!(out, ",{},", r.link.flag())?;
            let signature = r.signature.as_deref().unwrap_or("");
            write_quoted(out, &[&*r.label, signature, FILE_SEPARATOR, &*r.file])?;
            out.write_char(']')?;
        }
        out.write_str("]]")?;
    }
    out.write_str("\n];\n")
}

/// Write the concatenation of `parts` as a single-quoted JavaScript string.
fn write_quoted<W: fmt::Write>(out: &mut W, parts: &[&str]) -> fmt::Result {
    out.write_char('\'')?;
    for part in parts {
        for c in part.chars() {
            if c == '\'' || c == '\\' {
                out.write_char('\\')?;
            }
            out.write_char(c)?;
        }
    }
    out.write_char('\'')
}

impl fmt::Display for SearchIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_search_data(f, self)
    }
}

/// A `searchData` document that couldn't be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("searchData byte {offset}: {kind}")]
pub struct ParseError {
    /// Byte offset into the document where the problem was found.
    pub offset: usize,
    /// What the problem was.
    pub kind: ParseErrorKind,
}

/// The ways a `searchData` document can be malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A required token wasn't there.
    #[error("expected `{0}`")]
    Expected(&'static str),
    /// The document ended inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
    /// A string contained a backslash escape other than `\'`, `\"` or
    /// `\\`.
    #[error("unsupported escape sequence in string")]
    UnsupportedEscape,
    /// A reference's link flag was neither 0 nor 1.
    #[error("unknown link flag `{0}`")]
    UnknownLinkFlag(u32),
    /// A reference's display text had no `:&#160;` before the file name.
    #[error("reference text has no `:&#160;` file separator")]
    MissingFileSeparator,
    /// An entry's search id doesn't match its name.
    #[error("search id `{found}` should be `{expected}`")]
    IdMismatch {
        /// The id in the document.
        found: String,
        /// The id computed from the entry's name.
        expected: String,
    },
    /// Something other than whitespace followed the array.
    #[error("trailing characters after the searchData array")]
    TrailingCharacters,
    /// The table parsed, but violates an index invariant.
    #[error(transparent)]
    Invalid(#[from] IndexError),
}

/// Parse a `searchData` document, checking every invariant in
/// [`Checks::all`].
///
/// The returned index borrows its strings from `src`, except those that
/// contained escapes.
pub fn parse_search_data(src: &str) -> Result<SearchIndex<'_>, ParseError> {
    parse_search_data_with(src, Checks::all())
}

/// Parse a `searchData` document, checking only `checks`.
pub fn parse_search_data_with(src: &str, checks: Checks) -> Result<SearchIndex<'_>, ParseError> {
    let result = Parser { src, pos: 0 }.document(checks);

    #[cfg(feature = "log")]
    match &result {
        Ok(index) => log::debug!(target: "rawmem::search_data", "Parsed {} entries", index.len()),
        Err(err) => log::debug!(target: "rawmem::search_data", "Parse failed: {err}"),
    }

    result
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn document(mut self, checks: Checks) -> Result<SearchIndex<'a>, ParseError> {
        self.keyword("var")?;
        self.keyword("searchData")?;
        self.punct(b'=', "=")?;
        self.punct(b'[', "[")?;

        let mut entries = Vec::new();
        let mut ids = BTreeSet::new();
        if !self.eat(b']') {
            loop {
                let entry_start = self.skip_ws();
                let entry = self.entry()?;
                entry
                    .validate(entries.len(), checks)
                    .map_err(|err| self.error_at(entry_start, err.into()))?;
                if checks.contains(Checks::UNIQUE_KEYS) && !ids.insert(entry.id().to_string()) {
                    let err = IndexError::DuplicateKey {
                        key: entry.name().into(),
                    };
                    return Err(self.error_at(entry_start, err.into()));
                }

                #[cfg(feature = "log")]
                log::trace!(
                    target: "rawmem::search_data",
                    "Entry `{}` with {} references",
                    entry.name(),
                    entry.references().len()
                );

                entries.push(entry);
                if self.eat(b']') {
                    break;
                }
                self.punct(b',', ",")?;
            }
        }

        self.eat(b';');
        if self.skip_ws() != self.src.len() {
            return Err(self.error(ParseErrorKind::TrailingCharacters));
        }

        Ok(SearchIndex::from_entries(entries))
    }

    fn entry(&mut self) -> Result<Entry<'a>, ParseError> {
        self.punct(b'[', "[")?;
        let id_start = self.skip_ws();
        let id = self.string()?;
        self.punct(b',', ",")?;
        self.punct(b'[', "[")?;
        let name = self.string()?;

        let expected = search_id(&name);
        if *id != *expected {
            return Err(self.error_at(
                id_start,
                ParseErrorKind::IdMismatch {
                    found: id.into_owned(),
                    expected,
                },
            ));
        }

        let mut references = Vec::new();
        while self.eat(b',') {
            references.push(self.reference()?);
        }
        self.punct(b']', "]")?;
        self.punct(b']', "]")?;
        Ok(Entry::new(name, references))
    }

    fn reference(&mut self) -> Result<Reference<'a>, ParseError> {
        self.punct(b'[', "[")?;
        let url = self.string()?;
        self.punct(b',', ",")?;
        let flag_start = self.skip_ws();
        let flag = self.number()?;
        let link = LinkKind::from_flag(flag)
            .ok_or_else(|| self.error_at(flag_start, ParseErrorKind::UnknownLinkFlag(flag)))?;
        self.punct(b',', ",")?;
        let text_start = self.skip_ws();
        let text = self.string()?;
        self.punct(b']', "]")?;

        let pieces = match text {
            Cow::Borrowed(text) => split_display(text).map(|(label, signature, file)| {
                (
                    Cow::Borrowed(label),
                    signature.map(Cow::Borrowed),
                    Cow::Borrowed(file),
                )
            }),
            Cow::Owned(text) => split_display(&text).map(|(label, signature, file)| {
                (
                    Cow::Owned(label.into()),
                    signature.map(|s| Cow::Owned(s.into())),
                    Cow::Owned(file.into()),
                )
            }),
        };
        let (label, signature, file) =
            pieces.ok_or_else(|| self.error_at(text_start, ParseErrorKind::MissingFileSeparator))?;

        Ok(Reference {
            label,
            url,
            file,
            signature,
            link,
        })
    }

    /// Parse a single-quoted string, returning its contents. Only strings
    /// with escapes are copied.
    fn string(&mut self) -> Result<Cow<'a, str>, ParseError> {
        self.punct(b'\'', "'")?;
        let src = self.src;
        let bytes = src.as_bytes();
        let start = self.pos;
        let mut unescaped: Option<String> = None;
        let mut run = start;
        let mut i = start;
        while let Some(&b) = bytes.get(i) {
            match b {
                b'\'' => {
                    self.pos = i + 1;
                    return Ok(match unescaped {
                        None => Cow::Borrowed(&src[start..i]),
                        Some(mut s) => {
                            s.push_str(&src[run..i]);
                            Cow::Owned(s)
                        }
                    });
                }
                b'\\' => {
                    let c = match bytes.get(i + 1) {
                        Some(&(c @ (b'\'' | b'"' | b'\\'))) => char::from(c),
                        Some(_) => return Err(self.error_at(i, ParseErrorKind::UnsupportedEscape)),
                        None => break,
                    };
                    let s = unescaped.get_or_insert_with(String::new);
                    s.push_str(&src[run..i]);
                    s.push(c);
                    i += 2;
                    run = i;
                }
                _ => i += 1,
            }
        }
        Err(self.error_at(start - 1, ParseErrorKind::UnterminatedString))
    }

    fn number(&mut self) -> Result<u32, ParseError> {
        let start = self.skip_ws();
        let digits = self.src.as_bytes()[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        // Anything too large for a `u32` is certainly not a known flag.
        let value = self.src[start..start + digits]
            .parse()
            .map_err(|_| self.error(ParseErrorKind::Expected("link flag")))?;
        self.pos = start + digits;
        Ok(value)
    }

    fn keyword(&mut self, word: &'static str) -> Result<(), ParseError> {
        let start = self.skip_ws();
        let end = start + word.len();
        let bounded = !matches!(
            self.src.as_bytes().get(end),
            Some(b) if b.is_ascii_alphanumeric() || *b == b'_' || *b == b'$'
        );
        if self.src[start..].starts_with(word) && bounded {
            self.pos = end;
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::Expected(word)))
        }
    }

    fn punct(&mut self, byte: u8, token: &'static str) -> Result<(), ParseError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::Expected(token)))
        }
    }

    /// Skip whitespace, then consume `byte` if it's next.
    fn eat(&mut self, byte: u8) -> bool {
        let start = self.skip_ws();
        if self.src.as_bytes().get(start) == Some(&byte) {
            self.pos = start + 1;
            true
        } else {
            false
        }
    }

    /// Skip whitespace, returning the new position.
    fn skip_ws(&mut self) -> usize {
        let rest = &self.src.as_bytes()[self.pos..];
        self.pos += rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
        self.pos
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.pos, kind)
    }

    fn error_at(&self, offset: usize, kind: ParseErrorKind) -> ParseError {
        ParseError { offset, kind }
    }
}

/// Split a reference's display text into its label, signature and file.
fn split_display(text: &str) -> Option<(&str, Option<&str>, &str)> {
    let (head, file) = text.rsplit_once(FILE_SEPARATOR)?;
    Some(match head.find('(') {
        Some(paren) => (&head[..paren], Some(&head[paren..]), file),
        None => (head, None, file),
    })
}
