#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
// When we define `memcpy` etc. ourselves, LLVM must not turn our loops back
// into calls to them.
#![cfg_attr(feature = "export-symbols", no_builtins)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// The `memcpy` family itself. These are the functions the search index
// documents, and the building blocks for everything in `bytes` and `export`.
pub mod mem;

pub mod bytes;

// Define `memcpy` etc. as C ABI symbols. Normally these are defined by the
// platform libc, however a program started without libc has nobody else to
// provide them, and LLVM codegen emits calls to them regardless.
#[cfg(feature = "export-symbols")]
mod export;

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod index;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod search_data;

#[cfg(feature = "alloc")]
pub use index::{Checks, Entry, IndexError, LinkKind, Reference, SearchIndex};
#[cfg(feature = "alloc")]
pub use search_data::{ParseError, ParseErrorKind, parse_search_data, write_search_data};
