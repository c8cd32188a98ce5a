#![allow(dead_code)]

use assert_cmd::Command;

/// A `rawmem-index` invocation with logging silenced, so that stderr only
/// carries the tool's own messages.
pub fn rawmem_index(args: &[&str]) -> Command {
    let mut command = Command::cargo_bin("rawmem-index").unwrap();
    command.args(args);
    command.env_remove("RUST_LOG");
    command
}

/// `html/search/functions_6.js` as generated by Doxygen.
pub const FUNCTIONS_6: &str = include_str!("../fixtures/functions_6.js");

/// `rawmem-index lookup memr` output.
pub const LOOKUP_MEMR: &str = "memrchr\tmemrchr.c\t../string_8h.html#a9d5027ae678292d33280b0e0b15f2757\t(const void *, int, size_t)\n\
    memrchr\tmemrchr.c\t../memrchr_8c.html#a45623070e5e0b7008d44600a283ea2ee\t(const void *s, int c, size_t n)\n";
