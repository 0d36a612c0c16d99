//! Shared decoded strings for one- and two-byte code sequences.
//!
//! Many CMaps map different character codes to the same short strings. These
//! tables precompute the decoded value of every one-byte sequence (ISO-8859-1)
//! and every two-byte sequence (one big-endian UTF-16 code unit) once per
//! process, so decoders hand out a shared `&'static str` instead of allocating
//! a fresh `String` for every code they translate.

use std::sync::LazyLock;

use crate::code::to_code;

/// All 256 one-byte and 65,536 two-byte decoded strings.
///
/// `LazyLock` builds both tables completely on first access from any thread;
/// readers never observe a partially populated table and lookups after that
/// are plain slice indexing.
static MAPPINGS: LazyLock<Mappings> = LazyLock::new(Mappings::build);

struct Mappings {
    /// ISO-8859-1 decodings, indexed by byte value.
    one_byte: Vec<String>,
    /// UTF-16BE decodings of a single code unit, indexed by the packed key.
    two_byte: Vec<String>,
}

impl Mappings {
    fn build() -> Self {
        let mut two_byte = Vec::with_capacity(1 << 16);
        for unit in 0..=u16::MAX {
            // Unpaired surrogate code units (0xD800-0xDFFF) cannot appear in
            // a Rust string; those entries hold U+FFFD instead.
            two_byte.push(String::from_utf16_lossy(&[unit]));
        }

        // ISO-8859-1: byte value equals code point.
        let one_byte: Vec<String> = (0..=u8::MAX).map(|b| char::from(b).to_string()).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            one_byte = one_byte.len(),
            two_byte = two_byte.len(),
            "built shared code string tables"
        );

        Mappings { one_byte, two_byte }
    }
}

/// Look up the shared decoded string for the given combination of code bytes.
///
/// One-byte sequences decode under ISO-8859-1; two-byte sequences decode as a
/// single big-endian UTF-16 code unit, with unpaired surrogates represented as
/// U+FFFD. Both tables are exhaustive, so every sequence of length 1 or 2
/// returns `Some`. Longer sequences are not interned and produce `None`, and
/// so does the empty sequence, which identifies no code.
pub fn get_mapping(bytes: &[u8]) -> Option<&'static str> {
    let mappings: &'static Mappings = &*MAPPINGS;
    match bytes.len() {
        1 => Some(mappings.one_byte[usize::from(bytes[0])].as_str()),
        2 => Some(mappings.two_byte[to_code(bytes) as usize].as_str()),
        _ => None,
    }
}
