//! cmap-strings: shared decoded strings for short CMap code sequences.
//!
//! CMap-driven text extraction decodes millions of one- and two-byte character
//! codes, and most of them resolve to the same handful of short strings. This
//! crate builds the complete decoding table once per process — every one-byte
//! sequence under ISO-8859-1 and every two-byte sequence as a big-endian
//! UTF-16 code unit — and serves shared `&'static str` values from it, so a
//! decoder never allocates twice for the same code.
//!
//! # Example
//!
//! ```
//! use cmap_strings::get_mapping;
//!
//! assert_eq!(get_mapping(&[0x41]), Some("A"));
//! assert_eq!(get_mapping(&[0x4E, 0x2D]), Some("中"));
//! // Sequences longer than two bytes are not interned.
//! assert_eq!(get_mapping(&[0x01, 0x02, 0x03]), None);
//! ```

pub mod code;
pub mod mappings;

pub use code::to_code;
pub use mappings::get_mapping;
