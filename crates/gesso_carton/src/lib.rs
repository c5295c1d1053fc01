//! Carton - The artist's toolbox for Gesso.
//!
//! This crate holds the small shared pieces every other Gesso crate reaches for,
//! much like a carton (artist's portfolio case) holds the tools an artist carries
//! from one canvas to the next.
//!
//! # Modules
//!
//! - **Text edits**: byte-range replacements over an immutable source buffer
//! - **Source text**: line/column conversion and indentation lookups
//! - **Identifiers**: JavaScript identifier validity and reserved words
//!
//! # Example
//!
//! ```
//! use gesso_carton::{apply_edits, TextEdit};
//!
//! let source = "this.props.foo";
//! let edits = vec![TextEdit::replace(0, 14, "foo")];
//! assert_eq!(apply_edits(source, &edits), "foo");
//! ```

pub mod ident;
pub mod source_text;
pub mod text_edit;

// Re-export compact_str::CompactString for convenience
pub use compact_str::{format_compact, CompactString};

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export bitflags for flag types
pub use bitflags::bitflags;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};

pub use ident::{is_identifier_name, is_reserved_word};
pub use source_text::{is_line_leading, line_indent, line_start, LineIndex};
pub use text_edit::{apply_edits, TextEdit};
