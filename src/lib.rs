//! # ini-reader
//!
//! A streaming parser for INI-format configuration files.
//!
//! The core of the crate is a line-by-line parse driver that pulls text from
//! a [`LineSource`] (file, in-memory buffer, or custom reader), classifies
//! each line as a section header, key/value pair, continuation line, or
//! comment, and invokes a caller-supplied [`Handler`] once per recognized
//! entry. No intermediate document is built; the handler sees each entry as
//! it is scanned, borrowing directly from the parser's line buffer.
//!
//! For callers who just want a lookup table, [`IniReader`] wraps the parser
//! and collects all values into a case-insensitive map with typed accessors.
//!
//! ```
//! use ini_reader::{Entry, Parser};
//!
//! let mut entries = Vec::new();
//! Parser::default()
//!     .parse_str("[server]\nport = 8080\n", |entry: Entry<'_>| {
//!         entries.push((
//!             entry.section.to_owned(),
//!             entry.name.unwrap().to_owned(),
//!             entry.value.unwrap().to_owned(),
//!         ));
//!         true
//!     })
//!     .unwrap();
//! assert_eq!(entries, [("server".into(), "port".into(), "8080".into())]);
//! ```
pub mod ini;

// Re-export the main types for convenience
pub use ini::{
    options::{BufferMode, ParseOptions},
    parser::{parse, Parser},
    reader::IniReader,
    source::{BufferSource, FnSource, LineSource, ReadSource},
    types::{
        error::{IniError, Result},
        models::{Entry, Handler},
    },
};
