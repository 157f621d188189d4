//! Runtime parser configuration.
//!
//! The reference C implementations of this format fix these choices at
//! build time through preprocessor macros; here they form one explicit
//! structure handed to [`Parser::new`](crate::Parser::new), so different
//! configurations coexist in the same binary and are directly testable.

/// Default maximum physical line length in bytes.
pub const DEFAULT_MAX_LINE: usize = 200;

/// Default initial capacity for a growable line buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 200;

/// Default maximum retained length for section and key names, in bytes.
pub const DEFAULT_MAX_NAME: usize = 50;

/// How the per-parse line buffer behaves when a line does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferMode {
    /// The buffer holds exactly `max_line` bytes. A longer physical line
    /// is truncated, reported as a parse error at its line number, and
    /// the remainder of the line is discarded.
    Fixed,
    /// The buffer starts at `initial_capacity` bytes (conventionally
    /// [`DEFAULT_INITIAL_CAPACITY`]) and doubles as needed, up to
    /// `max_line`. Lines longer than `max_line` are handled as in
    /// [`BufferMode::Fixed`].
    Growable { initial_capacity: usize },
}

/// Configuration for a [`Parser`](crate::Parser).
///
/// `ParseOptions::default()` matches the defaults of classic INI parsers:
/// a 200-byte fixed line buffer, `;`/`#` line comments, whitespace-prefixed
/// `;` inline comments, multi-line continuation on, BOM skipping on,
/// bare keys rejected, and scanning that continues past malformed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum physical line length in bytes. Longer lines are truncated
    /// and reported as errors; see [`BufferMode`].
    pub max_line: usize,
    /// Fixed or growable line buffering.
    pub buffer: BufferMode,
    /// Recognize continuation lines: a line with leading whitespace and
    /// non-empty content following a key/value line is dispatched again
    /// under the previous key name, once per physical line. The parser
    /// does not join continuation values; that is the handler's job.
    pub allow_multiline: bool,
    /// Skip a UTF-8 byte-order mark (EF BB BF) at the start of line 1.
    pub allow_bom: bool,
    /// Characters that start a whole-line comment when they are the first
    /// non-whitespace character of a line.
    pub start_comment_prefixes: String,
    /// Recognize inline comments at all.
    pub allow_inline_comments: bool,
    /// Characters that start an inline comment. An inline comment
    /// character only registers when preceded by whitespace, so values
    /// like `path=/a;b` are not cut.
    pub inline_comment_prefixes: String,
    /// Abort at the first malformed or handler-rejected line instead of
    /// scanning to the end of the input.
    pub stop_on_first_error: bool,
    /// Dispatch an [`Entry`](crate::Entry) with `name: None, value: None`
    /// every time a `[section]` header is accepted.
    pub report_section_changes: bool,
    /// Accept a line with no `=`/`:` separator as a bare key and dispatch
    /// it with `value: None`. When off, such lines are parse errors.
    pub allow_no_value: bool,
    /// Maximum retained length of a section name, in bytes. A longer
    /// header is truncated silently, rounding down to a UTF-8 character
    /// boundary; all entries under it carry the truncated name.
    pub max_section: usize,
    /// Maximum retained length of the previous key name used for
    /// continuation lines, in bytes, with the same truncation rule.
    /// The name dispatched for the key/value line itself is never
    /// truncated; only the retained copy is.
    pub max_name: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_line: DEFAULT_MAX_LINE,
            buffer: BufferMode::Fixed,
            allow_multiline: true,
            allow_bom: true,
            start_comment_prefixes: ";#".to_owned(),
            allow_inline_comments: true,
            inline_comment_prefixes: ";".to_owned(),
            stop_on_first_error: false,
            report_section_changes: false,
            allow_no_value: false,
            max_section: DEFAULT_MAX_NAME,
            max_name: DEFAULT_MAX_NAME,
        }
    }
}
