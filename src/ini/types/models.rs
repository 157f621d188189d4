//! Entry and handler types shared by the parser and its callers.

/// A single recognized entry, passed to the [`Handler`] as it is scanned.
///
/// The string slices borrow from the parser's internal line buffer and are
/// overwritten when the next line is read; a handler that needs to keep
/// them must copy them out during the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// The section the entry belongs to. Keys seen before any `[section]`
    /// header carry the default section, the empty string.
    pub section: &'a str,
    /// The key name. `None` only for section-change notifications
    /// (see [`ParseOptions::report_section_changes`]).
    ///
    /// [`ParseOptions::report_section_changes`]: crate::ParseOptions::report_section_changes
    pub name: Option<&'a str>,
    /// The value. `None` for section-change notifications and for bare
    /// keys accepted under [`ParseOptions::allow_no_value`].
    ///
    /// [`ParseOptions::allow_no_value`]: crate::ParseOptions::allow_no_value
    pub value: Option<&'a str>,
    /// 1-based physical line number the entry was parsed from.
    pub line: u32,
}

/// Receives entries from the parser.
///
/// Implemented for any `FnMut(Entry<'_>) -> bool` closure, so most callers
/// never name this trait; stateful collectors may implement it directly.
pub trait Handler {
    /// Called once per recognized entry, in input order.
    ///
    /// Return `true` to continue parsing. Returning `false` records the
    /// current line as a parse error; scanning still continues to the end
    /// of the input unless the parser is configured to stop on the first
    /// error.
    fn entry(&mut self, entry: Entry<'_>) -> bool;
}

impl<F> Handler for F
where
    F: for<'a> FnMut(Entry<'a>) -> bool,
{
    fn entry(&mut self, entry: Entry<'_>) -> bool {
        self(entry)
    }
}
