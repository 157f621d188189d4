//! The parse driver: line loop, line classification, and entry points.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use super::options::{BufferMode, ParseOptions};
use super::scan::{find_char_or_comment, truncate_at_boundary};
use super::source::{BufferSource, LineSource, ReadSource};
use super::types::error::{IniError, Result};
use super::types::models::{Entry, Handler};

/// Bytes requested per read while swallowing the tail of an overlong line.
const DISCARD_CHUNK: usize = 16;

/// The UTF-8 byte-order mark, optionally skipped on line 1.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A streaming INI parser.
///
/// A `Parser` holds only configuration; every `parse_*` call builds its own
/// private session (line buffer, section name, previous key name, line
/// counter), so one `Parser` may be shared freely, including across
/// threads parsing independent inputs.
///
/// Entries are dispatched to the handler one by one, in input order, as
/// they are scanned. A successful parse returns `Ok(())`; malformed lines
/// are recorded (first one wins) and reported as
/// [`IniError::Syntax`] after the whole input has been scanned, unless
/// [`ParseOptions::stop_on_first_error`] is set.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses the INI file at `path`.
    ///
    /// The file is opened and closed internally; an open failure maps to
    /// [`IniError::Io`].
    pub fn parse_path(&self, path: impl AsRef<Path>, handler: impl Handler) -> Result<()> {
        let path = path.as_ref();
        info!("Parsing INI file: {}", path.display());
        let file = File::open(path)?;
        self.parse_reader(file, handler)
    }

    /// Parses from an already-open stream.
    ///
    /// The parser never closes the stream; pass `&mut file` to retain
    /// ownership. The stream is wrapped in a [`BufReader`] internally.
    pub fn parse_reader(&self, input: impl Read, handler: impl Handler) -> Result<()> {
        self.parse_source(&mut ReadSource::new(BufReader::new(input)), handler)
    }

    /// Parses an in-memory string.
    pub fn parse_str(&self, input: &str, handler: impl Handler) -> Result<()> {
        self.parse_bytes(input.as_bytes(), handler)
    }

    /// Parses an in-memory byte region. No terminator is required.
    pub fn parse_bytes(&self, input: &[u8], handler: impl Handler) -> Result<()> {
        self.parse_source(&mut BufferSource::new(input), handler)
    }

    /// Parses from any [`LineSource`], including caller-supplied ones
    /// built with [`FnSource`](crate::FnSource).
    pub fn parse_source(
        &self,
        source: &mut impl LineSource,
        mut handler: impl Handler,
    ) -> Result<()> {
        let mut session = Session::new(&self.options)?;
        session.run(source, &mut handler)
    }
}

/// Parses the INI file at `path` with default [`ParseOptions`].
pub fn parse(path: impl AsRef<Path>, handler: impl Handler) -> Result<()> {
    Parser::default().parse_path(path, handler)
}

/// Per-call mutable parse state. All of it is dropped when the entry
/// point returns; nothing is shared between parses.
struct Session<'o> {
    options: &'o ParseOptions,
    /// Current line, including its trailing newline when present.
    line: Vec<u8>,
    /// Current capacity of `line`; grows in `Growable` mode and persists
    /// across lines within the session.
    capacity: usize,
    /// Current section name, truncated to `max_section`. The empty string
    /// is the default, unsectioned state.
    section: String,
    /// Previous key name, truncated to `max_name`; continuation lines are
    /// dispatched under it. Cleared on every accepted section header.
    prev_name: String,
    /// 1-based number of the line currently being processed.
    lineno: u32,
    /// First malformed/rejected line, 0 = none yet. Never overwritten.
    first_error: u32,
}

impl<'o> Session<'o> {
    fn new(options: &'o ParseOptions) -> Result<Self> {
        let capacity = match options.buffer {
            BufferMode::Fixed => options.max_line,
            BufferMode::Growable { initial_capacity } => {
                initial_capacity.min(options.max_line)
            }
        }
        .max(1);
        let mut line = Vec::new();
        line.try_reserve(capacity)?;
        Ok(Self {
            options,
            line,
            capacity,
            section: String::new(),
            prev_name: String::new(),
            lineno: 0,
            first_error: 0,
        })
    }

    fn run(&mut self, source: &mut dyn LineSource, handler: &mut dyn Handler) -> Result<()> {
        loop {
            self.line.clear();
            if !self.fill_line(source)? {
                break;
            }
            self.lineno += 1;

            // Buffer filled without a terminating newline: the physical
            // line may continue beyond the captured prefix. Swallow the
            // remainder; only if further bytes actually existed was the
            // line truncated, and only then is it an error. The captured
            // prefix is still classified below either way.
            if self.line.len() == self.capacity
                && self.line.last() != Some(&b'\n')
                && discard_rest_of_line(source)?
                && self.first_error == 0
            {
                self.first_error = self.lineno;
            }

            self.process_line(handler);

            if self.options.stop_on_first_error && self.first_error != 0 {
                debug!("stopping at first error, line {}", self.first_error);
                break;
            }
        }
        if self.first_error != 0 {
            Err(IniError::Syntax {
                line: self.first_error,
            })
        } else {
            Ok(())
        }
    }

    /// Reads one physical line into the buffer, growing it in `Growable`
    /// mode (doubling, bounded by `max_line`) until the line fits or the
    /// bound is reached. Returns `false` at end of input.
    fn fill_line(&mut self, source: &mut dyn LineSource) -> Result<bool> {
        if source.read_line(&mut self.line, self.capacity)? == 0 {
            return Ok(false);
        }
        if let BufferMode::Growable { .. } = self.options.buffer {
            while self.line.len() == self.capacity
                && self.line.last() != Some(&b'\n')
                && self.capacity < self.options.max_line
            {
                let grown = (self.capacity * 2).min(self.options.max_line);
                self.line.try_reserve(grown - self.line.len())?;
                self.capacity = grown;
                let room = self.capacity - self.line.len();
                if source.read_line(&mut self.line, room)? == 0 {
                    break;
                }
            }
        }
        Ok(true)
    }

    /// Strips, classifies, and dispatches the line in the buffer.
    fn process_line(&mut self, handler: &mut dyn Handler) {
        let mut raw: &[u8] = &self.line;
        if self.lineno == 1 && self.options.allow_bom && raw.starts_with(&UTF8_BOM) {
            raw = &raw[UTF8_BOM.len()..];
        }
        let text = match std::str::from_utf8(raw) {
            Ok(text) => text,
            Err(_) => {
                if self.first_error == 0 {
                    self.first_error = self.lineno;
                }
                return;
            }
        };

        let trimmed = text.trim_ascii_end();
        let stripped = trimmed.trim_ascii_start();
        let had_leading_space = stripped.len() < trimmed.len();
        let inline = self
            .options
            .allow_inline_comments
            .then_some(self.options.inline_comment_prefixes.as_str());

        let first = match stripped.chars().next() {
            None => return, // blank line
            Some(c) => c,
        };
        if self.options.start_comment_prefixes.contains(first) {
            return; // whole-line comment; does not reset the previous key
        }

        if self.options.allow_multiline && !self.prev_name.is_empty() && had_leading_space {
            // Non-blank line with leading whitespace: continuation of the
            // previous key. Dispatched once per physical line; joining the
            // pieces is the handler's responsibility.
            let cut = find_char_or_comment(stripped, "", inline);
            let value = stripped[..cut].trim_ascii_end();
            let keep = handler.entry(Entry {
                section: &self.section,
                name: Some(&self.prev_name),
                value: Some(value),
                line: self.lineno,
            });
            if !keep && self.first_error == 0 {
                self.first_error = self.lineno;
            }
        } else if first == '[' {
            let rest = &stripped[1..];
            let close = find_char_or_comment(rest, "]", inline);
            if rest[close..].starts_with(']') {
                self.prev_name.clear();
                self.section.clear();
                self.section
                    .push_str(truncate_at_boundary(&rest[..close], self.options.max_section));
                debug!("line {}: entering section [{}]", self.lineno, self.section);
                if self.options.report_section_changes {
                    let keep = handler.entry(Entry {
                        section: &self.section,
                        name: None,
                        value: None,
                        line: self.lineno,
                    });
                    if !keep && self.first_error == 0 {
                        self.first_error = self.lineno;
                    }
                }
            } else if self.first_error == 0 {
                // No closing ']' before the end of the line.
                self.first_error = self.lineno;
            }
        } else {
            // Must be a name/value pair, split at the first '=' or ':'.
            let split = find_char_or_comment(stripped, "=:", inline);
            if matches!(stripped[split..].chars().next(), Some('=') | Some(':')) {
                let name = stripped[..split].trim_ascii_end();
                let rest = &stripped[split + 1..];
                let cut = find_char_or_comment(rest, "", inline);
                let value = rest[..cut].trim_ascii();
                // The retained copy is bounded; the dispatched name is not.
                self.prev_name.clear();
                self.prev_name
                    .push_str(truncate_at_boundary(name, self.options.max_name));
                let keep = handler.entry(Entry {
                    section: &self.section,
                    name: Some(name),
                    value: Some(value),
                    line: self.lineno,
                });
                if !keep && self.first_error == 0 {
                    self.first_error = self.lineno;
                }
            } else if self.options.allow_no_value {
                let name = stripped[..split].trim_ascii_end();
                let keep = handler.entry(Entry {
                    section: &self.section,
                    name: Some(name),
                    value: None,
                    line: self.lineno,
                });
                if !keep && self.first_error == 0 {
                    self.first_error = self.lineno;
                }
            } else if self.first_error == 0 {
                self.first_error = self.lineno;
            }
        }
    }
}

/// Reads and discards through a small scratch buffer until the end of the
/// current physical line, or end of input. Returns whether any bytes
/// existed beyond the already-captured prefix; a line that exactly fills
/// the buffer at end of input was not truncated at all.
fn discard_rest_of_line(source: &mut dyn LineSource) -> Result<bool> {
    let mut abyss = Vec::with_capacity(DISCARD_CHUNK);
    let mut discarded = false;
    loop {
        abyss.clear();
        if source.read_line(&mut abyss, DISCARD_CHUNK)? == 0 {
            return Ok(discarded);
        }
        discarded = true;
        if abyss.last() == Some(&b'\n') {
            return Ok(discarded);
        }
    }
}
