//! Map-backed convenience reader over the streaming parser.
//!
//! [`IniReader`] runs the parser once at construction and collects every
//! value into an ordered, case-insensitive map. Type coercion lives here,
//! not in the core parser: values are stored as text and interpreted on
//! access.

use std::collections::BTreeMap;
use std::path::Path;

use super::options::ParseOptions;
use super::parser::Parser;
use super::types::error::{IniError, Result};
use super::types::models::Entry;

/// Separator between the section and name halves of a map key. A newline
/// can never appear inside a parsed section or key name, so lookups are
/// collision-free.
const KEY_SEP: char = '\n';

/// An INI file loaded into memory, with typed value accessors.
///
/// Section and key lookups are case-insensitive. Repeated keys, including
/// the per-line dispatches of a multi-line value, are joined with `\n`:
///
/// ```
/// use ini_reader::IniReader;
///
/// let reader = IniReader::from_buffer("[server]\nhost = db1\n    db2\n").unwrap();
/// assert_eq!(reader.get("server", "host"), Some("db1\ndb2"));
/// assert_eq!(reader.get_or("server", "port", "8080"), "8080");
/// ```
#[derive(Debug, Clone)]
pub struct IniReader {
    values: BTreeMap<String, String>,
    parse_error: Option<u32>,
}

impl IniReader {
    /// Loads the INI file at `path` with default [`ParseOptions`].
    ///
    /// # Errors
    /// Fails only on I/O or allocation errors. Malformed lines do not fail
    /// construction: the reader keeps every value parsed before, between,
    /// and after them, and [`parse_error`](Self::parse_error) reports the
    /// first bad line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with(path, ParseOptions::default())
    }

    /// Loads the INI file at `path` with explicit options.
    pub fn from_path_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let mut values = BTreeMap::new();
        let result = Parser::new(options).parse_path(path, |entry: Entry<'_>| {
            Self::insert(&mut values, entry);
            true
        });
        Self::finish(values, result)
    }

    /// Loads INI data already in memory (string or bytes) with default
    /// [`ParseOptions`].
    pub fn from_buffer(data: impl AsRef<[u8]>) -> Result<Self> {
        Self::from_buffer_with(data, ParseOptions::default())
    }

    /// Loads in-memory INI data with explicit options.
    pub fn from_buffer_with(data: impl AsRef<[u8]>, options: ParseOptions) -> Result<Self> {
        let mut values = BTreeMap::new();
        let result = Parser::new(options).parse_bytes(data.as_ref(), |entry: Entry<'_>| {
            Self::insert(&mut values, entry);
            true
        });
        Self::finish(values, result)
    }

    fn insert(values: &mut BTreeMap<String, String>, entry: Entry<'_>) {
        // Section-change notifications carry no key.
        let Some(name) = entry.name else { return };
        let slot = values.entry(make_key(entry.section, name)).or_default();
        if !slot.is_empty() {
            slot.push('\n');
        }
        slot.push_str(entry.value.unwrap_or(""));
    }

    fn finish(values: BTreeMap<String, String>, result: Result<()>) -> Result<Self> {
        let parse_error = match result {
            Ok(()) => None,
            Err(IniError::Syntax { line }) => Some(line),
            Err(e) => return Err(e),
        };
        Ok(Self {
            values,
            parse_error,
        })
    }

    /// The first malformed or rejected line of the input, if any.
    pub fn parse_error(&self) -> Option<u32> {
        self.parse_error
    }

    /// Returns the raw value of `name` under `section`, if present.
    /// Keys parsed before any section header live under the empty section.
    pub fn get(&self, section: &str, name: &str) -> Option<&str> {
        self.values.get(&make_key(section, name)).map(String::as_str)
    }

    /// Returns the value of `name` under `section`, or `default`.
    pub fn get_or<'a>(&'a self, section: &str, name: &str, default: &'a str) -> &'a str {
        self.get(section, name).unwrap_or(default)
    }

    /// Interprets the value as a signed integer, decimal or `0x` hex.
    pub fn get_i64(&self, section: &str, name: &str) -> Option<i64> {
        let text = self.get(section, name)?.trim();
        let (negative, magnitude) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let value = parse_magnitude::<i64>(magnitude)?;
        Some(if negative { -value } else { value })
    }

    /// Interprets the value as an unsigned integer, decimal or `0x` hex.
    pub fn get_u64(&self, section: &str, name: &str) -> Option<u64> {
        parse_magnitude::<u64>(self.get(section, name)?.trim())
    }

    /// Interprets the value as a floating-point number.
    pub fn get_f64(&self, section: &str, name: &str) -> Option<f64> {
        self.get(section, name)?.trim().parse().ok()
    }

    /// Interprets the value as a boolean: `true`/`yes`/`on`/`1` or
    /// `false`/`no`/`off`/`0`, case-insensitive.
    pub fn get_bool(&self, section: &str, name: &str) -> Option<bool> {
        match self.get(section, name)?.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }

    /// All section names seen in the input, sorted, lowercased.
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = self
            .values
            .keys()
            .filter_map(|key| key.split_once(KEY_SEP).map(|(section, _)| section))
            .collect();
        sections.dedup();
        sections
    }

    /// All key names under `section`, sorted, lowercased.
    pub fn keys(&self, section: &str) -> Vec<&str> {
        let prefix = make_key(section, "");
        self.values
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(key, _)| &key[prefix.len()..])
            .collect()
    }

    /// Whether any key was seen under `section`.
    pub fn has_section(&self, section: &str) -> bool {
        let prefix = make_key(section, "");
        self.values
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix))
    }

    /// Whether `name` exists under `section`.
    pub fn has_value(&self, section: &str, name: &str) -> bool {
        self.values.contains_key(&make_key(section, name))
    }
}

fn make_key(section: &str, name: &str) -> String {
    let mut key = String::with_capacity(section.len() + name.len() + 1);
    key.push_str(&section.to_lowercase());
    key.push(KEY_SEP);
    key.push_str(&name.to_lowercase());
    key
}

/// Parses a non-negative integer magnitude, accepting decimal or a `0x`/`0X`
/// hex prefix, in the manner of `strtol` with base 0.
fn parse_magnitude<T: FromRadix>(magnitude: &str) -> Option<T> {
    match magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        Some(hex) => T::from_radix(hex, 16),
        None => T::from_radix(magnitude, 10),
    }
}

trait FromRadix: Sized {
    fn from_radix(text: &str, radix: u32) -> Option<Self>;
}

impl FromRadix for i64 {
    fn from_radix(text: &str, radix: u32) -> Option<Self> {
        i64::from_str_radix(text, radix).ok()
    }
}

impl FromRadix for u64 {
    fn from_radix(text: &str, radix: u32) -> Option<Self> {
        u64::from_str_radix(text, radix).ok()
    }
}
