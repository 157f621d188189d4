use std::io::Write;

use ini_reader::{IniReader, ParseOptions};

#[test]
fn get_and_get_or() {
    let reader = IniReader::from_buffer("[server]\nhost = db1\nport = 8080\n").unwrap();
    assert_eq!(reader.get("server", "host"), Some("db1"));
    assert_eq!(reader.get("server", "missing"), None);
    assert_eq!(reader.get_or("server", "missing", "fallback"), "fallback");
    assert_eq!(reader.get_or("server", "port", "1"), "8080");
}

#[test]
fn lookups_are_case_insensitive() {
    let reader = IniReader::from_buffer("[Server]\nHost = db1\n").unwrap();
    assert_eq!(reader.get("server", "host"), Some("db1"));
    assert_eq!(reader.get("SERVER", "HOST"), Some("db1"));
    assert!(reader.has_section("sErVeR"));
    assert!(reader.has_value("server", "hOsT"));
}

#[test]
fn keys_before_any_section_live_under_the_empty_section() {
    let reader = IniReader::from_buffer("top = 1\n[s]\nk = 2\n").unwrap();
    assert_eq!(reader.get("", "top"), Some("1"));
    assert_eq!(reader.get("s", "k"), Some("2"));
}

#[test]
fn multiline_values_are_joined_with_newlines() {
    let reader = IniReader::from_buffer("[s]\nhosts = db1\n    db2\n    db3\n").unwrap();
    assert_eq!(reader.get("s", "hosts"), Some("db1\ndb2\ndb3"));
}

#[test]
fn repeated_keys_are_joined_too() {
    let reader = IniReader::from_buffer("k = a\nk = b\n").unwrap();
    assert_eq!(reader.get("", "k"), Some("a\nb"));
}

#[test]
fn integer_values() {
    let reader =
        IniReader::from_buffer("[n]\ndec = 1234\nneg = -56\nplus = +7\nhex = 0x4D2\nbad = x\n")
            .unwrap();
    assert_eq!(reader.get_i64("n", "dec"), Some(1234));
    assert_eq!(reader.get_i64("n", "neg"), Some(-56));
    assert_eq!(reader.get_i64("n", "plus"), Some(7));
    assert_eq!(reader.get_i64("n", "hex"), Some(1234));
    assert_eq!(reader.get_i64("n", "bad"), None);
    assert_eq!(reader.get_i64("n", "missing"), None);

    assert_eq!(reader.get_u64("n", "dec"), Some(1234));
    assert_eq!(reader.get_u64("n", "hex"), Some(1234));
    assert_eq!(reader.get_u64("n", "neg"), None);
}

#[test]
fn float_values() {
    let reader = IniReader::from_buffer("pi = 3.25\nbad = tau\n").unwrap();
    assert_eq!(reader.get_f64("", "pi"), Some(3.25));
    assert_eq!(reader.get_f64("", "bad"), None);
}

#[test]
fn boolean_values() {
    let input = "a = true\nb = YES\nc = on\nd = 1\ne = False\nf = no\ng = OFF\nh = 0\ni = maybe\n";
    let reader = IniReader::from_buffer(input).unwrap();
    for name in ["a", "b", "c", "d"] {
        assert_eq!(reader.get_bool("", name), Some(true), "key {}", name);
    }
    for name in ["e", "f", "g", "h"] {
        assert_eq!(reader.get_bool("", name), Some(false), "key {}", name);
    }
    assert_eq!(reader.get_bool("", "i"), None);
}

#[test]
fn sections_and_keys_enumeration() {
    let reader =
        IniReader::from_buffer("top = 0\n[B]\nx = 1\ny = 2\n[a]\nz = 3\n").unwrap();
    assert_eq!(reader.sections(), ["", "a", "b"]);
    assert_eq!(reader.keys("b"), ["x", "y"]);
    assert_eq!(reader.keys("a"), ["z"]);
    assert!(reader.keys("missing").is_empty());
    assert!(!reader.has_section("missing"));
}

#[test]
fn malformed_lines_do_not_lose_surrounding_values() {
    let reader = IniReader::from_buffer("a = 1\nbad line\nb = 2\n").unwrap();
    assert_eq!(reader.parse_error(), Some(2));
    assert_eq!(reader.get("", "a"), Some("1"));
    assert_eq!(reader.get("", "b"), Some("2"));
}

#[test]
fn clean_input_reports_no_parse_error() {
    let reader = IniReader::from_buffer("a = 1\n").unwrap();
    assert_eq!(reader.parse_error(), None);
}

#[test]
fn no_value_keys_store_empty_strings() {
    let options = ParseOptions {
        allow_no_value: true,
        ..ParseOptions::default()
    };
    let reader = IniReader::from_buffer_with("[flags]\nverbose\n", options).unwrap();
    assert_eq!(reader.get("flags", "verbose"), Some(""));
    assert!(reader.has_value("flags", "verbose"));
}

#[test]
fn from_path_reads_a_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[db]\nhost = localhost\nport = 5432\n").unwrap();
    let reader = IniReader::from_path(file.path()).unwrap();
    assert_eq!(reader.get("db", "host"), Some("localhost"));
    assert_eq!(reader.get_i64("db", "port"), Some(5432));
}

#[test]
fn from_path_open_failure_is_an_io_error() {
    let err = IniReader::from_path("/no/such/file.ini").unwrap_err();
    assert_eq!(err.code(), -1);
}
