//! Core INI parsing module

pub mod options;
pub mod parser;
pub mod reader;
pub mod source;
pub mod types;

mod scan;
