use ini_reader::{Entry, IniReader, ParseOptions, Parser};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-ini-file> [--stream]", args[0]);
        process::exit(1);
    }

    let path = &args[1];
    let stream = args.iter().any(|arg| arg == "--stream");

    if stream {
        // Dump entries one by one as the parser dispatches them.
        let options = ParseOptions {
            report_section_changes: true,
            ..ParseOptions::default()
        };
        let result = Parser::new(options).parse_path(path, |entry: Entry<'_>| {
            match (entry.name, entry.value) {
                (None, _) => println!("{:>4}: [{}]", entry.line, entry.section),
                (Some(name), Some(value)) => {
                    println!("{:>4}: [{}] {} = {}", entry.line, entry.section, name, value)
                }
                (Some(name), None) => println!("{:>4}: [{}] {}", entry.line, entry.section, name),
            }
            true
        });
        if let Err(e) = result {
            eprintln!("ERROR: {} (code {})", e, e.code());
            process::exit(1);
        }
        return;
    }

    match IniReader::from_path(path) {
        Ok(reader) => {
            if let Some(line) = reader.parse_error() {
                eprintln!("WARNING: input is malformed starting at line {}", line);
            }
            for section in reader.sections() {
                println!("[{}]", section);
                for key in reader.keys(section) {
                    println!("  {} = {}", key, reader.get(section, key).unwrap_or(""));
                }
            }
        }
        Err(e) => {
            eprintln!("ERROR: failed to read {}: {}", path, e);
            process::exit(1);
        }
    }
}
