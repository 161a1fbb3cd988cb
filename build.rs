//! Build script to generate embedded word lists
//!
//! Reads one allowed-word file and one secret-word file per supported length
//! and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LENGTHS: [usize; 6] = [3, 4, 5, 6, 7, 8];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for len in LENGTHS {
        let allowed = format!("data/{len}/allowed.txt");
        let secrets = format!("data/{len}/secrets.txt");

        generate_word_list(
            &mut output,
            &allowed,
            &format!("ALLOWED_{len}"),
            &format!("All accepted {len}-letter guesses"),
        );
        generate_word_list(
            &mut output,
            &secrets,
            &format!("SECRETS_{len}"),
            &format!("{len}-letter words eligible as the hidden word"),
        );

        println!("cargo:rerun-if-changed={allowed}");
        println!("cargo:rerun-if-changed={secrets}");
    }

    writeln!(output, "/// Embedded lists keyed by word length").unwrap();
    writeln!(output, "pub const EMBEDDED: &[EmbeddedList] = &[").unwrap();
    for len in LENGTHS {
        writeln!(
            output,
            "    EmbeddedList {{ length: {len}, allowed: ALLOWED_{len}, secrets: SECRETS_{len} }},"
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    writeln!(output, "/// {doc} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
