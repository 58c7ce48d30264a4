//! Line tokenizer
//!
//! Splits a command line on `,`, trimming ASCII whitespace around each field
//! and preserving empty fields (`"A,,1"` -> `["A", "", "1"]`). Trailing
//! `\r`/`\n` are stripped first.

pub fn tokenize(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    line.split(',')
        .map(|field| field.trim_matches(|c: char| c.is_ascii_whitespace()).to_string())
        .collect()
}
