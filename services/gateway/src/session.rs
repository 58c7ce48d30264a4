//! Command session loop
//!
//! Reads one command per line, applies it, and forwards the dispatcher's
//! output lines to the sink. Unparseable lines are diagnosed on the log
//! stream and never touch the book.

use std::io::{BufRead, Write};

use matching_engine::Dispatcher;
use tracing::{debug, warn};

use crate::parser;

pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> std::io::Result<()> {
    let mut dispatcher = Dispatcher::new();

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let Some(request) = parser::parse_line(line) else {
            warn!(line, "ignored unparseable command");
            continue;
        };

        for out_line in dispatcher.dispatch(request) {
            writeln!(output, "{}", out_line)?;
        }

        debug!(
            live = dispatcher.book().live_count(),
            depth = ?dispatcher.book().depth(5),
            "book after command"
        );
    }

    Ok(())
}
