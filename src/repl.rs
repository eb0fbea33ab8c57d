use std::io::{self, BufRead, Write};

use crate::scanner;

/// Run the interactive prompt. Each line is scanned on its own; diagnostics
/// never carry over to the next line because `scan` returns them as data.
pub fn run_repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().expect("flush stdout");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // Ctrl-D / EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (tokens, diagnostics) = scanner::scan(trimmed);
        for token in &tokens {
            println!("{token}");
        }
        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic.display_with_line());
        }
    }
}
