pub mod lexer;
pub mod token;

pub use lexer::Scanner;
pub use token::{Literal, Token, TokenKind};

use crate::error::ScanError;

/// Scan source code into a list of tokens plus any diagnostics discovered
/// along the way. Always returns both; the token list ends with EOF even
/// when the input is malformed.
pub fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    Scanner::new(source).scan_tokens()
}
