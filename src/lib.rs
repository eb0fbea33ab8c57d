pub mod error;
pub mod repl;
pub mod scanner;

// Re-export the common types for convenience
pub use error::ScanError;
pub use scanner::{Literal, Token, TokenKind, scan};
