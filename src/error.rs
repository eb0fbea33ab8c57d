use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A non-fatal lexical problem. Scanning records these and keeps going; the
/// driver decides how to report them and what exit code to use.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected character '{ch}'")]
    #[diagnostic(code(lox::scan::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unterminated string")]
    #[diagnostic(code(lox::scan::unterminated_string))]
    UnterminatedString {
        line: usize,
        #[label("string opened here")]
        span: SourceSpan,
    },
}

impl ScanError {
    pub fn unexpected_character(ch: char, line: usize, offset: usize) -> Self {
        Self::UnexpectedCharacter {
            ch,
            line,
            span: SourceSpan::new(offset.into(), ch.len_utf8()),
        }
    }

    pub fn unterminated_string(line: usize, offset: usize, len: usize) -> Self {
        Self::UnterminatedString {
            line,
            span: SourceSpan::new(offset.into(), len),
        }
    }

    /// 1-based source line the diagnostic points at.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line, .. } => *line,
        }
    }

    /// Render in the driver's reporting form: `[line <N>] Error: <message>`.
    pub fn display_with_line(&self) -> String {
        format!("[line {}] Error: {}", self.line(), self)
    }
}
