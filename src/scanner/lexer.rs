use crate::error::ScanError;
use crate::scanner::token::{Literal, Token, TokenKind, keyword_kind};

/// Single-pass cursor over one source buffer. `start` marks the first byte of
/// the lexeme being recognized, `current` the next unread byte; both always
/// sit on `char` boundaries. One Scanner per `scan_tokens` call; no state
/// survives the pass.
pub struct Scanner<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Consume the whole source, returning every token recognized plus every
    /// diagnostic discovered, in left-to-right order. The token list always
    /// ends with exactly one EOF token.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<ScanError>) {
        loop {
            self.start = self.current;
            let Some(c) = self.advance() else { break };
            self.scan_token(c);
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, "", None, self.line));
        (self.tokens, self.errors)
    }

    fn scan_token(&mut self, c: char) {
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => match self.is_match('=') {
                true => self.add_token(TokenKind::BangEqual),
                false => self.add_token(TokenKind::Bang),
            },
            '=' => match self.is_match('=') {
                true => self.add_token(TokenKind::EqualEqual),
                false => self.add_token(TokenKind::Equal),
            },
            '<' => match self.is_match('=') {
                true => self.add_token(TokenKind::LessEqual),
                false => self.add_token(TokenKind::Less),
            },
            '>' => match self.is_match('=') {
                true => self.add_token(TokenKind::GreaterEqual),
                false => self.add_token(TokenKind::Greater),
            },
            '/' => match self.is_match('/') {
                true => self.line_comment(),
                false => self.add_token(TokenKind::Slash),
            },
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => self
                .errors
                .push(ScanError::unexpected_character(c, self.line, self.start)),
        }
    }

    // Comments run to end of line; the newline itself is left for the next
    // dispatch so the line counter stays right.
    fn line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.current += c.len_utf8();
        }
    }

    fn string(&mut self) {
        let opening_line = self.line;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.current += c.len_utf8();
        }
        if self.is_at_end() {
            self.errors.push(ScanError::unterminated_string(
                self.line,
                self.start,
                self.current - self.start,
            ));
            return;
        }
        self.current += 1;
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.push_token(TokenKind::String, Some(Literal::String(value)), opening_line);
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }
        // A dot joins the number only when a digit follows it; `1.` is a
        // NUMBER then a separate DOT.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.current += 1;
            }
        }
        let digits = self.lexeme().to_string();
        self.push_token(TokenKind::Number, Some(Literal::Number(digits)), self.line);
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.current += 1;
        }
        let kind = keyword_kind(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None, self.line);
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>, line: usize) {
        self.tokens.push(Token::new(kind, self.lexeme(), literal, line));
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn is_match(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.current += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
