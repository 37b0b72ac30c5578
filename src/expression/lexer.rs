//! Tokenizer for the expression grammar.

use super::errors::{ParseError, ParseErrorKind};


#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    Power,
    LParen,
    RParen,
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(v)   => write!(f, "{v}"),
            Token::Ident(s)    => write!(f, "{s}"),
            Token::Plus        => write!(f, "+"),
            Token::Minus       => write!(f, "-"),
            Token::Star        => write!(f, "*"),
            Token::Slash       => write!(f, "/"),
            Token::DoubleSlash => write!(f, "//"),
            Token::Percent     => write!(f, "%"),
            Token::Power       => write!(f, "**"),
            Token::LParen      => write!(f, "("),
            Token::RParen      => write!(f, ")"),
            Token::Comma       => write!(f, ","),
        }
    }
}


/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token : Token,
    pub pos   : usize,
}


/// Splits `src` into tokens. `^` and `**` both become [`Token::Power`].
pub(crate) fn tokenize(src: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    let fail = |position: usize, kind: ParseErrorKind| ParseError {
        source_text: src.to_string(),
        position,
        kind,
    };

    while i < bytes.len() {
        let c = bytes[i] as char;
        let start = i;

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            i = scan_number(bytes, i);
            let text = &src[start..i];
            let value = text
                .parse::<f64>()
                .map_err(|_| fail(start, ParseErrorKind::MalformedNumber(text.to_string())))?;
            tokens.push(Spanned { token: Token::Number(value), pos: start });
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            tokens.push(Spanned { token: Token::Ident(src[start..i].to_string()), pos: start });
            continue;
        }

        let next = bytes.get(i + 1).copied().map(char::from);
        let (token, width) = match (c, next) {
            ('*', Some('*')) => (Token::Power, 2),
            ('/', Some('/')) => (Token::DoubleSlash, 2),
            ('^', _)         => (Token::Power, 1),
            ('+', _)         => (Token::Plus, 1),
            ('-', _)         => (Token::Minus, 1),
            ('*', _)         => (Token::Star, 1),
            ('/', _)         => (Token::Slash, 1),
            ('%', _)         => (Token::Percent, 1),
            ('(', _)         => (Token::LParen, 1),
            (')', _)         => (Token::RParen, 1),
            (',', _)         => (Token::Comma, 1),
            _ => {
                let ch = src[start..].chars().next().unwrap_or(c);
                return Err(fail(start, ParseErrorKind::UnexpectedChar(ch)));
            }
        };
        tokens.push(Spanned { token, pos: start });
        i += width;
    }

    Ok(tokens)
}


/// Advances over `digits [. digits] [e [+-] digits]` and returns the end offset.
///
/// The exponent is only consumed when at least one digit follows it, so `2e`
/// leaves `e` to be read as an identifier (and rejected by the parser).
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1; }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1; }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') { j += 1; }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() { j += 1; }
            i = j;
        }
    }
    i
}
