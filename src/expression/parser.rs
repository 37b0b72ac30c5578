//! Recursive-descent parser producing an expression tree.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '//' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | 'x' | CONST | FUNC '(' expr (',' expr)* ')' | '(' expr ')'
//! ```
//!
//! `power` takes a `unary` on its right so that `2^-x` parses and the
//! operator is right-associative, while `-x^2` still means `-(x^2)`.

use super::builtins::{constant, Builtin};
use super::errors::{ParseError, ParseErrorKind};
use super::lexer::{tokenize, Spanned, Token};


/// The free variable every expression is evaluated against.
pub const VARIABLE: &str = "x";


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,
    Pow,
}

/// Expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable,
    Neg(Box<Node>),
    Binary { op: BinaryOp, lhs: Box<Node>, rhs: Box<Node> },
    Call { func: Builtin, args: Vec<Node> },
}


pub(crate) fn parse(src: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(src)?;
    let mut parser = Parser { src, tokens, cursor: 0 };
    let node = parser.expr()?;

    match parser.peek() {
        None    => Ok(node),
        Some(t) => Err(parser.error_at(t.pos, ParseErrorKind::UnexpectedToken(t.token.to_string()))),
    }
}


struct Parser<'a> {
    src    : &'a str,
    tokens : Vec<Spanned>,
    cursor : usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<Spanned> {
        let t = self.tokens.get(self.cursor).cloned();
        if t.is_some() { self.cursor += 1; }
        t
    }

    /// Consumes the next token if it equals `token`.
    fn eat(&mut self, token: &Token) -> bool {
        match self.peek() {
            Some(t) if &t.token == token => { self.cursor += 1; true }
            _ => false,
        }
    }

    fn error_at(&self, position: usize, kind: ParseErrorKind) -> ParseError {
        ParseError { source_text: self.src.to_string(), position, kind }
    }

    fn end_error(&self) -> ParseError {
        self.error_at(self.src.len(), ParseErrorKind::UnexpectedEnd)
    }

    fn expect(&mut self, token: Token) -> Result<(), ParseError> {
        match self.next() {
            Some(t) if t.token == token => Ok(()),
            Some(t) => Err(self.error_at(t.pos, ParseErrorKind::UnexpectedToken(t.token.to_string()))),
            None    => Err(self.end_error()),
        }
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(&Token::Plus) {
                BinaryOp::Add
            } else if self.eat(&Token::Minus) {
                BinaryOp::Sub
            } else {
                return Ok(lhs);
            };
            let rhs = self.term()?;
            lhs = Node::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(&Token::Star) {
                BinaryOp::Mul
            } else if self.eat(&Token::Slash) {
                BinaryOp::Div
            } else if self.eat(&Token::DoubleSlash) {
                BinaryOp::FloorDiv
            } else if self.eat(&Token::Percent) {
                BinaryOp::Rem
            } else {
                return Ok(lhs);
            };
            let rhs = self.unary()?;
            lhs = Node::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        if self.eat(&Token::Minus) {
            return Ok(Node::Neg(Box::new(self.unary()?)));
        }
        if self.eat(&Token::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if self.eat(&Token::Power) {
            let exponent = self.unary()?;
            return Ok(Node::Binary { op: BinaryOp::Pow, lhs: Box::new(base), rhs: Box::new(exponent) });
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let Some(Spanned { token, pos }) = self.next() else {
            return Err(self.end_error());
        };

        match token {
            Token::Number(v) => Ok(Node::Number(v)),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(name) => self.identifier(name, pos),
            other => Err(self.error_at(pos, ParseErrorKind::UnexpectedToken(other.to_string()))),
        }
    }

    fn identifier(&mut self, name: String, pos: usize) -> Result<Node, ParseError> {
        if name == VARIABLE {
            return Ok(Node::Variable);
        }
        if let Some(value) = constant(&name) {
            return Ok(Node::Number(value));
        }
        let Some(func) = Builtin::lookup(&name) else {
            return Err(self.error_at(pos, ParseErrorKind::UnknownIdentifier(name)));
        };
        if !self.eat(&Token::LParen) {
            return Err(self.error_at(pos, ParseErrorKind::BareFunction(func.name())));
        }

        let mut args = vec![self.expr()?];
        while self.eat(&Token::Comma) {
            args.push(self.expr()?);
        }
        self.expect(Token::RParen)?;

        let arity = func.arity();
        if !arity.accepts(args.len()) {
            return Err(self.error_at(pos, ParseErrorKind::Arity {
                name     : func.name(),
                expected : arity.describe(),
                got      : args.len(),
            }));
        }
        Ok(Node::Call { func, args })
    }
}
