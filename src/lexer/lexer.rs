use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{registry::registry::IdentifierRegistry, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Builds a token from the matched text, or returns `None` to skip it.
pub type RegexHandler = fn(&str, Span) -> Option<Token>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Checked in order. The identifier pattern accepts every character the
    // others reject, so scanning never fails.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[\t \x{00A0}\x00]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^∧").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "∧") },
        RegexPattern { regex: Regex::new("^∨").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "∨") },
        RegexPattern { regex: Regex::new("^⇒").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Implies, "⇒") },
        RegexPattern { regex: Regex::new("^~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(r"^[^∧∨⇒~()=\t \x{00A0}\x00]+").unwrap(), handler: symbol_handler },
    ];
}

fn skip_handler(_matched: &str, _span: Span) -> Option<Token> {
    None
}

fn symbol_handler(matched: &str, span: Span) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Identifier, String::from(matched), span))
}

/// Lazy, restartable tokenizer over a single expression.
///
/// Tokens are produced on demand. [`Lexer::peek`] is a pure lookahead;
/// [`Lexer::next`] advances and records new identifiers in the registry it
/// is handed, so each identifier is registered exactly once.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    /// Discards all state, starts over on `source` and empties `registry`.
    pub fn reset(&mut self, source: &str, registry: &mut IdentifierRegistry) {
        self.source = String::from(source);
        self.pos = 0;
        registry.clear();
    }

    /// Advances past the next token and returns it, or `None` at end of input.
    pub fn next(&mut self, registry: &mut IdentifierRegistry) -> Option<Token> {
        let (token, end) = self.scan()?;
        self.pos = end;

        if token.kind == TokenKind::Identifier {
            registry.register(&token.value);
        }

        trace!("token {:?} {:?} at {}", token.kind, token.value, token.span.start.0);
        Some(token)
    }

    /// Returns the token [`Lexer::next`] would return, without advancing.
    pub fn peek(&self) -> Option<Token> {
        self.scan().map(|(token, _)| token)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn scan(&self) -> Option<(Token, usize)> {
        let mut pos = self.pos;

        'scan: while pos < self.source.len() {
            let remainder = &self.source[pos..];

            for pattern in PATTERNS.iter() {
                if let Some(matched) = pattern.regex.find(remainder) {
                    let end = pos + matched.end();

                    match (pattern.handler)(matched.as_str(), Span::new(pos, end)) {
                        Some(token) => return Some((token, end)),
                        None => {
                            pos = end;
                            continue 'scan;
                        }
                    }
                }
            }

            break;
        }

        None
    }
}

/// Tokenizes the whole of `source` eagerly, filling `registry` as it goes.
pub fn tokenize(source: &str, registry: &mut IdentifierRegistry) -> Vec<Token> {
    let mut lex = Lexer::default();
    lex.reset(source, registry);

    let mut tokens = vec![];
    while let Some(token) = lex.next(registry) {
        tokens.push(token);
    }

    tokens
}
