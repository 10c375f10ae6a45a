//! Lazily filled token buffer over a lexer
//!
//! Every token the lexer produces is kept, but lookahead and consumption only
//! see default-channel tokens. The EOF token is always visible, so scans for
//! the next visible token terminate.

use super::token::{Token, TokenSource};

pub struct BufferedTokenStream {
    source: Box<dyn TokenSource>,
    tokens: Vec<Token>,
    /// Buffer index from which the next visible token is searched
    position: usize,
    fetched_eof: bool,
}

impl BufferedTokenStream {
    pub fn new(source: Box<dyn TokenSource>) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            position: 0,
            fetched_eof: false,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    /// Make sure buffer index `i` exists, unless EOF came first
    fn sync(&mut self, i: usize) {
        while self.tokens.len() <= i && !self.fetched_eof {
            let mut token = self.source.next_token();
            token.index = self.tokens.len();
            if token.is_eof() {
                self.fetched_eof = true;
            }
            self.tokens.push(token);
        }
    }

    /// Buffer index of the first visible token at or after `from`
    fn next_visible(&mut self, from: usize) -> usize {
        let mut i = from;
        loop {
            self.sync(i);
            match self.tokens.get(i) {
                Some(token) if token.is_hidden() => i += 1,
                Some(_) => return i,
                // Past EOF: the last buffered token is EOF
                None => return self.tokens.len().saturating_sub(1),
            }
        }
    }

    /// Visible token `k` positions ahead; 1 is the current token
    pub fn lt(&mut self, k: usize) -> Token {
        let mut i = self.next_visible(self.position);
        for _ in 1..k.max(1) {
            if self.tokens[i].is_eof() {
                break;
            }
            i = self.next_visible(i + 1);
        }
        self.tokens[i].clone()
    }

    /// Kind of the visible token `k` positions ahead
    pub fn la(&mut self, k: usize) -> i32 {
        self.lt(k).kind
    }

    /// Consume the current visible token; EOF is never consumed
    pub fn consume(&mut self) -> Token {
        let i = self.next_visible(self.position);
        let token = self.tokens[i].clone();
        if !token.is_eof() {
            self.position = i + 1;
        }
        token
    }

    /// Buffer index of the current visible token
    pub fn index(&mut self) -> usize {
        self.next_visible(self.position)
    }

    /// Every token fetched so far, hidden ones included
    pub fn buffered(&self) -> &[Token] {
        &self.tokens
    }

    /// Fetch everything up to EOF
    pub fn fill(&mut self) {
        while !self.fetched_eof {
            let next = self.tokens.len();
            self.sync(next);
        }
    }
}
