//! Decoded source text with a cursor and line/column tracking

/// Character source handed to a lexer, tagged with the file it came from
#[derive(Debug, Clone)]
pub struct CharStream {
    source_name: String,
    chars: Vec<char>,
    index: usize,
    line: usize,
    column: usize,
}

impl CharStream {
    pub fn new(source_name: impl Into<String>, text: &str) -> Self {
        Self {
            source_name: source_name.into(),
            chars: text.chars().collect(),
            index: 0,
            line: 1,
            column: 0,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Look ahead `offset` characters; 1 is the current character
    pub fn la(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            return None;
        }
        self.chars.get(self.index + offset - 1).copied()
    }

    pub fn consume(&mut self) -> Option<char> {
        let c = self.chars.get(self.index).copied()?;
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based line of the current character
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based column of the current character
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
