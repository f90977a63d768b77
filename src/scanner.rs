use std::ops::Range;

use memchr::memmem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Marker {
        /// Full marker text including the `{{` and `}}` delimiters
        raw: &'a str,
        /// Interior text between the delimiters, untrimmed
        directive: &'a str,
    },
}

/// Splits a template into literal runs and `{{...}}` markers.
///
/// A marker opens at `{{` and closes at the nearest following `}}`. The
/// interior must be non-empty and may not contain `}`, so markers never nest
/// and adjacent markers never merge. An opening `{{` without a closing `}}`
/// stays part of the surrounding literal.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    byte_idx: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, byte_idx: 0 }
    }

    /// Rewind to the beginning of the source.
    pub fn reset(&mut self) {
        self.byte_idx = 0;
    }

    pub fn scan_next(&mut self) -> Option<(Token<'a>, Range<usize>)> {
        if self.byte_idx >= self.source.len() {
            return None;
        }

        let start = self.byte_idx;

        match self.find_marker(start) {
            Some(marker) if marker.start > start => {
                // Emit the literal run first, the marker comes on the next call
                self.byte_idx = marker.start;
                Some((Token::Literal(&self.source[start..marker.start]), start..marker.start))
            }
            Some(marker) => {
                self.byte_idx = marker.end;
                let token = Token::Marker {
                    raw: &self.source[marker.clone()],
                    directive: &self.source[marker.start + 2..marker.end - 2],
                };
                Some((token, marker))
            }
            None => {
                let end = self.source.len();
                self.byte_idx = end;
                Some((Token::Literal(&self.source[start..end]), start..end))
            }
        }
    }

    /// Openers the scan left inside literal text, paired with whether any
    /// `}}` follows them.
    pub fn skipped_openers(source: &str) -> Vec<(usize, bool)> {
        let bytes = source.as_bytes();
        let last_close = memmem::rfind(bytes, b"}}");
        let mut openers = Vec::new();

        for (token, range) in Scanner::new(source) {
            if let Token::Literal(text) = token {
                for p in memmem::find_iter(text.as_bytes(), b"{{") {
                    let abs = range.start + p;
                    let closed = last_close.is_some_and(|c| c >= abs + 2);
                    openers.push((abs, closed));
                }
            }
        }

        openers
    }

    fn find_marker(&self, from: usize) -> Option<Range<usize>> {
        let bytes = self.source.as_bytes();
        let mut pos = from;

        while pos < bytes.len() {
            let open = pos + memmem::find(&bytes[pos..], b"{{")?;
            let inner_start = open + 2;

            // No `}` anywhere ahead means no later opener can close either
            let close = inner_start + memchr::memchr(b'}', &bytes[inner_start..])?;

            if close > inner_start && bytes.get(close + 1) == Some(&b'}') {
                return Some(open..close + 2);
            }

            // Every opener before `close` sees the same first `}`, so they all fail
            pos = close + 1;
        }

        None
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = (Token<'a>, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.scan_next()
    }
}
