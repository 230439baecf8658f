use thiserror::Error;

/// The closed set of ways a document can fail to parse.
///
/// The first four arise while locating a value's boundary, the rest while
/// interpreting a boundary's content. [ErrorKind::Internal] covers broken
/// parser invariants, which are reported like any other failure instead of
/// aborting the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("no closing '{0}' found")]
    UnterminatedBracket(char),
    #[error("no closing '\"' found for string")]
    UnterminatedString,
    #[error("unexpected line break inside a string")]
    UnexpectedNewlineInString,
    #[error("expected a value, found end of input")]
    UnexpectedEndOfValue,
    #[error("expected ',', found '{0}'")]
    ExpectedComma(char),
    #[error("expected ':', found '{0}'")]
    ExpectedColon(char),
    #[error("expected '\"' to start a key, found '{0}'")]
    ExpectedKey(char),
    #[error("expected a literal, found \"{0}\"")]
    InvalidLiteral(String),
    #[error("unexpected end of object")]
    UnexpectedEndOfObject,
    #[error("unexpected trailing input '{0}'")]
    UnexpectedTrailingInput(char),
    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// A failure located inside the document, before rendering.
/// `offset` is absolute and counts code points; `line` is the 1-based
/// line accumulated up to the failure point.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SyntaxError {
    pub kind: ErrorKind,
    pub offset: usize,
    pub line: usize,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, offset: usize, line: usize) -> Self {
        Self { kind, offset, line }
    }

    /// Attaches the rendered code frame. Done once, at the top level.
    pub fn render(self, input: &[char]) -> ParseError {
        let frame = code_frame(input, self.offset);
        ParseError {
            kind: self.kind,
            offset: self.offset,
            line: self.line,
            frame,
        }
    }
}

/// A parse failure carrying its rendered code frame.
///
/// Displays as three lines: the message with the line number, a collapsed
/// excerpt of the source around the failure, and a caret rule pointing at
/// the offending code point.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}, line {line}\n{frame}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Absolute code-point offset of the failure in the source.
    pub offset: usize,
    /// 1-based line of the failure.
    pub line: usize,
    frame: String,
}

impl ParseError {
    /// The excerpt-plus-caret part of the diagnostic.
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

// Displayed code points kept on each side of the failure.
const FRAME_WIDTH: usize = 20;

/// Renders a single-line excerpt around `offset` with a caret under the
/// offending code point. Newlines are dropped and space runs collapsed so
/// the frame stays dense regardless of the source's formatting.
fn code_frame(input: &[char], offset: usize) -> String {
    if input.is_empty() {
        return "\n^".into();
    }
    // Errors raised at end of input point at the last code point.
    let offset = offset.min(input.len() - 1);

    let mut before = Vec::new();
    let mut i = offset + 1;
    while i > 0 && before.len() < FRAME_WIDTH {
        let ch = input[i - 1];
        i -= 1;
        if ch == '\n' {
            continue;
        }
        if ch == ' ' && before.last() == Some(&' ') {
            continue;
        }
        before.push(ch);
    }
    before.reverse();

    let mut after = Vec::new();
    let mut i = offset + 1;
    while i < input.len() && after.len() < FRAME_WIDTH {
        let ch = input[i];
        i += 1;
        if ch == '\n' {
            continue;
        }
        if ch == ' ' && after.last() == Some(&' ') {
            continue;
        }
        after.push(ch);
    }

    let caret = before.len();
    let mut excerpt: String = before.into_iter().collect();
    excerpt.extend(after);
    format!("{excerpt}\n{}^", "-".repeat(caret.saturating_sub(1)))
}
