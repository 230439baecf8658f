use crate::data::{Boundary, BoundaryKind};
use crate::errors::{ErrorKind, SyntaxError};

// Scanners locate the span of the next value without interpreting its
// contents. They all take the slice being scanned, the position of the
// value's first code point within it, the absolute document offset of that
// same code point, and the 1-based line it sits on.

type ScanResult<'a> = Result<Boundary<'a>, SyntaxError>;

/// Counts consecutive space/newline code points from `pos`, returning
/// `(count, newlines)`. Stops at the first other code point or end of input.
pub fn skip_space(input: &[char], pos: usize) -> (usize, usize) {
    let mut count = 0;
    let mut newlines = 0;

    while let Some(&ch) = input.get(pos + count) {
        match ch {
            '\n' => {
                newlines += 1;
                count += 1;
            }
            ' ' => count += 1,
            _ => break,
        }
    }

    (count, newlines)
}

/// Dispatches on the lookahead code point to the matching boundary scanner.
pub fn scan_value<'a>(input: &'a [char], pos: usize, offset: usize, line: usize) -> ScanResult<'a> {
    match input.get(pos) {
        Some('{') => scan_bracket(input, pos, offset, line, ('{', '}'), BoundaryKind::Object),
        Some('[') => scan_bracket(input, pos, offset, line, ('[', ']'), BoundaryKind::Array),
        _ => scan_literal(input, pos, offset, line),
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////
// Object/array scanning

/* Scans forward from an opening bracket, balancing only the scanner's own
 * bracket kind and ignoring brackets inside string literals. Returns the
 * inner content with the delimiters stripped. */
fn scan_bracket<'a>(
    input: &'a [char],
    pos: usize,
    offset: usize,
    line: usize,
    (open, close): (char, char),
    kind: BoundaryKind,
) -> ScanResult<'a> {
    let mut depth = 0usize;
    let mut newlines = 0;
    let mut in_string = false;
    let mut escaped = false;
    // Where the currently open string began, for unterminated-string reports.
    let mut string_start = (offset, line);

    for i in pos..input.len() {
        let ch = input[i];
        if ch == '\n' {
            newlines += 1;
        }

        if escaped {
            escaped = false;
        } else {
            match ch {
                '"' => {
                    in_string = !in_string;
                    if in_string {
                        string_start = (offset + (i - pos), line + newlines);
                    }
                }
                '\\' if in_string => escaped = true,
                c if c == open && !in_string => depth += 1,
                c if c == close && !in_string => depth -= 1,
                _ => {}
            }
        }

        if depth == 0 {
            return Ok(Boundary {
                kind,
                content: &input[pos + 1..i],
                line,
                newlines,
                offset: offset + 1,
            });
        }
    }

    // Exhausted before the bracket closed. If a string was still open, the
    // string is the failure, not the bracket.
    if in_string {
        let (offset, line) = string_start;
        Err(SyntaxError::new(ErrorKind::UnterminatedString, offset, line))
    } else {
        Err(SyntaxError::new(ErrorKind::UnterminatedBracket(close), offset, line))
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////
// String and literal scanning

/// Scans a quote-delimited span. The returned content keeps both quotes.
/// A raw newline inside the string is rejected; escaped code points are
/// skipped without interpretation.
pub fn scan_string<'a>(input: &'a [char], pos: usize, offset: usize, line: usize) -> ScanResult<'a> {
    match input.get(pos) {
        None => return Err(SyntaxError::new(ErrorKind::UnexpectedEndOfObject, offset, line)),
        Some(&ch) if ch != '"' => {
            return Err(SyntaxError::new(ErrorKind::ExpectedKey(ch), offset, line))
        }
        _ => {}
    }

    let mut escaped = false;
    for i in pos + 1..input.len() {
        let ch = input[i];
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '"' => {
                return Ok(Boundary {
                    kind: BoundaryKind::Literal,
                    content: &input[pos..=i],
                    line,
                    newlines: 0,
                    offset,
                })
            }
            '\n' => {
                let offset = offset + (i - pos);
                return Err(SyntaxError::new(ErrorKind::UnexpectedNewlineInString, offset, line));
            }
            '\\' => escaped = true,
            _ => {}
        }
    }

    Err(SyntaxError::new(ErrorKind::UnterminatedString, offset, line))
}

/// Scans a scalar span: up to (excluding) the next delimiter code point,
/// or to end of input, which terminates a literal on its own.
pub fn scan_literal<'a>(input: &'a [char], pos: usize, offset: usize, line: usize) -> ScanResult<'a> {
    if pos >= input.len() {
        return Err(SyntaxError::new(ErrorKind::UnexpectedEndOfValue, offset, line));
    }
    if input[pos] == '"' {
        return scan_string(input, pos, offset, line);
    }

    let mut end = input.len();
    for i in pos + 1..input.len() {
        if is_delimiter(input[i]) {
            end = i;
            break;
        }
    }

    Ok(Boundary {
        kind: BoundaryKind::Literal,
        content: &input[pos..end],
        line,
        newlines: 0,
        offset,
    })
}

fn is_delimiter(ch: char) -> bool {
    matches!(ch, ',' | '}' | ']' | '\n' | ' ')
}
