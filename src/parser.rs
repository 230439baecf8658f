use crate::data::{Boundary, BoundaryKind, Document, Value};
use crate::errors::{ErrorKind, SyntaxError};
use crate::scanner::{self, skip_space};

type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole document: leading whitespace, exactly one value, and
/// trailing whitespace. Anything else after the top-level boundary fails
/// before the boundary's content is even interpreted.
pub fn parse_document(input: &[char]) -> ParseResult<Document> {
    let (leading, newlines) = skip_space(input, 0);
    let start = leading;
    let mut line = newlines + 1;

    let bound = scanner::scan_value(input, start, start, line)?;

    line += bound.newlines;
    let mut i = start + bound.total_len();
    while i < input.len() {
        match input[i] {
            '\n' => line += 1,
            ' ' => {}
            ch => return Err(SyntaxError::new(ErrorKind::UnexpectedTrailingInput(ch), i, line)),
        }
        i += 1;
    }

    let root = parse_boundary(&bound)?;
    Ok(Document::new(root, input.len()))
}

/// Turns a located boundary into a value, recursing into composites.
pub fn parse_boundary(bound: &Boundary) -> ParseResult<Value> {
    match bound.kind {
        BoundaryKind::Object => parse_object(bound),
        BoundaryKind::Array => parse_array(bound),
        BoundaryKind::Literal => parse_literal(bound),
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////
// Literals

fn parse_literal(bound: &Boundary) -> ParseResult<Value> {
    let content = bound.content;
    let text: String = content.iter().collect();

    match text.as_str() {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if is_quoted(content) {
        // Escape sequences are kept verbatim, not decoded.
        return Ok(Value::String(content[1..content.len() - 1].iter().collect()));
    }

    let fail = |text| SyntaxError::new(ErrorKind::InvalidLiteral(text), bound.offset, bound.line);

    if is_int(&text) {
        // All digits, but possibly too many for an i64.
        return match text.parse() {
            Ok(n) => Ok(Value::Int(n)),
            Err(_) => Err(fail(text)),
        };
    }
    if is_float(&text) {
        return match text.parse() {
            Ok(f) => Ok(Value::Float(f)),
            Err(_) => Err(fail(text)),
        };
    }

    Err(fail(text))
}

fn is_quoted(content: &[char]) -> bool {
    content.len() >= 2 && content[0] == '"' && content[content.len() - 1] == '"'
}

fn is_int(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}

fn is_float(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, frac)) => is_int(whole) && is_int(frac),
        None => false,
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////
// Composites

fn parse_array(bound: &Boundary) -> ParseResult<Value> {
    let content = bound.content;
    let mut items = Vec::new();
    let mut line = bound.line;

    let (spaces, newlines) = skip_space(content, 0);
    let mut i = spaces;
    line += newlines;

    while i < content.len() {
        if !items.is_empty() {
            if content[i] != ',' {
                let kind = ErrorKind::ExpectedComma(content[i]);
                return Err(SyntaxError::new(kind, bound.offset + i, line));
            }
            i += 1;

            let (spaces, newlines) = skip_space(content, i);
            i += spaces;
            line += newlines;

            if i >= content.len() {
                // Trailing comma: the caret lands on the closing bracket.
                let kind = ErrorKind::UnexpectedEndOfValue;
                return Err(SyntaxError::new(kind, bound.offset + i, line));
            }
        }

        let child = scanner::scan_value(content, i, bound.offset + i, line)?;

        let (spaces, newlines) = skip_space(content, i + child.total_len());
        i += child.total_len() + spaces;
        line += child.newlines + newlines;

        // Child arrays nest as a single element.
        items.push(parse_boundary(&child)?);
    }

    Ok(Value::Array(items))
}

fn parse_object(bound: &Boundary) -> ParseResult<Value> {
    let content = bound.content;
    let mut pairs: Vec<(String, Value)> = Vec::new();
    let mut line = bound.line;

    let (spaces, newlines) = skip_space(content, 0);
    let mut i = spaces;
    line += newlines;

    while i < content.len() {
        if !pairs.is_empty() {
            if content[i] != ',' {
                let kind = ErrorKind::ExpectedComma(content[i]);
                return Err(SyntaxError::new(kind, bound.offset + i, line));
            }
            i += 1;

            let (spaces, newlines) = skip_space(content, i);
            i += spaces;
            line += newlines;

            if i >= content.len() {
                let kind = ErrorKind::UnexpectedEndOfObject;
                return Err(SyntaxError::new(kind, bound.offset + i, line));
            }
        }

        let key_bound = scanner::scan_string(content, i, bound.offset + i, line)?;

        let (spaces, newlines) = skip_space(content, i + key_bound.total_len());
        i += key_bound.total_len() + spaces;
        line += newlines;

        if i >= content.len() {
            // Expected ':'. Offset sits just past the content, which is
            // exactly the closing brace in the full document.
            let kind = ErrorKind::UnexpectedEndOfObject;
            return Err(SyntaxError::new(kind, bound.offset + i, line));
        }
        if content[i] != ':' {
            let kind = ErrorKind::ExpectedColon(content[i]);
            return Err(SyntaxError::new(kind, bound.offset + i, line));
        }
        i += 1;

        let (spaces, newlines) = skip_space(content, i);
        i += spaces;
        line += newlines;

        if i >= content.len() {
            // Expected a value for the pending key.
            let kind = ErrorKind::UnexpectedEndOfObject;
            return Err(SyntaxError::new(kind, bound.offset + i, line));
        }

        let child = scanner::scan_value(content, i, bound.offset + i, line)?;

        let (spaces, newlines) = skip_space(content, i + child.total_len());
        i += child.total_len() + spaces;
        line += child.newlines + newlines;

        let key = match parse_boundary(&key_bound)? {
            Value::String(key) => key,
            _ => {
                let kind = ErrorKind::Internal("object key did not parse to a string");
                return Err(SyntaxError::new(kind, key_bound.offset, key_bound.line));
            }
        };
        let value = parse_boundary(&child)?;
        insert(&mut pairs, key, value);
    }

    Ok(Value::Object(pairs))
}

/* Last write wins: a duplicate key overwrites the earlier entry in place,
 * keeping its original position. */
fn insert(pairs: &mut Vec<(String, Value)>, key: String, value: Value) {
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key, value)),
    }
}
