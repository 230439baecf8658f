/* Data models */

/// A decoded JSON value.
///
/// Objects preserve insertion order and hold at most one entry per key;
/// a duplicate key in the source overwrites the earlier entry in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Looks up `key` if this value is an object, `None` otherwise.
    pub fn key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Looks up `index` if this value is an array, `None` otherwise.
    pub fn index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Object,
    Array,
    Literal,
}

/// The raw span of a single value, located before its contents are
/// interpreted. For objects and arrays the span excludes the outer
/// delimiters; for literals (strings included) it is the full span.
///
/// A boundary borrows from the decoded document; it is produced by one
/// scanner call and consumed by exactly one parse step.
#[derive(Debug, Clone, Copy)]
pub struct Boundary<'a> {
    pub kind: BoundaryKind,
    pub content: &'a [char],
    /// 1-based line on which the span starts.
    pub line: usize,
    /// Newlines contained within the span.
    pub newlines: usize,
    /// Absolute offset of `content[0]` in the document.
    pub offset: usize,
}

impl Boundary<'_> {
    /// Number of code points the whole value occupies in the document,
    /// counting the delimiters stripped from object/array content.
    /// Advancing a cursor from the dispatch position by this amount
    /// lands exactly on the first unconsumed code point.
    pub fn total_len(&self) -> usize {
        match self.kind {
            BoundaryKind::Object | BoundaryKind::Array => self.content.len() + 2,
            BoundaryKind::Literal => self.content.len(),
        }
    }
}

/// A fully parsed document: the root value plus the decoded length.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
    length: usize,
}

impl Document {
    pub(crate) fn new(root: Value, length: usize) -> Self {
        Self { root, length }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Length of the source in code points, not bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
