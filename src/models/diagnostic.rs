//! Non-fatal warnings collected during a merge pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a recoverable input problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A color string in none of the recognized encodings; white was used.
    MalformedColor,
    /// A seat identifier with a hyphen but not exactly two non-empty parts.
    RejectedIdentifier,
    /// Two layout seats declare the same (row, col).
    DuplicateCoordinate,
}

impl DiagnosticKind {
    /// Short label used in human-readable output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MalformedColor => "malformed color",
            Self::RejectedIdentifier => "rejected identifier",
            Self::DuplicateCoordinate => "duplicate coordinate",
        }
    }
}

/// A single warning with optional location context (seat key, identifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Warning category
    pub kind: DiagnosticKind,
    /// Human-readable description
    pub message: String,
    /// Where the problem was found, e.g. `layout seat 's12'`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic without location context.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Attaches location context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} ({context})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Ordered collection of diagnostics for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Number of collected diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Counts diagnostics of one kind.
    #[must_use]
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
