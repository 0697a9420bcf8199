//! Structural validation of SSML documents.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use xml::reader::EventReader;

use crate::catalog::TagCatalog;

/// Matches an opening, closing or self-closing tag token and captures the
/// bare tag name, e.g. `emphasis` in `<emphasis level="strong">`.
static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(\w+)(?:\s[^>]*)?/?>").unwrap());

/// The reason a document was rejected.
///
/// The `Display` form of each variant is the exact message a front-end is
/// expected to surface to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The trimmed input was empty.
    #[error("SSML text cannot be empty")]
    EmptyInput,
    /// The input does not start with the root `<speak` open tag.
    #[error("SSML must be wrapped in <speak> tags")]
    MissingRootOpen,
    /// The input does not end with the root `</speak>` close tag.
    #[error("SSML must end with </speak> tag")]
    MissingRootClose,
    /// The input is not well-formed XML; carries the parser's message.
    #[error("Invalid XML structure: {0}")]
    MalformedStructure(String),
    /// The input uses tags outside the catalog; carries the sorted,
    /// de-duplicated offender names.
    #[error("Unsupported SSML tags: {}", .0.join(", "))]
    UnsupportedTags(Vec<String>),
}

/// The outcome of validating a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The document is admissible SSML.
    Valid,
    /// The document was rejected for the carried reason.
    Invalid(ValidationError),
}

impl Validity {
    /// Returns `true` if the document passed every check.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the rejection reason, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err),
        }
    }

    /// Returns the human-readable message for this outcome, suitable for
    /// rendering verbatim as live feedback.
    pub fn message(&self) -> String {
        match self {
            Self::Valid => "Valid SSML".to_owned(),
            Self::Invalid(err) => err.to_string(),
        }
    }
}

/// Checks text buffers against the structural rules of SSML.
///
/// A document is admissible iff it is non-empty, wrapped in a root `speak`
/// element, well-formed XML, and uses only tags present in the validator's
/// [`TagCatalog`]. The checks run in that order and the first failure wins;
/// a document missing its root tag is never reported as malformed XML.
///
/// Verdicts are memoized by exact input string. The memo is guarded by a
/// lock, so a shared validator may be consulted from any thread. It grows
/// with the number of distinct inputs and is never evicted, which is
/// acceptable for user-typed editor content; call
/// [`clear_cache`](Validator::clear_cache) if growth becomes a concern.
pub struct Validator {
    tags: TagCatalog,
    cache: Mutex<HashMap<String, Validity>>,
}

impl Validator {
    /// Constructs a validator over the [standard](TagCatalog::standard) tag
    /// catalog.
    pub fn new() -> Self {
        Self::with_catalog(TagCatalog::default())
    }

    /// Constructs a validator over a substitute tag catalog.
    pub fn with_catalog(tags: TagCatalog) -> Self {
        Self {
            tags,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the catalog this validator checks tag names against.
    pub fn catalog(&self) -> &TagCatalog {
        &self.tags
    }

    /// Validates `text` as an SSML document, memoizing the verdict.
    ///
    /// Validation never fails in the `Result` sense; every outcome,
    /// including parser errors, is reported as a [`Validity`] value.
    pub fn validate(&self, text: &str) -> Validity {
        if let Some(hit) = self.cache.lock().unwrap().get(text) {
            return hit.clone();
        }

        let verdict = self.run_checks(text);
        self.cache.lock().unwrap().insert(text.to_owned(), verdict.clone());
        verdict
    }

    /// Empties the verdict memo. Subsequent calls to
    /// [`validate`](Validator::validate) recompute from scratch.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    fn run_checks(&self, text: &str) -> Validity {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Validity::Invalid(ValidationError::EmptyInput);
        }
        if !trimmed.starts_with("<speak") {
            return Validity::Invalid(ValidationError::MissingRootOpen);
        }
        if !trimmed.ends_with("</speak>") {
            return Validity::Invalid(ValidationError::MissingRootClose);
        }
        if let Err(parse_error) = well_formed(text) {
            return Validity::Invalid(ValidationError::MalformedStructure(parse_error));
        }
        let offenders = self.unsupported_tags(text);
        if !offenders.is_empty() {
            return Validity::Invalid(ValidationError::UnsupportedTags(offenders));
        }
        Validity::Valid
    }

    /// Scans for tag tokens and returns the names absent from the catalog,
    /// sorted and de-duplicated. The scan is independent of the structural
    /// parse, so a well-formed but unknown tag is still reported, once.
    fn unsupported_tags(&self, text: &str) -> Vec<String> {
        let mut names = BTreeSet::new();
        for captures in TAG_NAME.captures_iter(text) {
            names.insert(captures[1].to_owned());
        }
        names
            .into_iter()
            .filter(|name| !self.tags.contains(name))
            .collect()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the pull parser over the whole document, reporting the first
/// parser error as a string.
fn well_formed(text: &str) -> Result<(), String> {
    for event in EventReader::new(text.as_bytes()) {
        event.map_err(|err| err.to_string())?;
    }
    Ok(())
}
