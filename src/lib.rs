#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A small library for validating, inspecting and transforming SSML markup
//! before it is handed to a cloud speech synthesis service.
//!
//! # Features
//!
//! The goal of this crate is to answer the questions a speech front-end has
//! to answer locally, before any request reaches the network: is this text
//! admissible SSML? How many characters will the service actually bill for?
//! Does the selected voice accept markup at all? It does not aim to build
//! synthesis requests or play audio; those remain the caller's concern.
//!
//! ## Validation
//!
//! The [validate] module provides a [`Validator`] that checks a text buffer
//! against a fixed sequence of structural rules: the document must be
//! non-empty, wrapped in a root `<speak>` element, well-formed XML, and use
//! only tags listed in the active [`TagCatalog`]. The outcome is a
//! [`Validity`] value carrying a human-readable message suitable for live
//! feedback in an editor. Verdicts are memoized per input string, since a
//! front-end typically re-validates on every keystroke.
//!
//! ## Transformation
//!
//! The [transform] module converts between plain text and markup in both
//! directions: it can extract the spoken text from an SSML document, wrap
//! escaped plain text in a root element, pretty-print a document for
//! editing, and count characters either with or without markup overhead.
//! The extraction and formatting operations are deliberately best-effort
//! and never fail; deciding validity is the [`Validator`]'s job alone.
//!
//! ## Voices
//!
//! The [voice] module knows which voice families accept SSML input and can
//! derive a [`VoiceFamily`] from a full cloud voice identifier such as
//! `en-US-Wavenet-A`. Lookups fail closed: a family this crate has never
//! heard of is assumed not to support markup.
//!
//! ## Catalogs
//!
//! The [catalog] module holds the static tag and example catalogs that back
//! validation and the help affordances of a front-end. Both are immutable
//! once constructed; a [`Validator`] can be built over a substitute
//! [`TagCatalog`] for testing or for services with a different tag set.

pub mod catalog;
pub mod transform;
pub mod validate;
pub mod voice;

pub use catalog::{ExampleCatalog, TagCatalog};
pub use transform::{
    character_count, extract_plain_text, format_ssml, plain_to_ssml, within_spoken_quota,
    SPOKEN_CHAR_QUOTA,
};
pub use validate::{ValidationError, Validator, Validity};
pub use voice::{is_ssml_supported, VoiceFamily};
