//! Best-effort transformations between plain text and SSML markup.
//!
//! Unlike [`Validator::validate`](crate::Validator::validate), nothing in
//! this module ever reports failure. A document that does not parse is
//! handled with a degraded but useful fallback, so that editing affordances
//! built on these functions stay responsive on half-typed markup.

use once_cell::sync::Lazy;
use regex::Regex;
use xml::reader::{EventReader, ParserConfig, XmlEvent};
use xml::{EmitterConfig, EventWriter};

/// The number of spoken characters the synthesis service accepts per
/// request.
pub const SPOKEN_CHAR_QUOTA: usize = 5000;

/// Matches any angle-bracketed tag token, for the parse-failure fallback of
/// [`extract_plain_text`].
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Extracts the spoken text of an SSML document: every text run, in
/// document order, with all tags stripped and the result trimmed.
///
/// If the document does not parse, falls back to stripping every
/// angle-bracketed token from the raw input. This function never fails and
/// must not be used to decide validity.
pub fn extract_plain_text(ssml: &str) -> String {
    match spoken_text(ssml) {
        Ok(text) => text.trim().to_owned(),
        Err(_) => ANY_TAG.replace_all(ssml, "").trim().to_owned(),
    }
}

/// Wraps plain text in a root `speak` element, escaping the five XML
/// metacharacters so the content survives as character data.
///
/// Blank input produces an empty document, `<speak></speak>`. The input is
/// treated as opaque text: anything that already looks like a tag is
/// escaped along with everything else.
pub fn plain_to_ssml(plain: &str) -> String {
    if plain.trim().is_empty() {
        return "<speak></speak>".to_owned();
    }
    format!("<speak>{}</speak>", escape_xml(plain))
}

/// Re-serializes an SSML document with two-space indentation, one element
/// per line, and no XML prolog. Returns the input unchanged if it does not
/// parse.
pub fn format_ssml(ssml: &str) -> String {
    reindent(ssml).unwrap_or_else(|| ssml.to_owned())
}

/// Counts the characters of `text`, either raw (`count_markup` true, every
/// character including tag syntax) or spoken only (`count_markup` false,
/// the length of [`extract_plain_text`]).
///
/// The service's per-request quota and pricing are measured against the
/// spoken count, not the raw one.
pub fn character_count(text: &str, count_markup: bool) -> usize {
    if count_markup {
        text.chars().count()
    } else {
        extract_plain_text(text).chars().count()
    }
}

/// Returns `true` if the spoken-character count of `text` fits within
/// [`SPOKEN_CHAR_QUOTA`].
pub fn within_spoken_quota(text: &str) -> bool {
    character_count(text, false) <= SPOKEN_CHAR_QUOTA
}

/// Concatenates every character-data run in document order. CDATA sections
/// and whitespace-only runs count as spoken text; tags do not.
fn spoken_text(ssml: &str) -> Result<String, xml::reader::Error> {
    let config = ParserConfig::new()
        .cdata_to_characters(true)
        .whitespace_to_characters(true);
    let mut text = String::new();
    for event in EventReader::new_with_config(ssml.as_bytes(), config) {
        if let XmlEvent::Characters(run) = event? {
            text.push_str(&run);
        }
    }
    Ok(text)
}

fn reindent(ssml: &str) -> Option<String> {
    let mut writer = EventWriter::new_with_config(
        Vec::new(),
        EmitterConfig::new()
            .perform_indent(true)
            .write_document_declaration(false),
    );
    for event in EventReader::new(ssml.as_bytes()) {
        let event = event.ok()?;
        match &event {
            // The writer owns the document frame and all inter-element
            // whitespace; the prolog is suppressed by the config above.
            XmlEvent::StartDocument { .. } | XmlEvent::EndDocument | XmlEvent::Whitespace(_) => {}
            _ => {
                if let Some(writable) = event.as_writer_event() {
                    writer.write(writable).ok()?;
                }
            }
        }
    }
    String::from_utf8(writer.into_inner()).ok()
}

/// Escapes `&`, `<`, `>`, `"` and `'`. The ampersand goes first so the
/// entities introduced by the other substitutions are not escaped twice.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
