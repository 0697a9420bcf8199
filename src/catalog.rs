//! Static catalogs of supported SSML tags and example snippets.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

static STANDARD_TAGS: Lazy<TagCatalog> = Lazy::new(|| {
    TagCatalog::from_entries([
        ("speak", "Root element for SSML document"),
        ("break", "Insert pauses in speech"),
        ("emphasis", "Add emphasis to words or phrases"),
        ("prosody", "Control rate, pitch, and volume"),
        ("say-as", "Control how text is interpreted"),
        ("sub", "Substitute pronunciation"),
        (
            "audio",
            "Insert recorded audio files together with synthesized speech output",
        ),
        ("desc", "Describe an audio source, spoken when the audio cannot play"),
        ("mark", "Insert markers for timing"),
        ("p", "Paragraph break"),
        ("s", "Sentence break"),
        ("voice", "Change voice characteristics"),
        ("par", "Play multiple media elements at once"),
        ("media", "A media layer inside a parallel or sequential container"),
        ("phoneme", "Produce custom pronunciations of words inline"),
        ("lang", "Include text in multiple languages"),
    ])
});

static STANDARD_EXAMPLES: Lazy<ExampleCatalog> = Lazy::new(|| {
    ExampleCatalog::from_entries([
        (
            "Basic Pause",
            r#"<speak>Hello <break time="1s"/> world!</speak>"#,
        ),
        (
            "Emphasis",
            r#"<speak>This is <emphasis level="strong">very important</emphasis>!</speak>"#,
        ),
        (
            "Speed Control",
            r#"<speak><prosody rate="slow">Speak slowly</prosody> <prosody rate="fast">or speak fast</prosody></speak>"#,
        ),
        (
            "Pitch Control",
            r#"<speak><prosody pitch="high">High pitch</prosody> <prosody pitch="low">low pitch</prosody></speak>"#,
        ),
        (
            "Volume Control",
            r#"<speak><prosody volume="loud">Loud voice</prosody> <prosody volume="soft">soft voice</prosody></speak>"#,
        ),
        (
            "Spell Out",
            r#"<speak>My phone number is <say-as interpret-as="telephone">123-456-7890</say-as></speak>"#,
        ),
        (
            "Date",
            r#"<speak>Today is <say-as interpret-as="date" format="mdy">12/25/2023</say-as></speak>"#,
        ),
        (
            "Substitution",
            r#"<speak>The <sub alias="World Wide Web">WWW</sub> is amazing!</speak>"#,
        ),
        (
            "Audio",
            r#"<speak><audio src="cat_purr_close.ogg"><desc>a cat purring</desc>PURR (sound didn't load)</audio></speak>"#,
        ),
    ])
});

/// The set of SSML tags a synthesis service accepts, with a human-readable
/// description for each.
///
/// A catalog is immutable once constructed. The [standard](TagCatalog::standard)
/// catalog covers the tags the Google Cloud Text-to-Speech service documents;
/// a [`Validator`](crate::Validator) can be built over any other catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCatalog {
    entries: BTreeMap<String, String>,
}

impl TagCatalog {
    /// Constructs a catalog from (tag name, description) pairs.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Returns the catalog of tags the standard cloud synthesis service
    /// accepts. The catalog is built once and shared.
    pub fn standard() -> &'static Self {
        &STANDARD_TAGS
    }

    /// Returns `true` if `name` is a known tag.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the description of a tag, if it is known.
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Iterates over (tag name, description) pairs in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an owned copy of the catalog contents. Mutating the copy does
    /// not affect the catalog.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Named SSML snippets suitable for an "insert example" affordance or inline
/// help in a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCatalog {
    entries: BTreeMap<String, String>,
}

impl ExampleCatalog {
    /// Constructs a catalog from (example name, snippet) pairs.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Returns the built-in example snippets. The catalog is built once and
    /// shared.
    pub fn standard() -> &'static Self {
        &STANDARD_EXAMPLES
    }

    /// Returns the snippet registered under `name`, if any.
    pub fn snippet(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Iterates over (example name, snippet) pairs in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an owned copy of the catalog contents. Mutating the copy does
    /// not affect the catalog.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }
}

impl Default for ExampleCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}
