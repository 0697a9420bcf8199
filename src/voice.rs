//! Voice families and their SSML support.

use std::str::FromStr;

use strum_macros::{Display, EnumString, IntoStaticStr};

/// A tier of synthesis voice, as named by the cloud service.
///
/// The string form of each family is its exact service-side label, e.g.
/// `Chirp3-HD`. Parsing is exact-match: an unrecognized label is an error,
/// and [`is_ssml_supported`] treats it as a family without markup support.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum VoiceFamily {
    /// High-definition voices; accept plain text only.
    #[strum(serialize = "Chirp3-HD")]
    Chirp3Hd,
    /// Baseline parametric voices.
    Standard,
    /// WaveNet-generated voices.
    WaveNet,
    /// Second-generation neural voices.
    Neural2,
    /// Studio-quality narration voices.
    Studio,
    /// Multilingual voices; their SSML support is too limited to rely on.
    Polyglot,
}

/// Ordered inference rules mapping a substring of a full voice identifier to
/// its family. Evaluated top to bottom; the service spells WaveNet both ways
/// in voice names.
const FAMILY_RULES: &[(&str, VoiceFamily)] = &[
    ("Chirp3-HD", VoiceFamily::Chirp3Hd),
    ("Neural2", VoiceFamily::Neural2),
    ("Wavenet", VoiceFamily::WaveNet),
    ("WaveNet", VoiceFamily::WaveNet),
    ("Studio", VoiceFamily::Studio),
    ("Polyglot", VoiceFamily::Polyglot),
    ("Standard", VoiceFamily::Standard),
];

impl VoiceFamily {
    /// Returns `true` if this family accepts SSML input.
    pub fn supports_ssml(self) -> bool {
        match self {
            Self::Standard | Self::WaveNet | Self::Neural2 | Self::Studio => true,
            Self::Chirp3Hd | Self::Polyglot => false,
        }
    }

    /// Derives the family from a full voice identifier such as
    /// `en-US-Wavenet-A`, falling back to [`Standard`](Self::Standard) when
    /// no rule matches.
    pub fn from_voice_name(name: &str) -> Self {
        FAMILY_RULES
            .iter()
            .find(|&&(pattern, _)| name.contains(pattern))
            .map(|&(_, family)| family)
            .unwrap_or(Self::Standard)
    }
}

/// Returns `true` if the voice family labelled `family` accepts SSML input.
///
/// The lookup fails closed: a label absent from [`VoiceFamily`] yields
/// `false`, so markup editing is only ever enabled for families known to
/// support it.
pub fn is_ssml_supported(family: &str) -> bool {
    VoiceFamily::from_str(family)
        .map(VoiceFamily::supports_ssml)
        .unwrap_or(false)
}
