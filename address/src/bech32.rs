//! Bech32-style text codec used by CodeChain addresses.
//!
//! Text form: `prefix` + data characters + 6 checksum characters. Unlike
//! BIP-173 there is no `1` separator in the text; the separator only
//! contributes a zero step to the checksum. The checksum itself is the
//! standard bech32 one.

use ::bech32::primitives::checksum::{Checksum, Engine};
use ::bech32::primitives::iter::{ByteIterExt, Fe32IterExt};
use ::bech32::{Bech32, Fe32, Hrp};

/// Length bound used when the caller has no better one.
pub const DEFAULT_LENGTH_LIMIT: usize = 90;

/// Number of checksum characters at the end of the text.
pub const CHECKSUM_LEN: usize = Bech32::CHECKSUM_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Bech32Error {
    #[error("{length} characters is too short")]
    TooShort { length: usize },

    #[error("{length} characters exceeds length limit {limit}")]
    ExceedsLengthLimit { length: usize, limit: usize },

    #[error("invalid prefix character {0:?}")]
    InvalidPrefix(char),

    #[error("invalid prefix: {0}")]
    InvalidHrp(String),

    #[error("mixed-case string")]
    MixedCase,

    #[error("expected prefix {expected:?} but found {actual:?}")]
    PrefixMismatch { expected: String, actual: String },

    #[error("data part is too short")]
    DataTooShort,

    #[error("unknown character {0:?}")]
    UnknownCharacter(char),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("word {0} does not fit in 5 bits")]
    InvalidWord(u8),

    #[error("excess or non-zero padding")]
    InvalidPadding,
}

impl Bech32Error {
    /// True when the text was well-formed but its checksum does not match,
    /// i.e. a corrupted address rather than something that is not an address.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, Bech32Error::InvalidChecksum)
    }
}

/// Output of [`decode`]: the prefix and the data words without checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub prefix: String,
    pub words: Vec<u8>,
}

fn field_element(word: u8) -> Result<Fe32, Bech32Error> {
    Fe32::try_from(word).map_err(|_| Bech32Error::InvalidWord(word))
}

/// Checksum engine primed with `prefix` (already lowercased).
fn prefix_engine(prefix: &str) -> Result<Engine<Bech32>, Bech32Error> {
    if let Some(c) = prefix.chars().find(|c| !('\u{21}'..='\u{7e}').contains(c)) {
        return Err(Bech32Error::InvalidPrefix(c));
    }
    let hrp = Hrp::parse(prefix).map_err(|e| Bech32Error::InvalidHrp(e.to_string()))?;
    let mut engine = Engine::new();
    engine.input_hrp(hrp);
    Ok(engine)
}

/// Encode `words` (5-bit values) under `prefix`.
pub fn encode(prefix: &str, words: &[u8], limit: usize) -> Result<String, Bech32Error> {
    let length = prefix.len() + 7 + words.len();
    if length > limit {
        return Err(Bech32Error::ExceedsLengthLimit { length, limit });
    }

    let prefix = prefix.to_lowercase();
    let mut engine = prefix_engine(&prefix)?;
    let mut result = String::with_capacity(prefix.len() + words.len() + CHECKSUM_LEN);
    result.push_str(&prefix);

    for &word in words {
        let fe = field_element(word)?;
        engine.input_fe(fe);
        result.push(fe.to_char());
    }
    for _ in 0..CHECKSUM_LEN {
        engine.input_fe(Fe32::Q);
    }
    let checksum = *engine.residue() ^ Bech32::TARGET_RESIDUE;
    for i in (0..CHECKSUM_LEN).rev() {
        let word = ((checksum >> (i * 5)) & 0x1f) as u8;
        result.push(field_element(word)?.to_char());
    }
    Ok(result)
}

/// Decode `text`, which must start with `expected_prefix` (either case).
pub fn decode(text: &str, expected_prefix: &str, limit: usize) -> Result<Decoded, Bech32Error> {
    let length = text.len();
    if length < 8 {
        return Err(Bech32Error::TooShort { length });
    }
    if length > limit {
        return Err(Bech32Error::ExceedsLengthLimit { length, limit });
    }

    let lowered = text.to_lowercase();
    if text != lowered && text != text.to_uppercase() {
        return Err(Bech32Error::MixedCase);
    }

    let prefix = expected_prefix.to_lowercase();
    let Some(data) = lowered.strip_prefix(prefix.as_str()) else {
        return Err(Bech32Error::PrefixMismatch {
            expected: prefix,
            actual: lowered.chars().take(expected_prefix.chars().count()).collect(),
        });
    };
    if data.len() < CHECKSUM_LEN {
        return Err(Bech32Error::DataTooShort);
    }

    let mut engine = prefix_engine(&prefix)?;
    let word_count = data.len() - CHECKSUM_LEN;
    let mut words = Vec::with_capacity(word_count);
    for (i, c) in data.chars().enumerate() {
        let fe = Fe32::from_char(c).map_err(|_| Bech32Error::UnknownCharacter(c))?;
        engine.input_fe(fe);
        if i < word_count {
            words.push(fe.to_u8());
        }
    }

    if *engine.residue() != Bech32::TARGET_RESIDUE {
        tracing::trace!(prefix = %prefix, "bech32 checksum mismatch");
        return Err(Bech32Error::InvalidChecksum);
    }
    Ok(Decoded { prefix, words })
}

/// Repack bytes into 5-bit words, MSB first, zero-padding the last word.
pub fn to_words(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().copied().bytes_to_fes().map(Fe32::to_u8).collect()
}

/// Repack 5-bit words into bytes. Leftover bits must be fewer than 5 and zero.
pub fn from_words(words: &[u8]) -> Result<Vec<u8>, Bech32Error> {
    let fes = words
        .iter()
        .map(|&word| field_element(word))
        .collect::<Result<Vec<_>, _>>()?;

    let spare = words.len() * 5 % 8;
    let spare_clear = words.last().map_or(true, |last| last & ((1 << spare) - 1) == 0);
    if spare >= 5 || !spare_clear {
        return Err(Bech32Error::InvalidPadding);
    }
    Ok(fes.into_iter().fes_to_bytes().collect())
}

/// True if every character of `data` is in the codec alphabet (lowercase).
pub(crate) fn is_alphabet(data: &str) -> bool {
    data.chars()
        .all(|c| !c.is_ascii_uppercase() && Fe32::from_char(c).is_ok())
}
