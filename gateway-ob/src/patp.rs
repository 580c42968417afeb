use crate::error::{ObError, Result};
use crate::rank::{Rank, byte_width};
use crate::scramble::{fein, fynd};
use crate::syllables::{prefix, prefix_index, suffix, suffix_index};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SIGIL: char = '~';

/// Longest name that parses: a comet is eight words of two syllables,
/// one byte each, filling a `u128`.
const MAX_SYLLABLES: usize = 16;

/// A validated, canonical `@p` name together with the address it encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Patp {
    name: String,
    value: u128,
}

impl Patp {
    pub fn from_value(value: u128) -> Self {
        Self {
            name: encode(value),
            value,
        }
    }

    /// Parse a hex address such as `0x10000` or `10000`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches("0x");
        if digits.is_empty() {
            return Err(ObError::InvalidHex(hex.to_string()));
        }
        u128::from_str_radix(digits, 16)
            .map(Self::from_value)
            .map_err(|e| ObError::InvalidHex(format!("{}: {}", hex, e)))
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn to_hex(&self) -> String {
        format!("{:x}", self.value)
    }

    pub fn rank(&self) -> Rank {
        Rank::of(self.value)
    }

    /// Default sponsor derived from the address alone.
    pub fn sponsor(&self) -> Patp {
        Self::from_value(self.rank().sponsor_of(self.value))
    }

    /// The name with its leading `~` removed.
    pub fn without_sigil(&self) -> &str {
        self.name.strip_prefix(SIGIL).unwrap_or(&self.name)
    }
}

impl FromStr for Patp {
    type Err = ObError;

    fn from_str(s: &str) -> Result<Self> {
        let value = decode(s)?;
        let canonical = encode(value);
        if canonical != s {
            return Err(ObError::NonCanonical {
                given: s.to_string(),
                canonical,
            });
        }
        Ok(Self {
            name: canonical,
            value,
        })
    }
}

impl TryFrom<String> for Patp {
    type Error = ObError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Patp> for String {
    fn from(patp: Patp) -> Self {
        patp.name
    }
}

impl fmt::Display for Patp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Render an address as an `@p` name.
pub fn encode(value: u128) -> String {
    let scrambled = fein(value);
    if byte_width(scrambled) <= 1 {
        return format!("{}{}", SIGIL, suffix(scrambled as u8));
    }

    // 16-bit words, least significant first
    let mut words = Vec::new();
    let mut rest = scrambled;
    while rest != 0 {
        let word = (rest & 0xffff) as u16;
        words.push(format!("{}{}", prefix((word >> 8) as u8), suffix(word as u8)));
        rest >>= 16;
    }

    let mut name = String::with_capacity(words.len() * 7 + 1);
    name.push(SIGIL);
    for (index, word) in words.iter().enumerate().rev() {
        name.push_str(word);
        if index > 0 {
            name.push_str(if index % 4 == 0 { "--" } else { "-" });
        }
    }
    name
}

/// Decode a name back into its address without checking that it is the
/// canonical spelling; see [`Patp::from_str`] for the strict form.
pub fn decode(name: &str) -> Result<u128> {
    let Some(body) = name.strip_prefix(SIGIL) else {
        return Err(ObError::MissingSigil(name.to_string()));
    };
    if name.len() < 4 {
        return Err(ObError::SyllableCount(name.to_string()));
    }

    let letters: Vec<char> = body.chars().filter(|c| *c != '-').collect();
    let syllables: Vec<String> = letters.chunks(3).map(|chunk| chunk.iter().collect()).collect();

    let count = syllables.len();
    if (count % 2 != 0 && count != 1) || count > MAX_SYLLABLES {
        return Err(ObError::SyllableCount(name.to_string()));
    }

    let mut value: u128 = 0;
    for (index, syllable) in syllables.iter().enumerate() {
        let byte = if index % 2 != 0 || count == 1 {
            suffix_index(syllable)
        } else {
            prefix_index(syllable)
        };
        let byte = byte.ok_or_else(|| ObError::UnknownSyllable {
            name: name.to_string(),
            syllable: syllable.clone(),
        })?;
        value = (value << 8) | u128::from(byte);
    }

    Ok(fynd(value))
}

/// Whether `name` is a well-formed, canonical `@p`.
pub fn is_valid_patp(name: &str) -> bool {
    name.parse::<Patp>().is_ok()
}
