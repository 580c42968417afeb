use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObError {
    #[error("Missing leading '~' in {0:?}")]
    MissingSigil(String),

    #[error("Unknown syllable {syllable:?} in {name:?}")]
    UnknownSyllable { name: String, syllable: String },

    #[error("Wrong number of syllables in {0:?}")]
    SyllableCount(String),

    #[error("Non-canonical name {given:?} (canonical form is {canonical:?})")]
    NonCanonical { given: String, canonical: String },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, ObError>;
