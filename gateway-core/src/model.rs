use gateway_ob::Patp;
use serde::{Deserialize, Serialize};

/// Description used when an identifier has no content of its own.
pub const FALLBACK_DESCRIPTION: &str = "An Urbit ID.";

/// Directory record for a spawned identifier. The sponsor chain nests as far
/// as the directory cares to report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRecord {
    #[serde(rename = "urbit-id")]
    pub urbit_id: Patp,
    #[serde(default)]
    pub sponsor: Option<Box<NetworkRecord>>,
}

impl NetworkRecord {
    pub fn new(urbit_id: Patp) -> Self {
        Self {
            urbit_id,
            sponsor: None,
        }
    }

    pub fn with_sponsor(mut self, sponsor: NetworkRecord) -> Self {
        self.sponsor = Some(Box::new(sponsor));
        self
    }
}

/// Front matter of a content page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub ship: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PageMetadata {
    /// Metadata for a valid identifier with no content page.
    pub fn fallback(ship: &str) -> Self {
        Self {
            ship: Some(ship.to_string()),
            description: Some(FALLBACK_DESCRIPTION.to_string()),
            image: None,
        }
    }
}

/// A content page as stored: metadata plus raw markdown body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentPage {
    pub metadata: PageMetadata,
    pub body: String,
}
