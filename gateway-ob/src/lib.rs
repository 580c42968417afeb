//! Urbit `@p` names: the phonemic base-256 encoding used for Urbit IDs.
//!
//! ```
//! use gateway_ob::{Patp, Rank};
//!
//! let planet: Patp = "~sampel-palnet".parse().unwrap();
//! assert_eq!(planet.rank(), Rank::Planet);
//! assert_eq!(planet.sponsor().as_str(), "~talpur");
//! ```

pub mod error;
pub mod patp;
pub mod rank;
pub mod resolver;
pub mod scramble;
pub mod syllables;

pub use error::ObError;
pub use patp::{Patp, SIGIL, decode, encode, is_valid_patp};
pub use rank::Rank;
pub use resolver::{IdentifierResolver, UrbitOb};
