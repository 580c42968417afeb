//! Core of the Urbit ID gateway: hierarchy derivation and the data sources
//! an identifier page is assembled from.

pub mod config;
pub mod content;
pub mod directory;
pub mod error;
pub mod hierarchy;
pub mod markdown;
pub mod model;
pub mod page;

pub use config::{GatewayConfig, SiteLinks};
pub use content::{ContentStore, FsContentStore};
pub use directory::{DirectoryLookupService, HttpDirectory};
pub use error::{GatewayError, Result};
pub use hierarchy::{Hierarchy, MAX_IDENTIFIER_LEN, accept, derive};
pub use markdown::{Markdown, TextRenderer};
pub use model::{ContentPage, NetworkRecord, PageMetadata};
pub use page::{IdPage, MissingPage, PageAssembler, PageView};
