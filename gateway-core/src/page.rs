// Page assembly: merge local content, the directory record and the derived
// hierarchy into something a template can render.

use crate::config::SiteLinks;
use crate::content::{ContentStore, content_slug};
use crate::directory::DirectoryLookupService;
use crate::error::Result;
use crate::hierarchy::{accept, derive};
use crate::markdown::TextRenderer;
use crate::model::{ContentPage, FALLBACK_DESCRIPTION, NetworkRecord, PageMetadata};
use gateway_ob::{IdentifierResolver, Patp};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Identifier looked up in the directory when the request is not a valid
/// `@p`. The directory is still queried so the page costs the same either way.
pub const TOP_TIER_DEFAULT: &str = "~zod";

pub const STATUS_SPAWNED: &str = "Spawned/Owned";
pub const STATUS_UNSPAWNED: &str = "Unspawned";
pub const SHARE_DESCRIPTION: &str = "View more about this Urbit ID on urbit.org.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

impl Link {
    fn to_id(id: &Patp) -> Self {
        Self {
            name: id.to_string(),
            href: format!("/id/{}", id),
        }
    }
}

/// Everything the identifier page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdPage {
    pub title: String,
    pub tier: String,
    pub status: String,
    pub parent: Option<Link>,
    pub galaxy: Option<Link>,
    pub header_image: Option<String>,
    pub description: String,
    pub markdown: String,
    pub social_image: String,
    pub share_description: String,
    pub explorer_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingPage {
    pub identifier: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Found(Box<IdPage>),
    NotFound(MissingPage),
}

/// Builds page views from the identifier encoding and the three data
/// collaborators.
#[derive(Clone)]
pub struct PageAssembler {
    resolver: Arc<dyn IdentifierResolver>,
    content: Arc<dyn ContentStore>,
    directory: Arc<dyn DirectoryLookupService>,
    renderer: Arc<dyn TextRenderer>,
    links: SiteLinks,
}

impl PageAssembler {
    pub fn new(
        resolver: Arc<dyn IdentifierResolver>,
        content: Arc<dyn ContentStore>,
        directory: Arc<dyn DirectoryLookupService>,
        renderer: Arc<dyn TextRenderer>,
        links: SiteLinks,
    ) -> Self {
        Self {
            resolver,
            content,
            directory,
            renderer,
            links,
        }
    }

    /// Assemble the page for a raw path segment. Directory failures are
    /// returned to the caller; content problems only degrade the page.
    pub async fn assemble(&self, raw: &str) -> Result<PageView> {
        let parsed = self.resolver.parse(raw);
        let valid = parsed.is_some();
        let query = if valid { raw } else { TOP_TIER_DEFAULT };

        let start = Instant::now();
        let (content, record) =
            futures::join!(self.load_content(raw, valid), self.directory.lookup(query));
        let record = record?;
        debug!("Lookups for {} finished in {:?}", raw, start.elapsed());

        let Some(id) = accept(raw, parsed) else {
            debug!("{} is not a renderable identifier", raw);
            return Ok(PageView::NotFound(MissingPage {
                identifier: raw.to_string(),
                kind: "ID".to_string(),
            }));
        };

        Ok(PageView::Found(Box::new(self.build(&id, content, record.as_ref()))))
    }

    fn build(&self, id: &Patp, content: ContentPage, record: Option<&NetworkRecord>) -> IdPage {
        let hierarchy = derive(self.resolver.as_ref(), id, record);
        let ContentPage { metadata, body } = content;

        let description = metadata
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());
        let status = if record.is_some() {
            STATUS_SPAWNED
        } else {
            STATUS_UNSPAWNED
        };

        IdPage {
            title: id.to_string(),
            tier: hierarchy.rank.label().to_string(),
            status: status.to_string(),
            parent: hierarchy.parent.as_ref().map(Link::to_id),
            galaxy: hierarchy.galaxy.as_ref().map(Link::to_id),
            header_image: metadata.image.filter(|i| !i.is_empty()),
            description,
            markdown: self.renderer.render(&body, true),
            social_image: self.links.social_image(id.as_str()),
            share_description: SHARE_DESCRIPTION.to_string(),
            explorer_url: self.links.explorer(id.as_str()),
        }
    }

    /// Read the content page, substituting defaults on a miss or an error.
    async fn load_content(&self, raw: &str, valid: bool) -> ContentPage {
        let mut page = match self.content.get(content_slug(raw)).await {
            Ok(Some(page)) => page,
            Ok(None) => ContentPage::default(),
            Err(e) => {
                warn!("Ignoring unreadable content for {}: {}", raw, e);
                ContentPage::default()
            }
        };

        if page.metadata.ship.is_none() && valid {
            page.metadata = PageMetadata::fallback(raw);
        }
        page
    }
}
