// Local content pages: markdown files with TOML front matter

use crate::error::Result;
use crate::model::{ContentPage, PageMetadata};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

const FRONT_MATTER_DELIMITER: &str = "+++";
const CONTENT_EXTENSION: &str = "md";

/// Source of hand-written content for identifier pages.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Look up the page for `slug`. A missing page is `Ok(None)`.
    async fn get(&self, slug: &str) -> Result<Option<ContentPage>>;
}

/// Content pages stored as `<root>/<slug>.md`.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn get(&self, slug: &str) -> Result<Option<ContentPage>> {
        if !is_safe_slug(slug) {
            debug!("Rejecting content slug {:?}", slug);
            return Ok(None);
        }

        let path = self.root.join(format!("{}.{}", slug, CONTENT_EXTENSION));
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No content page at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let (metadata, body) = split_front_matter(&raw)?;
        Ok(Some(ContentPage { metadata, body }))
    }
}

/// Slug under which an identifier's content lives: the identifier with its
/// first character (normally the `~`) removed.
pub fn content_slug(identifier: &str) -> &str {
    let mut chars = identifier.chars();
    chars.next();
    chars.as_str()
}

/// Slugs must name a single file directly under the content root.
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.contains(['/', '\\', '\0'])
        && !slug.contains("..")
}

/// Split a `+++`-delimited TOML header from the markdown body. Files without
/// a header, or whose header is never closed, are all body.
pub fn split_front_matter(raw: &str) -> Result<(PageMetadata, String)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split_inclusive('\n');

    let mut offset = match lines.next() {
        Some(first) if first.trim_end() == FRONT_MATTER_DELIMITER => first.len(),
        _ => return Ok((PageMetadata::default(), raw.to_string())),
    };
    let header_start = offset;

    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            let metadata: PageMetadata = toml::from_str(&raw[header_start..offset])?;
            let body = raw[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Ok((metadata, body.to_string()));
        }
        offset += line.len();
    }

    Ok((PageMetadata::default(), raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_slug_drops_first_char() {
        assert_eq!(content_slug("~zod"), "zod");
        assert_eq!(content_slug("~sampel-palnet"), "sampel-palnet");
        assert_eq!(content_slug("zod"), "od");
        assert_eq!(content_slug(""), "");
    }

    #[test]
    fn test_unsafe_slugs() {
        assert!(is_safe_slug("sampel-palnet"));
        assert!(!is_safe_slug(""));
        assert!(!is_safe_slug("../etc/passwd"));
        assert!(!is_safe_slug("a/b"));
        assert!(!is_safe_slug(".."));
    }

    #[test]
    fn test_split_front_matter() {
        let raw = "+++\nship = \"~zod\"\ndescription = \"The first galaxy.\"\n+++\n\n# Hello\n";
        let (metadata, body) = split_front_matter(raw).unwrap();
        assert_eq!(metadata.ship.as_deref(), Some("~zod"));
        assert_eq!(metadata.description.as_deref(), Some("The first galaxy."));
        assert_eq!(metadata.image, None);
        assert_eq!(body, "# Hello\n");
    }

    #[test]
    fn test_split_front_matter_crlf() {
        let raw = "+++\r\nimage = \"https://example.com/a.png\"\r\n+++\r\nbody";
        let (metadata, body) = split_front_matter(raw).unwrap();
        assert_eq!(metadata.image.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_no_front_matter_is_all_body() {
        let (metadata, body) = split_front_matter("just text").unwrap();
        assert_eq!(metadata, PageMetadata::default());
        assert_eq!(body, "just text");
    }

    #[test]
    fn test_unterminated_front_matter_is_all_body() {
        let raw = "+++\nship = \"~zod\"\n";
        let (metadata, body) = split_front_matter(raw).unwrap();
        assert_eq!(metadata, PageMetadata::default());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(split_front_matter("+++\nship = \n+++\n").is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = "+++\ntitle = \"x\"\n[extra]\nfoo = 1\n+++\n";
        let (metadata, body) = split_front_matter(raw).unwrap();
        assert_eq!(metadata, PageMetadata::default());
        assert_eq!(body, "");
    }
}
