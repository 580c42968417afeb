use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";
pub const DEFAULT_CONTENT_DIR: &str = "content/id";
pub const DEFAULT_DIRECTORY_URL: &str = "https://mt2aga2c5l.execute-api.us-east-2.amazonaws.com";
pub const DEFAULT_IMAGE_HOST: &str = "https://urbit-id-og-cards-kappa.vercel.app";
pub const DEFAULT_EXPLORER_URL: &str = "https://network.urbit.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for the gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub listen: SocketAddr,
    pub content_dir: PathBuf,
    pub directory_url: Url,
    pub links: SiteLinks,
    pub timeout: Duration,
}

/// External hosts that rendered pages link to.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLinks {
    pub image_host: String,
    pub explorer_url: String,
}

impl SiteLinks {
    pub fn new(image_host: &str, explorer_url: &str) -> Self {
        Self {
            image_host: image_host.trim_end_matches('/').to_string(),
            explorer_url: explorer_url.trim_end_matches('/').to_string(),
        }
    }

    /// Social preview card for an identifier. Only a leading `~` is dropped.
    pub fn social_image(&self, identifier: &str) -> String {
        let name = identifier.strip_prefix('~').unwrap_or(identifier);
        format!("{}/{}.png", self.image_host, name)
    }

    pub fn explorer(&self, identifier: &str) -> String {
        format!("{}/{}", self.explorer_url, identifier)
    }
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HOST, DEFAULT_EXPLORER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_image_strips_sigil() {
        let links = SiteLinks::new("https://cards.example/", "https://explorer.example");
        assert_eq!(
            links.social_image("~sampel-palnet"),
            "https://cards.example/sampel-palnet.png"
        );
        assert_eq!(links.social_image("zod"), "https://cards.example/zod.png");
    }

    #[test]
    fn test_explorer_link() {
        let links = SiteLinks::default();
        assert_eq!(links.explorer("~zod"), "https://network.urbit.org/~zod");
    }
}
