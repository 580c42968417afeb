use crate::patp::Patp;
use crate::rank::Rank;

/// The identifier encoding as seen by the page: validation, classification
/// and structural parent lookup. Pages depend on this trait rather than on
/// the `@p` codec directly.
pub trait IdentifierResolver: Send + Sync {
    /// Parse `s`, returning `None` unless it is a well-formed identifier.
    fn parse(&self, s: &str) -> Option<Patp>;

    fn is_valid(&self, s: &str) -> bool {
        self.parse(s).is_some()
    }

    fn tier(&self, id: &Patp) -> Rank;

    /// Structural parent one tier up. Top-tier identifiers are their own
    /// parent.
    fn parent_of(&self, id: &Patp) -> Patp;

    fn is_top_tier(&self, id: &Patp) -> bool {
        self.tier(id) == Rank::Galaxy
    }
}

/// Resolver backed by the `@p` codec in this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrbitOb;

impl IdentifierResolver for UrbitOb {
    fn parse(&self, s: &str) -> Option<Patp> {
        s.parse().ok()
    }

    fn tier(&self, id: &Patp) -> Rank {
        id.rank()
    }

    fn parent_of(&self, id: &Patp) -> Patp {
        id.sponsor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urbit_ob_classifies() {
        let ob = UrbitOb;
        let zod = ob.parse("~zod").unwrap();
        let star = ob.parse("~marzod").unwrap();
        let planet = ob.parse("~hastuc-dibtux").unwrap();

        assert!(ob.is_top_tier(&zod));
        assert!(!ob.is_top_tier(&star));
        assert_eq!(ob.tier(&star), Rank::Star);
        assert_eq!(ob.tier(&planet), Rank::Planet);
        assert_eq!(ob.parent_of(&star), zod);
        assert_eq!(ob.parent_of(&planet).as_str(), "~marbus");
    }

    #[test]
    fn test_urbit_ob_rejects_garbage() {
        let ob = UrbitOb;
        assert!(!ob.is_valid("hello"));
        assert!(!ob.is_valid("~zod-"));
        assert!(ob.is_valid("~fipfes"));
    }
}
