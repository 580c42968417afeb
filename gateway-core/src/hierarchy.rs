//! Where an identifier sits in the sponsorship tree.
//!
//! The directory's view of sponsorship wins when it has one, since sponsors
//! can change after spawn ("escape"). Without a record the structural
//! parent from the encoding is used.

use crate::model::NetworkRecord;
use gateway_ob::{IdentifierResolver, Patp, Rank};

/// Longest identifier a page is rendered for; `~sampel-palnet` is the
/// longest planet name.
pub const MAX_IDENTIFIER_LEN: usize = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    pub rank: Rank,
    pub parent: Option<Patp>,
    pub galaxy: Option<Patp>,
}

/// Accept an already parsed `raw` as a page identifier, or `None` for the
/// not-found view.
pub fn accept(raw: &str, parsed: Option<Patp>) -> Option<Patp> {
    parsed.filter(|_| raw.len() <= MAX_IDENTIFIER_LEN)
}

/// Derive the displayed parent and galaxy for `id`.
pub fn derive(
    resolver: &dyn IdentifierResolver,
    id: &Patp,
    record: Option<&NetworkRecord>,
) -> Hierarchy {
    let rank = resolver.tier(id);
    if resolver.is_top_tier(id) {
        return Hierarchy {
            rank,
            parent: None,
            galaxy: None,
        };
    }

    let (parent, grand_sponsor) = match record {
        Some(NetworkRecord {
            sponsor: Some(sponsor),
            ..
        }) => (
            sponsor.urbit_id.clone(),
            sponsor.sponsor.as_ref().map(|s| s.urbit_id.clone()),
        ),
        _ => (resolver.parent_of(id), None),
    };

    let galaxy = match rank {
        Rank::Planet => Some(grand_sponsor.unwrap_or_else(|| resolver.parent_of(&parent))),
        _ => None,
    };

    Hierarchy {
        rank,
        parent: Some(parent),
        galaxy,
    }
}
