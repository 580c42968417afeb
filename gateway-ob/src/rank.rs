use std::fmt;

/// Position of an address in the sponsorship hierarchy, determined purely by
/// how many bytes the address occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 1 byte
    Galaxy,
    /// 2 bytes
    Star,
    /// 3-4 bytes
    Planet,
    /// 5-8 bytes
    Moon,
    /// 9-16 bytes
    Comet,
}

impl Rank {
    pub fn of(value: u128) -> Self {
        match byte_width(value) {
            0 | 1 => Rank::Galaxy,
            2 => Rank::Star,
            3 | 4 => Rank::Planet,
            5..=8 => Rank::Moon,
            _ => Rank::Comet,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Galaxy => "galaxy",
            Rank::Star => "star",
            Rank::Planet => "planet",
            Rank::Moon => "moon",
            Rank::Comet => "comet",
        }
    }

    /// Capitalized name, as shown to people.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Galaxy => "Galaxy",
            Rank::Star => "Star",
            Rank::Planet => "Planet",
            Rank::Moon => "Moon",
            Rank::Comet => "Comet",
        }
    }

    /// Default sponsor address for `value`, which must have this rank.
    /// Galaxies sponsor themselves and every comet is sponsored by `~zod`.
    pub(crate) fn sponsor_of(&self, value: u128) -> u128 {
        match self {
            Rank::Galaxy => value,
            Rank::Star => value & 0xff,
            Rank::Planet => value & 0xffff,
            Rank::Moon => value & 0xffff_ffff,
            Rank::Comet => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of significant bytes in `value`; zero occupies no bytes.
pub(crate) fn byte_width(value: u128) -> u32 {
    (u128::BITS - value.leading_zeros()).div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(Rank::of(0), Rank::Galaxy);
        assert_eq!(Rank::of(0xff), Rank::Galaxy);
        assert_eq!(Rank::of(0x100), Rank::Star);
        assert_eq!(Rank::of(0xffff), Rank::Star);
        assert_eq!(Rank::of(0x1_0000), Rank::Planet);
        assert_eq!(Rank::of(0xffff_ffff), Rank::Planet);
        assert_eq!(Rank::of(0x1_0000_0000), Rank::Moon);
        assert_eq!(Rank::of(u64::MAX as u128), Rank::Moon);
        assert_eq!(Rank::of(u64::MAX as u128 + 1), Rank::Comet);
    }

    #[test]
    fn test_default_sponsors() {
        assert_eq!(Rank::Galaxy.sponsor_of(9), 9);
        assert_eq!(Rank::Star.sponsor_of(0x1234), 0x34);
        assert_eq!(Rank::Planet.sponsor_of(0x6000_ab12), 0xab12);
        assert_eq!(Rank::Moon.sponsor_of(0x7_6000_ab12), 0x6000_ab12);
        assert_eq!(Rank::Comet.sponsor_of(u128::MAX), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Rank::Galaxy.label(), "Galaxy");
        assert_eq!(Rank::Planet.to_string(), "planet");
    }
}
