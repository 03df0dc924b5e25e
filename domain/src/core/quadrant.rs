//! Quadrant value object and the urgent/important flag mapping
//!
//! The four quadrants follow the Eisenhower scheme:
//!
//! | Quadrant | Name                | urgent | important |
//! |----------|---------------------|--------|-----------|
//! | A        | Ship Now            | true   | true      |
//! | B        | Validate / Grow     | false  | true      |
//! | C        | Delegate / Automate | true   | false     |
//! | D        | Drop                | false  | false     |

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the four Eisenhower quadrants
///
/// Iteration order is always `A, B, C, D` (see [`Quadrant::ALL`]). The
/// classifier relies on this order to break score ties.
///
/// # Example
///
/// ```
/// use quadrant_domain::{Quadrant, QuadrantFlags};
///
/// let flags = Quadrant::B.flags();
/// assert!(!flags.urgent);
/// assert!(flags.important);
/// assert_eq!(Quadrant::from_flags(flags), Quadrant::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    /// Urgent and important
    A,
    /// Important, not urgent
    B,
    /// Urgent, not important
    C,
    /// Neither urgent nor important
    D,
}

impl Quadrant {
    /// All quadrants in fixed iteration order.
    pub const ALL: [Quadrant; 4] = [Quadrant::A, Quadrant::B, Quadrant::C, Quadrant::D];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Quadrant::A => 0,
            Quadrant::B => 1,
            Quadrant::C => 2,
            Quadrant::D => 3,
        }
    }

    /// Single-letter label
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::A => "A",
            Quadrant::B => "B",
            Quadrant::C => "C",
            Quadrant::D => "D",
        }
    }

    /// Board title for this quadrant
    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::A => "Ship Now",
            Quadrant::B => "Validate / Grow",
            Quadrant::C => "Delegate / Automate",
            Quadrant::D => "Drop",
        }
    }

    /// Derived `(urgent, important)` flags for this quadrant.
    pub fn flags(&self) -> QuadrantFlags {
        match self {
            Quadrant::A => QuadrantFlags::new(true, true),
            Quadrant::B => QuadrantFlags::new(false, true),
            Quadrant::C => QuadrantFlags::new(true, false),
            Quadrant::D => QuadrantFlags::new(false, false),
        }
    }

    /// Derive a quadrant from raw flags.
    ///
    /// Precedence is A, then B, then C, else D.
    pub fn from_flags(flags: QuadrantFlags) -> Self {
        if flags.urgent && flags.important {
            Quadrant::A
        } else if flags.important {
            Quadrant::B
        } else if flags.urgent {
            Quadrant::C
        } else {
            Quadrant::D
        }
    }

    /// Resolve the quadrant of a stored task.
    ///
    /// An explicitly stored quadrant always wins over the flags.
    pub fn resolve(stored: Option<Quadrant>, flags: QuadrantFlags) -> Self {
        stored.unwrap_or_else(|| Self::from_flags(flags))
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Quadrant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Quadrant::A),
            "b" => Ok(Quadrant::B),
            "c" => Ok(Quadrant::C),
            "d" => Ok(Quadrant::D),
            _ => Err(DomainError::InvalidQuadrant(s.to_string())),
        }
    }
}

/// Urgent/important flag pair persisted alongside a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QuadrantFlags {
    pub urgent: bool,
    pub important: bool,
}

impl QuadrantFlags {
    pub fn new(urgent: bool, important: bool) -> Self {
        Self { urgent, important }
    }
}

impl From<Quadrant> for QuadrantFlags {
    fn from(quadrant: Quadrant) -> Self {
        quadrant.flags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_table() {
        assert_eq!(Quadrant::A.flags(), QuadrantFlags::new(true, true));
        assert_eq!(Quadrant::B.flags(), QuadrantFlags::new(false, true));
        assert_eq!(Quadrant::C.flags(), QuadrantFlags::new(true, false));
        assert_eq!(Quadrant::D.flags(), QuadrantFlags::new(false, false));
    }

    #[test]
    fn test_flags_round_trip() {
        for quadrant in Quadrant::ALL {
            assert_eq!(Quadrant::from_flags(quadrant.flags()), quadrant);
        }
    }

    #[test]
    fn test_from_raw_flags_precedence() {
        assert_eq!(Quadrant::from_flags(QuadrantFlags::new(true, true)), Quadrant::A);
        assert_eq!(Quadrant::from_flags(QuadrantFlags::new(false, true)), Quadrant::B);
        assert_eq!(Quadrant::from_flags(QuadrantFlags::new(true, false)), Quadrant::C);
        assert_eq!(Quadrant::from_flags(QuadrantFlags::new(false, false)), Quadrant::D);
    }

    #[test]
    fn test_resolve_prefers_stored_quadrant() {
        // Flags say A, stored quadrant says D: stored wins
        let flags = QuadrantFlags::new(true, true);
        assert_eq!(Quadrant::resolve(Some(Quadrant::D), flags), Quadrant::D);
        assert_eq!(Quadrant::resolve(None, flags), Quadrant::A);
    }

    #[test]
    fn test_resolve_without_anything_is_d() {
        assert_eq!(Quadrant::resolve(None, QuadrantFlags::default()), Quadrant::D);
    }

    #[test]
    fn test_parse_quadrant() {
        assert_eq!("A".parse::<Quadrant>().ok(), Some(Quadrant::A));
        assert_eq!("b".parse::<Quadrant>().ok(), Some(Quadrant::B));
        assert_eq!(" c ".parse::<Quadrant>().ok(), Some(Quadrant::C));
        assert_eq!("D".parse::<Quadrant>().ok(), Some(Quadrant::D));
        assert!(matches!(
            "E".parse::<Quadrant>(),
            Err(DomainError::InvalidQuadrant(_))
        ));
    }

    #[test]
    fn test_all_order_matches_index() {
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.index(), i);
        }
    }

    #[test]
    fn test_serialize_as_letter() {
        let json = serde_json::to_string(&Quadrant::C).unwrap();
        assert_eq!(json, "\"C\"");
        let parsed: Quadrant = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(parsed, Quadrant::B);
    }
}
