use serde::{Deserialize, Serialize};

/// Numeric decomposition of a dotted/underscored version string, used for
/// ordering and comparison only. Components compare lexicographically, so
/// `VersionNo` from "10.2" sorts below "10.10".
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionNo(pub Vec<u32>);

impl VersionNo {
    /// Decompose `s` into numeric components, left to right, stopping at the
    /// first component that is not a plain non-negative integer. Empty or
    /// wholly non-numeric input yields an empty component list; this never
    /// fails.
    pub fn parse(s: &str) -> Self {
        let mut components = Vec::new();
        for piece in s.split(['.', '_']) {
            match piece.parse::<u32>() {
                Ok(n) => components.push(n),
                Err(_) => break,
            }
        }
        VersionNo(components)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn major(&self) -> Option<u32> {
        self.0.first().copied()
    }

    pub fn minor(&self) -> Option<u32> {
        self.0.get(1).copied()
    }

    pub fn patch(&self) -> Option<u32> {
        self.0.get(2).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_triple() {
        assert_eq!(VersionNo::parse("14.2.1").components(), &[14, 2, 1]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(VersionNo::parse("").is_empty());
    }

    #[test]
    fn underscores_are_separators() {
        assert_eq!(VersionNo::parse("10_15_7").components(), &[10, 15, 7]);
    }

    #[test]
    fn stops_at_first_non_numeric_component() {
        assert_eq!(VersionNo::parse("91.0b.4").components(), &[91]);
        assert!(VersionNo::parse("15E148").is_empty());
        assert!(VersionNo::parse("x86_64").is_empty());
    }

    #[test]
    fn trailing_separator_is_harmless() {
        assert_eq!(VersionNo::parse("125.").components(), &[125]);
    }

    #[test]
    fn ordering_is_componentwise() {
        assert!(VersionNo::parse("10.2") < VersionNo::parse("10.10"));
        assert!(VersionNo::parse("9.9.9") < VersionNo::parse("10"));
        assert!(VersionNo::parse("10") < VersionNo::parse("10.0"));
    }

    #[test]
    fn four_components_survive() {
        assert_eq!(
            VersionNo::parse("91.0.4472.124").components(),
            &[91, 0, 4472, 124]
        );
    }
}
