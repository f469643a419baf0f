//! Color Sets
//!
//! The variant tags a product can be ordered in. Unlike a tag collection, the declared order is
//! significant: the first color is the one pre-selected on a product card, and facet options are
//! listed in first-seen order.

use std::{fmt, slice};

use smallvec::SmallVec;

/// An ordered, de-duplicated collection of color tags backed by `SmallVec<[String; 5]>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorSet {
    colors: SmallVec<[String; 5]>,
}

impl ColorSet {
    /// Create a new color set, keeping the first occurrence of any repeated color.
    #[must_use]
    pub fn new(colors: SmallVec<[String; 5]>) -> Self {
        let mut deduped: SmallVec<[String; 5]> = SmallVec::with_capacity(colors.len());

        for color in colors {
            if !deduped.contains(&color) {
                deduped.push(color);
            }
        }

        Self { colors: deduped }
    }

    /// Create a new color set from string slices.
    pub fn from_strs(colors: &[&str]) -> Self {
        Self::new(
            colors
                .iter()
                .map(ToString::to_string)
                .collect::<SmallVec<[String; 5]>>(),
        )
    }

    /// Check whether the set contains a color, compared exactly.
    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|candidate| candidate == color)
    }

    /// The first declared color, if any.
    pub fn first(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Iterate over colors in declared order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.colors.iter()
    }

    /// Number of colors in the set.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Convert the set to a vector of strings.
    #[must_use]
    pub fn to_strs(&self) -> SmallVec<[String; 5]> {
        self.colors.clone()
    }
}

impl<'a> IntoIterator for &'a ColorSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.colors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_strs_keeps_declared_order() {
        let colors = ColorSet::from_strs(&["white", "black", "navy"]);

        assert_eq!(colors.to_strs().as_slice(), ["white", "black", "navy"]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let colors = ColorSet::from_strs(&["navy", "white", "navy", "black", "white"]);

        assert_eq!(colors.len(), 3);
        assert_eq!(colors.to_strs().as_slice(), ["navy", "white", "black"]);
    }

    #[test]
    fn contains_is_exact() {
        let colors = ColorSet::from_strs(&["navy"]);

        assert!(colors.contains("navy"));
        assert!(!colors.contains("Navy"));
        assert!(!colors.contains("nav"));
    }

    #[test]
    fn first_returns_declared_default() {
        let colors = ColorSet::from_strs(&["black", "gray"]);

        assert_eq!(colors.first(), Some("black"));
        assert_eq!(ColorSet::default().first(), None);
    }

    #[test]
    fn display_joins_colors() {
        let colors = ColorSet::from_strs(&["white", "natural"]);

        assert_eq!(colors.to_string(), "white, natural");
    }
}
