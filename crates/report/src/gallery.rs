//! Screenshot gallery sections

use std::path::Path;

use crate::anchor;
use crate::event::Outcome;

/// Label shown on placeholder tiles
pub const MISSING_LABEL: &str = "Not generated";

/// One cell of a gallery section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryTile {
    /// A screenshot that was actually produced
    Real { locator: String, label: String },

    /// Placeholder for an expected screenshot that never materialized
    Missing,
}

impl GalleryTile {
    pub fn real(locator: &str) -> Self {
        GalleryTile::Real {
            locator: locator.to_string(),
            label: basename(locator),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GalleryTile::Real { label, .. } => label,
            GalleryTile::Missing => MISSING_LABEL,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, GalleryTile::Missing)
    }
}

/// Screenshots of a single test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySection {
    pub anchor: String,
    pub title: String,
    pub outcome: Outcome,
    pub tiles: Vec<GalleryTile>,
    /// Whether a divider is shown above the section
    pub separator: bool,
}

impl GallerySection {
    pub fn real_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_missing()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_missing()).count()
    }
}

/// Builds gallery sections, remembering how many it has built this run
#[derive(Debug, Default)]
pub struct GalleryBuilder {
    built: usize,
}

impl GalleryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections built so far
    pub fn built(&self) -> usize {
        self.built
    }

    /// Build the section for one test.
    ///
    /// Real tiles keep the order of `screenshots`; when fewer screenshots
    /// arrived than `expected`, the shortfall is padded with missing tiles.
    /// An absent `expected` means no padding.
    pub fn build(
        &mut self,
        full_title: &str,
        title: &str,
        screenshots: &[String],
        expected: Option<usize>,
        outcome: Outcome,
    ) -> GallerySection {
        let missing = expected
            .unwrap_or(screenshots.len())
            .saturating_sub(screenshots.len());

        let tiles = screenshots
            .iter()
            .map(|locator| GalleryTile::real(locator))
            .chain(std::iter::repeat(GalleryTile::Missing).take(missing))
            .collect();

        let separator = self.built > 0;
        self.built += 1;

        GallerySection {
            anchor: anchor::encode(full_title),
            title: title.to_string(),
            outcome,
            tiles,
            separator,
        }
    }
}

/// Final path component of a locator, or the locator itself if it has none
fn basename(locator: &str) -> String {
    Path::new(locator)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| locator.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shots(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_pads_missing_after_real() {
        let mut builder = GalleryBuilder::new();
        let section = builder.build(
            "Cart totals",
            "totals",
            &shots(&["/shots/a.png", "/shots/b.png"]),
            Some(4),
            Outcome::Passed,
        );

        assert_eq!(section.tiles.len(), 4);
        assert_eq!(section.tiles[0].label(), "a.png");
        assert_eq!(section.tiles[1].label(), "b.png");
        assert!(section.tiles[2].is_missing());
        assert!(section.tiles[3].is_missing());
        assert_eq!(section.tiles[3].label(), MISSING_LABEL);
        assert_eq!(section.anchor, "Cart_totals");
    }

    #[test]
    fn test_no_padding_when_expected_absent_or_met() {
        let mut builder = GalleryBuilder::new();
        let absent = builder.build("x y", "y", &shots(&["a.png"]), None, Outcome::Passed);
        let met = builder.build("x z", "z", &shots(&["a.png"]), Some(1), Outcome::Passed);
        assert_eq!(absent.missing_count(), 0);
        assert_eq!(met.missing_count(), 0);
    }

    #[test]
    fn test_more_screenshots_than_expected() {
        let mut builder = GalleryBuilder::new();
        let section = builder.build("t", "t", &shots(&["a", "b", "c"]), Some(1), Outcome::Failed);
        assert_eq!(section.real_count(), 3);
        assert_eq!(section.missing_count(), 0);
    }

    #[test]
    fn test_separator_only_after_first() {
        let mut builder = GalleryBuilder::new();
        let first = builder.build("a", "a", &[], Some(1), Outcome::Failed);
        let second = builder.build("b", "b", &[], None, Outcome::Passed);
        let third = builder.build("c", "c", &[], None, Outcome::Failed);

        assert!(!first.separator);
        assert!(second.separator);
        assert!(third.separator);
        assert_eq!(builder.built(), 3);
    }

    #[test]
    fn test_real_tile_labels_from_urls() {
        let tile = GalleryTile::real("https://ci.example.com/run/42/home.png");
        assert_eq!(tile.label(), "home.png");
        assert_eq!(GalleryTile::real("plain.png").label(), "plain.png");
    }
}
