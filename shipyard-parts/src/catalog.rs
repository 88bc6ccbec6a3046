//! Part catalog: loading, shuffling and per-category selection
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::PartSource;
use crate::category::Category;
use crate::error::CatalogError;
use crate::rng::streams_from_user_seed;

/// Placeholder returned when a single-valued category has no parts.
pub const NOT_AVAILABLE: &str = "N/A";

/// Upper bound (inclusive) of the weapon count draw.
pub const MAX_WEAPONS: usize = 4;

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub origin: PathBuf,
    /// Lines read from the source, matched or not
    pub lines_read: usize,
    /// Lines that matched no keyword
    pub dropped: usize,
    /// Accepted lines per category, indexed by [`Category::index`]
    pub counts: [usize; Category::COUNT],
}

impl LoadSummary {
    fn new(origin: &Path) -> Self {
        Self {
            origin: origin.to_path_buf(),
            lines_read: 0,
            dropped: 0,
            counts: [0; Category::COUNT],
        }
    }

    #[must_use]
    pub const fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    #[must_use]
    pub fn accepted(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Categorized part lines plus the random streams used to pick from them.
///
/// Shuffling uses one stream; wing and weapon draws use another, so the
/// two never correlate. Selection goes through [`PartSource`] and only
/// needs a shared reference.
#[derive(Debug)]
pub struct PartCatalog<R = SmallRng> {
    parts: [Vec<String>; Category::COUNT],
    shuffle_rng: R,
    draw_rng: RefCell<R>,
}

impl PartCatalog<SmallRng> {
    /// Catalog whose streams are derived from a user seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let (shuffle_rng, draw_rng) = streams_from_user_seed(seed);
        Self::with_rngs(shuffle_rng, draw_rng)
    }

    /// Catalog seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rngs(SmallRng::from_entropy(), SmallRng::from_entropy())
    }
}

impl<R: RngCore> PartCatalog<R> {
    /// Create an empty catalog with explicit shuffle and draw streams.
    #[must_use]
    pub fn with_rngs(shuffle_rng: R, draw_rng: R) -> Self {
        Self {
            parts: Default::default(),
            shuffle_rng,
            draw_rng: RefCell::new(draw_rng),
        }
    }

    /// Load part lines from a file.
    ///
    /// Lines are appended to the categories they match. The file is closed
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FileNotFound`] if the file cannot be opened,
    /// leaving the catalog unchanged, or [`CatalogError::Read`] if reading
    /// fails part way.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, CatalogError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                log::warn!("cannot open parts file {}: {source}", path.display());
                return Err(CatalogError::FileNotFound {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        self.load_from_reader(BufReader::new(file), path)
    }

    /// Categorize every line of `reader`; `origin` names the source in
    /// summaries and errors.
    ///
    /// Lines split on `\n` only and are otherwise kept verbatim. Invalid
    /// UTF-8 is replaced rather than rejected. Nothing is committed if a
    /// read fails.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] when the reader fails.
    pub fn load_from_reader(
        &mut self,
        reader: impl BufRead,
        origin: impl AsRef<Path>,
    ) -> Result<LoadSummary, CatalogError> {
        let origin = origin.as_ref();
        let mut summary = LoadSummary::new(origin);
        let mut staged: [Vec<String>; Category::COUNT] = Default::default();

        for (try_line, line_id) in reader.split(b'\n').zip(1..) {
            let bytes = try_line.map_err(|source| {
                log::warn!(
                    "failed reading {} at line {line_id}: {source}",
                    origin.display()
                );
                CatalogError::Read {
                    path: origin.to_path_buf(),
                    line: line_id,
                    source,
                }
            })?;
            summary.lines_read += 1;
            let line = String::from_utf8_lossy(&bytes).into_owned();
            match Category::classify(&line) {
                Some(category) => {
                    summary.counts[category.index()] += 1;
                    staged[category.index()].push(line);
                }
                None => summary.dropped += 1,
            }
        }

        for (bucket, incoming) in self.parts.iter_mut().zip(staged) {
            bucket.extend(incoming);
        }

        log::info!("parts loaded from: {}", origin.display());
        for category in Category::ALL {
            log::debug!(
                "{category}: {} accepted, {} total",
                summary.count(category),
                self.len(category)
            );
        }
        log::debug!("{} lines matched no category", summary.dropped);
        Ok(summary)
    }

    /// Reorder every category independently.
    pub fn shuffle(&mut self) {
        for bucket in &mut self.parts {
            bucket.shuffle(&mut self.shuffle_rng);
        }
        log::debug!("catalog shuffled");
    }

    /// Parts of one category in current order.
    #[must_use]
    pub fn parts(&self, category: Category) -> &[String] {
        &self.parts[category.index()]
    }

    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.parts[category.index()].len()
    }

    /// True when no category holds any part.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(Vec::is_empty)
    }

    fn front_or_placeholder(&self, category: Category) -> String {
        self.parts(category)
            .first()
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl<R: RngCore> PartSource for PartCatalog<R> {
    fn engine(&self) -> String {
        self.front_or_placeholder(Category::Engine)
    }

    fn fuselage(&self) -> String {
        self.front_or_placeholder(Category::Fuselage)
    }

    fn cabin(&self) -> String {
        self.front_or_placeholder(Category::Cabin)
    }

    fn armour(&self) -> String {
        self.front_or_placeholder(Category::Armour)
    }

    /// Draws from `0..=wings`; drawing the length itself means no wing.
    fn wing(&self) -> Option<String> {
        let wings = self.parts(Category::Wings);
        let selection = self.draw_rng.borrow_mut().gen_range(0..=wings.len());
        log::trace!("wing draw {selection} of {}", wings.len());
        wings.get(selection).cloned()
    }

    fn weapons(&self) -> Vec<String> {
        let weapons = self.parts(Category::Weapon);
        let drawn = self.draw_rng.borrow_mut().gen_range(0..=MAX_WEAPONS);
        let count = drawn.min(weapons.len());
        log::trace!("weapon draw {drawn}, taking {count}");
        weapons[..count].to_vec()
    }
}
