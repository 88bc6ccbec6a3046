//! Shipyard Parts
//!
//! Platform-agnostic core for the Shipyard spaceship generator: a catalog of
//! categorized part lines and the assembly of ships from it. Randomness is
//! always injected, so every result can be reproduced from a seed.

pub mod catalog;
pub mod category;
pub mod error;
pub mod rng;
pub mod ship;

// Re-export commonly used types
pub use catalog::{LoadSummary, MAX_WEAPONS, NOT_AVAILABLE, PartCatalog};
pub use category::{Category, KEYWORD_TABLE};
pub use error::CatalogError;
pub use rng::derive_stream_seed;
pub use ship::Ship;

use rand::RngCore;

/// Source of parts for one assembly cycle.
/// [`PartCatalog`] is the production implementation.
pub trait PartSource {
    /// Current engine, or [`NOT_AVAILABLE`]
    fn engine(&self) -> String;

    /// Current fuselage, or [`NOT_AVAILABLE`]
    fn fuselage(&self) -> String;

    /// Current cabin, or [`NOT_AVAILABLE`]
    fn cabin(&self) -> String;

    /// Current armour, or [`NOT_AVAILABLE`]
    fn armour(&self) -> String;

    /// A wing, or `None` when the draw comes up empty
    fn wing(&self) -> Option<String>;

    /// Zero or more weapons
    fn weapons(&self) -> Vec<String>;
}

/// Lazily run assembly cycles against a catalog.
///
/// Each call to `next` reshuffles the catalog and assembles one ship, so
/// ships can be written out as they are built.
#[derive(Debug)]
pub struct Fleet<'a, R> {
    catalog: &'a mut PartCatalog<R>,
    remaining: usize,
    built: usize,
}

impl<R: RngCore> Iterator for Fleet<'_, R> {
    type Item = Ship;

    fn next(&mut self) -> Option<Ship> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.catalog.shuffle();
        let ship = Ship::assemble(&*self.catalog);
        self.built = self.built.saturating_add(1);
        log::debug!("assembled ship {}", self.built);
        Some(ship)
    }
}

/// Up to `count` assembly cycles, reshuffling the catalog before each one.
///
/// Nothing is allocated up front; `count` may be arbitrarily large.
#[must_use]
pub fn assemble_fleet<R: RngCore>(catalog: &mut PartCatalog<R>, count: usize) -> Fleet<'_, R> {
    Fleet {
        catalog,
        remaining: count,
        built: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::io::Cursor;

    fn chacha_catalog(seed: u64) -> PartCatalog<ChaCha20Rng> {
        PartCatalog::with_rngs(
            ChaCha20Rng::seed_from_u64(seed),
            ChaCha20Rng::seed_from_u64(seed.wrapping_add(1)),
        )
    }

    #[test]
    fn fleet_has_requested_size() {
        let mut catalog = chacha_catalog(4);
        catalog
            .load_from_reader(Cursor::new(b"engine a\ncabin b\n".to_vec()), "mem")
            .unwrap();
        let fleet: Vec<Ship> = assemble_fleet(&mut catalog, 4).collect();
        assert_eq!(fleet.len(), 4);
        for ship in &fleet {
            assert_eq!(ship.engine, "engine a");
            assert_eq!(ship.cabin, "cabin b");
            assert_eq!(ship.fuselage, NOT_AVAILABLE);
        }
        assert_eq!(assemble_fleet(&mut catalog, 0).count(), 0);
    }

    #[test]
    fn huge_fleet_is_built_on_demand() {
        let mut catalog = chacha_catalog(1);
        catalog
            .load_from_reader(Cursor::new(b"engine a\nweapon b\n".to_vec()), "mem")
            .unwrap();
        let first: Vec<Ship> = assemble_fleet(&mut catalog, usize::MAX).take(3).collect();
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|ship| ship.engine == "engine a"));
        assert_eq!(catalog.len(Category::Engine), 1);
    }

    #[test]
    fn empty_catalog_fleet_is_all_placeholders() {
        let mut catalog = chacha_catalog(8);
        for ship in assemble_fleet(&mut catalog, 4) {
            assert_eq!(ship.engine, NOT_AVAILABLE);
            assert_eq!(ship.armour, NOT_AVAILABLE);
            assert!(ship.large_wings.is_none() && ship.small_wings.is_none());
            assert!(ship.weapons.is_empty());
        }
    }
}
