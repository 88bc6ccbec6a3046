//! Ship records and their text rendering
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::PartSource;
use crate::catalog::NOT_AVAILABLE;

/// One assembled spaceship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub engine: String,
    pub fuselage: String,
    pub cabin: String,
    pub large_wings: Option<String>,
    pub small_wings: Option<String>,
    pub armour: String,
    pub weapons: Vec<String>,
}

impl Ship {
    /// Build a fresh ship from `source`.
    #[must_use]
    pub fn assemble<S: PartSource + ?Sized>(source: &S) -> Self {
        let mut ship = Self::default();
        ship.generate(source);
        ship
    }

    /// Overwrite every slot with parts picked from `source`.
    ///
    /// The two wing slots are separate draws and may repeat a part.
    pub fn generate<S: PartSource + ?Sized>(&mut self, source: &S) {
        self.engine = source.engine();
        self.fuselage = source.fuselage();
        self.cabin = source.cabin();
        self.armour = source.armour();
        self.large_wings = source.wing();
        self.small_wings = source.wing();
        self.weapons = source.weapons();
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "+++ Generated spaceship +++")?;
        writeln!(f, "  Engine: {}", self.engine)?;
        writeln!(f, "  Fuselage: {}", self.fuselage)?;
        writeln!(f, "  Cabin: {}", self.cabin)?;
        writeln!(
            f,
            "  Large wings: {}",
            self.large_wings.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        writeln!(
            f,
            "  Small wings: {}",
            self.small_wings.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        writeln!(f, "  Armour: {}", self.armour)?;
        write!(f, "  Weapons ({}): ", self.weapons.len())?;
        if self.weapons.is_empty() {
            return writeln!(f, "{NOT_AVAILABLE}");
        }
        writeln!(f)?;
        for weapon in &self.weapons {
            writeln!(f, "    {weapon}")?;
        }
        Ok(())
    }
}
