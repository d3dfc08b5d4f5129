//! Unit registry - symbols and aliases for the exposure units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Kind, PhysicalUnit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Case-insensitive lookup from unit symbols and aliases to units
pub struct UnitRegistry {
    units: HashMap<String, PhysicalUnit>,
    aliases: HashMap<String, PhysicalUnit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        for unit in PhysicalUnit::ALL {
            registry.register(unit);
        }
        registry.register_aliases();
        registry
    }

    /// Get a unit by symbol or alias, ignoring case
    pub fn get(&self, symbol: &str) -> Option<PhysicalUnit> {
        let key = symbol.trim().to_lowercase();
        self.units
            .get(&key)
            .or_else(|| self.aliases.get(&key))
            .copied()
    }

    /// All units measuring `kind`
    pub fn by_kind(&self, kind: Kind) -> Vec<PhysicalUnit> {
        PhysicalUnit::ALL.into_iter().filter(|u| u.kind() == kind).collect()
    }

    /// Canonical symbols, lowercased
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    fn register(&mut self, unit: PhysicalUnit) {
        self.units.insert(unit.symbol().to_lowercase(), unit);
    }

    fn alias(&mut self, alias: &str, unit: PhysicalUnit) {
        self.aliases.insert(alias.to_lowercase(), unit);
    }

    fn register_aliases(&mut self) {
        self.alias("f", PhysicalUnit::FNumber);

        self.alias("asa", PhysicalUnit::Iso);

        for alias in ["s", "secs", "second", "seconds"] {
            self.alias(alias, PhysicalUnit::Seconds);
        }

        for alias in ["cd/m²", "nit", "nits"] {
            self.alias(alias, PhysicalUnit::CandelasPerSquareMetre);
        }

        for alias in ["ft-l", "foot-lambert", "foot-lamberts"] {
            self.alias(alias, PhysicalUnit::FootLamberts);
        }

        self.alias("lx", PhysicalUnit::Lux);

        for alias in ["ft-c", "foot-candle", "foot-candles"] {
            self.alias(alias, PhysicalUnit::FootCandles);
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
