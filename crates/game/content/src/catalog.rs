//! Static equipment and tuning tables.
//!
//! - weapon catalog (name → attack bonus, style)
//! - upgrade module names → engine upgrade flags
//! - per-algorithm stat multipliers
//! - stat limits enforced on raw bot definitions

use clash_core::{Upgrades, WeaponType};

/// A purchasable weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    pub name: String,
    pub weapon_type: WeaponType,
    pub atk_bonus: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl WeaponSpec {
    pub fn new(name: impl Into<String>, weapon_type: WeaponType, atk_bonus: u32, tier: u8) -> Self {
        Self {
            name: name.into(),
            weapon_type,
            atk_bonus,
            tier,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Weapon lookup by case-insensitive name.
#[derive(Clone, Debug, Default)]
pub struct WeaponCatalog {
    weapons: Vec<WeaponSpec>,
}

impl WeaponCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock armory: one melee and one ranged weapon per tier.
    pub fn builtin() -> Self {
        use WeaponType::{Melee, Ranged};

        let stock = [
            ("Code Cutter", Melee, 5, 1, "Standard starter dagger; lightweight and fast."),
            ("Bit Blaster", Ranged, 5, 1, "Fires compressed data packets as projectiles."),
            ("Pulse Blade", Melee, 8, 2, "Emits rhythmic energy waves when swung."),
            ("Flux Rifle", Ranged, 8, 2, "Uses magnetic flux to accelerate energy projectiles."),
            ("Null Gauntlets", Melee, 16, 3, "Fists that erase enemy circuits on impact."),
            ("Firewall Cannon", Ranged, 16, 3, "Shoots bursts of searing digital energy."),
            ("Syntax Scythe", Melee, 33, 4, "A scythe that parses enemies into fragments."),
            ("Quantum Pistol", Ranged, 33, 4, "Phases bullets through defenses like a clever exploit."),
            ("Overclock Whip", Melee, 55, 5, "Electrified whip that strikes faster with each swing."),
            ("Virus Launcher", Ranged, 55, 5, "Infects enemies with code that slowly disables them."),
            ("AI Katana", Melee, 100, 6, "A smart blade that predicts enemy moves before they strike."),
            ("Packet Bomb", Ranged, 100, 6, "Explodes into fragments of damaging code on impact."),
        ];

        let mut catalog = Self::new();
        for (name, weapon_type, atk_bonus, tier, description) in stock {
            catalog.insert(WeaponSpec::new(name, weapon_type, atk_bonus, tier).with_description(description));
        }
        catalog
    }

    /// Adds a weapon, replacing any existing weapon with the same name.
    pub fn insert(&mut self, weapon: WeaponSpec) {
        match self.position(&weapon.name) {
            Some(index) => self.weapons[index] = weapon,
            None => self.weapons.push(weapon),
        }
    }

    pub fn get(&self, name: &str) -> Option<&WeaponSpec> {
        self.position(name).map(|index| &self.weapons[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponSpec> {
        self.weapons.iter()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.weapons
            .iter()
            .position(|weapon| weapon.name.eq_ignore_ascii_case(name))
    }
}

impl FromIterator<WeaponSpec> for WeaponCatalog {
    fn from_iter<I: IntoIterator<Item = WeaponSpec>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for weapon in iter {
            catalog.insert(weapon);
        }
        catalog
    }
}

/// Resolves an upgrade module name to its flag.
///
/// Accepts shop names ("Armor Plating", "EMP Shield") and snake-case ids
/// ("armor_plating"), case-insensitively.
pub fn upgrade_from_name(name: &str) -> Option<Upgrades> {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    let flag = match normalized.as_str() {
        "armor_plating" | "armor" => Upgrades::ARMOR_PLATING,
        "overclock_unit" | "overclock" => Upgrades::OVERCLOCK,
        "regen_core" | "regen" => Upgrades::REGEN_CORE,
        "critical_subroutine" | "crit_subroutine" => Upgrades::CRIT_SUBROUTINE,
        "energy_recycler" => Upgrades::ENERGY_RECYCLER,
        "emp_shield" => Upgrades::EMP_SHIELD,
        "efficient_circuit" => Upgrades::EFFICIENT_CIRCUIT,
        "steady_core" => Upgrades::STEADY_CORE,
        "critical_logic" => Upgrades::CRITICAL_LOGIC,
        "backup_os" => Upgrades::BACKUP_OS,
        _ => return None,
    };
    Some(flag)
}

/// Static multipliers an algorithm applies to raw stats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatMultipliers {
    pub proc: f64,
    pub defense: f64,
    pub clk: f64,
    pub luck: f64,
    pub logic: f64,
}

impl StatMultipliers {
    pub const IDENTITY: Self = Self {
        proc: 1.0,
        defense: 1.0,
        clk: 1.0,
        luck: 1.0,
        logic: 1.0,
    };

    /// Multipliers for an algorithm id. Unknown ids and algorithms without
    /// static effects get [`StatMultipliers::IDENTITY`].
    pub fn for_algorithm(id: &str) -> Self {
        let identity = Self::IDENTITY;
        match id.trim().to_ascii_uppercase().as_str() {
            "VEX-01" => Self {
                proc: 1.15,
                defense: 0.9,
                ..identity
            },
            "BASL-09" => Self {
                defense: 1.2,
                clk: 0.9,
                ..identity
            },
            "ADAPT-X" => Self {
                luck: 1.05,
                proc: 0.9,
                ..identity
            },
            "RUSH-09" => Self {
                clk: 1.2,
                defense: 0.9,
                ..identity
            },
            _ => identity,
        }
    }
}

/// Inclusive bounds for a raw stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Allowed ranges for raw bot stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatLimits {
    pub hp: StatRange,
    pub energy: StatRange,
    pub atk: StatRange,
    pub defense: StatRange,
    pub speed: StatRange,
    pub logic: StatRange,
    pub luck: StatRange,
}

impl Default for StatLimits {
    fn default() -> Self {
        let resource = StatRange::new(100, 999);
        let stat = StatRange::new(10, 999);
        Self {
            hp: resource,
            energy: resource,
            atk: stat,
            defense: stat,
            speed: stat,
            logic: stat,
            luck: stat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_armory_pairs_every_tier() {
        let catalog = WeaponCatalog::builtin();
        assert_eq!(catalog.len(), 12);
        for tier in 1..=6 {
            let styles: Vec<_> = catalog
                .iter()
                .filter(|w| w.tier == tier)
                .map(|w| w.weapon_type)
                .collect();
            assert_eq!(styles, vec![WeaponType::Melee, WeaponType::Ranged]);
        }
    }

    #[test]
    fn weapon_lookup_ignores_case() {
        let catalog = WeaponCatalog::builtin();
        let katana = catalog.get("ai katana").unwrap();
        assert_eq!(katana.atk_bonus, 100);
        assert_eq!(katana.weapon_type, WeaponType::Melee);
        assert!(catalog.get("Rubber Duck").is_none());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut catalog = WeaponCatalog::builtin();
        catalog.insert(WeaponSpec::new("code cutter", WeaponType::Melee, 7, 1));
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.get("Code Cutter").unwrap().atk_bonus, 7);
    }

    #[test]
    fn upgrade_names_accept_shop_and_id_forms() {
        assert_eq!(upgrade_from_name("EMP Shield"), Some(Upgrades::EMP_SHIELD));
        assert_eq!(upgrade_from_name("overclock_unit"), Some(Upgrades::OVERCLOCK));
        assert_eq!(
            upgrade_from_name("Critical Subroutine"),
            Some(Upgrades::CRIT_SUBROUTINE)
        );
        assert_eq!(upgrade_from_name("Backup OS"), Some(Upgrades::BACKUP_OS));
        assert_eq!(upgrade_from_name("steady-core"), Some(Upgrades::STEADY_CORE));
        assert_eq!(
            upgrade_from_name("Critical Logic"),
            Some(Upgrades::CRITICAL_LOGIC)
        );
        assert_eq!(upgrade_from_name("Turbo Button"), None);
    }

    #[test]
    fn algorithm_multipliers() {
        let vex = StatMultipliers::for_algorithm("VEX-01");
        assert_eq!((vex.proc, vex.defense), (1.15, 0.9));
        assert_eq!(StatMultipliers::for_algorithm("CHAOS-RND"), StatMultipliers::IDENTITY);
        assert_eq!(StatMultipliers::for_algorithm("???"), StatMultipliers::IDENTITY);
    }

    #[test]
    fn default_limits() {
        let limits = StatLimits::default();
        assert!(limits.hp.contains(100));
        assert!(!limits.hp.contains(99));
        assert!(limits.luck.contains(10));
        assert!(!limits.luck.contains(1000));
    }
}
