//! Ninja domain entity
//!
//! Represents a shinobi candidate moving through registration, promotion,
//! and mission-clearance checks.

use serde::Serialize;

/// The village whose academy this registry serves
pub const LEAF_VILLAGE: &str = "Leaf";

/// A ninja candidate
///
/// A plain value record with no identity field; equality is structural.
/// Callers construct it once and hand it to the services, which never
/// mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ninja {
    pub name: String,
    pub village: String,
    pub clan: String,
    pub age: u32,
}

impl Ninja {
    pub fn new(name: &str, village: &str, clan: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            village: village.to_string(),
            clan: clan.to_string(),
            age,
        }
    }

    /// Check whether this ninja hails from the given village
    ///
    /// Village names compare case-insensitively, so "leaf" and "LEAF" name
    /// the same village as "Leaf".
    pub fn hails_from(&self, village: &str) -> bool {
        self.village.eq_ignore_ascii_case(village)
    }

    /// The elite clan this ninja belongs to, if any
    pub fn elite_clan(&self) -> Option<EliteClan> {
        self.clan.parse().ok()
    }
}

/// Clans whose members qualify for dangerous missions
///
/// The set is closed: any clan name is representable on a [`Ninja`], but
/// only these three parse as elite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EliteClan {
    Uchiha,
    Hyuga,
    Uzumaki,
}

impl std::fmt::Display for EliteClan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EliteClan::Uchiha => write!(f, "uchiha"),
            EliteClan::Hyuga => write!(f, "hyuga"),
            EliteClan::Uzumaki => write!(f, "uzumaki"),
        }
    }
}

impl std::str::FromStr for EliteClan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uchiha" => Ok(EliteClan::Uchiha),
            "hyuga" => Ok(EliteClan::Hyuga),
            "uzumaki" => Ok(EliteClan::Uzumaki),
            _ => Err(format!("Not an elite clan: {}", s)),
        }
    }
}
