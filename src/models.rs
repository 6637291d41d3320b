//! Kitten Record Models
//!
//! Logical data structures for one intake record. Text fields hold
//! exactly what the user typed; enumerable fields are typed enums whose
//! wire indices live in the codec layer, not here.

use serde::{Deserialize, Serialize};

/// Topical flea/parasite preventative applied at intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topical {
    #[default]
    Revolution,
    Advantage,
    None,
}

/// Flea treatment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FleaStatus {
    #[default]
    Given,
    Bathed,
}

/// Ringworm (Wood's lamp) scan result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RingwormStatus {
    #[default]
    NotScanned,
    Negative,
    Positive,
}

/// Length of the panacur course, carried as the literal day value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanacurDays {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "3")]
    Three,
    #[default]
    #[serde(rename = "5")]
    Five,
}

impl PanacurDays {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanacurDays::One => "1",
            PanacurDays::Three => "3",
            PanacurDays::Five => "5",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            PanacurDays::One => 1,
            PanacurDays::Three => 3,
            PanacurDays::Five => 5,
        }
    }
}

/// Length of the ponazuril course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PonazurilDays {
    #[serde(rename = "1")]
    One,
    #[default]
    #[serde(rename = "3")]
    Three,
}

impl PonazurilDays {
    pub fn as_str(&self) -> &'static str {
        match self {
            PonazurilDays::One => "1",
            PonazurilDays::Three => "3",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            PonazurilDays::One => 1,
            PonazurilDays::Three => 3,
        }
    }
}

/// Which day-1 oral meds were already given at intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day1Given {
    pub panacur: bool,
    pub ponazuril: bool,
    pub drontal: bool,
}

impl Default for Day1Given {
    fn default() -> Self {
        Self {
            panacur: true,
            ponazuril: true,
            drontal: true,
        }
    }
}

/// One kitten's intake record
///
/// `weight_lb` stays a raw string so partial input ("3.", "") survives
/// a save/reload or share-link round trip unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KittenRecord {
    pub name: String,
    pub weight_lb: String,
    pub topical: Topical,
    pub flea: FleaStatus,
    pub ringworm: RingwormStatus,
    pub panacur_days: PanacurDays,
    pub ponazuril_days: PonazurilDays,
    pub day1: Day1Given,
}

/// A record plus its stable per-session identifier (`kitten-<n>`)
#[derive(Debug, Clone, PartialEq)]
pub struct KittenEntry {
    pub id: String,
    pub record: KittenRecord,
}

impl KittenEntry {
    pub fn new(n: u32, record: KittenRecord) -> Self {
        Self {
            id: format!("kitten-{}", n),
            record,
        }
    }
}
