//! Kitten Record Codec
//!
//! Maps one logical record to and from the `(name, weight, flags)`
//! wire triple. The bit layout below is part of the wire contract:
//!
//! ```text
//! bits 0-1   topical        (revolution=0, advantage=1, none=2)
//! bit  2     flea status    (given=0, bathed=1)
//! bits 3-4   ringworm       (not-scanned=0, negative=1, positive=2)
//! bits 5-6   panacur days   (1=0, 3=1, 5=2)
//! bit  7     ponazuril days (1=0, 3=1)
//! bit  8     day-1 panacur given
//! bit  9     day-1 ponazuril given
//! bit  10    day-1 drontal given
//! ```
//!
//! Bits 11 and up are reserved: written as zero, ignored on read. An
//! index with no enumeration entry decodes to that field's default so
//! a corrupted flag degrades a single field, never the whole record.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::codec::bitfield;
use crate::models::{
    Day1Given, FleaStatus, KittenRecord, PanacurDays, PonazurilDays, RingwormStatus, Topical,
};

/// Flag strings are always two symbols (12 usable bits)
pub const FLAG_WIDTH: usize = 2;

const TOPICAL_SHIFT: u32 = 0;
const FLEA_SHIFT: u32 = 2;
const RINGWORM_SHIFT: u32 = 3;
const PANACUR_SHIFT: u32 = 5;
const PONAZURIL_SHIFT: u32 = 7;
const DAY1_PANACUR_BIT: u32 = 8;
const DAY1_PONAZURIL_BIT: u32 = 9;
const DAY1_DRONTAL_BIT: u32 = 10;

fn topical_index(t: Topical) -> u32 {
    match t {
        Topical::Revolution => 0,
        Topical::Advantage => 1,
        Topical::None => 2,
    }
}

fn topical_from_index(i: u32) -> Topical {
    match i {
        0 => Topical::Revolution,
        1 => Topical::Advantage,
        2 => Topical::None,
        _ => Topical::default(),
    }
}

fn flea_index(f: FleaStatus) -> u32 {
    match f {
        FleaStatus::Given => 0,
        FleaStatus::Bathed => 1,
    }
}

fn flea_from_index(i: u32) -> FleaStatus {
    match i {
        0 => FleaStatus::Given,
        1 => FleaStatus::Bathed,
        _ => FleaStatus::default(),
    }
}

fn ringworm_index(r: RingwormStatus) -> u32 {
    match r {
        RingwormStatus::NotScanned => 0,
        RingwormStatus::Negative => 1,
        RingwormStatus::Positive => 2,
    }
}

fn ringworm_from_index(i: u32) -> RingwormStatus {
    match i {
        0 => RingwormStatus::NotScanned,
        1 => RingwormStatus::Negative,
        2 => RingwormStatus::Positive,
        _ => RingwormStatus::default(),
    }
}

fn panacur_index(p: PanacurDays) -> u32 {
    match p {
        PanacurDays::One => 0,
        PanacurDays::Three => 1,
        PanacurDays::Five => 2,
    }
}

fn panacur_from_index(i: u32) -> PanacurDays {
    match i {
        0 => PanacurDays::One,
        1 => PanacurDays::Three,
        2 => PanacurDays::Five,
        _ => PanacurDays::default(),
    }
}

fn ponazuril_index(p: PonazurilDays) -> u32 {
    match p {
        PonazurilDays::One => 0,
        PonazurilDays::Three => 1,
    }
}

fn ponazuril_from_index(i: u32) -> PonazurilDays {
    match i {
        0 => PonazurilDays::One,
        1 => PonazurilDays::Three,
        _ => PonazurilDays::default(),
    }
}

/// Pack a record's enumerable fields into the 2-symbol flag string
pub fn encode_flags(record: &KittenRecord) -> String {
    let mut bits = 0u32;
    bits |= topical_index(record.topical) << TOPICAL_SHIFT;
    bits |= flea_index(record.flea) << FLEA_SHIFT;
    bits |= ringworm_index(record.ringworm) << RINGWORM_SHIFT;
    bits |= panacur_index(record.panacur_days) << PANACUR_SHIFT;
    bits |= ponazuril_index(record.ponazuril_days) << PONAZURIL_SHIFT;
    bits |= (record.day1.panacur as u32) << DAY1_PANACUR_BIT;
    bits |= (record.day1.ponazuril as u32) << DAY1_PONAZURIL_BIT;
    bits |= (record.day1.drontal as u32) << DAY1_DRONTAL_BIT;
    bitfield::encode(bits, FLAG_WIDTH)
}

/// Convert a record into its `(urlEncodedName, weightText, flags)` triple
pub fn to_triple(record: &KittenRecord) -> (String, String, String) {
    let name = utf8_percent_encode(&record.name, NON_ALPHANUMERIC).to_string();
    (name, record.weight_lb.clone(), encode_flags(record))
}

/// Rebuild a record from a wire triple
///
/// Fails only on an undecodable flag string; unknown enum indices fall
/// back per-field, and the name decodes lossily on bad UTF-8.
pub fn from_triple(name: &str, weight: &str, flags: &str) -> Result<KittenRecord, String> {
    let bits = bitfield::decode(flags)?;
    Ok(KittenRecord {
        name: percent_decode_str(name).decode_utf8_lossy().into_owned(),
        weight_lb: weight.to_string(),
        topical: topical_from_index((bits >> TOPICAL_SHIFT) & 0b11),
        flea: flea_from_index((bits >> FLEA_SHIFT) & 0b1),
        ringworm: ringworm_from_index((bits >> RINGWORM_SHIFT) & 0b11),
        panacur_days: panacur_from_index((bits >> PANACUR_SHIFT) & 0b11),
        ponazuril_days: ponazuril_from_index((bits >> PONAZURIL_SHIFT) & 0b1),
        day1: Day1Given {
            panacur: bits & (1 << DAY1_PANACUR_BIT) != 0,
            ponazuril: bits & (1 << DAY1_PONAZURIL_BIT) != 0,
            drontal: bits & (1 << DAY1_DRONTAL_BIT) != 0,
        },
    })
}
