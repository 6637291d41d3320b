//! State Serializer
//!
//! Joins a version tag and N record triples into one `|`-delimited
//! string for the shareable-link query parameter, and splits it back.
//! Exactly one wire version is supported at a time; anything else is
//! rejected wholesale. The wire carries positions, not identifiers:
//! decode synthesizes `kitten-1`, `kitten-2`, … in sequence order.

use crate::codec::record;
use crate::models::{KittenEntry, KittenRecord};

/// The single supported wire version
pub const WIRE_VERSION: u32 = 1;

/// Fields per record on the wire: name, weight, flags
const FIELDS_PER_RECORD: usize = 3;

/// Decoded contents of a shareable link
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedState {
    pub version: u32,
    pub kittens: Vec<KittenEntry>,
}

/// Render records as a wire string, or `None` when there is nothing to
/// share
pub fn serialize(records: &[KittenRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    let mut fields = Vec::with_capacity(1 + records.len() * FIELDS_PER_RECORD);
    fields.push(WIRE_VERSION.to_string());
    for rec in records {
        let (name, weight, flags) = record::to_triple(rec);
        fields.push(name);
        fields.push(weight);
        fields.push(flags);
    }
    Some(fields.join("|"))
}

/// Parse a wire string back into ordered records
///
/// Returns `None` for any malformed input: unsupported version, a
/// field count that is not a positive multiple of three, or a record
/// whose flag string fails to decode. Callers fall back to the durable
/// store; no error surfaces to the user.
pub fn deserialize(wire: &str) -> Option<DecodedState> {
    let fields: Vec<&str> = wire.split('|').collect();
    let (version_field, rest) = fields.split_first()?;
    let version = version_field.parse::<u32>().ok()?;
    if version != WIRE_VERSION {
        return None;
    }
    if rest.is_empty() || rest.len() % FIELDS_PER_RECORD != 0 {
        return None;
    }
    let mut kittens = Vec::with_capacity(rest.len() / FIELDS_PER_RECORD);
    for (i, triple) in rest.chunks_exact(FIELDS_PER_RECORD).enumerate() {
        let rec = record::from_triple(triple[0], triple[1], triple[2]).ok()?;
        kittens.push(KittenEntry::new(i as u32 + 1, rec));
    }
    Some(DecodedState { version, kittens })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day1Given, FleaStatus, PanacurDays, PonazurilDays, RingwormStatus, Topical};

    fn sample(name: &str, weight: &str) -> KittenRecord {
        KittenRecord {
            name: name.into(),
            weight_lb: weight.into(),
            ..Default::default()
        }
    }

    #[test]
    fn serialize_empty_list_is_nothing_to_share() {
        assert_eq!(serialize(&[]), None);
    }

    #[test]
    fn single_record_wire_shape() {
        let wire = serialize(&[sample("Mittens", "3.5")]).unwrap();
        assert_eq!(wire, "1|Mittens|3.5|Af");
    }

    #[test]
    fn round_trips_ordered_records() {
        let records = vec![
            sample("Alpha", "1.2"),
            KittenRecord {
                name: "Bravo β".into(),
                weight_lb: "3.".into(),
                topical: Topical::None,
                flea: FleaStatus::Bathed,
                ringworm: RingwormStatus::Negative,
                panacur_days: PanacurDays::One,
                ponazuril_days: PonazurilDays::One,
                day1: Day1Given {
                    panacur: false,
                    ponazuril: false,
                    drontal: true,
                },
            },
            sample("", ""),
        ];
        let wire = serialize(&records).unwrap();
        let decoded = deserialize(&wire).unwrap();
        assert_eq!(decoded.version, WIRE_VERSION);
        let back: Vec<KittenRecord> = decoded.kittens.iter().map(|e| e.record.clone()).collect();
        assert_eq!(back, records);
    }

    #[test]
    fn decode_synthesizes_sequential_ids() {
        let wire = serialize(&[sample("a", "1"), sample("b", "2")]).unwrap();
        let decoded = deserialize(&wire).unwrap();
        let ids: Vec<&str> = decoded.kittens.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["kitten-1", "kitten-2"]);
    }

    #[test]
    fn version_only_string_has_no_records() {
        assert_eq!(deserialize("1"), None);
    }

    #[test]
    fn unsupported_version_is_rejected_wholesale() {
        assert_eq!(deserialize("2|a|5|AA"), None);
        assert_eq!(deserialize("0|a|5|AA"), None);
        assert_eq!(deserialize("x|a|5|AA"), None);
    }

    #[test]
    fn partial_record_group_is_rejected() {
        assert_eq!(deserialize("1|name|3.5"), None);
        assert_eq!(deserialize("1|a|1|AA|extra"), None);
    }

    #[test]
    fn undecodable_flags_reject_the_wire_string() {
        assert_eq!(deserialize("1|a|1|@@"), None);
    }

    #[test]
    fn over_length_flag_field_rejects_the_wire_string() {
        // hand-built links with oversized flag fields must decode to
        // None, never abort
        assert_eq!(deserialize("1|a|1|AAAAAAA"), None);
        assert_eq!(deserialize("1|a|1|AAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"), None);
    }

    #[test]
    fn twenty_record_round_trip() {
        let records: Vec<KittenRecord> = (0..20)
            .map(|i| sample(&format!("kit {i} 🐾"), &format!("{}.{}", i, i)))
            .collect();
        let wire = serialize(&records).unwrap();
        let decoded = deserialize(&wire).unwrap();
        assert_eq!(decoded.kittens.len(), 20);
        assert_eq!(decoded.kittens[19].record.name, "kit 19 🐾");
        assert_eq!(decoded.kittens[19].id, "kitten-20");
    }
}
