//! Compact State Serialization
//!
//! Encodes the form's kitten records into a short, versioned, URL-safe
//! string for shareable links, and decodes it back. Layering:
//! `bitfield` packs enum flags into a 2-symbol code, `record` maps one
//! kitten to a `(name, weight, flags)` triple, `state` joins a version
//! tag and N triples into one `|`-delimited wire string.

pub mod bitfield;
pub mod record;
pub mod state;
