//! Pure data types for the `nitf` crate: field kinds, schemas, and the
//! static per-record schema tables for NITF 2.1 (MIL-STD-2500C).
//!
//! Nothing in this crate reads a byte stream. It only describes what a
//! field *is* - its kind, width, and position - so that `nitf` can drive a
//! parse against it.

pub mod bitset;
pub mod compression;
pub mod field;
pub mod schema;
pub mod tags;
pub mod tre;
