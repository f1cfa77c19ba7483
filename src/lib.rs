//! # Chess960 starting positions
//!
//! Numbering, generation and validation of the 960 back ranks of
//! Fischer Random Chess, and the starting positions built from them.
//!
//! ```
//! use chess960::model::{enumerate::by_id, validate::index_of};
//!
//! let rank = by_id(518).unwrap();
//! assert_eq!(rank.to_string(), "RNBQKBNR");
//! assert_eq!(index_of(&rank).unwrap().get(), 518);
//! ```

/// Setup configuration.
pub mod config;
/// Modeling the chess starting position.
pub mod model;
/// Text formats.
pub mod notation;

pub use model::{
    backrank::{BackRank, Chess960Id},
    enumerate::{all, by_id},
    error::{ConstraintViolation, NotAValidArrangement, OutOfRange, Rule, SetupError},
    setup::StartingPosition,
    validate::{index_of, validate},
};
