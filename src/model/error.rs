//! Failures of the Chess960 selection and validation routines.
//!
//! All of these are plain values returned to the immediate caller.
//! The computations are deterministic, so nothing here is ever worth retrying.

use std::fmt::Display;

use thiserror::Error;

use crate::model::{BoardFile, ChessOfficer, backrank::BackRank};

/// A canonical id outside of `0..960`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("chess960 id {id} is out of range, expected 0 to 959")]
pub struct OutOfRange {
    pub id: u16,
}

/// The three structural rules of a Chess960 back rank,
/// in the order they are checked.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// All eight files hold exactly two knights, bishops and rooks,
    /// one queen, and one king.
    FULL_RANK,
    /// The bishops stand on squares of opposite color.
    BISHOP_COLOR,
    /// The king stands strictly between the two rooks.
    KING_BETWEEN_ROOKS,
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FULL_RANK => "full-rank",
            Self::BISHOP_COLOR => "bishop-color",
            Self::KING_BETWEEN_ROOKS => "king-between-rooks",
        })
    }
}

/// The offending files behind a [`ConstraintViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detail {
    /// The rank does not have eight squares.
    Length { found: usize },
    /// An empty square.
    Gap { file: BoardFile },
    /// The wrong number of some officer.
    Count {
        piece: ChessOfficer,
        expected: u8,
        found: u8,
    },
    /// Both bishops on the same square color.
    SameColor { files: [BoardFile; 2] },
    /// King on or outside the span of the rooks.
    KingOutside {
        king: BoardFile,
        rooks: [BoardFile; 2],
    },
}

impl Display for Detail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Length { found } => write!(f, "expected 8 squares, found {found}"),
            Self::Gap { file } => write!(f, "empty square on the {}-file", file.letter()),
            Self::Count {
                piece,
                expected,
                found,
            } => write!(f, "expected {expected} of {piece:?}, found {found}"),
            Self::SameColor { files: [a, b] } => write!(
                f,
                "bishops on the {}- and {}-files share a square color",
                a.letter(),
                b.letter()
            ),
            Self::KingOutside {
                king,
                rooks: [a, b],
            } => write!(
                f,
                "king on the {}-file is not between the rooks on the {}- and {}-files",
                king.letter(),
                a.letter(),
                b.letter()
            ),
        }
    }
}

/// A back rank breaking one of the structural rules.
///
/// Only the first broken rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{rule} rule violated: {detail}")]
pub struct ConstraintViolation {
    pub rule: Rule,
    pub detail: Detail,
}

/// Asked for the canonical id of a back rank outside the 960.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid chess960 arrangement")]
pub struct NotAValidArrangement(#[from] pub ConstraintViolation);

impl NotAValidArrangement {
    /// The rule that excluded the arrangement.
    pub fn rule(&self) -> Rule {
        self.0.rule
    }
}

/// Failures at the crate's text and configuration boundaries.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
    #[error("could not parse {input:?}")]
    Notation { input: String },
    #[error("not a chess960 starting position: {reason}")]
    NotAStartingPosition { reason: &'static str },
    #[error("invalid setup configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("setup configuration selects a fixed position without an id or arrangement")]
    MissingId,
    #[error("setup configuration names both id {id} and arrangement {arrangement}, which differ")]
    ConflictingSelection { id: u16, arrangement: BackRank },
}

impl From<NotAValidArrangement> for SetupError {
    fn from(value: NotAValidArrangement) -> Self {
        Self::Constraint(value.0)
    }
}

#[test]
fn violation_messages() {
    let v = ConstraintViolation {
        rule: Rule::BISHOP_COLOR,
        detail: Detail::SameColor {
            files: [BoardFile::a_, BoardFile::c_],
        },
    };
    assert_eq!(
        v.to_string(),
        "bishop-color rule violated: bishops on the a- and c-files share a square color"
    );
    let v = ConstraintViolation {
        rule: Rule::FULL_RANK,
        detail: Detail::Count {
            piece: ChessOfficer::ROOK,
            expected: 2,
            found: 1,
        },
    };
    assert_eq!(
        v.to_string(),
        "full-rank rule violated: expected 2 of ROOK, found 1"
    );
    assert_eq!(
        OutOfRange { id: 960 }.to_string(),
        "chess960 id 960 is out of range, expected 0 to 959"
    );
}
