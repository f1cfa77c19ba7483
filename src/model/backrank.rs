//! # Back-rank arrangements
//!
//! A Chess960 starting position is fully determined by the order of
//! the eight officers on white's first rank: black's eighth rank is the
//! same sequence by file, in black. This module holds that arrangement
//! and the canonical id used to number the 960 legal ones.
//!
//! The numbering is Scharnagl's, which every Chess960-aware program
//! and game archive shares, so that position 518 is the classical
//! `RNBQKBNR`. An id is read as mixed-radix digits, least significant
//! first:
//!
//! ```text
//! id = ((knights * 6 + queen) * 4 + dark_bishop) * 4 + light_bishop
//! ```
//!
//! - `light_bishop` picks one of the files b, d, f, h,
//! - `dark_bishop` picks one of the files a, c, e, g,
//! - `queen` picks one of the six files left over,
//! - `knights` picks two of the five files left over, see [`KNIGHT_PAIRS`],
//! - the last three files take rook, king, rook.

use std::ops::Index;

use strum::IntoEnumIterator;

use crate::model::{BoardFile, ChessColor, ChessMan, ChessOfficer, error::OutOfRange};

/// Number of legal Chess960 back ranks.
pub const CHESS960_COUNT: u16 = 960;

/// The ways of placing two interchangeable knights on five free files,
/// indexed by the knight digit of a [`Chess960Id`].
///
/// The entries are positions among the free files, not board files.
pub const KNIGHT_PAIRS: [(u8, u8); 10] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
];

/// Canonical number of a Chess960 starting position, in `0..960`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Chess960Id(pub(crate) u16);

impl Chess960Id {
    /// Id of the classical chess starting position.
    pub const CLASSICAL: Self = Self(518);

    /// Checked construction.
    #[inline]
    pub fn new(id: u16) -> Result<Self, OutOfRange> {
        if id < CHESS960_COUNT {
            Ok(Self(id))
        } else {
            Err(OutOfRange { id })
        }
    }

    /// The raw number.
    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Every id, in increasing order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..CHESS960_COUNT).map(Self)
    }

    /// Split into (light bishop, dark bishop, queen, knights) digits.
    #[inline]
    pub(crate) fn digits(self) -> (u8, u8, u8, u8) {
        let n = self.0;
        (
            (n % 4) as u8,
            (n / 4 % 4) as u8,
            (n / 16 % 6) as u8,
            (n / 96) as u8,
        )
    }

    /// Inverse of [`Chess960Id::digits`]. The digits must be in range.
    #[inline]
    pub(crate) fn from_digits(light: u8, dark: u8, queen: u8, knights: u8) -> Self {
        debug_assert!(light < 4 && dark < 4 && queen < 6 && knights < 10);
        Self(((knights as u16 * 6 + queen as u16) * 4 + dark as u16) * 4 + light as u16)
    }
}

impl TryFrom<u16> for Chess960Id {
    type Error = OutOfRange;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Chess960Id> for u16 {
    fn from(value: Chess960Id) -> Self {
        value.0
    }
}

impl std::fmt::Display for Chess960Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One color's officers by file, a-file first.
///
/// This is a plain value: any sequence of eight officers can be held,
/// and only [`validate`](crate::model::validate::validate) decides whether
/// it is one of the 960.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct BackRank(pub [ChessOfficer; 8]);

impl BackRank {
    /// The back rank of classical chess, `RNBQKBNR`.
    pub const CLASSICAL: Self = {
        use ChessOfficer::*;
        Self([ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, ROOK])
    };

    /// Files holding the given officer, in ascending order.
    pub fn files_of(&self, off: ChessOfficer) -> impl Iterator<Item = BoardFile> + '_ {
        BoardFile::iter().filter(move |f| self[*f] == off)
    }

    /// Number of each officer, indexed by [`ChessOfficer::ix`].
    pub fn census(&self) -> [u8; 5] {
        let mut res = [0; 5];
        for off in self.0 {
            res[off.ix()] += 1;
        }
        res
    }

    /// Instantiate the arrangement in the given color.
    ///
    /// Both colors use the same file-to-officer mapping, so the black
    /// rank is the white rank reflected across the board's middle.
    pub fn men(&self, col: ChessColor) -> [ChessMan; 8] {
        self.0.map(|off| ChessMan::officer(col, off))
    }
}

impl Index<BoardFile> for BackRank {
    type Output = ChessOfficer;

    #[inline]
    fn index(&self, index: BoardFile) -> &Self::Output {
        &self.0[index.ix()]
    }
}

#[test]
fn digits_round_trip() {
    for id in Chess960Id::all() {
        let (l, d, q, k) = id.digits();
        assert!(l < 4 && d < 4 && q < 6 && k < 10);
        assert_eq!(Chess960Id::from_digits(l, d, q, k), id);
    }
}

#[test]
fn id_range() {
    assert_eq!(Chess960Id::new(959).map(Chess960Id::get), Ok(959));
    assert_eq!(Chess960Id::new(960), Err(OutOfRange { id: 960 }));
    assert_eq!(Chess960Id::all().len(), 960);
}

#[test]
fn classical_census() {
    let rank = BackRank::CLASSICAL;
    assert_eq!(rank.census(), [2, 2, 2, 1, 1]);
    assert_eq!(
        rank.files_of(ChessOfficer::ROOK).collect::<Vec<_>>(),
        vec![BoardFile::a_, BoardFile::h_]
    );
    assert_eq!(rank.men(ChessColor::BLACK)[4], ChessMan::BLACK_KING);
}
