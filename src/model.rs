//! # Modeling the chess starting position.
//!
//! This module contains enums modeling the values needed to describe
//! a chessboard at the start of a game, as well as the Chess960
//! back-rank machinery in its sub-modules.

use strum::{EnumIs, EnumIter, VariantArray, VariantNames};

pub mod backrank;
pub mod castling;
pub mod enumerate;
pub mod error;
pub mod setup;
pub mod validate;

/// Representation of the squares on a chessboard.
///
/// This enum uses the convention of numbering
/// squares starting with a1 = 0 and then counting
/// up over the files first, b1 = 1, c1 = 2, ... and then the
/// ranks, a2 = 8, a3 = 16, ... ending with h8 = 63.
///
/// This is the so called file-major little-endian layout.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
     VariantNames, EnumIter)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    a1 = 0o00, b1 = 0o01, c1 = 0o02, d1 = 0o03, e1 = 0o04, f1 = 0o05, g1 = 0o06, h1 = 0o07,
    a2 = 0o10, b2 = 0o11, c2 = 0o12, d2 = 0o13, e2 = 0o14, f2 = 0o15, g2 = 0o16, h2 = 0o17,
    a3 = 0o20, b3 = 0o21, c3 = 0o22, d3 = 0o23, e3 = 0o24, f3 = 0o25, g3 = 0o26, h3 = 0o27,
    a4 = 0o30, b4 = 0o31, c4 = 0o32, d4 = 0o33, e4 = 0o34, f4 = 0o35, g4 = 0o36, h4 = 0o37,
    a5 = 0o40, b5 = 0o41, c5 = 0o42, d5 = 0o43, e5 = 0o44, f5 = 0o45, g5 = 0o46, h5 = 0o47,
    a6 = 0o50, b6 = 0o51, c6 = 0o52, d6 = 0o53, e6 = 0o54, f6 = 0o55, g6 = 0o56, h6 = 0o57,
    a7 = 0o60, b7 = 0o61, c7 = 0o62, d7 = 0o63, e7 = 0o64, f7 = 0o65, g7 = 0o66, h7 = 0o67,
    a8 = 0o70, b8 = 0o71, c8 = 0o72, d8 = 0o73, e8 = 0o74, f8 = 0o75, g8 = 0o76, h8 = 0o77,
}

impl Square {
    /// Use this Square as an array index.
    #[inline]
    pub fn ix(self) -> usize {
        self as usize
    }

    /// Infallible conversion from a u8 by way of truncating the
    /// extraneous bits.
    #[inline]
    pub fn from_u8(ix: u8) -> Self {
        unsafe { std::mem::transmute::<u8, Self>(ix & 0x3Fu8) }
    }

    /// Split a square into file and rank
    #[inline]
    pub fn coords(self) -> (BoardFile, BoardRank) {
        (
            BoardFile::from_u8(self as u8),
            BoardRank::from_u8((self as u8 & 0x38) >> 3),
        )
    }

    /// Join a file and rank into a square
    #[inline]
    pub fn from_coords(f: BoardFile, r: BoardRank) -> Self {
        Self::from_u8(f as u8 | (r as u8) << 3)
    }

    /// Whether this is a light square (h1 is light, a1 is dark.)
    #[inline]
    pub fn is_light(self) -> bool {
        let (f, r) = self.coords();
        (f as u8 + r as u8) & 1 == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[repr(u8)]
pub enum BoardRank {
    _1 = 0,
    _2 = 1,
    _3 = 2,
    _4 = 3,
    _5 = 4,
    _6 = 5,
    _7 = 6,
    _8 = 7,
}

impl BoardRank {
    /// Infallible conversion from a u8 by way of truncating the
    /// extraneous bits.
    #[inline]
    pub fn from_u8(ix: u8) -> Self {
        unsafe { std::mem::transmute::<u8, Self>(ix & 0x7) }
    }

    /// The rank on which a color's officers start the game.
    #[inline]
    pub fn back_rank(col: ChessColor) -> Self {
        match col {
            ChessColor::WHITE => Self::_1,
            ChessColor::BLACK => Self::_8,
        }
    }

    /// The rank on which a color's pawns start the game.
    #[inline]
    pub fn pawn_rank(col: ChessColor) -> Self {
        match col {
            ChessColor::WHITE => Self::_2,
            ChessColor::BLACK => Self::_7,
        }
    }
}

/// The files of the chessboard, which double as the
/// eight slots of a back-rank arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum BoardFile {
    a_ = 0,
    b_ = 1,
    c_ = 2,
    d_ = 3,
    e_ = 4,
    f_ = 5,
    g_ = 6,
    h_ = 7,
}

impl BoardFile {
    /// Use this file as an array index.
    #[inline]
    pub fn ix(self) -> usize {
        self as usize
    }

    /// Infallible conversion from a u8 by way of truncating the
    /// extraneous bits.
    #[inline]
    pub fn from_u8(ix: u8) -> Self {
        unsafe { std::mem::transmute::<u8, Self>(ix & 0x7) }
    }

    /// Square color parity of this file on the first rank.
    ///
    /// Odd files (b, d, f, h) hold the light squares of rank 1,
    /// which is what keeps one bishop on each color.
    #[inline]
    pub fn is_light(self) -> bool {
        self as u8 & 1 == 1
    }

    /// The lower-case file letter.
    #[inline]
    pub fn letter(self) -> char {
        (b'a' + self as u8) as char
    }
}

/// Representation of a chessman.
///
/// The discriminants allows niche optimization with a byte value of
/// 0 representing absence, and with the sign representing color.
///
/// The name chessman is of British-English origin, and though archaic
/// is used because it allows a distinction between pawns and pieces.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, VariantArray, Hash)]
#[repr(i8)]
pub enum ChessMan {
    BLACK_KING = -6,
    BLACK_QUEEN = -5,
    BLACK_ROOK = -4,
    BLACK_BISHOP = -3,
    BLACK_KNIGHT = -2,
    BLACK_PAWN = -1,
    WHITE_PAWN = 1,
    WHITE_KNIGHT = 2,
    WHITE_BISHOP = 3,
    WHITE_ROOK = 4,
    WHITE_QUEEN = 5,
    WHITE_KING = 6,
}

impl ChessMan {
    /// The pawn of the given color.
    #[inline]
    pub fn pawn(col: ChessColor) -> Self {
        unsafe { std::mem::transmute::<i8, Self>(col.sign()) }
    }

    /// The officer of the given color.
    #[inline]
    pub fn officer(col: ChessColor, off: ChessOfficer) -> Self {
        unsafe { std::mem::transmute::<i8, Self>(col.sign() * off as i8) }
    }

    /// The color of the chessman in question.
    #[inline]
    pub fn col(self) -> ChessColor {
        ChessColor::from(self)
    }

    /// The officer kind, or `None` for pawns.
    #[inline]
    pub fn off(self) -> Option<ChessOfficer> {
        ChessOfficer::from_repr((self as i8).unsigned_abs())
    }

    /// Same kind, opposing color.
    #[inline]
    pub fn opp(self) -> Self {
        unsafe { std::mem::transmute::<i8, Self>(-(self as i8)) }
    }
}

/// Representation of color of a player or chessman.
///
/// The choice here to not to mirror the convention of black = `-1` and
/// white = `1` as used in the [`ChessMan`] enum is because this is used
/// extensively in indexing of arrays of the form `[<white value>, <black value>]`.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs)]
#[repr(u8)]
pub enum ChessColor {
    WHITE = 0,
    BLACK = 1,
}

impl ChessColor {
    /// Sign value of associated chessman color.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Self::WHITE => 1,
            Self::BLACK => -1,
        }
    }

    /// Associated array index.
    #[inline]
    pub fn ix(self) -> usize {
        self as usize
    }
}

/// Extracting the color of a chessman.
impl From<ChessMan> for ChessColor {
    fn from(value: ChessMan) -> Self {
        if (value as i8) < 0 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

/// Representation of the chess officers, that is, not pawns.
///
/// These are the piece kinds that make up a back rank. The discriminants
/// are the absolute values of the matching [`ChessMan`] variants.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    VariantArray, strum::FromRepr)]
#[repr(u8)]
pub enum ChessOfficer {
    KNIGHT = 2,
    BISHOP = 3,
    ROOK = 4,
    QUEEN = 5,
    KING = 6,
}

impl ChessOfficer {
    /// Use as an array index: 0 for knights up to 4 for kings.
    #[inline]
    pub fn ix(self) -> usize {
        self as usize - 2
    }

    /// How many of this officer each side starts with.
    #[inline]
    pub fn count(self) -> u8 {
        match self {
            Self::KNIGHT | Self::BISHOP | Self::ROOK => 2,
            Self::QUEEN | Self::KING => 1,
        }
    }
}

/// Representation of the directions of castling.
///
/// Note here that the discriminant values are used as array indexes.
///
/// The naming convention is chosen to account for Chess960,
/// wherein the rook's relative position to the king is not fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CastlingDirection {
    /// Aka. the 'long' or 'queen-side' castling, towards the a-file.
    EAST = 0,
    /// Aka. the 'short' or 'king-side' castling, towards the h-file.
    WEST = 1,
}

impl CastlingDirection {
    /// Use as an array index.
    #[inline]
    pub fn ix(self) -> usize {
        self as usize
    }
}

/// Data for each square on the board
///
/// This is the basis of the simple and most obvious representation,
/// using a separate value in an array for each square, a so-called
/// 'board'-centric representation, which is `DataBoard<Option<ChessMan>>`
///
/// This is a generalized version allowing any values, not just
/// chessmen to fill the squares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct DataBoard<T>(pub [T; 64]);

impl<T: Copy> DataBoard<T> {
    /// A board with every square set to the same value.
    pub fn new(it: T) -> Self {
        Self([it; 64])
    }
}

impl<T> DataBoard<T> {
    /// Write to a square
    pub fn set(&mut self, sq: Square, it: T) {
        self.0[sq.ix()] = it
    }

    /// Read from a square
    pub fn get(&self, sq: Square) -> &T {
        &self.0[sq.ix()]
    }

    /// The eight squares of one rank, in file order.
    pub fn rank(&self, r: BoardRank) -> &[T] {
        let start = (r as usize) << 3;
        &self.0[start..start + 8]
    }
}

#[test]
fn square_coords_round_trip() {
    use strum::IntoEnumIterator;
    for sq in Square::iter() {
        let (f, r) = sq.coords();
        assert_eq!(Square::from_coords(f, r), sq);
    }
}

#[test]
fn square_colors() {
    assert!(!Square::a1.is_light());
    assert!(Square::h1.is_light());
    assert!(Square::a8.is_light());
    assert!(!Square::h8.is_light());
    for f in [BoardFile::a_, BoardFile::d_, BoardFile::g_] {
        assert_eq!(f.is_light(), Square::from_coords(f, BoardRank::_1).is_light());
    }
}

#[test]
fn chessman_parts() {
    for &cm in ChessMan::VARIANTS {
        assert_eq!(cm.opp().opp(), cm);
        assert_ne!(cm.opp().col(), cm.col());
        match cm.off() {
            Some(off) => assert_eq!(ChessMan::officer(cm.col(), off), cm),
            None => assert_eq!(ChessMan::pawn(cm.col()), cm),
        }
    }
}
