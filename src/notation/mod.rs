//! # Text formats
//!
//! Display and parsing of the values in [`model`](crate::model).
//! A back rank is written as its eight officers from the a-file,
//! upper case, as in `RNBQKBNR`.

pub mod fen;

use std::{fmt::Display, str::FromStr};

use chumsky::{error::EmptyErr, prelude::*};
use strum::VariantNames;

use crate::model::{
    ChessColor, ChessMan, ChessOfficer, Square,
    backrank::{BackRank, Chess960Id},
    error::SetupError,
    validate::validate_squares,
};

/// Values with a canonical [`chumsky`] parser.
pub trait Parsable: Sized {
    fn parser<'s>() -> impl Parser<'s, &'s str, Self>;
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Square::VARIANTS[self.ix()])
    }
}

impl Display for ChessOfficer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arr = if f.alternate() {
            ["n", "b", "r", "q", "k"]
        } else {
            ["N", "B", "R", "Q", "K"]
        };
        f.write_str(arr[self.ix()])
    }
}

/// FEN letters, or chess figurines in alternate mode.
impl Display for ChessMan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arr = match (self.col(), f.alternate()) {
            (ChessColor::WHITE, true) => ["♙", "♘", "♗", "♖", "♕", "♔"],
            (ChessColor::BLACK, true) => ["♟", "♞", "♝", "♜", "♛", "♚"],
            (ChessColor::WHITE, false) => ["P", "N", "B", "R", "Q", "K"],
            (ChessColor::BLACK, false) => ["p", "n", "b", "r", "q", "k"],
        };
        f.write_str(arr[(*self as i8).unsigned_abs() as usize - 1])
    }
}

impl Display for BackRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for off in self.0 {
            Display::fmt(&off, f)?;
        }
        Ok(())
    }
}

impl Parsable for ChessOfficer {
    fn parser<'s>() -> impl Parser<'s, &'s str, Self> {
        use ChessOfficer::*;
        choice((
            one_of("Nn").to(KNIGHT),
            one_of("Bb").to(BISHOP),
            one_of("Rr").to(ROOK),
            one_of("Qq").to(QUEEN),
            one_of("Kk").to(KING),
        ))
    }
}

impl Parsable for ChessMan {
    fn parser<'s>() -> impl Parser<'s, &'s str, Self> {
        use ChessMan::*;
        choice((
            just('k').to(BLACK_KING),
            just('q').to(BLACK_QUEEN),
            just('r').to(BLACK_ROOK),
            just('b').to(BLACK_BISHOP),
            just('n').to(BLACK_KNIGHT),
            just('p').to(BLACK_PAWN),
            just('P').to(WHITE_PAWN),
            just('N').to(WHITE_KNIGHT),
            just('B').to(WHITE_BISHOP),
            just('R').to(WHITE_ROOK),
            just('Q').to(WHITE_QUEEN),
            just('K').to(WHITE_KING),
        ))
    }
}

/// A run of squares, where a digit stands for that many empty squares.
pub(crate) fn run_length<'s, T: Clone>(
    it: impl Parser<'s, &'s str, T>,
) -> impl Parser<'s, &'s str, Vec<Option<T>>> {
    choice((
        it.map(|x| vec![Some(x)]),
        one_of("12345678").map(|c: char| vec![None; c as usize - '0' as usize]),
    ))
    .repeated()
    .at_least(1)
    .collect::<Vec<_>>()
    .map(|v| v.concat())
}

/// Read a back rank without judging it, so `"RNBQKBN1"` gives
/// seven officers and a gap.
pub fn parse_squares(s: &str) -> Result<Vec<Option<ChessOfficer>>, SetupError> {
    run_length(ChessOfficer::parser())
        .then_ignore(end())
        .parse(s)
        .into_result()
        .map_err(|_| SetupError::Notation {
            input: s.to_string(),
        })
}

/// Parses and validates, so only the 960 legal back ranks are accepted.
impl FromStr for BackRank {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(validate_squares(&parse_squares(s)?)?)
    }
}

impl TryFrom<String> for BackRank {
    type Error = SetupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BackRank> for String {
    fn from(value: BackRank) -> Self {
        value.to_string()
    }
}

impl Parsable for Chess960Id {
    fn parser<'s>() -> impl Parser<'s, &'s str, Self> {
        chumsky::text::int(10).try_map(|i: &str, _| {
            i.parse::<u16>()
                .ok()
                .and_then(|n| Chess960Id::new(n).ok())
                .ok_or(EmptyErr::default())
        })
    }
}

/// Decimal, `0` to `959`.
impl FromStr for Chess960Id {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parser()
            .then_ignore(end())
            .parse(s.trim())
            .into_result()
            .map_err(|_| SetupError::Notation {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        enumerate::{all, by_id},
        error::{Detail, Rule},
    };

    #[test]
    fn back_rank_strings() {
        assert_eq!(BackRank::CLASSICAL.to_string(), "RNBQKBNR");
        assert_eq!(by_id(0).unwrap().to_string(), "BBQNNRKR");
        assert_eq!(format!("{:#}", BackRank::CLASSICAL), "rnbqkbnr");
        assert_eq!("rnbqkbnr".parse::<BackRank>().unwrap(), BackRank::CLASSICAL);
        for (_, rank) in all() {
            assert_eq!(rank.to_string().parse::<BackRank>().unwrap(), rank);
        }
    }

    #[test]
    fn bad_back_rank_strings() {
        assert!(matches!(
            "RNBQKBNX".parse::<BackRank>(),
            Err(SetupError::Notation { .. })
        ));
        assert!(matches!(
            "RNBQKBN1".parse::<BackRank>(),
            Err(SetupError::Constraint(v)) if v.detail == Detail::Gap { file: crate::model::BoardFile::h_ }
        ));
        assert!(matches!(
            "RNBQKBNRR".parse::<BackRank>(),
            Err(SetupError::Constraint(v)) if v.detail == Detail::Length { found: 9 }
        ));
        assert!(matches!(
            "BRBQKNNR".parse::<BackRank>(),
            Err(SetupError::Constraint(v)) if v.rule == Rule::BISHOP_COLOR
        ));
        assert_eq!(parse_squares("R6R").unwrap().len(), 8);
    }

    #[test]
    fn chessman_letters() {
        assert_eq!(ChessMan::WHITE_KNIGHT.to_string(), "N");
        assert_eq!(ChessMan::BLACK_KING.to_string(), "k");
        assert_eq!(format!("{:#}", ChessMan::BLACK_QUEEN), "♛");
        assert_eq!(Square::g8.to_string(), "g8");
    }

    #[test]
    fn id_strings() {
        assert_eq!("518".parse::<Chess960Id>().ok(), Some(Chess960Id::CLASSICAL));
        assert_eq!(" 0 ".parse::<Chess960Id>().map(Chess960Id::get).ok(), Some(0));
        for bad in ["960", "x", "-1", "51 8", ""] {
            assert!(
                matches!(bad.parse::<Chess960Id>(), Err(SetupError::Notation { .. })),
                "{bad:?}"
            );
        }
        for id in Chess960Id::all() {
            assert_eq!(id.to_string().parse::<Chess960Id>().ok(), Some(id));
        }
    }
}
