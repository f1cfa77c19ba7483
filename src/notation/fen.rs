//! # Forsyth-Edwards Notation for starting positions
//!
//! FEN is the standard way of representing a chess position
//! in standard chess. It consists of six fields separated by whitespace:
//!
//! - The chessboard
//! - The active player
//! - The castling rights
//! - The en-passant square (if applicable)
//! - The half-move clock
//! - The turn number
//!
//! The chessboard is written out as eight solidus-separated (`/`) ranks,
//! starting with the 8th rank, and then in descending order. Empty squares
//! are run-length encoded as digits.
//!
//! Only starting positions are handled here, so the last four fields are
//! always `w`, all four castling rights, `-`, `0` and `1`. Castling rights
//! come in two flavors:
//!
//! - X-FEN, `KQkq`, naming the outermost rook on each side,
//! - Shredder-FEN, naming the rook files directly, `HAha` for classical chess.
//!
//! Thus the FEN string of the standard starting position in chess is:
//! ```text
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
//! ```

use std::fmt::Write;

use chumsky::{error::EmptyErr, prelude::*};
use strum::IntoEnumIterator;

use crate::{
    model::{
        BoardRank, CastlingDirection, ChessColor, ChessMan, DataBoard,
        error::SetupError, setup::StartingPosition, validate::validate_squares,
    },
    notation::{Parsable, run_length},
};

/// The fields of a FEN record, before any judgement about
/// whether they make up a starting position.
#[derive(Debug, Clone)]
struct FenFields<'s> {
    board: Vec<Vec<Option<ChessMan>>>,
    to_move: ChessColor,
    castling: String,
    en_passant: &'s str,
    halfmove_clock: u16,
    turn: u16,
}

impl StartingPosition {
    /// FEN with X-FEN castling rights, `KQkq`.
    pub fn fen(&self) -> String {
        format!("{} w KQkq - 0 1", board_field(self.board()))
    }

    /// FEN with Shredder-FEN castling rights, such as `HAha`.
    pub fn shredder_fen(&self) -> String {
        format!(
            "{} w {} - 0 1",
            board_field(self.board()),
            self.shredder_castling()
        )
    }

    fn shredder_castling(&self) -> String {
        let [east, west] =
            [CastlingDirection::EAST, CastlingDirection::WEST].map(|dir| self.castling().rook_file(dir));
        [west, east]
            .map(|f| f.letter().to_ascii_uppercase())
            .into_iter()
            .chain([west.letter(), east.letter()])
            .collect()
    }

    /// Decode a starting position from FEN.
    ///
    /// The record must describe a Chess960 start: full pawn ranks,
    /// the black officers mirroring the white ones, a legal white back
    /// rank, white to move, every castling right, no en-passant square
    /// and fresh clocks.
    pub fn from_fen(s: &str) -> Result<Self, SetupError> {
        let fields = fen_fields()
            .parse(s.trim())
            .into_result()
            .map_err(|_| SetupError::Notation {
                input: s.to_string(),
            })?;

        let not_start = |reason| Err(SetupError::NotAStartingPosition { reason });

        if fields.board.iter().any(|rank| rank.len() != 8) {
            return not_start("every rank must have eight squares");
        }

        // The board is written from the 8th rank down.
        let rank = |r: BoardRank| &fields.board[7 - r as usize];

        let white = rank(BoardRank::_1)
            .iter()
            .map(|sq| match sq {
                Some(cm) if cm.col().is_white() => cm.off(),
                _ => None,
            })
            .collect::<Vec<_>>();
        if rank(BoardRank::_1)
            .iter()
            .zip(&white)
            .any(|(sq, off)| sq.is_some() && off.is_none())
        {
            return not_start("the first rank may only hold white officers");
        }
        let back_rank = validate_squares(&white)?;

        let mirrored = back_rank.men(ChessColor::BLACK).map(Some);
        if rank(BoardRank::_8) != mirrored.as_slice() {
            return not_start("the eighth rank must mirror the first rank");
        }

        for col in [ChessColor::WHITE, ChessColor::BLACK] {
            let pawn = Some(ChessMan::pawn(col));
            if rank(BoardRank::pawn_rank(col)).iter().any(|sq| *sq != pawn) {
                return not_start("pawns must fill the second and seventh ranks");
            }
        }
        for r in [BoardRank::_3, BoardRank::_4, BoardRank::_5, BoardRank::_6] {
            if rank(r).iter().any(Option::is_some) {
                return not_start("the middle ranks must be empty");
            }
        }

        if fields.to_move != ChessColor::WHITE {
            return not_start("white moves first");
        }
        if fields.en_passant != "-" {
            return not_start("no en-passant capture is possible at the start");
        }
        if (fields.halfmove_clock, fields.turn) != (0, 1) {
            return not_start("clocks must read 0 1");
        }

        let pos = Self::from_back_rank(back_rank)?;

        let mut castling: Vec<char> = fields.castling.chars().collect();
        castling.sort_unstable();
        let mut xfen: Vec<char> = "KQkq".chars().collect();
        xfen.sort_unstable();
        let mut shredder: Vec<char> = pos.shredder_castling().chars().collect();
        shredder.sort_unstable();
        if castling != xfen && castling != shredder {
            return not_start("every castling right must be present");
        }

        Ok(pos)
    }
}

/// The first FEN field, ranks 8 down to 1.
fn board_field(board: &DataBoard<Option<ChessMan>>) -> String {
    let mut res = String::new();
    for r in BoardRank::iter().rev() {
        let mut empty = 0;
        for sq in board.rank(r) {
            match sq {
                Some(cm) => {
                    if empty > 0 {
                        let _ = write!(res, "{empty}");
                        empty = 0;
                    }
                    let _ = write!(res, "{cm}");
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            let _ = write!(res, "{empty}");
        }
        if r != BoardRank::_1 {
            res.push('/');
        }
    }
    res
}

fn fen_fields<'s>() -> impl Parser<'s, &'s str, FenFields<'s>> {
    fen_board()
        .then_ignore(fen_space())
        .then(fen_color())
        .then_ignore(fen_space())
        .then(fen_castling())
        .then_ignore(fen_space())
        .then(fen_field())
        .then_ignore(fen_space())
        .then(fen_number())
        .then_ignore(fen_space())
        .then(fen_number())
        .then_ignore(end())
        .map(
            |(((((board, to_move), castling), en_passant), halfmove_clock), turn)| FenFields {
                board,
                to_move,
                castling,
                en_passant,
                halfmove_clock,
                turn,
            },
        )
}

fn fen_board<'s>() -> impl Parser<'s, &'s str, Vec<Vec<Option<ChessMan>>>> {
    run_length(ChessMan::parser())
        .separated_by(just('/'))
        .exactly(8)
        .collect()
}

fn fen_space<'s>() -> impl Parser<'s, &'s str, ()> {
    just(' ').repeated().at_least(1).ignored()
}

fn fen_color<'s>() -> impl Parser<'s, &'s str, ChessColor> {
    choice((
        just('w').to(ChessColor::WHITE),
        just('b').to(ChessColor::BLACK),
    ))
}

fn fen_castling<'s>() -> impl Parser<'s, &'s str, String> {
    choice((
        just('-').to(String::new()),
        one_of("KQkqABCDEFGHabcdefgh")
            .repeated()
            .at_least(1)
            .at_most(4)
            .collect::<String>(),
    ))
}

fn fen_field<'s>() -> impl Parser<'s, &'s str, &'s str> {
    none_of(" ").repeated().at_least(1).to_slice()
}

fn fen_number<'s>() -> impl Parser<'s, &'s str, u16> {
    chumsky::text::int(10).try_map(|i: &str, _| i.parse::<u16>().map_err(|_| EmptyErr::default()))
}
