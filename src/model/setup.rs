//! # Setting up the board
//!
//! Builds the full starting position for a back rank: white's officers
//! on rank 1 and pawns on rank 2, black's pawns on rank 7 and the same
//! officers by file on rank 8.
//!
//! Random selection lives here rather than in the enumerator. The
//! caller hands in the random number generator, so the same seed
//! always sets up the same game.

use rand::Rng;
use strum::IntoEnumIterator;

use crate::model::{
    BoardFile, BoardRank, ChessColor, ChessMan, DataBoard, Square,
    backrank::{BackRank, CHESS960_COUNT, Chess960Id},
    castling::CastlingRules,
    enumerate::{lookup, unrank},
    error::{NotAValidArrangement, OutOfRange},
    validate::index_of,
};

impl Chess960Id {
    /// Uniformly random id.
    pub fn random(rng: &mut impl Rng) -> Self {
        let id = Self(rng.random_range(0..CHESS960_COUNT));
        tracing::debug!(%id, "picked random chess960 position");
        id
    }
}

/// A Chess960 starting position, both colors and all pawns included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingPosition {
    id: Chess960Id,
    back_rank: BackRank,
    board: DataBoard<Option<ChessMan>>,
    castling: CastlingRules,
}

impl StartingPosition {
    /// The position with the given canonical id.
    pub fn new(id: Chess960Id) -> Self {
        Self::build(id, lookup(id))
    }

    /// Checked version of [`StartingPosition::new`].
    pub fn from_id(id: u16) -> Result<Self, OutOfRange> {
        Chess960Id::new(id).map(Self::new)
    }

    /// The position for an externally supplied back rank.
    pub fn from_back_rank(back_rank: BackRank) -> Result<Self, NotAValidArrangement> {
        let id = index_of(&back_rank)?;
        Ok(Self::build(id, back_rank))
    }

    /// Position 518, the starting position of classical chess.
    pub fn classical() -> Self {
        Self::build(Chess960Id::CLASSICAL, unrank(Chess960Id::CLASSICAL))
    }

    /// A uniformly random position.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(Chess960Id::random(rng))
    }

    fn build(id: Chess960Id, back_rank: BackRank) -> Self {
        let mut board = DataBoard::new(None);

        for col in [ChessColor::WHITE, ChessColor::BLACK] {
            let men = back_rank.men(col);
            for f in BoardFile::iter() {
                board.set(
                    Square::from_coords(f, BoardRank::back_rank(col)),
                    Some(men[f.ix()]),
                );
                board.set(
                    Square::from_coords(f, BoardRank::pawn_rank(col)),
                    Some(ChessMan::pawn(col)),
                );
            }
        }

        Self {
            id,
            back_rank,
            board,
            castling: CastlingRules::chess_960(&back_rank),
        }
    }

    /// Canonical id of this position.
    pub fn id(&self) -> Chess960Id {
        self.id
    }

    /// White's back rank, which black's mirrors.
    pub fn back_rank(&self) -> &BackRank {
        &self.back_rank
    }

    /// All 64 squares.
    pub fn board(&self) -> &DataBoard<Option<ChessMan>> {
        &self.board
    }

    /// Castling geometry of this position.
    pub fn castling(&self) -> &CastlingRules {
        &self.castling
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::model::{ChessOfficer, enumerate::all};

    #[test]
    fn classical_board() {
        let pos = StartingPosition::classical();
        assert_eq!(pos.id().get(), 518);
        assert_eq!(*pos.board().get(Square::e1), Some(ChessMan::WHITE_KING));
        assert_eq!(*pos.board().get(Square::d8), Some(ChessMan::BLACK_QUEEN));
        assert_eq!(*pos.board().get(Square::c2), Some(ChessMan::WHITE_PAWN));
        assert_eq!(*pos.board().get(Square::f7), Some(ChessMan::BLACK_PAWN));
        assert_eq!(*pos.board().get(Square::e4), None);
        assert_eq!(pos.castling(), &CastlingRules::STANDARD);
    }

    #[test]
    fn mirrored_ranks() {
        for (id, _) in all() {
            let pos = StartingPosition::new(id);
            let white = pos.board().rank(BoardRank::_1);
            let black = pos.board().rank(BoardRank::_8);
            for (w, b) in white.iter().zip(black) {
                let (w, b) = (w.unwrap(), b.unwrap());
                assert_eq!(w.off(), b.off());
                assert_eq!(w.col(), ChessColor::WHITE);
                assert_eq!(b, w.opp());
            }
            for r in [BoardRank::_3, BoardRank::_4, BoardRank::_5, BoardRank::_6] {
                assert!(pos.board().rank(r).iter().all(Option::is_none));
            }
        }
    }

    #[test]
    fn bishops_on_both_colors() {
        for (id, _) in all() {
            let pos = StartingPosition::new(id);
            let light: Vec<bool> = pos
                .back_rank()
                .files_of(ChessOfficer::BISHOP)
                .map(|f| Square::from_coords(f, BoardRank::_1).is_light())
                .collect();
            assert_eq!(light.len(), 2);
            assert_ne!(light[0], light[1]);
        }
    }

    #[test]
    fn from_back_rank_checks() {
        assert_eq!(
            StartingPosition::from_back_rank(BackRank::CLASSICAL),
            Ok(StartingPosition::classical())
        );
        let mut bad = BackRank::CLASSICAL;
        bad.0.swap(0, 4);
        assert!(StartingPosition::from_back_rank(bad).is_err());
        assert_eq!(StartingPosition::from_id(960), Err(OutOfRange { id: 960 }));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = StartingPosition::random(&mut SmallRng::seed_from_u64(7));
        let b = StartingPosition::random(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);

        let mut rng = SmallRng::seed_from_u64(960);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..4000 {
            seen.insert(Chess960Id::random(&mut rng));
        }
        assert!(seen.len() > 900);
    }

    #[test]
    fn random_ids_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(518);
        for _ in 0..2000 {
            let id = Chess960Id::random(&mut rng);
            assert_eq!(Chess960Id::new(id.get()), Ok(id));
        }
    }
}
