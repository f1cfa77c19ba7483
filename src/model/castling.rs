use crate::model::{
    BoardFile, BoardRank, CastlingDirection, ChessColor, ChessOfficer, Square,
    backrank::BackRank,
};

/// Representation of castling.
///
/// This struct is a data representation of the castling moves,
/// for the purposes of randomized chess variants such as Chess960.
///
/// The arrays are given as first indexed by color, then by direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastlingRules {
    /// Starting squares of the rooks
    pub rook_start: [[Square; 2]; 2],
    /// Ending squares of the rooks
    pub rook_end: [[Square; 2]; 2],
    /// Starting square of the king (there's only one)
    pub king_start: [Square; 2],
    /// Ending squares of the king
    pub king_end: [[Square; 2]; 2],
    /// Moves should generate with castling being a capture of
    /// one's own rook, rather than a 2-square move of the king
    pub capture_own_rook: bool,
}

impl CastlingRules {
    pub const STANDARD: CastlingRules = CastlingRules {
        rook_start: [[Square::a1, Square::h1], [Square::a8, Square::h8]],
        rook_end: [[Square::d1, Square::f1], [Square::d8, Square::f8]],
        king_start: [Square::e1, Square::e8],
        king_end: [[Square::c1, Square::g1], [Square::c8, Square::g8]],
        capture_own_rook: false,
    };

    /// Castling for a Chess960 back rank.
    ///
    /// The end squares are those of classical chess no matter where the
    /// king and rooks started. Only the classical arrangement keeps
    /// castling as a two-square king move.
    ///
    /// The arrangement is expected to be valid; an arrangement with a
    /// missing king or rook falls back to the a-file for it.
    pub fn chess_960(starting_array: &BackRank) -> Self {
        if *starting_array == BackRank::CLASSICAL {
            return Self::STANDARD;
        }

        let mut rooks = starting_array.files_of(ChessOfficer::ROOK);
        let east = rooks.next().unwrap_or(BoardFile::a_);
        let west = rooks.next().unwrap_or(east);
        let king = starting_array
            .files_of(ChessOfficer::KING)
            .next()
            .unwrap_or(BoardFile::a_);

        let on = |f: BoardFile| {
            [ChessColor::WHITE, ChessColor::BLACK]
                .map(|col| Square::from_coords(f, BoardRank::back_rank(col)))
        };
        let pair = |e: BoardFile, w: BoardFile| {
            let (e, w) = (on(e), on(w));
            [[e[0], w[0]], [e[1], w[1]]]
        };

        Self {
            rook_start: pair(east, west),
            rook_end: pair(BoardFile::d_, BoardFile::f_),
            king_start: on(king),
            king_end: pair(BoardFile::c_, BoardFile::g_),
            capture_own_rook: true,
        }
    }

    /// The rook starting file with castling rights in the given direction.
    pub fn rook_file(&self, dir: CastlingDirection) -> BoardFile {
        self.rook_start[ChessColor::WHITE.ix()][dir.ix()].coords().0
    }
}

#[test]
fn classical_castling() {
    assert_eq!(
        CastlingRules::chess_960(&BackRank::CLASSICAL),
        CastlingRules::STANDARD
    );
}

#[test]
fn chess960_castling() {
    use crate::model::enumerate::by_id;

    // BBQNNRKR
    let rules = CastlingRules::chess_960(&by_id(0).unwrap());
    assert_eq!(rules.rook_start, [[Square::f1, Square::h1], [Square::f8, Square::h8]]);
    assert_eq!(rules.king_start, [Square::g1, Square::g8]);
    assert_eq!(rules.king_end, CastlingRules::STANDARD.king_end);
    assert_eq!(rules.rook_end, CastlingRules::STANDARD.rook_end);
    assert_eq!(rules.rook_file(CastlingDirection::EAST), BoardFile::f_);
    assert!(rules.capture_own_rook);
}
