//! # Position Validator
//!
//! Checks an arbitrary back rank against the Chess960 rules, and ranks
//! legal ones back into their canonical id. Nothing here goes through
//! the enumerator: arrangements read from a stored game or built by hand
//! are judged on the rules alone.
//!
//! The rules are checked in a fixed order and the first broken one is
//! reported:
//!
//! 1. full rank: eight squares, no gaps, two knights, two bishops,
//!    two rooks, one queen, one king,
//! 2. bishop color: one bishop on an odd file, one on an even file,
//! 3. king between rooks: the king's file strictly between the rooks'.

use strum::{IntoEnumIterator, VariantArray};

use crate::model::{
    BoardFile, ChessOfficer,
    backrank::{BackRank, Chess960Id, KNIGHT_PAIRS},
    error::{ConstraintViolation, Detail, NotAValidArrangement, Rule},
};

/// Check a back rank against all three rules.
pub fn validate(rank: &BackRank) -> Result<(), ConstraintViolation> {
    check(rank).map(|_| ())
}

/// Check a rank that may be short, long, or have empty squares.
///
/// On success the squares are returned as a [`BackRank`].
pub fn validate_squares(squares: &[Option<ChessOfficer>]) -> Result<BackRank, ConstraintViolation> {
    if squares.len() != 8 {
        return Err(ConstraintViolation {
            rule: Rule::FULL_RANK,
            detail: Detail::Length {
                found: squares.len(),
            },
        });
    }

    let mut res = [ChessOfficer::KING; 8];
    for (ix, sq) in squares.iter().enumerate() {
        res[ix] = sq.ok_or(ConstraintViolation {
            rule: Rule::FULL_RANK,
            detail: Detail::Gap {
                file: BoardFile::from_u8(ix as u8),
            },
        })?;
    }

    let res = BackRank(res);
    validate(&res)?;
    Ok(res)
}

/// The canonical id of a legal back rank.
///
/// This is the inverse of [`by_id`](crate::model::enumerate::by_id).
pub fn index_of(rank: &BackRank) -> Result<Chess960Id, NotAValidArrangement> {
    let placement = check(rank)?;

    let [b1, b2] = placement.of(ChessOfficer::BISHOP);
    let (light, dark) = if b1.is_light() { (b1, b2) } else { (b2, b1) };
    let [queen, _] = placement.of(ChessOfficer::QUEEN);

    // Index of a file among those not taken by the officers placed earlier.
    let free_ix = |f: BoardFile, taken: &[BoardFile]| {
        f as u8 - taken.iter().filter(|&&t| t < f).count() as u8
    };
    let q = free_ix(queen, &[b1, b2]);
    let [n1, n2] = placement.of(ChessOfficer::KNIGHT);
    let k1 = free_ix(n1, &[b1, b2, queen]);
    let k2 = free_ix(n2, &[b1, b2, queen]);

    // The pairs are listed in lexicographic order.
    let knights = (0..k1).map(|i| 4 - i).sum::<u8>() + (k2 - k1 - 1);
    debug_assert_eq!(KNIGHT_PAIRS[knights as usize], (k1, k2));

    Ok(Chess960Id::from_digits(
        light as u8 / 2,
        dark as u8 / 2,
        q,
        knights,
    ))
}

/// Files of each officer, ascending, indexed by [`ChessOfficer::ix`].
/// Only built for ranks with the full census, so every slot is filled.
struct Placement([[BoardFile; 2]; 5]);

impl Placement {
    fn of(&self, off: ChessOfficer) -> [BoardFile; 2] {
        self.0[off.ix()]
    }
}

fn check(rank: &BackRank) -> Result<Placement, ConstraintViolation> {
    let placement = full_rank(rank)?;
    bishop_color(&placement)?;
    king_between_rooks(&placement)?;
    Ok(placement)
}

fn full_rank(rank: &BackRank) -> Result<Placement, ConstraintViolation> {
    let mut files = [[BoardFile::a_; 2]; 5];
    let mut census = [0u8; 5];
    for f in BoardFile::iter() {
        let ix = rank[f].ix();
        // The king and queen sit in both slots.
        if census[ix] == 0 {
            files[ix] = [f, f];
        } else {
            files[ix][1] = f;
        }
        census[ix] += 1;
    }

    for &off in ChessOfficer::VARIANTS {
        let (expected, found) = (off.count(), census[off.ix()]);
        if expected != found {
            return Err(ConstraintViolation {
                rule: Rule::FULL_RANK,
                detail: Detail::Count {
                    piece: off,
                    expected,
                    found,
                },
            });
        }
    }
    Ok(Placement(files))
}

fn bishop_color(placement: &Placement) -> Result<(), ConstraintViolation> {
    let files = placement.of(ChessOfficer::BISHOP);
    if files[0].is_light() == files[1].is_light() {
        return Err(ConstraintViolation {
            rule: Rule::BISHOP_COLOR,
            detail: Detail::SameColor { files },
        });
    }
    Ok(())
}

fn king_between_rooks(placement: &Placement) -> Result<(), ConstraintViolation> {
    let rooks = placement.of(ChessOfficer::ROOK);
    let [king, _] = placement.of(ChessOfficer::KING);
    if !(rooks[0] < king && king < rooks[1]) {
        return Err(ConstraintViolation {
            rule: Rule::KING_BETWEEN_ROOKS,
            detail: Detail::KingOutside { king, rooks },
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::enumerate::{all, by_id};

    use crate::model::ChessOfficer::*;

    #[test]
    fn classical_is_valid() {
        assert_eq!(validate(&BackRank::CLASSICAL), Ok(()));
        assert_eq!(index_of(&BackRank::CLASSICAL), Ok(Chess960Id::CLASSICAL));
    }

    #[test]
    fn same_color_bishops() {
        let rank = BackRank([BISHOP, ROOK, BISHOP, QUEEN, KING, KNIGHT, KNIGHT, ROOK]);
        assert_eq!(
            validate(&rank),
            Err(ConstraintViolation {
                rule: Rule::BISHOP_COLOR,
                detail: Detail::SameColor {
                    files: [BoardFile::a_, BoardFile::c_]
                },
            })
        );
    }

    #[test]
    fn king_outside_rooks() {
        let rank = BackRank([KING, ROOK, BISHOP, QUEEN, ROOK, BISHOP, KNIGHT, KNIGHT]);
        assert_eq!(
            validate(&rank),
            Err(ConstraintViolation {
                rule: Rule::KING_BETWEEN_ROOKS,
                detail: Detail::KingOutside {
                    king: BoardFile::a_,
                    rooks: [BoardFile::b_, BoardFile::e_]
                },
            })
        );
    }

    #[test]
    fn missing_rook() {
        let rank = BackRank([ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, QUEEN]);
        let err = index_of(&rank).unwrap_err();
        assert_eq!(err.rule(), Rule::FULL_RANK);
        assert_eq!(
            err.0.detail,
            Detail::Count {
                piece: ROOK,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn first_failure_wins() {
        // Same-color bishops and a king outside the rooks, but a third
        // knight is reported first.
        let rank = BackRank([BISHOP, KING, BISHOP, ROOK, ROOK, KNIGHT, KNIGHT, KNIGHT]);
        assert_eq!(validate(&rank).unwrap_err().rule, Rule::FULL_RANK);

        let rank = BackRank([BISHOP, KING, BISHOP, ROOK, ROOK, KNIGHT, KNIGHT, QUEEN]);
        assert_eq!(validate(&rank).unwrap_err().rule, Rule::BISHOP_COLOR);
    }

    #[test]
    fn gaps_and_lengths() {
        let mut squares = BackRank::CLASSICAL.0.map(Some);
        assert_eq!(validate_squares(&squares), Ok(BackRank::CLASSICAL));

        squares[3] = None;
        assert_eq!(
            validate_squares(&squares).unwrap_err().detail,
            Detail::Gap { file: BoardFile::d_ }
        );
        assert_eq!(
            validate_squares(&squares[..7]).unwrap_err().detail,
            Detail::Length { found: 7 }
        );
    }

    #[test]
    fn round_trips() {
        for n in 0..960 {
            let rank = by_id(n).unwrap();
            assert_eq!(index_of(&rank).map(Chess960Id::get), Ok(n));
        }
        for (id, rank) in all() {
            assert_eq!(by_id(index_of(&rank).unwrap().get()), Ok(rank));
            assert_eq!(index_of(&rank), Ok(id));
        }
    }

    #[test]
    fn exactly_960_valid_ranks() {
        // Brute force over every ordering of the eight officers.
        fn permute(rest: &mut Vec<ChessOfficer>, cur: &mut Vec<ChessOfficer>, out: &mut usize) {
            if rest.is_empty() {
                let rank = BackRank(cur.as_slice().try_into().unwrap());
                if validate(&rank).is_ok() {
                    *out += 1;
                }
                return;
            }
            let mut seen = Vec::new();
            for i in 0..rest.len() {
                if seen.contains(&rest[i]) {
                    continue;
                }
                seen.push(rest[i]);
                let off = rest.remove(i);
                cur.push(off);
                permute(rest, cur, out);
                cur.pop();
                rest.insert(i, off);
            }
        }

        let mut count = 0;
        permute(&mut BackRank::CLASSICAL.0.to_vec(), &mut vec![], &mut count);
        assert_eq!(count, 960);
    }
}
