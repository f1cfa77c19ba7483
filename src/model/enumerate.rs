//! # Position Enumerator
//!
//! Unranking of canonical ids into back ranks. See the
//! [`backrank`](crate::model::backrank) module for the numbering scheme.

use std::sync::LazyLock;

use crate::model::{
    ChessOfficer,
    backrank::{BackRank, CHESS960_COUNT, Chess960Id, KNIGHT_PAIRS},
    error::OutOfRange,
};

/// The back rank with the given canonical id.
pub fn by_id(id: u16) -> Result<BackRank, OutOfRange> {
    Chess960Id::new(id).map(unrank)
}

/// The back rank of an already checked id.
///
/// A handful of fixed steps: the bishops go straight to their files,
/// the rest are dropped into the n-th free file left to right.
pub fn unrank(id: Chess960Id) -> BackRank {
    use ChessOfficer::*;

    let (light, dark, queen, knights) = id.digits();
    let mut rank = [ROOK; 8];
    rank[2 * light as usize + 1] = BISHOP;
    rank[2 * dark as usize] = BISHOP;

    let mut free: Vec<usize> = (0..8).filter(|&f| rank[f] != BISHOP).collect();
    place(&mut rank, &mut free, queen, QUEEN);

    // The second knight is counted among the free files
    // left after the first knight is placed.
    let (k1, k2) = KNIGHT_PAIRS[knights as usize];
    place(&mut rank, &mut free, k1, KNIGHT);
    place(&mut rank, &mut free, k2 - 1, KNIGHT);

    // Three files remain and the rooks already stand on them,
    // so the king goes in the middle.
    debug_assert_eq!(free.len(), 3);
    rank[free[1]] = KING;

    BackRank(rank)
}

/// Put an officer on the n-th free file, counting from the a-file.
fn place(rank: &mut [ChessOfficer; 8], free: &mut Vec<usize>, n: u8, off: ChessOfficer) {
    rank[free.remove(n as usize)] = off;
}

/// Every legal back rank, in increasing canonical id order.
///
/// Each call starts over from id 0.
pub fn all() -> Catalogue {
    Catalogue { next: 0, end: CHESS960_COUNT }
}

/// Lazy iterator over the 960 back ranks, see [`all`].
#[derive(Debug, Clone)]
pub struct Catalogue {
    next: u16,
    end: u16,
}

impl Iterator for Catalogue {
    type Item = (Chess960Id, BackRank);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let id = Chess960Id(self.next);
        self.next += 1;
        Some((id, unrank(id)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.next) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Catalogue {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        let id = Chess960Id(self.end);
        Some((id, unrank(id)))
    }
}

impl ExactSizeIterator for Catalogue {}

static CATALOGUE: LazyLock<[BackRank; CHESS960_COUNT as usize]> = LazyLock::new(|| {
    tracing::debug!("building chess960 catalogue");
    std::array::from_fn(|ix| unrank(Chess960Id(ix as u16)))
});

/// The full table of back ranks, indexed by canonical id.
///
/// Built from [`unrank`] on first use and shared afterwards.
pub fn catalogue() -> &'static [BackRank; CHESS960_COUNT as usize] {
    &CATALOGUE
}

/// Table lookup, equivalent to [`unrank`].
#[inline]
pub fn lookup(id: Chess960Id) -> BackRank {
    catalogue()[id.get() as usize]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::{BoardFile, validate::validate};

    fn rank(s: &str) -> BackRank {
        use crate::model::ChessOfficer::*;
        let mut res = [ROOK; 8];
        for (i, c) in s.chars().enumerate() {
            res[i] = match c {
                'N' => KNIGHT,
                'B' => BISHOP,
                'R' => ROOK,
                'Q' => QUEEN,
                'K' => KING,
                _ => panic!("bad officer letter {c}"),
            };
        }
        BackRank(res)
    }

    #[test]
    fn reference_positions() {
        assert_eq!(by_id(0), Ok(rank("BBQNNRKR")));
        assert_eq!(by_id(1), Ok(rank("BQNBNRKR")));
        assert_eq!(by_id(518), Ok(BackRank::CLASSICAL));
        assert_eq!(by_id(959), Ok(rank("RKRNNQBB")));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(by_id(960), Err(OutOfRange { id: 960 }));
        assert_eq!(by_id(u16::MAX), Err(OutOfRange { id: u16::MAX }));
    }

    #[test]
    fn catalogue_is_complete_and_distinct() {
        let ranks: Vec<_> = all().collect();
        assert_eq!(ranks.len(), 960);

        let distinct: HashSet<BackRank> = ranks.iter().map(|(_, r)| *r).collect();
        assert_eq!(distinct.len(), 960);

        for (i, (id, rank)) in ranks.iter().enumerate() {
            assert_eq!(id.get() as usize, i);
            assert_eq!(validate(rank), Ok(()), "id {id} gave {rank:?}");
        }
    }

    #[test]
    fn catalogue_restarts() {
        let mut first = all();
        first.nth(100);
        assert_eq!(first.len(), 859);
        assert_eq!(all().len(), 960);
        assert!(all().eq(all()));
        assert_eq!(all().next_back().map(|(id, _)| id.get()), Some(959));
    }

    #[test]
    fn produced_ranks_keep_the_rules() {
        for (_, rank) in all() {
            assert_eq!(rank.census(), [2, 2, 2, 1, 1]);

            let b: Vec<BoardFile> = rank.files_of(ChessOfficer::BISHOP).collect();
            assert_ne!(b[0].is_light(), b[1].is_light());

            let r: Vec<BoardFile> = rank.files_of(ChessOfficer::ROOK).collect();
            let k = rank.files_of(ChessOfficer::KING).next().unwrap();
            assert!(r[0] < k && k < r[1]);
        }
    }

    #[test]
    fn lookup_matches_unrank() {
        let table: &[BackRank; 960] = catalogue();
        assert_eq!(table[518], BackRank::CLASSICAL);
        for id in Chess960Id::all() {
            assert_eq!(lookup(id), unrank(id));
        }
    }

    #[test]
    fn every_knight_pair_is_reached() {
        for (k, &(k1, k2)) in KNIGHT_PAIRS.iter().enumerate() {
            let rank = unrank(Chess960Id::from_digits(0, 0, 0, k as u8));
            let knights: Vec<BoardFile> = rank.files_of(ChessOfficer::KNIGHT).collect();
            // Bishops on a and b, queen on c, so the free files start at d.
            assert_eq!(
                knights,
                [BoardFile::from_u8(3 + k1), BoardFile::from_u8(3 + k2)]
            );
        }
    }
}
