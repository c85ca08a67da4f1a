use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A small set of seat indices, one bit per seat.
///
/// Tables seat at most ten players so a `u16` is plenty.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatSet {
    set: u16,
}

impl SeatSet {
    /// All seats `0..seats` present.
    pub fn new(seats: usize) -> Self {
        let set = ((1u32 << seats) - 1) as u16;
        Self { set }
    }

    pub fn count(&self) -> usize {
        self.set.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.set == 0
    }

    pub fn enable(&mut self, idx: usize) {
        self.set |= 1 << idx;
    }

    pub fn disable(&mut self, idx: usize) {
        self.set &= !(1 << idx);
    }

    pub fn get(&self, idx: usize) -> bool {
        (self.set & (1 << idx)) != 0
    }

    /// The first seat in the set at or after `start`, wrapping
    /// around at `seats`.
    pub fn next_from(&self, start: usize, seats: usize) -> Option<usize> {
        (0..seats)
            .map(|offset| (start + offset) % seats)
            .find(|&idx| self.get(idx))
    }

    pub fn ones(self) -> SeatSetIter {
        SeatSetIter { set: self.set }
    }
}

impl BitOr for SeatSet {
    type Output = SeatSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            set: self.set | rhs.set,
        }
    }
}

impl BitAnd for SeatSet {
    type Output = SeatSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            set: self.set & rhs.set,
        }
    }
}

impl FromIterator<usize> for SeatSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::default();
        for idx in iter {
            set.enable(idx);
        }
        set
    }
}

impl fmt::Debug for SeatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}

pub struct SeatSetIter {
    set: u16,
}

impl Iterator for SeatSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.set == 0 {
            None
        } else {
            // Lowest seat first, then clear it.
            let idx = self.set.trailing_zeros() as usize;
            self.set &= !(1 << idx);
            Some(idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_count() {
        assert_eq!(7, SeatSet::new(7).count());
        assert_eq!(10, SeatSet::new(10).count());
    }

    #[test]
    fn test_default_zero_count() {
        assert!(SeatSet::default().is_empty());
    }

    #[test]
    fn test_enable_disable() {
        let mut s = SeatSet::default();
        s.enable(0);
        s.enable(0);
        assert_eq!(1, s.count());
        s.enable(2);
        assert_eq!(2, s.count());
        s.disable(0);
        assert_eq!(1, s.count());
        assert!(s.get(2));
        assert!(!s.get(0));
    }

    #[test]
    fn test_iter_with_disabled() {
        let mut s = SeatSet::new(3);
        s.disable(0);
        assert_eq!(vec![1, 2], s.ones().collect::<Vec<_>>());
    }

    #[test]
    fn test_next_from_wraps() {
        let s: SeatSet = [1, 4].into_iter().collect();
        assert_eq!(Some(1), s.next_from(0, 6));
        assert_eq!(Some(4), s.next_from(2, 6));
        assert_eq!(Some(1), s.next_from(5, 6));
        assert_eq!(None, SeatSet::default().next_from(0, 6));
    }

    #[test]
    fn test_set_ops() {
        let a: SeatSet = [0, 1].into_iter().collect();
        let b: SeatSet = [1, 2].into_iter().collect();
        assert_eq!(3, (a | b).count());
        assert_eq!(vec![1], (a & b).ones().collect::<Vec<_>>());
    }
}
