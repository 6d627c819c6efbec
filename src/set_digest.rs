// SPDX-License-Identifier: MIT OR Apache-2.0

/// One 32-bit membership vector indexing bits by `(glyph >> SHIFT) & 31`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetBits<const SHIFT: u32> {
    mask: u32,
}

impl<const SHIFT: u32> SetBits<SHIFT> {
    const FULL: Self = Self { mask: u32::MAX };

    #[inline]
    fn mask_for(glyph: u32) -> u32 {
        1 << ((glyph >> SHIFT) & 31)
    }

    pub fn add(&mut self, glyph: u32) {
        self.mask |= Self::mask_for(glyph);
    }

    /// Adds every glyph in `a..=b`.
    ///
    /// Ranges spanning 31 buckets or more saturate the vector. Otherwise the
    /// bit run from bucket `a` to bucket `b` is set in one step, wrapping
    /// around bit 31 when needed.
    pub fn add_range(&mut self, a: u32, b: u32) {
        if self.mask == u32::MAX {
            return;
        }
        if (b >> SHIFT).wrapping_sub(a >> SHIFT) >= 31 {
            self.mask = u32::MAX;
        } else {
            let ma = Self::mask_for(a);
            let mb = Self::mask_for(b);
            self.mask |= mb
                .wrapping_add(mb.wrapping_sub(ma))
                .wrapping_sub(u32::from(mb < ma));
        }
    }

    pub fn may_have(&self, glyph: u32) -> bool {
        self.mask & Self::mask_for(glyph) != 0
    }

    fn may_have_bits(&self, other: &Self) -> bool {
        self.mask & other.mask != 0
    }
}

/// Approximate glyph membership filter.
///
/// Three [`SetBits`] vectors with shifts 4, 0 and 9 are combined; a glyph may be
/// present only if all three agree. Added glyphs always test positive, while
/// glyphs never added may still test positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetDigest {
    low: SetBits<4>,
    mid: SetBits<0>,
    high: SetBits<9>,
}

impl SetDigest {
    /// A digest that answers `true` for every glyph.
    pub const FULL: Self = Self {
        low: SetBits::FULL,
        mid: SetBits::FULL,
        high: SetBits::FULL,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn add(&mut self, glyph: u32) {
        self.low.add(glyph);
        self.mid.add(glyph);
        self.high.add(glyph);
    }

    /// Adds the inclusive range `a..=b`. An inverted range adds nothing.
    pub fn add_range(&mut self, a: u32, b: u32) {
        if a > b {
            return;
        }
        self.low.add_range(a, b);
        self.mid.add_range(a, b);
        self.high.add_range(a, b);
    }

    pub fn add_array(&mut self, glyphs: impl IntoIterator<Item = u32>) {
        for glyph in glyphs {
            self.add(glyph);
        }
    }

    pub fn may_have(&self, glyph: u32) -> bool {
        self.low.may_have(glyph) && self.mid.may_have(glyph) && self.high.may_have(glyph)
    }

    /// Returns `false` only when the two digests cannot share any glyph.
    pub fn may_have_digest(&self, other: &Self) -> bool {
        self.low.may_have_bits(&other.low)
            && self.mid.may_have_bits(&other.mid)
            && self.high.may_have_bits(&other.high)
    }

    pub fn union(&mut self, other: &Self) {
        self.low.mask |= other.low.mask;
        self.mid.mask |= other.mid.mask;
        self.high.mask |= other.high.mask;
    }
}

impl FromIterator<u32> for SetDigest {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut digest = Self::new();
        digest.add_array(iter);
        digest
    }
}

#[cfg(test)]
mod test {
    use super::{SetBits, SetDigest};

    #[test]
    fn range_and_singleton() {
        let mut digest = SetDigest::new();
        digest.add_range(100, 5000);
        digest.add(42);
        assert!(digest.may_have(42));
        assert!(digest.may_have(2500));
        assert!(digest.may_have(100));
        assert!(digest.may_have(5000));
    }

    #[test]
    fn empty_rejects() {
        let digest = SetDigest::new();
        for g in [0, 1, 31, 32, 1000, u32::MAX] {
            assert!(!digest.may_have(g));
        }
    }

    #[test]
    fn no_false_negatives_scattered() {
        let glyphs: Vec<u32> = (0..400).map(|i| i * 7919 % 65536).collect();
        let digest: SetDigest = glyphs.iter().copied().collect();
        for g in glyphs {
            assert!(digest.may_have(g), "glyph {g} lost");
        }
    }

    #[test]
    fn no_false_negatives_ranges() {
        let ranges = [(0, 0), (5, 6), (30, 33), (60, 200), (511, 513), (1000, 1031)];
        for (a, b) in ranges {
            let mut digest = SetDigest::new();
            digest.add_range(a, b);
            for g in a..=b {
                assert!(digest.may_have(g), "range {a}..={b} lost {g}");
            }
        }
    }

    #[test]
    fn wrapping_bit_run() {
        // buckets 30..=33 wrap past bit 31 for shift 0
        let mut bits = SetBits::<0>::default();
        bits.add_range(30, 33);
        for g in 30..=33 {
            assert!(bits.may_have(g));
        }
        assert!(!bits.may_have(5));
    }

    #[test]
    fn wide_range_saturates() {
        let mut bits = SetBits::<0>::default();
        bits.add_range(0, 40);
        assert_eq!(bits, SetBits::<0>::FULL);
    }

    #[test]
    fn localized_cluster_stays_sparse() {
        let mut digest = SetDigest::new();
        digest.add_range(100, 110);
        assert!(!digest.may_have(5000));
        assert!(!digest.may_have(300));
    }

    #[test]
    fn digest_intersection() {
        let mut a = SetDigest::new();
        a.add(10);
        let mut b = SetDigest::new();
        b.add(10);
        assert!(a.may_have_digest(&b));
        let mut c = SetDigest::new();
        c.add(11);
        assert!(!a.may_have_digest(&c));
        a.union(&c);
        assert!(a.may_have(11));
        assert!(SetDigest::FULL.may_have(123_456));
    }
}
