// SPDX-License-Identifier: MIT OR Apache-2.0

//! Syllable segmentation.
//!
//! Each syllable grammar is written as a set-of-positions matcher: every
//! combinator maps the set of offsets reachable so far to the set reachable
//! after it, so optional and repeated parts need no backtracking and the
//! longest match falls out as the largest reachable offset.

use super::{category as cat, flag};
use crate::Buffer;

/// Kind of a syllable, stored in the low nibble of the syllable byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub(crate) enum SyllableType {
    ConsonantSyllable = 0,
    VowelSyllable = 1,
    StandaloneCluster = 2,
    SymbolCluster = 3,
    BrokenCluster = 4,
    NonIndicCluster = 5,
}

impl SyllableType {
    pub(crate) fn of(syllable: u8) -> Option<Self> {
        Some(match syllable & 0x0F {
            0 => Self::ConsonantSyllable,
            1 => Self::VowelSyllable,
            2 => Self::StandaloneCluster,
            3 => Self::SymbolCluster,
            4 => Self::BrokenCluster,
            5 => Self::NonIndicCluster,
            _ => return None,
        })
    }
}

/// Tags every glyph with its syllable: serial in the high nibble, type in
/// the low one. Serials run 1..=15 and wrap.
pub(crate) fn find_syllables(buffer: &mut Buffer) {
    let categories: Vec<u8> = buffer
        .info()
        .iter()
        .map(|info| info.complex_category)
        .collect();

    let mut serial: u8 = 1;
    let mut start = 0;
    while start < categories.len() {
        let (kind, len) = match_syllable(&categories[start..]);
        let end = start + len;
        for info in &mut buffer.info[start..end] {
            info.syllable = serial << 4 | kind as u8;
        }
        serial += 1;
        if serial == 16 {
            serial = 1;
        }
        start = end;
    }

    log::trace!("indic syllables: {} glyphs", categories.len());
}

/// Longest syllable at the start of `categories`. Equal lengths resolve in
/// declaration order of [`SyllableType`].
fn match_syllable(categories: &[u8]) -> (SyllableType, usize) {
    let m = Matcher { categories };
    let candidates = [
        (SyllableType::ConsonantSyllable, m.consonant_syllable()),
        (SyllableType::VowelSyllable, m.vowel_syllable()),
        (SyllableType::StandaloneCluster, m.standalone_cluster()),
        (SyllableType::SymbolCluster, m.symbol_cluster()),
        (SyllableType::BrokenCluster, m.broken_cluster()),
    ];

    let mut best = (SyllableType::NonIndicCluster, 1);
    let mut best_len = 0;
    for (kind, ends) in candidates {
        let len = ends.last().copied().unwrap_or(0);
        if len > best_len {
            best = (kind, len);
            best_len = len;
        }
    }
    best
}

/// Sorted, deduplicated offsets.
type Positions = Vec<usize>;

fn union(a: &[usize], b: &[usize]) -> Positions {
    let mut out: Positions = a.iter().chain(b).copied().collect();
    out.sort_unstable();
    out.dedup();
    out
}

struct Matcher<'a> {
    categories: &'a [u8],
}

impl Matcher<'_> {
    /// One glyph whose category is in `set`.
    fn one(&self, from: &[usize], set: u32) -> Positions {
        from.iter()
            .filter(|&&p| {
                self.categories
                    .get(p)
                    .is_some_and(|&category| flag(category) & set != 0)
            })
            .map(|p| p + 1)
            .collect()
    }

    fn opt(&self, from: &[usize], f: impl Fn(&[usize]) -> Positions) -> Positions {
        union(from, &f(from))
    }

    fn star(&self, from: &[usize], f: impl Fn(&[usize]) -> Positions) -> Positions {
        let mut all = from.to_vec();
        let mut frontier = from.to_vec();
        loop {
            let next: Positions = f(&frontier)
                .into_iter()
                .filter(|p| all.binary_search(p).is_err())
                .collect();
            if next.is_empty() {
                return all;
            }
            all = union(&all, &next);
            frontier = next;
        }
    }

    fn c(&self, from: &[usize]) -> Positions {
        self.one(from, flag(cat::C) | flag(cat::RA))
    }

    /// `(ZWNJ? RS)? (N N?)?`
    fn n(&self, from: &[usize]) -> Positions {
        let rs = self.opt(from, |p| {
            let zwnj = self.opt(p, |p| self.one(p, flag(cat::ZWNJ)));
            self.one(&zwnj, flag(cat::RS))
        });
        self.opt(&rs, |p| {
            let nukta = self.one(p, flag(cat::N));
            self.opt(&nukta, |p| self.one(p, flag(cat::N)))
        })
    }

    fn z(&self, from: &[usize]) -> Positions {
        self.one(from, flag(cat::ZWJ) | flag(cat::ZWNJ))
    }

    /// `Ra H | Repha`
    fn reph(&self, from: &[usize]) -> Positions {
        let ra = self.one(from, flag(cat::RA));
        union(
            &self.one(&ra, flag(cat::H)),
            &self.one(from, flag(cat::REPHA)),
        )
    }

    /// `c ZWJ? n`
    fn cn(&self, from: &[usize]) -> Positions {
        let c = self.c(from);
        let zwj = self.opt(&c, |p| self.one(p, flag(cat::ZWJ)));
        self.n(&zwj)
    }

    /// `ZWJ H ZWJ Ra`
    fn forced_rakar(&self, from: &[usize]) -> Positions {
        let p = self.one(from, flag(cat::ZWJ));
        let p = self.one(&p, flag(cat::H));
        let p = self.one(&p, flag(cat::ZWJ));
        self.one(&p, flag(cat::RA))
    }

    /// `z* M N? (H | forced_rakar)?`
    fn matra_group(&self, from: &[usize]) -> Positions {
        let p = self.star(from, |p| self.z(p));
        let p = self.one(&p, flag(cat::M));
        let p = self.opt(&p, |p| self.one(p, flag(cat::N)));
        self.opt(&p, |p| union(&self.one(p, flag(cat::H)), &self.forced_rakar(p)))
    }

    /// `(z? SM SM? ZWNJ?)? A*`
    fn syllable_tail(&self, from: &[usize]) -> Positions {
        let p = self.opt(from, |p| {
            let p = self.opt(p, |p| self.z(p));
            let p = self.one(&p, flag(cat::SM));
            let p = self.opt(&p, |p| self.one(p, flag(cat::SM)));
            self.opt(&p, |p| self.one(p, flag(cat::ZWNJ)))
        });
        self.star(&p, |p| self.one(p, flag(cat::A)))
    }

    /// `z? H (ZWJ N?)?`
    fn halant_group(&self, from: &[usize]) -> Positions {
        let p = self.opt(from, |p| self.z(p));
        let p = self.one(&p, flag(cat::H));
        self.opt(&p, |p| {
            let zwj = self.one(p, flag(cat::ZWJ));
            self.opt(&zwj, |p| self.one(p, flag(cat::N)))
        })
    }

    /// `halant_group | H ZWNJ`
    fn final_halant_group(&self, from: &[usize]) -> Positions {
        let h = self.one(from, flag(cat::H));
        union(&self.halant_group(from), &self.one(&h, flag(cat::ZWNJ)))
    }

    /// `final_halant_group | matra_group*`
    fn halant_or_matra_group(&self, from: &[usize]) -> Positions {
        union(
            &self.final_halant_group(from),
            &self.star(from, |p| self.matra_group(p)),
        )
    }

    /// `(halant_group cn)* CM? halant_or_matra_group syllable_tail`
    fn complex_syllable_tail(&self, from: &[usize]) -> Positions {
        let p = self.star(from, |p| self.cn(&self.halant_group(p)));
        let p = self.opt(&p, |p| self.one(p, flag(cat::CM)));
        let p = self.halant_or_matra_group(&p);
        self.syllable_tail(&p)
    }

    /// `(Repha | CS)? cn complex_syllable_tail`
    fn consonant_syllable(&self) -> Positions {
        let p = self.opt(&[0], |p| self.one(p, flag(cat::REPHA) | flag(cat::CS)));
        let p = self.cn(&p);
        self.complex_syllable_tail(&p)
    }

    /// `reph? V n (ZWJ | complex_syllable_tail)`
    fn vowel_syllable(&self) -> Positions {
        let p = self.opt(&[0], |p| self.reph(p));
        let p = self.one(&p, flag(cat::V));
        let p = self.n(&p);
        union(
            &self.one(&p, flag(cat::ZWJ)),
            &self.complex_syllable_tail(&p),
        )
    }

    /// `((Repha | CS)? PLACEHOLDER | reph? DOTTED_CIRCLE) n complex_syllable_tail`
    fn standalone_cluster(&self) -> Positions {
        let lead = self.opt(&[0], |p| self.one(p, flag(cat::REPHA) | flag(cat::CS)));
        let placeholder = self.one(&lead, flag(cat::PLACEHOLDER));
        let reph = self.opt(&[0], |p| self.reph(p));
        let circle = self.one(&reph, flag(cat::DOTTED_CIRCLE));
        let p = self.n(&union(&placeholder, &circle));
        self.complex_syllable_tail(&p)
    }

    /// `Symbol N? syllable_tail`
    fn symbol_cluster(&self) -> Positions {
        let p = self.one(&[0], flag(cat::SYMBOL));
        let p = self.opt(&p, |p| self.one(p, flag(cat::N)));
        self.syllable_tail(&p)
    }

    /// `reph? n complex_syllable_tail`
    fn broken_cluster(&self) -> Positions {
        let p = self.opt(&[0], |p| self.reph(p));
        let p = self.n(&p);
        self.complex_syllable_tail(&p)
    }
}

#[cfg(test)]
mod test {
    use super::{find_syllables, match_syllable, SyllableType};
    use crate::complex::indic::{category as cat, setup_masks};
    use crate::Buffer;

    #[test]
    fn consonant_cluster() {
        // KA H SSA I
        let categories = [cat::C, cat::H, cat::C, cat::M];
        assert_eq!(
            match_syllable(&categories),
            (SyllableType::ConsonantSyllable, 4)
        );
        // halant then ZWNJ ends a syllable
        let categories = [cat::C, cat::H, cat::ZWNJ, cat::C];
        assert_eq!(
            match_syllable(&categories),
            (SyllableType::ConsonantSyllable, 3)
        );
    }

    #[test]
    fn other_kinds() {
        assert_eq!(
            match_syllable(&[cat::V, cat::N, cat::SM]),
            (SyllableType::VowelSyllable, 3)
        );
        assert_eq!(
            match_syllable(&[cat::RA, cat::H, cat::V]),
            (SyllableType::VowelSyllable, 3)
        );
        assert_eq!(
            match_syllable(&[cat::PLACEHOLDER, cat::M]),
            (SyllableType::StandaloneCluster, 2)
        );
        assert_eq!(
            match_syllable(&[cat::SYMBOL, cat::A, cat::A]),
            (SyllableType::SymbolCluster, 3)
        );
        // a matra with nothing to attach to
        assert_eq!(
            match_syllable(&[cat::M, cat::C]),
            (SyllableType::BrokenCluster, 1)
        );
        assert_eq!(
            match_syllable(&[cat::X, cat::M]),
            (SyllableType::NonIndicCluster, 1)
        );
    }

    #[test]
    fn greedy_matra_groups() {
        let categories = [cat::C, cat::M, cat::M, cat::N, cat::H, cat::SM, cat::A];
        assert_eq!(
            match_syllable(&categories),
            (SyllableType::ConsonantSyllable, 7)
        );
    }

    #[test]
    fn serials_rotate() {
        let text: String = "क ".repeat(9);
        let mut buffer = Buffer::new().push_str(&text);
        setup_masks(&mut buffer);
        find_syllables(&mut buffer);
        let serials: Vec<u8> = buffer.syllables().map(|r| buffer.info()[r.start].syllable() >> 4).collect();
        assert_eq!(serials.len(), 18);
        assert_eq!(&serials[..3], &[1, 2, 3]);
        assert_eq!(serials[14], 15);
        assert_eq!(serials[15], 1);
        assert_eq!(
            SyllableType::of(buffer.info()[1].syllable()),
            Some(SyllableType::NonIndicCluster)
        );
    }
}
