//! Pseudo-random source for the card's cosmetic choices.
//!
//! Numerical-Recipes LCG; nowhere near crypto secure, which is fine for
//! picking glyph positions. Constructible from an explicit seed so tests can
//! drive deterministic sequences, or from the page clock in the browser.

use web_sys::window;

pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from `performance.now()`. Browser-only; host tests construct
    /// with `new` instead.
    pub fn from_clock() -> Self {
        let now = window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self::new(now as u64 as u32)
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform sample in [0, 1), 24 bits of resolution.
    pub fn unit(&mut self) -> f64 {
        f64::from(self.next_u32() >> 8) / f64::from(1u32 << 24)
    }

    /// Uniform sample in [lo, hi). Returns `lo` for an empty range.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + self.unit() * (hi - lo)
    }

    /// Uniform pick from a slice. The slice must be non-empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = (self.unit() * items.len() as f64) as usize;
        &items[idx.min(items.len() - 1)]
    }
}
