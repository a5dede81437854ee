//! Poisson distribution with an integer-lattice `loc` shift.
//!
//! `Poisson { mu, loc }` describes `X + loc` where `X ~ Poisson(mu)`, the same
//! parameterisation the reference model uses: the mass sits on
//! `loc, loc + 1, loc + 2, …` and is zero everywhere else.
//!
//! The pmf is evaluated in log space (`k ln mu - mu - ln k!`) so large `mu`
//! does not underflow `e^-mu`.

use crate::{FlowError, FlowResult};

/// Lanczos approximation parameters (g = 7, n = 9).
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEF: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Distance from an integer below which a shifted argument still counts as
/// lying on the lattice.
const LATTICE_TOL: f64 = 1e-9;

/// Largest accepted mean.  `cdf` and `ppf` walk the lattice from zero, so
/// their cost grows linearly with `mu`.
pub const MAX_EVENT_RATE: f64 = 1e5;

/// Natural log of the gamma function for `x >= 1`.
fn ln_gamma(x: f64) -> f64 {
    debug_assert!(x >= 1.0, "ln_gamma only used for factorials");
    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    let mut a = LANCZOS_COEF[0];
    for (i, c) in LANCZOS_COEF.iter().enumerate().skip(1) {
        a += c / (x + i as f64);
    }
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + a.ln()
}

/// A shifted Poisson distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Poisson {
    mu:  f64,
    loc: f64,
}

impl Poisson {
    /// Build a distribution with mean `mu` (before the shift) and offset `loc`.
    pub fn new(mu: f64, loc: f64) -> FlowResult<Self> {
        if !mu.is_finite() || mu <= 0.0 {
            return Err(FlowError::InvalidRate(mu));
        }
        if mu > MAX_EVENT_RATE {
            return Err(FlowError::RateTooLarge { rate: mu, max: MAX_EVENT_RATE });
        }
        if !loc.is_finite() {
            return Err(FlowError::InvalidLoc(loc));
        }
        Ok(Self { mu, loc })
    }

    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    #[inline]
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Mass of the unshifted distribution at lattice point `k`.
    #[inline]
    fn mass(&self, k: u64) -> f64 {
        let k = k as f64;
        (k * self.mu.ln() - self.mu - ln_gamma(k + 1.0)).exp()
    }

    /// Probability mass at `x`.  Zero below `loc` and off the integer lattice.
    pub fn pmf(&self, x: f64) -> f64 {
        let shifted = x - self.loc;
        if shifted < -LATTICE_TOL {
            return 0.0;
        }
        let k = shifted.round();
        if (shifted - k).abs() > LATTICE_TOL {
            return 0.0;
        }
        self.mass(k.max(0.0) as u64)
    }

    /// `P(X + loc <= x)`.
    pub fn cdf(&self, x: f64) -> f64 {
        let shifted = (x - self.loc + LATTICE_TOL).floor();
        if shifted < 0.0 {
            return 0.0;
        }
        let upper = shifted as u64;
        let total: f64 = (0..=upper).map(|k| self.mass(k)).sum();
        total.min(1.0)
    }

    /// Percent-point function: the smallest lattice point `x` with
    /// `cdf(x) >= q`.
    ///
    /// `q` must lie in `[0, 1)`; the upper tail of a Poisson is unbounded so
    /// `q = 1` has no finite answer.
    pub fn ppf(&self, q: f64) -> FlowResult<f64> {
        if !(0.0..1.0).contains(&q) {
            return Err(FlowError::InvalidQuantile(q));
        }
        // Far enough into the tail that the loop always terminates, even if
        // rounding keeps the running sum a hair under `q`.
        let cap = (self.mu + 40.0 * self.mu.sqrt() + 100.0).ceil() as u64;

        let mut cumulative = 0.0;
        let mut k = 0u64;
        loop {
            cumulative += self.mass(k);
            if cumulative >= q || k >= cap {
                break;
            }
            k += 1;
        }
        Ok(k as f64 + self.loc)
    }
}
