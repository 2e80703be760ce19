// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered pair of bounds selected by the slider.

/// Which of the two bounds (and which thumb) an operation refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The lower bound, drawn as the left thumb.
    Lower,
    /// The upper bound, drawn as the right thumb.
    Upper,
}

impl Bound {
    /// Both bounds, lower first.
    pub const ALL: [Self; 2] = [Self::Lower, Self::Upper];

    /// Returns the opposite bound.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// A lower and an upper bound with `lower <= upper` at all times.
///
/// Every write enforces the ordering invariant by clamping against the other
/// bound: writing a lower value above the current upper value stores the upper
/// value, and symmetrically for the upper bound. Writes are *not* clamped to
/// `[0, 1]`; interactive writes arrive pre-clamped and direct writes are the
/// caller's responsibility.
///
/// A `NaN` write is treated as `0.0` before clamping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeValues {
    lower: f64,
    upper: f64,
}

impl Default for RangeValues {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 0.5,
        }
    }
}

impl RangeValues {
    /// Creates a pair from `lower` and `upper`.
    ///
    /// `upper` is taken as given and `lower` is then clamped against it.
    /// `NaN` arguments are read as `0.0`.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        let upper = not_nan(upper);
        Self {
            lower: not_nan(lower).min(upper),
            upper,
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the value of `bound`.
    #[must_use]
    pub fn get(&self, bound: Bound) -> f64 {
        match bound {
            Bound::Lower => self.lower,
            Bound::Upper => self.upper,
        }
    }

    /// Returns `upper - lower`, which is never negative.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Sets the lower bound to `min(value, upper)` and returns the stored value.
    pub fn set_lower(&mut self, value: f64) -> f64 {
        self.lower = not_nan(value).min(self.upper);
        self.lower
    }

    /// Sets the upper bound to `max(value, lower)` and returns the stored value.
    pub fn set_upper(&mut self, value: f64) -> f64 {
        self.upper = not_nan(value).max(self.lower);
        self.upper
    }

    /// Sets `bound` with the same clamping as [`set_lower`](Self::set_lower)
    /// and [`set_upper`](Self::set_upper).
    pub fn set(&mut self, bound: Bound, value: f64) -> f64 {
        match bound {
            Bound::Lower => self.set_lower(value),
            Bound::Upper => self.set_upper(value),
        }
    }
}

fn not_nan(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}
