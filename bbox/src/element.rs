use crate::{common::*, Rounding};

/// Coordinate type of floating point rectangles.
pub trait Element: Float {
    /// Round to the nearest integer under the given tie policy.
    fn round_with(self, rounding: Rounding) -> Self;
}

impl Element for f32 {
    fn round_with(self, rounding: Rounding) -> Self {
        match rounding {
            Rounding::TiesEven => self.round_ties_even(),
            Rounding::TiesAwayFromZero => self.round(),
        }
    }
}

impl Element for f64 {
    fn round_with(self, rounding: Rounding) -> Self {
        match rounding {
            Rounding::TiesEven => self.round_ties_even(),
            Rounding::TiesAwayFromZero => self.round(),
        }
    }
}
