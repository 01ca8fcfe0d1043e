use crate::common::*;

/// The policy to round a value to the nearest integer when it lies exactly
/// halfway between two integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round half to even, e.g. `2.5 -> 2` and `3.5 -> 4`.
    TiesEven,
    /// Round half away from zero, e.g. `2.5 -> 3` and `-2.5 -> -3`.
    TiesAwayFromZero,
}

impl Default for Rounding {
    fn default() -> Self {
        Self::TiesEven
    }
}
