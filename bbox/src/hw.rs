use crate::common::*;

/// A non-negative size in height and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HW<T> {
    h: T,
    w: T,
}

impl<T> HW<T>
where
    T: ToPrimitive,
{
    /// Convert to another element type, for example whole pixels.
    ///
    /// It fails when a component does not fit the target type.
    pub fn try_cast<U>(self) -> Option<HW<U>>
    where
        U: NumCast,
    {
        let h = U::from(self.h)?;
        let w = U::from(self.w)?;
        Some(HW { h, w })
    }
}

impl<T> HW<T>
where
    T: Num + PartialOrd + Copy,
{
    pub fn try_from_hw(hw: [T; 2]) -> Result<Self> {
        let [h, w] = hw;
        ensure!(
            h >= T::zero() && w >= T::zero(),
            "height and width must be non-negative"
        );
        Ok(Self { h, w })
    }

    pub fn from_hw(hw: [T; 2]) -> Self {
        Self::try_from_hw(hw).unwrap()
    }

    pub fn h(&self) -> T {
        self.h
    }

    pub fn w(&self) -> T {
        self.w
    }

    /// The `(width, height)` pair, the order used by image libraries.
    pub fn wh(&self) -> (T, T) {
        (self.w, self.h)
    }
}

impl<T> fmt::Display for HW<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}
