use super::Rect;
use crate::{common::*, Element, Rounding};

/// Bounding box in TLBR format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub(crate) t: T,
    pub(crate) l: T,
    pub(crate) b: T,
    pub(crate) r: T,
}

impl<T> TLBR<T> {
    pub fn try_cast<V>(self) -> Option<TLBR<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(TLBR {
            t: V::from(self.t)?,
            l: V::from(self.l)?,
            b: V::from(self.b)?,
            r: V::from(self.r)?,
        })
    }
}

impl<T> TLBR<T>
where
    T: Copy + Num,
{
    /// Shift the box by `dy` rows and `dx` columns.
    pub fn translate(&self, dy: T, dx: T) -> Self {
        TLBR {
            t: self.t + dy,
            l: self.l + dx,
            b: self.b + dy,
            r: self.r + dx,
        }
    }

    /// The same-sized box anchored at the origin.
    pub fn to_origin(&self) -> Self {
        self.translate(T::zero() - self.t, T::zero() - self.l)
    }
}

impl<T> TLBR<T>
where
    T: Element,
{
    /// Build from the COCO `[x, y, w, h]` layout with every component rounded
    /// to an integer.
    ///
    /// The right and bottom edges are derived from the rounded origin and
    /// size, so `w()` and `h()` are exactly the rounded sizes.
    pub fn try_from_ltwh_rounded(ltwh: [T; 4], rounding: Rounding) -> Result<Self> {
        Self::try_from_ltwh(ltwh.map(|value| value.round_with(rounding)))
    }
}

impl<T> Rect for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.b
    }

    fn r(&self) -> Self::Type {
        self.r
    }

    fn h(&self) -> Self::Type {
        self.b - self.t
    }

    fn w(&self) -> Self::Type {
        self.r - self.l
    }

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self> {
        let [t, l, b, r] = tlbr;
        ensure!(b >= t && r >= l, "b >= t and r >= l must hold");

        Ok(Self { t, l, b, r })
    }

    fn try_from_tlhw(tlhw: [Self::Type; 4]) -> Result<Self> {
        let [t, l, h, w] = tlhw;
        let b = t + h;
        let r = l + w;
        Self::try_from_tlbr([t, l, b, r])
    }
}
