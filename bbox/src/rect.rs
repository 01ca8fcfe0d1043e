use super::TLBR;
use crate::{common::*, Element, HW};

/// The generic rectangle.
pub trait Rect {
    type Type;

    fn t(&self) -> Self::Type;
    fn l(&self) -> Self::Type;
    fn b(&self) -> Self::Type;
    fn r(&self) -> Self::Type;
    fn h(&self) -> Self::Type;
    fn w(&self) -> Self::Type;

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;

    fn try_from_tlhw(tlhw: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;

    /// Build from the COCO `[x, y, w, h]` layout.
    fn try_from_ltwh(ltwh: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized,
    {
        let [l, t, w, h] = ltwh;
        Self::try_from_tlhw([t, l, h, w])
    }
}

pub trait RectNum: Rect
where
    Self::Type: Num + PartialOrd,
{
    fn from_tlbr(tlbr: [Self::Type; 4]) -> Self
    where
        Self: Sized,
    {
        Self::try_from_tlbr(tlbr).unwrap()
    }

    fn from_tlhw(tlhw: [Self::Type; 4]) -> Self
    where
        Self: Sized,
    {
        Self::try_from_tlhw(tlhw).unwrap()
    }

    fn from_ltwh(ltwh: [Self::Type; 4]) -> Self
    where
        Self: Sized,
    {
        Self::try_from_ltwh(ltwh).unwrap()
    }

    /// The COCO `[x, y, w, h]` layout.
    fn ltwh(&self) -> [Self::Type; 4] {
        [self.l(), self.t(), self.w(), self.h()]
    }

    /// The PIL-style `[left, upper, right, lower]` layout.
    fn ltrb(&self) -> [Self::Type; 4] {
        [self.l(), self.t(), self.r(), self.b()]
    }

    fn hw(&self) -> [Self::Type; 2] {
        [self.h(), self.w()]
    }

    fn size(&self) -> HW<Self::Type>
    where
        Self::Type: Copy,
    {
        HW::from_hw(self.hw())
    }

    fn area(&self) -> <Self::Type as Mul<Self::Type>>::Output
    where
        Self::Type: Mul<Self::Type>,
    {
        self.h() * self.w()
    }
}

pub trait RectFloat: RectNum
where
    Self::Type: Element,
{
    fn intersect_with<R>(&self, other: &R) -> Option<TLBR<Self::Type>>
    where
        R: Rect<Type = Self::Type>,
    {
        let t = self.t().max(other.t());
        let l = self.l().max(other.l());
        let b = self.b().min(other.b());
        let r = self.r().min(other.r());
        (b > t && r > l).then(|| TLBR::from_tlbr([t, l, b, r]))
    }

    fn intersection_area_with<R>(&self, other: &R) -> Self::Type
    where
        R: Rect<Type = Self::Type>,
    {
        self.intersect_with(other)
            .map(|rect| rect.area())
            .unwrap_or_else(Self::Type::zero)
    }

    /// Check if the rectangle lies entirely inside `other`.
    fn is_within<R>(&self, other: &R) -> bool
    where
        R: Rect<Type = Self::Type>,
    {
        self.t() >= other.t()
            && self.l() >= other.l()
            && self.b() <= other.b()
            && self.r() <= other.r()
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Num + PartialOrd,
{
}

impl<T> RectFloat for T
where
    T: Rect,
    T::Type: Element,
{
}
