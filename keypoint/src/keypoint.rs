use crate::{common::*, Visibility};

/// A body joint position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keypoint<T> {
    pub x: T,
    pub y: T,
    pub visibility: Visibility,
}

impl<T> Keypoint<T>
where
    T: Copy + Num,
{
    /// Express the keypoint in the frame whose origin is the top-left corner of `rect`.
    ///
    /// Unlabeled keypoints are shifted as well.
    pub fn relative_to<R>(&self, rect: &R) -> Self
    where
        R: Rect<Type = T>,
    {
        Self {
            x: self.x - rect.l(),
            y: self.y - rect.t(),
            visibility: self.visibility,
        }
    }
}
