use crate::{common::*, Keypoint, Visibility};

/// The keypoints of one annotation.
///
/// It is serialized to the flat COCO list `[x1, y1, v1, x2, y2, v2, ...]`,
/// where coordinates keep the element type and visibility flags are integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keypoints<T>(Vec<Keypoint<T>>);

impl<T> Keypoints<T>
where
    T: Copy + Num,
{
    pub fn relative_to<R>(&self, rect: &R) -> Self
    where
        R: Rect<Type = T>,
    {
        Self(self.0.iter().map(|point| point.relative_to(rect)).collect())
    }

    /// Build from the flat `[x, y, v, ...]` layout.
    pub fn try_from_flat(flat: &[T]) -> Result<Self>
    where
        T: ToPrimitive + fmt::Debug,
    {
        if flat.len() % 3 != 0 {
            return Err(format_err!(
                "the keypoint list length {} is not a multiple of 3",
                flat.len()
            ));
        }

        let points = flat
            .chunks_exact(3)
            .map(|triple| -> Result<_> {
                let [x, y, v] = [triple[0], triple[1], triple[2]];
                let visibility = v
                    .to_f64()
                    .filter(|v| v.fract() == 0.0 && (0.0..=255.0).contains(v))
                    .map(|v| v as u8)
                    .ok_or_else(|| format_err!("invalid keypoint visibility {:?}", v))?;
                let visibility = Visibility::try_from(visibility)?;
                Ok(Keypoint { x, y, visibility })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self(points))
    }
}

impl<T> Deref for Keypoints<T> {
    type Target = [Keypoint<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Serialize for Keypoints<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len() * 3))?;
        for point in &self.0 {
            seq.serialize_element(&point.x)?;
            seq.serialize_element(&point.y)?;
            seq.serialize_element(&point.visibility.as_u8())?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Keypoints<T>
where
    T: Deserialize<'de> + Copy + Num + ToPrimitive + fmt::Debug,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flat = Vec::<T>::deserialize(deserializer)?;
        Self::try_from_flat(&flat).map_err(|err| D::Error::custom(format!("{:#}", err)))
    }
}
