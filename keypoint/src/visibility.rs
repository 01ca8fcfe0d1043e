use crate::common::*;

/// The visibility flag of a keypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Visibility {
    /// Not labeled. The coordinates carry no meaning.
    NotLabeled = 0,
    /// Labeled but hidden behind something.
    Occluded = 1,
    /// Labeled and visible.
    Visible = 2,
}

impl Visibility {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Visibility {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::NotLabeled,
            1 => Self::Occluded,
            2 => Self::Visible,
            _ => return Err(format_err!("invalid keypoint visibility {}", value)),
        })
    }
}
