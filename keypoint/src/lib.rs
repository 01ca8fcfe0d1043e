//! Body keypoint types in the COCO layout.

mod common;

pub use visibility::*;
pub mod visibility;

pub use keypoint::*;
pub mod keypoint;

pub use keypoints::*;
pub mod keypoints;
