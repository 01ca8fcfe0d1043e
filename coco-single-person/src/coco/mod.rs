//! The COCO keypoints annotation format.

pub use loader::*;
mod loader;

pub use types::*;
mod types;
