//! Common imports from external crates.

pub use anyhow::{bail, ensure, format_err, Context, Error, Result};
pub use bbox::{prelude::*, Rounding, HW, TLBR};
pub use image::{imageops, DynamicImage, ImageBuffer, ImageError, Pixel};
pub use indexmap::{map::Entry as IndexMapEntry, IndexMap};
pub use keypoint::{Keypoint, Keypoints, Visibility};
pub use noisy_float::prelude::*;
pub use serde::{Deserialize, Deserializer, Serialize};
pub use serde_json::{Map, Number, Value};
pub use std::{
    fmt,
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
pub use tracing::{debug, info, warn};
