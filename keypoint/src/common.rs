pub use anyhow::{format_err, Error, Result};
pub use bbox::Rect;
pub use num_traits::{Num, ToPrimitive};
pub use serde::{
    de::Error as DeserializeError, ser::SerializeSeq, Deserialize, Deserializer, Serialize,
    Serializer,
};
pub use std::{fmt, ops::Deref};
