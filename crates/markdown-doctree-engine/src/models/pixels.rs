use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Decoded image data attached to an image node after parsing.
///
/// The parser never produces one of these; an image resolver fills them in
/// on a rebuilt document. Cloning is cheap and shares the underlying bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pixels(Arc<[u8]>);

impl Pixels {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pixels({} bytes)", self.0.len())
    }
}

/// Serialized as a presence flag; raw bytes never leave the process this way.
impl Serialize for Pixels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}
