use serde::{Serialize, Serializer};

/// RGBA color as used by layer descriptors.
///
/// Serializes as a `[r, g, b]` array when the color is opaque and as `[r, g, b, a]`
/// otherwise, which is the form deck.gl accepts for color accessors.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Constructs an opaque color from its RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into u8 array (RGBA).
    pub fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns true if the color is fully opaque (`a == 255`).
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_opaque() {
            [self.r, self.g, self.b].serialize(serializer)
        } else {
            self.to_u8_array().serialize(serializer)
        }
    }
}
