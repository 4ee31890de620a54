/// An RGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("color must be in the format '#rrggbb'")]
    BadFormat,
    #[error("palette must have at least one color")]
    EmptyPalette,
}

impl std::str::FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseError::BadFormat)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::BadFormat);
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseError::BadFormat);
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Non-empty, ordered list of chart colors. Categories are colored by rank,
/// cycling through the palette.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Returns the color of the category ranked `rank` (zero-based).
    pub fn color(&self, rank: usize) -> Color {
        self.0[rank % self.0.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        const fn rgb(r: u8, g: u8, b: u8) -> Color {
            Color { r, g, b }
        }
        Self(vec![
            rgb(0x10, 0xb9, 0x81), // emerald
            rgb(0x3b, 0x82, 0xf6), // blue
            rgb(0xf5, 0x9e, 0x0b), // amber
            rgb(0xef, 0x44, 0x44), // red
            rgb(0x8b, 0x5c, 0xf6), // violet
            rgb(0x64, 0x74, 0x8b), // slate
            rgb(0xec, 0x48, 0x99), // pink
            rgb(0x63, 0x66, 0xf1), // indigo
        ])
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ParseError;

    fn try_from(value: Vec<Color>) -> Result<Self, Self::Error> {
        match value.is_empty() {
            true => Err(ParseError::EmptyPalette),
            false => Ok(Self(value)),
        }
    }
}

impl From<Palette> for Vec<Color> {
    fn from(value: Palette) -> Self {
        value.0
    }
}
