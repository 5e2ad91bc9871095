use serde::{Deserialize, Serialize};

/// Small glyphs that can sit in front of a layer label or stand in as a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKey {
    Scroll,
    ScenicSpot,
    Butterfly,
}

impl IconKey {
    pub const ALL: [IconKey; 3] = [IconKey::Scroll, IconKey::ScenicSpot, IconKey::Butterfly];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Scroll" => Some(Self::Scroll),
            "ScenicSpot" => Some(Self::ScenicSpot),
            "Butterfly" => Some(Self::Butterfly),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "Scroll",
            Self::ScenicSpot => "ScenicSpot",
            Self::Butterfly => "Butterfly",
        }
    }
}

/// Display label for a toggle row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerLabel {
    pub icon: Option<IconKey>,
    pub text: String,
}

impl LayerLabel {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            text: text.into(),
        }
    }

    pub fn with_icon(icon: IconKey, text: impl Into<String>) -> Self {
        Self {
            icon: Some(icon),
            text: text.into(),
        }
    }

    /// Parse the `iconKey:label` form used by older marker files.
    ///
    /// Only a name with exactly one colon is split. An unrecognised key still
    /// splits off the text, it just renders without a glyph.
    pub fn from_legacy(name: &str) -> Self {
        let mut parts = name.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(text), None) => Self {
                icon: IconKey::from_key(key),
                text: text.to_string(),
            },
            _ => Self::plain(name),
        }
    }
}

impl From<&str> for LayerLabel {
    fn from(name: &str) -> Self {
        Self::from_legacy(name)
    }
}
