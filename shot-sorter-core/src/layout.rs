/// Folder layouts produced by the supported capture devices.
///
/// The layout decides where the game ID lives (directory or filename
/// prefix) and which timestamp format the filenames carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceLayout {
    /// Steam Deck: `<id>/screenshots/<YYYYMMDDHHMMSS>_1.<ext>`, one folder per game.
    SteamDeck,
    /// Linux gaming PC: flat folders of `<id>_<YYYYMMDDHHMMSS>_<n>.<ext>` files.
    GamingPc,
}

const ALL_LAYOUTS: &[DeviceLayout] = &[DeviceLayout::SteamDeck, DeviceLayout::GamingPc];

impl DeviceLayout {
    /// The value expected in the `DEVICE` setting.
    pub fn key(&self) -> &'static str {
        match self {
            Self::SteamDeck => "DECK",
            Self::GamingPc => "GAMINGPC",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SteamDeck => "Steam Deck",
            Self::GamingPc => "Gaming PC",
        }
    }

    /// Lowercase alternative spellings accepted when parsing.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::SteamDeck => &["deck", "steamdeck", "steam-deck"],
            Self::GamingPc => &["gamingpc", "gaming-pc", "pc"],
        }
    }

    pub fn all() -> &'static [DeviceLayout] {
        ALL_LAYOUTS
    }
}

impl std::fmt::Display for DeviceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string names no known device layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutParseError(pub String);

impl std::fmt::Display for LayoutParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let known: Vec<&str> = ALL_LAYOUTS.iter().map(|l| l.key()).collect();
        write!(
            f,
            "unknown device layout '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for LayoutParseError {}

impl std::str::FromStr for DeviceLayout {
    type Err = LayoutParseError;

    /// Case-insensitive match against the key and all aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &layout in ALL_LAYOUTS {
            if layout.key().to_lowercase() == lower || layout.aliases().contains(&lower.as_str()) {
                return Ok(layout);
            }
        }
        Err(LayoutParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for &layout in DeviceLayout::all() {
            assert_eq!(layout.key().parse::<DeviceLayout>(), Ok(layout));
        }
    }

    #[test]
    fn case_insensitive_parsing() {
        assert_eq!("deck".parse::<DeviceLayout>(), Ok(DeviceLayout::SteamDeck));
        assert_eq!("GamingPC".parse::<DeviceLayout>(), Ok(DeviceLayout::GamingPc));
        assert_eq!(" pc ".parse::<DeviceLayout>(), Ok(DeviceLayout::GamingPc));
    }

    #[test]
    fn unknown_layout_lists_known_keys() {
        let err = "switch".parse::<DeviceLayout>().unwrap_err();
        assert_eq!(err.0, "switch");
        assert!(err.to_string().contains("DECK, GAMINGPC"));
    }
}
