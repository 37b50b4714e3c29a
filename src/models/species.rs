use serde::{Deserialize, Serialize};

/// One line of the species grid: counts per distance band plus free notes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeciesEntry {
    pub species: String,
    pub count_le_50m: u32,
    pub count_gt_50m: u32,
    pub flythrough: u32,
    pub notes: String,
}

impl SpeciesEntry {
    /// At least one of the three counts is positive. Notes never count.
    pub fn has_counts(&self) -> bool {
        self.count_le_50m > 0 || self.count_gt_50m > 0 || self.flythrough > 0
    }
}

/// Configured species list, names in the form `Common Name (CODE)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesCatalog(Vec<String>);

impl SpeciesCatalog {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Four-letter AOU code between the trailing parentheses, if any.
    pub fn code_of(name: &str) -> Option<&str> {
        let open = name.rfind('(')?;
        let close = name.rfind(')')?;
        if close <= open + 1 {
            return None;
        }
        Some(name[open + 1..close].trim())
    }

    /// Match `input` against the catalogue, by full name or by code,
    /// ignoring case. `None` means the input is an "other species".
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let needle = input.trim();
        self.0
            .iter()
            .find(|name| {
                name.eq_ignore_ascii_case(needle)
                    || Self::code_of(name).is_some_and(|c| c.eq_ignore_ascii_case(needle))
            })
            .map(String::as_str)
    }
}

impl Default for SpeciesCatalog {
    fn default() -> Self {
        Self(
            [
                "Palm Warbler (PAWA)",
                "Red-bellied Woodpecker (RBWO)",
                "Great Egret (GREG)",
                "Blue Jay (BLJA)",
                "Carolina Wren (CAWR)",
                "Fish Crow (FICR)",
                "Northern Cardinal (NOCA)",
                "Tricolored Heron (TRHE)",
                "Red-shouldered Hawk (RSHA)",
                "Yellow-rumped Warbler (YRWA)",
                "Wood Stork (WOST)",
                "White Ibis (WHIB)",
                "Eastern Phoebe (EAPH)",
                "Little Blue Heron (LBHE)",
                "Mourning Dove (MODO)",
                "Blue-gray Gnatcatcher (BGGN)",
                "Gray Catbird (GRCA)",
                "Common Grackle (COGR)",
                "Tufted Titmouse (TUTI)",
                "Downy Woodpecker (DOWO)",
                "Sandhill Crane (SACR)",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}
