//! Static field mapping between theme settings and style kit slots.

/// Shared heading keys used when a slot has no value of its own.
pub mod generic {
    /// Font family shared by all headings
    pub const HEADINGS_FONT_FAMILY: &str = "headings-font-family";
    /// Font weight shared by all headings
    pub const HEADINGS_FONT_WEIGHT: &str = "headings-font-weight";
    /// Extras bundle shared by all headings
    pub const HEADINGS_FONT_EXTRAS: &str = "headings-font-extras";
}

/// Keys inside an extras bundle.
pub mod extras {
    /// Line height value
    pub const LINE_HEIGHT: &str = "line-height";
    /// Line height unit
    pub const LINE_HEIGHT_UNIT: &str = "line-height-unit";
    /// Letter spacing value
    pub const LETTER_SPACING: &str = "letter-spacing";
    /// Letter spacing unit
    pub const LETTER_SPACING_UNIT: &str = "letter-spacing-unit";
    /// Text decoration keyword
    pub const TEXT_DECORATION: &str = "text-decoration";
    /// Text transform keyword
    pub const TEXT_TRANSFORM: &str = "text-transform";
}

/// One of the four fixed style roles shared by colors and typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Primary (h1)
    Primary,
    /// Secondary (h2)
    Secondary,
    /// Body text
    Text,
    /// Accent (h3)
    Accent,
}

/// Theme keys feeding one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMapping {
    /// Color key
    pub color: &'static str,
    /// Font family key
    pub family: &'static str,
    /// Responsive font size block key
    pub size: &'static str,
    /// Font weight key
    pub weight: &'static str,
    /// Extras bundle key (line height, spacing, decoration, transform)
    pub extras: &'static str,
}

const PRIMARY: SlotMapping = SlotMapping {
    color: "heading-base-color",
    family: "font-family-h1",
    size: "font-size-h1",
    weight: "font-weight-h1",
    extras: "font-extras-h1",
};

const SECONDARY: SlotMapping = SlotMapping {
    color: "link-color",
    family: "font-family-h2",
    size: "font-size-h2",
    weight: "font-weight-h2",
    extras: "font-extras-h2",
};

const TEXT: SlotMapping = SlotMapping {
    color: "text-color",
    family: "body-font-family",
    size: "font-size-body",
    weight: "body-font-weight",
    extras: "body-font-extras",
};

const ACCENT: SlotMapping = SlotMapping {
    color: "theme-color",
    family: "font-family-h3",
    size: "font-size-h3",
    weight: "font-weight-h3",
    extras: "font-extras-h3",
};

impl Slot {
    /// All slots in palette order.
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Text, Self::Accent];

    /// Kit identifier of the slot.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Text => "text",
            Self::Accent => "accent",
        }
    }

    /// Display title/name of the slot.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Text => "Text",
            Self::Accent => "Accent",
        }
    }

    /// Looks up a slot by kit identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.id() == id)
    }

    /// Whether this slot styles body text rather than a heading.
    #[must_use]
    pub const fn is_body(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Theme keys for this slot.
    #[must_use]
    pub const fn mapping(self) -> SlotMapping {
        match self {
            Self::Primary => PRIMARY,
            Self::Secondary => SECONDARY,
            Self::Text => TEXT,
            Self::Accent => ACCENT,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Returns the mapping for a kit entry id, or `None` for ids outside the
/// four known slots.
#[must_use]
pub fn mapping_for(id: &str) -> Option<SlotMapping> {
    Slot::from_id(id).map(Slot::mapping)
}
