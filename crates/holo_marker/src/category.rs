use holo_render::{rgb, Rgba8};

/// Location category, parsed from the service's free-form `datatype` string.
///
/// Anything the parser doesn't recognize lands on `Other`, so the color and
/// label lookups below are total: adding a category means touching this one
/// enum and the compiler walks you through both matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    City,
    Capital,
    Base,
    Airport,
    Superweapon,
    Crater,
    Other,
}

impl Category {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "city" => Self::City,
            "capital" => Self::Capital,
            "base" => Self::Base,
            "airport" => Self::Airport,
            "superweapon" => Self::Superweapon,
            "crater" => Self::Crater,
            _ => Self::Other,
        }
    }

    /// Marker tint for this category.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::City => rgb(0x00ffff),
            Self::Capital => rgb(0xff00ff),
            Self::Base => rgb(0xff0000),
            Self::Airport => rgb(0x00ff00),
            Self::Superweapon => rgb(0xffff00),
            Self::Crater => rgb(0xff8800),
            Self::Other => rgb(0x00ccff),
        }
    }

    /// Human-readable label shown in the info panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Capital => "Capital City",
            Self::Base => "Military Base",
            Self::Airport => "Airport / Space Center",
            Self::Superweapon => "Superweapon",
            Self::Crater => "Ulysses Impact Crater",
            Self::Other => "Unknown",
        }
    }
}
