//! Category icons
//!
//! Categories are free text in the sheet, so icons are picked by keyword.
//! Rules are checked in order and the first hit wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Bus,
    Plane,
    MapPin,
    Shirt,
    Phone,
    Calendar,
    Info,
}

static ICON_RULES: Lazy<Vec<(Regex, Icon)>> = Lazy::new(|| {
    [
        (r"(?i)travel|reise|bus", Icon::Bus),
        (r"(?i)flight|fly|plane", Icon::Plane),
        (r"(?i)hotel|overnatting|accommodation|lodging", Icon::MapPin),
        (r"(?i)pack|pakke|uniform", Icon::Shirt),
        (r"(?i)contact|kontakt|emergency|nød", Icon::Phone),
        (r"(?i)program|spille|schedule|concert", Icon::Calendar),
    ]
    .into_iter()
    .map(|(pattern, icon)| (Regex::new(pattern).expect("Invalid icon rule regex"), icon))
    .collect()
});

impl Icon {
    pub fn for_category(category: &str) -> Self {
        ICON_RULES
            .iter()
            .find(|(re, _)| re.is_match(category))
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Info)
    }

    /// Glyph used in Markdown output
    pub fn emoji(&self) -> &'static str {
        match self {
            Icon::Bus => "🚌",
            Icon::Plane => "✈️",
            Icon::MapPin => "📍",
            Icon::Shirt => "👕",
            Icon::Phone => "📞",
            Icon::Calendar => "📅",
            Icon::Info => "ℹ️",
        }
    }
}
