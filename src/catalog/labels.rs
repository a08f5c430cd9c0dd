/// Expansion ids and their display names.
pub const EXPANSIONS: &[(u32, &str)] = &[
    (0, "Conjured/Misc"),
    (1, "Core"),
    (2, "Metaprogression"),
    (3, "Metamorphosis"),
    (4, "Core Extended"),
    (5, "Infinitum"),
    (6, "Catalyst"),
    (7, "Eclypse"),
];

/// Rarity ids, display names and the glyph shown in card lists.
pub const RARITIES: &[(u32, &str, &str)] = &[
    (0, "Common", "🩶"),
    (1, "Uncommon", "💚"),
    (2, "Rare", "🩵"),
    (3, "Legendary", "🤩"),
];

const UNKNOWN: &str = "UNKNOWN";

/// Display name of an expansion id.
pub fn expansion_name(expansion: u32) -> &'static str {
    EXPANSIONS
        .iter()
        .find(|(id, _)| *id == expansion)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN)
}

/// Expansion name as shown next to a card. Conjured cards have no printed set.
pub fn card_expansion_label(expansion: u32) -> &'static str {
    if expansion == 0 {
        UNKNOWN
    } else {
        expansion_name(expansion)
    }
}

pub fn rarity_name(rarity: u32) -> &'static str {
    RARITIES
        .iter()
        .find(|(id, _, _)| *id == rarity)
        .map(|(_, name, _)| *name)
        .unwrap_or(UNKNOWN)
}

pub fn rarity_glyph(rarity: u32) -> &'static str {
    RARITIES
        .iter()
        .find(|(id, _, _)| *id == rarity)
        .map(|(_, _, glyph)| *glyph)
        .unwrap_or(UNKNOWN)
}

/// Card color (class) as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Green,
    Blue,
    Red,
    Purple,
    Brown,
    Aqua,
    White,
    Gold,
    Black,
    Orange,
    Monster,
}

impl CardColor {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(CardColor::Green),
            2 => Some(CardColor::Blue),
            3 => Some(CardColor::Red),
            4 => Some(CardColor::Purple),
            5 => Some(CardColor::Brown),
            6 => Some(CardColor::Aqua),
            7 => Some(CardColor::White),
            8 => Some(CardColor::Gold),
            9 => Some(CardColor::Black),
            10 => Some(CardColor::Orange),
            11 => Some(CardColor::Monster),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardColor::Green => "Green",
            CardColor::Blue => "Blue",
            CardColor::Red => "Red",
            CardColor::Purple => "Purple",
            CardColor::Brown => "Brown",
            CardColor::Aqua => "Aqua",
            CardColor::White => "White",
            CardColor::Gold => "Gold",
            CardColor::Black => "Black",
            CardColor::Orange => "Orange",
            CardColor::Monster => "Monster",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            CardColor::Green => "🟢",
            CardColor::Blue => "🔵",
            CardColor::Red => "🔴",
            CardColor::Purple => "🟣",
            CardColor::Brown => "🟤",
            CardColor::Aqua => "🩱",
            CardColor::White => "⚪️",
            CardColor::Gold => "🔱",
            CardColor::Black => "⬛️",
            CardColor::Orange => "🟠",
            CardColor::Monster => "👹",
        }
    }

    /// 256-color palette index used for the color dot.
    pub fn xterm_index(self) -> u8 {
        match self {
            CardColor::Green => 2,
            CardColor::Blue => 39,
            CardColor::Red => 1,
            CardColor::Purple => 129,
            CardColor::Brown => 94,
            CardColor::Aqua => 14,
            CardColor::White => 7,
            CardColor::Gold => 220,
            CardColor::Black => 0,
            CardColor::Orange => 208,
            CardColor::Monster => 124,
        }
    }
}
