use serde::{Deserialize, Serialize};

/// Category id of revelation cards.
pub const REVELATION_CATEGORY: u32 = 11;

/// Category id the API uses for talents.
pub const TALENT_CATEGORY: u32 = 10;

/// A card as stored in the local cache.
///
/// Field names follow the API so the cache can be written straight from a
/// response page and read back without a mapping layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: u32,
    #[serde(rename = "type", default)]
    pub kind: u32,
    #[serde(default)]
    pub category: u32,
    #[serde(default)]
    pub expansion: u32,
    #[serde(default)]
    pub color: u32,
}

impl Card {
    pub fn is_revelation(&self) -> bool {
        self.category == REVELATION_CATEGORY
    }

    /// Case-insensitive substring match on name or description.
    /// An empty keyword matches every card.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

/// A talent: a card record plus whether it triggers events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    #[serde(flatten)]
    pub card: Card,
    #[serde(rename = "hasEvents", default)]
    pub has_events: bool,
}

impl AsRef<Card> for Card {
    fn as_ref(&self) -> &Card {
        self
    }
}

impl AsRef<Card> for Talent {
    fn as_ref(&self) -> &Card {
        &self.card
    }
}
