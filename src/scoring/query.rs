use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::error::ScoreError;

/// Card tier letter used in score queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Legendary,
    Rare,
    Uncommon,
    Common,
    Monster,
    Unscored,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::Legendary,
        Tier::Rare,
        Tier::Uncommon,
        Tier::Common,
        Tier::Monster,
        Tier::Unscored,
    ];

    pub fn from_letter(c: u8) -> Option<Self> {
        match c {
            b'L' => Some(Tier::Legendary),
            b'R' => Some(Tier::Rare),
            b'U' => Some(Tier::Uncommon),
            b'C' => Some(Tier::Common),
            b'M' => Some(Tier::Monster),
            b'X' => Some(Tier::Unscored),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Tier::Legendary => 'L',
            Tier::Rare => 'R',
            Tier::Uncommon => 'U',
            Tier::Common => 'C',
            Tier::Monster => 'M',
            Tier::Unscored => 'X',
        }
    }
}

/// One `<count><tier>` token, e.g. `5L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTally {
    pub count: u32,
    pub tier: Tier,
}

impl fmt::Display for CardTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.tier.letter())
    }
}

/// Difficulty percentage from a `<digits>%` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalignancyPercent(pub u32);

impl MalignancyPercent {
    /// `1 + percent / 100`
    pub fn multiplier(self) -> f64 {
        1.0 + self.0 as f64 / 100.0
    }
}

impl fmt::Display for MalignancyPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Target deck size window from a `<digits>-<digits>` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

impl SizeRange {
    pub fn contains(&self, size: u64) -> bool {
        size >= self.min as u64 && size <= self.max as u64
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A fully parsed score query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreQuery {
    pub cards: Vec<CardTally>,
    pub malignancy: MalignancyPercent,
    pub range: SizeRange,
}

impl ScoreQuery {
    /// Parse a query such as `5L 9R 3U 6C 2X 145% 24-26`.
    ///
    /// Tokens may appear anywhere and in any order. Every `<digits><tier>`
    /// match is collected left to right; only the first `<digits>%` and the
    /// first `<digits>-<digits>` are used. Anything else is ignored.
    pub fn parse(query: &str) -> Result<Self, ScoreError> {
        let cards = card_tallies(query)?;
        if cards.is_empty() {
            return Err(ScoreError::MissingCardTokens);
        }
        let malignancy = first_malignancy(query)?.ok_or(ScoreError::MissingMalignancy)?;
        let range = first_range(query)?.ok_or(ScoreError::MissingRange)?;

        Ok(Self {
            cards,
            malignancy,
            range,
        })
    }

    /// Sum of all tally counts, duplicates included.
    pub fn deck_size(&self) -> u64 {
        self.cards.iter().map(|c| c.count as u64).sum()
    }
}

// ASCII digits only; `\d` would also accept other Unicode digits.
static CARD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([LRUCMX])").expect("valid card token regex"));
static MALIGNANCY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)%").expect("valid malignancy regex"));
static RANGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)-([0-9]+)").expect("valid range regex"));

fn parse_number(digits: &str, token: &str) -> Result<u32, ScoreError> {
    digits.parse().map_err(|_| ScoreError::NumberOutOfRange {
        token: token.to_string(),
    })
}

fn card_tallies(query: &str) -> Result<Vec<CardTally>, ScoreError> {
    let mut cards = Vec::new();
    for caps in CARD_TOKEN.captures_iter(query) {
        let Some(tier) = caps[2].bytes().next().and_then(Tier::from_letter) else {
            continue;
        };
        let count = parse_number(&caps[1], &caps[0])?;
        cards.push(CardTally { count, tier });
    }
    Ok(cards)
}

fn first_malignancy(query: &str) -> Result<Option<MalignancyPercent>, ScoreError> {
    let Some(caps) = MALIGNANCY_TOKEN.captures(query) else {
        return Ok(None);
    };
    let percent = parse_number(&caps[1], &caps[0])?;
    Ok(Some(MalignancyPercent(percent)))
}

fn first_range(query: &str) -> Result<Option<SizeRange>, ScoreError> {
    let Some(caps) = RANGE_TOKEN.captures(query) else {
        return Ok(None);
    };
    let min = parse_number(&caps[1], &caps[0])?;
    let max = parse_number(&caps[2], &caps[0])?;
    Ok(Some(SizeRange { min, max }))
}
