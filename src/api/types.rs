use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of `/api/cards` results.
#[derive(Debug, Clone, Deserialize)]
pub struct CardPage<T> {
    pub card_len: usize,
    #[serde(default = "Vec::new")]
    pub cards: Vec<T>,
}

/// Challenge id. The API has served both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChallengeUid {
    Number(u64),
    Text(String),
}

impl fmt::Display for ChallengeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChallengeUid::Number(n) => write!(f, "{}", n),
            ChallengeUid::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeList {
    pub challenges: Vec<ChallengeSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeSummary {
    pub uid: ChallengeUid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeResponse {
    pub challenge: ChallengeDetail,
}

/// A finished challenge. `winners` is ordered impossible, hard,
/// challenging, normal; missing slots had no winner.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeDetail {
    pub uid: ChallengeUid,
    pub name: String,
    #[serde(default)]
    pub winners: Vec<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Card;

    #[test]
    fn test_card_page_parse() {
        let json = r#"{"card_len": 1, "cards": [{"name": "Strike", "description": "Deal 6", "rarity": 0, "type": 0, "category": 0, "expansion": 1, "color": 1}]}"#;
        let page: CardPage<Card> = serde_json::from_str(json).unwrap();
        assert_eq!(page.card_len, 1);
        assert_eq!(page.cards[0].name, "Strike");
    }

    #[test]
    fn test_uid_number_or_text() {
        let a: ChallengeSummary = serde_json::from_str(r#"{"uid": 42}"#).unwrap();
        let b: ChallengeSummary = serde_json::from_str(r#"{"uid": "abc"}"#).unwrap();
        assert_eq!(a.uid, ChallengeUid::Number(42));
        assert_eq!(a.uid.to_string(), "42");
        assert_eq!(b.uid.to_string(), "abc");
    }

    #[test]
    fn test_challenge_detail_with_null_winner() {
        let json = r#"{"challenge": {"uid": 7, "name": "Week 7", "winners": ["Alice", null, "bob "]}}"#;
        let response: ChallengeResponse = serde_json::from_str(json).unwrap();
        let detail = response.challenge;
        assert_eq!(detail.name, "Week 7");
        assert_eq!(detail.winners.len(), 3);
        assert_eq!(detail.winners[1], None);
    }
}
