use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::api::{ChallengeDetail, ChallengeUid};

/// Shown for challenges with no recorded winner.
pub const ANONYMOUS_WINNER: &str = "ANONYMOUS?!";

/// Known duplicate spellings of player names, mapped to the canonical one.
const WINNER_ALIASES: &[(&str, &str)] = &[("deeeef.", "deeeef")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Impossible,
    Hard,
    Challenging,
    Normal,
}

impl Difficulty {
    /// In the order the API lists winners.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Impossible,
        Difficulty::Hard,
        Difficulty::Challenging,
        Difficulty::Normal,
    ];

    pub fn winner_slot(self) -> usize {
        match self {
            Difficulty::Impossible => 0,
            Difficulty::Hard => 1,
            Difficulty::Challenging => 2,
            Difficulty::Normal => 3,
        }
    }

    /// Prefix of this difficulty's placeholders in the chart template.
    pub fn placeholder_prefix(self) -> &'static str {
        match self {
            Difficulty::Impossible => "IMPOSSIBLE",
            Difficulty::Hard => "HARD",
            Difficulty::Challenging => "CHALLENGING",
            Difficulty::Normal => "NORMAL",
        }
    }
}

/// Normalize a winner name: lowercase, trimmed, aliases merged.
pub fn clean_winner(winner: Option<&str>) -> String {
    let Some(winner) = winner.filter(|w| !w.is_empty()) else {
        return ANONYMOUS_WINNER.to_string();
    };
    let trimmed = winner.to_lowercase().trim().to_string();
    WINNER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == trimmed)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(trimmed)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeEntry {
    pub uid: ChallengeUid,
    pub name: String,
    pub winner: String,
}

/// Winners of every challenge, oldest first, split by difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStats {
    pub impossible_stats: Vec<ChallengeEntry>,
    pub hard_stats: Vec<ChallengeEntry>,
    pub challenging_stats: Vec<ChallengeEntry>,
    pub normal_stats: Vec<ChallengeEntry>,
}

impl ChallengeStats {
    pub fn from_details(details: &[ChallengeDetail]) -> Self {
        let mut stats = Self::default();
        for detail in details {
            for difficulty in Difficulty::ALL {
                let winner = detail
                    .winners
                    .get(difficulty.winner_slot())
                    .and_then(|w| w.as_deref());
                stats.entries_mut(difficulty).push(ChallengeEntry {
                    uid: detail.uid.clone(),
                    name: detail.name.clone(),
                    winner: clean_winner(winner),
                });
            }
        }
        stats
    }

    pub fn entries(&self, difficulty: Difficulty) -> &[ChallengeEntry] {
        match difficulty {
            Difficulty::Impossible => &self.impossible_stats,
            Difficulty::Hard => &self.hard_stats,
            Difficulty::Challenging => &self.challenging_stats,
            Difficulty::Normal => &self.normal_stats,
        }
    }

    fn entries_mut(&mut self, difficulty: Difficulty) -> &mut Vec<ChallengeEntry> {
        match difficulty {
            Difficulty::Impossible => &mut self.impossible_stats,
            Difficulty::Hard => &mut self.hard_stats,
            Difficulty::Challenging => &mut self.challenging_stats,
            Difficulty::Normal => &mut self.normal_stats,
        }
    }
}

/// Cumulative win count per player after each challenge.
///
/// Players keep the order in which they first won. Serializes as a JSON
/// object `{ player: [wins after challenge 1, ...] }` in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub players: Vec<(String, Vec<u32>)>,
}

impl Progress {
    pub fn from_entries(entries: &[ChallengeEntry]) -> Self {
        let mut names: Vec<&str> = Vec::new();
        for entry in entries {
            if !names.contains(&entry.winner.as_str()) {
                names.push(&entry.winner);
            }
        }

        let mut totals = vec![0u32; names.len()];
        let mut series = vec![Vec::with_capacity(entries.len()); names.len()];
        for entry in entries {
            if let Some(i) = names.iter().position(|n| *n == entry.winner) {
                totals[i] += 1;
            }
            for (line, total) in series.iter_mut().zip(&totals) {
                line.push(*total);
            }
        }

        Self {
            players: names
                .into_iter()
                .map(str::to_string)
                .zip(series)
                .collect(),
        }
    }

    pub fn wins(&self, player: &str) -> Option<&[u32]> {
        self.players
            .iter()
            .find(|(name, _)| name == player)
            .map(|(_, wins)| wins.as_slice())
    }
}

impl Serialize for Progress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.players.len()))?;
        for (player, wins) in &self.players {
            map.serialize_entry(player, wins)?;
        }
        map.end()
    }
}
