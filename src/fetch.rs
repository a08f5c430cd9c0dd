use anyhow::Result;

use crate::api::{ApiClient, CardPage};
use crate::catalog::{Card, Talent};
use crate::challenges::ChallengeStats;

/// Expansion ids queried by the card fetch (0 is conjured/misc).
pub const EXPANSION_COUNT: u32 = 8;
/// Banner (color) ids queried per expansion.
pub const BANNER_COUNT: u32 = 12;
/// Talent tiers queried by the talent fetch.
pub const TALENT_TIERS: u32 = 6;
/// The API silently truncates pages above this size.
pub const MAX_PAGE_LEN: usize = 100;

/// Records gathered by a fetch, plus a description of every page that failed.
#[derive(Debug)]
pub struct FetchReport<T> {
    pub records: Vec<T>,
    pub failed_pages: Vec<String>,
}

/// Pages to request for the full card list, as `(expansion, banner)`.
///
/// Conjured monster cards (expansion 0, banner 11) are skipped: there are too
/// many of them for a single page.
pub fn card_pages() -> Vec<(u32, u32)> {
    let mut pages = Vec::new();
    for expansion in 0..EXPANSION_COUNT {
        for banner in 0..BANNER_COUNT {
            if expansion == 0 && banner == 11 {
                continue;
            }
            pages.push((expansion, banner));
        }
    }
    pages
}

fn check_page<T>(page: CardPage<T>, label: &str) -> Result<Vec<T>> {
    if page.card_len > MAX_PAGE_LEN {
        anyhow::bail!("Too many cards! {}", label);
    }
    Ok(page.cards)
}

fn finish<T>(report: FetchReport<T>, attempted: usize) -> Result<FetchReport<T>> {
    if attempted > 0 && report.failed_pages.len() == attempted {
        anyhow::bail!("All requests failed. Check your network connection and the API address.");
    }
    Ok(report)
}

/// Fetch every card page one after another. A failing page is logged and
/// skipped; the fetch only fails when no page succeeds.
pub async fn fetch_cards(client: &ApiClient) -> Result<FetchReport<Card>> {
    let pages = card_pages();
    let mut report = FetchReport {
        records: Vec::new(),
        failed_pages: Vec::new(),
    };

    for &(expansion, banner) in &pages {
        let label = format!("Banner: {}, Exp: {}", banner, expansion);
        let result = client
            .card_page::<Card>(banner, expansion)
            .await
            .and_then(|page| check_page(page, &label));
        match result {
            Ok(cards) => {
                tracing::debug!(expansion, banner, count = cards.len(), "fetched card page");
                report.records.extend(cards);
            }
            Err(e) => {
                tracing::warn!("Error fetching data for {}: {:#}", label, e);
                report.failed_pages.push(label);
            }
        }
    }

    finish(report, pages.len())
}

/// Fetch every talent tier, with the same failure rules as [`fetch_cards`].
pub async fn fetch_talents(client: &ApiClient) -> Result<FetchReport<Talent>> {
    let mut report = FetchReport {
        records: Vec::new(),
        failed_pages: Vec::new(),
    };

    for tier in 0..TALENT_TIERS {
        let label = format!("Tier: {}", tier);
        let result = client
            .talent_page::<Talent>(tier)
            .await
            .and_then(|page| check_page(page, &label));
        match result {
            Ok(talents) => {
                tracing::debug!(tier, count = talents.len(), "fetched talent page");
                report.records.extend(talents);
            }
            Err(e) => {
                tracing::warn!("Error fetching data for {}: {:#}", label, e);
                report.failed_pages.push(label);
            }
        }
    }

    finish(report, TALENT_TIERS as usize)
}

/// Fetch all challenges, oldest first, with their winners.
/// Any failed request aborts the whole fetch.
pub async fn fetch_challenge_stats(client: &ApiClient) -> Result<ChallengeStats> {
    let mut summaries = client.all_challenges().await?;
    summaries.reverse();
    tracing::debug!(count = summaries.len(), "fetched challenge list");

    let mut details = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        details.push(client.challenge(&summary.uid).await?);
    }

    Ok(ChallengeStats::from_details(&details))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_pages_skip_conjured_monsters() {
        let pages = card_pages();
        assert_eq!(pages.len(), 8 * 12 - 1);
        assert!(!pages.contains(&(0, 11)));
        assert!(pages.contains(&(1, 11)));
        assert_eq!(pages[0], (0, 0));
        assert_eq!(pages[pages.len() - 1], (7, 11));
    }

    #[test]
    fn test_oversized_page_rejected() {
        let page = CardPage::<Card> {
            card_len: 101,
            cards: Vec::new(),
        };
        let err = check_page(page, "Banner: 1, Exp: 2").unwrap_err();
        assert!(err.to_string().contains("Too many cards! Banner: 1, Exp: 2"));
    }

    #[test]
    fn test_full_page_accepted() {
        let page = CardPage::<Card> {
            card_len: 100,
            cards: Vec::new(),
        };
        assert!(check_page(page, "x").is_ok());
    }

    #[test]
    fn test_all_failed_is_error() {
        let report: FetchReport<Card> = FetchReport {
            records: Vec::new(),
            failed_pages: vec!["a".to_string(), "b".to_string()],
        };
        assert!(finish(report, 2).is_err());

        let partial: FetchReport<Card> = FetchReport {
            records: Vec::new(),
            failed_pages: vec!["a".to_string()],
        };
        assert!(finish(partial, 2).is_ok());
    }
}
