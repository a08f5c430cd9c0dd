use owo_colors::{OwoColorize, XtermColors};
use std::io::IsTerminal;

use crate::catalog::labels::{card_expansion_label, expansion_name, rarity_glyph, rarity_name, CardColor};
use crate::catalog::{Card, Talent};
use crate::scoring::ScoreResult;

const CARD_NAME_WIDTH: usize = 22;
const TALENT_NAME_WIDTH: usize = 32;
const DOT: &str = "●";
const EVENT_MARKER: &str = "🚩";
const REVELATION_TAG: &str = "(Revelation)";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn horizontal_line(width: usize) -> String {
    "_ ".repeat(width)
}

/// Plain text of a card's color marker, used for width calculations.
fn color_marker_text(color: u32) -> String {
    match CardColor::from_id(color) {
        Some(_) => DOT.to_string(),
        None => format!("UNDEF ({})", color),
    }
}

/// Colored dot for a card color, or `UNDEF (n)` for unknown colors.
pub fn color_marker(color: u32, use_colors: bool) -> String {
    let text = color_marker_text(color);
    if !use_colors {
        return text;
    }
    match CardColor::from_id(color) {
        Some(c) => text.color(XtermColors::from(c.xterm_index())).to_string(),
        None => text.white().to_string(),
    }
}

/// Heading shown above each color group in the short card list.
pub fn color_heading(color: u32) -> String {
    match CardColor::from_id(color) {
        Some(c) => format!("    {} {} {}", c.emoji(), c.name(), c.emoji()),
        None => format!("UNDEF ({})", color),
    }
}

fn padding(visible: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(visible))
}

/// One block per card, separated by a rule whenever the color changes.
/// Verbose mode adds the card description under each card.
pub fn format_card_list(cards: &[Card], use_colors: bool, verbose: bool) -> String {
    let rule = horizontal_line(CARD_NAME_WIDTH);
    let mut lines = vec![rule.clone()];

    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 && card.color != cards[idx - 1].color {
            lines.push(rule.clone());
        }

        let visible = color_marker_text(card.color).chars().count() + 1 + card.name.chars().count();
        let tags = if card.is_revelation() { REVELATION_TAG } else { "" };
        let name = if use_colors {
            card.name.bold().to_string()
        } else {
            card.name.clone()
        };

        lines.push(String::new());
        lines.push(
            format!(
                "{} {} {} {} [{}] {}",
                color_marker(card.color, use_colors),
                name,
                padding(visible, CARD_NAME_WIDTH),
                rarity_glyph(card.rarity),
                card_expansion_label(card.expansion),
                tags
            )
            .trim_end()
            .to_string(),
        );
        if verbose {
            lines.push(card.description.clone());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Compact list: a color heading per group, then `<rarity> <name>` lines.
pub fn format_card_list_short(cards: &[Card]) -> String {
    let mut lines = Vec::new();
    for (idx, card) in cards.iter().enumerate() {
        if idx == 0 || card.color != cards[idx - 1].color {
            lines.push(color_heading(card.color));
        }
        lines.push(format!("{} {}", rarity_glyph(card.rarity), card.name));
    }
    lines.join("\n")
}

/// One block per talent, separated by a rule whenever the tier changes.
pub fn format_talent_list(talents: &[Talent], use_colors: bool, verbose: bool) -> String {
    let rule = horizontal_line(TALENT_NAME_WIDTH * 2 / 3);
    let mut lines = vec![rule.clone()];

    for (idx, talent) in talents.iter().enumerate() {
        let card = &talent.card;
        if idx > 0 && card.rarity != talents[idx - 1].card.rarity {
            lines.push(rule.clone());
        }

        let visible = color_marker_text(card.color).chars().count() + 1 + card.name.chars().count();
        let tags = if card.is_revelation() { REVELATION_TAG } else { "" };
        let marker = if talent.has_events { EVENT_MARKER } else { "" };
        let name = if use_colors {
            card.name.bold().to_string()
        } else {
            card.name.clone()
        };

        lines.push(String::new());
        lines.push(
            format!(
                "{} - {} {} [{}] {} {}",
                card.rarity,
                name,
                padding(visible, TALENT_NAME_WIDTH),
                card_expansion_label(card.expansion),
                tags,
                marker
            )
            .trim_end()
            .to_string(),
        );
        if verbose {
            lines.push(card.description.clone());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

fn bold_count(count: usize, use_colors: bool) -> String {
    if use_colors {
        count.bold().to_string()
    } else {
        count.to_string()
    }
}

/// Header printed above card search results.
pub fn format_card_summary(
    count: usize,
    keywords: &[String],
    excluded_expansions: &[u32],
    excluded_rarities: &[u32],
    use_colors: bool,
) -> String {
    let expansions: Vec<&str> = excluded_expansions.iter().map(|e| expansion_name(*e)).collect();
    let rarities: Vec<&str> = excluded_rarities.iter().map(|r| rarity_name(*r)).collect();
    format!(
        "🎴 {} cards matching: [ {} ]\nExcluded expansions:  [ {} ]\nExcluded rarities:    [ {} ]",
        bold_count(count, use_colors),
        keywords.join(", "),
        expansions.join(", "),
        rarities.join(", ")
    )
}

/// Header printed above talent search results.
pub fn format_talent_summary(count: usize, keywords: &[String], use_colors: bool) -> String {
    format!(
        "🎴 Found {} talents matching:\n   [ {} ]",
        bold_count(count, use_colors),
        keywords.join(", ")
    )
}

pub fn format_card_count(count: usize, use_colors: bool) -> String {
    format!("Number of cards: {}", bold_count(count, use_colors))
}

/// Step-by-step account of a score, for verbose mode.
pub fn format_score_breakdown(query: &str, result: &ScoreResult) -> String {
    let b = &result.breakdown;
    let cards: Vec<String> = b.cards.iter().map(|c| c.to_string()).collect();
    format!(
        "Input Query: {}\n\
         Malignancy: {}\n\
         Cards: [ {} ]\n\
         Range: {}\n\
         Deck Size: {} ({} steps outside)\n\
         Base Accuracy Bonus: {}\n\
         Card Bonus: {}\n\
         Accuracy Bonus: {}\n\
         Fixed Points: {}\n\
         ____________________\n\
         Final Score: {}\n\
         ====================",
        query,
        b.malignancy,
        cards.join(", "),
        b.range,
        b.deck_size,
        b.steps_outside,
        b.base_accuracy_bonus,
        b.card_points,
        b.accuracy_bonus,
        b.fixed_points,
        result.score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_score, ScoreTable};

    fn card(name: &str, color: u32, rarity: u32, expansion: u32) -> Card {
        Card {
            name: name.to_string(),
            description: format!("{} description", name),
            rarity,
            kind: 0,
            category: 0,
            expansion,
            color,
        }
    }

    #[test]
    fn test_color_marker_plain() {
        assert_eq!(color_marker(3, false), "●");
        assert_eq!(color_marker(42, false), "UNDEF (42)");
    }

    #[test]
    fn test_color_marker_colored() {
        let marker = color_marker(2, true);
        assert!(marker.contains("●"));
        assert!(marker.contains("\x1b["));
    }

    #[test]
    fn test_color_heading() {
        assert_eq!(color_heading(1), "    🟢 Green 🟢");
        assert_eq!(color_heading(11), "    👹 Monster 👹");
        assert_eq!(color_heading(0), "UNDEF (0)");
    }

    #[test]
    fn test_card_list_padding_and_labels() {
        let cards = vec![card("Fireball", 3, 2, 1)];
        let output = format_card_list(&cards, false, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "_ ".repeat(22));
        assert_eq!(lines[1], "");
        // "● Fireball" is 10 visible chars, padded to 22
        assert_eq!(lines[2], format!("● Fireball {} 🩵 [Core]", " ".repeat(12)));
    }

    #[test]
    fn test_card_list_rule_between_colors() {
        let cards = vec![card("A", 1, 0, 1), card("B", 1, 0, 1), card("C", 2, 0, 1)];
        let output = format_card_list(&cards, false, false);
        let rules = output.lines().filter(|l| l.starts_with("_ ")).count();
        assert_eq!(rules, 2);
    }

    #[test]
    fn test_card_list_revelation_and_unknown_expansion() {
        let mut revelation = card("Omen", 8, 3, 0);
        revelation.category = 11;
        let output = format_card_list(&[revelation], false, false);
        assert!(output.contains("🤩 [UNKNOWN] (Revelation)"));
    }

    #[test]
    fn test_card_list_long_name_no_padding() {
        let cards = vec![card("An Extremely Long Card Name", 1, 0, 5)];
        let output = format_card_list(&cards, false, false);
        assert!(output.contains("● An Extremely Long Card Name  🩶 [Infinitum]"));
    }

    #[test]
    fn test_card_list_verbose_includes_description() {
        let cards = vec![card("Strike", 1, 0, 1)];
        let output = format_card_list(&cards, false, true);
        assert!(output.contains("Strike description"));
        assert!(!format_card_list(&cards, false, false).contains("Strike description"));
    }

    #[test]
    fn test_card_list_short() {
        let cards = vec![card("A", 1, 0, 1), card("B", 1, 3, 1), card("C", 3, 1, 1)];
        let output = format_card_list_short(&cards);
        assert_eq!(
            output,
            "    🟢 Green 🟢\n🩶 A\n🤩 B\n    🔴 Red 🔴\n💚 C"
        );
    }

    #[test]
    fn test_card_list_short_empty() {
        assert_eq!(format_card_list_short(&[]), "");
    }

    #[test]
    fn test_talent_list() {
        let talents = vec![
            Talent { card: card("Focus", 7, 0, 2), has_events: false },
            Talent { card: card("Frenzy", 7, 1, 1), has_events: true },
        ];
        let output = format_talent_list(&talents, false, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "_ ".repeat(21));
        // "● Focus" is 7 visible chars, padded to 32
        assert_eq!(lines[2], format!("0 - Focus {} [Metaprogression]", " ".repeat(25)));
        assert_eq!(lines[3], "_ ".repeat(21));
        assert!(lines[5].ends_with("[Core]  🚩"));
    }

    #[test]
    fn test_card_summary() {
        let keywords = vec!["fire".to_string(), "burn".to_string()];
        let output = format_card_summary(3, &keywords, &[0, 5], &[0, 1], false);
        assert_eq!(
            output,
            "🎴 3 cards matching: [ fire, burn ]\n\
             Excluded expansions:  [ Conjured/Misc, Infinitum ]\n\
             Excluded rarities:    [ Common, Uncommon ]"
        );
    }

    #[test]
    fn test_talent_summary() {
        let output = format_talent_summary(2, &["".to_string()], false);
        assert_eq!(output, "🎴 Found 2 talents matching:\n   [  ]");
    }

    #[test]
    fn test_card_count() {
        assert_eq!(format_card_count(812, false), "Number of cards: 812");
    }

    #[test]
    fn test_score_breakdown() {
        let query = "5L 9R 3U 6C 2X 145% 24-26";
        let result = calculate_score(query, &ScoreTable::default()).unwrap();
        let output = format_score_breakdown(query, &result);
        assert!(output.contains("Malignancy: 145%"));
        assert!(output.contains("Cards: [ 5L, 9R, 3U, 6C, 2X ]"));
        assert!(output.contains("Range: 24-26"));
        assert!(output.contains("Base Accuracy Bonus: 3000\n"));
        assert!(output.contains("Card Bonus: 5868"));
        assert!(output.contains("Accuracy Bonus: 7350"));
        assert!(output.contains("Fixed Points: 3000"));
        assert!(output.contains("Final Score: 16218"));
    }
}
