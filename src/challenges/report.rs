use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use super::stats::{ChallengeStats, Difficulty, Progress};

/// Chart page with `<DIFFICULTY>_STATS` / `<DIFFICULTY>_PROGRESS` placeholders.
pub const TEMPLATE: &str = include_str!("../../templates/challenge_stats.html");

pub const DEFAULT_REPORT_FILE: &str = "challenge_stats.html";

const GENERATED_AT: &str = "GENERATED_AT";

/// JSON safe to drop inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("Failed to serialize chart data")?;
    Ok(json.replace("</", "<\\/"))
}

/// Fill the chart template with stats and cumulative progress per difficulty.
///
/// Placeholders are located in the template before any data is inserted, so
/// a challenge or player name that happens to spell a placeholder is left
/// alone. Each placeholder is replaced once; missing ones are skipped.
pub fn render_html(template: &str, stats: &ChallengeStats, generated_at: DateTime<Utc>) -> Result<String> {
    let mut replacements: Vec<(String, String)> = Vec::new();
    for difficulty in Difficulty::ALL {
        let entries = stats.entries(difficulty);
        let prefix = difficulty.placeholder_prefix();
        replacements.push((format!("{}_STATS", prefix), script_json(entries)?));
        replacements.push((
            format!("{}_PROGRESS", prefix),
            script_json(&Progress::from_entries(entries))?,
        ));
    }
    replacements.push((
        GENERATED_AT.to_string(),
        generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    ));

    let mut spots: Vec<(usize, usize, &str)> = Vec::new();
    for (placeholder, value) in &replacements {
        match template.find(placeholder.as_str()) {
            Some(start) => spots.push((start, start + placeholder.len(), value.as_str())),
            None => tracing::warn!("Template has no {} placeholder", placeholder),
        }
    }
    spots.sort_by_key(|(start, _, _)| *start);

    let mut html = String::with_capacity(template.len() + spots.iter().map(|s| s.2.len()).sum::<usize>());
    let mut cursor = 0;
    for (start, end, value) in spots {
        if start < cursor {
            continue;
        }
        html.push_str(&template[cursor..start]);
        html.push_str(value);
        cursor = end;
    }
    html.push_str(&template[cursor..]);

    Ok(html)
}

/// Write the rendered page atomically.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(html.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}
