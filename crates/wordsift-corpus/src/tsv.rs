use std::collections::HashMap;

/// Parse `word<TAB>count` lines.
///
/// Lines without a count or with an unparsable one are skipped. A word
/// listed on several lines gets the sum of its counts.
pub fn parse(content: &str) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() >= 2 {
            if let Ok(count) = parts[1].trim().parse::<u64>() {
                let total = counts.entry(parts[0].to_string()).or_insert(0u64);
                *total = total.saturating_add(count);
                continue;
            }
        }
        skipped += 1;
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} malformed corpus lines", skipped);
    }

    counts
}
