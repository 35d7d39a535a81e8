use std::io::Write;

use wordsift_core::FrequencyTable;

const HEADERS: [&str; 6] = ["#", "Corpus Freq", "Text Freq", "Word", "Example Sentence", "Meaning"];

/// Printed instead of rows when the passage has no uncommon words
pub const EMPTY_NOTICE: &str = "No uncommon words found";

/// Terminal columns taken by `text`.
///
/// East Asian wide characters, which include the highlight markers and
/// Chinese meanings, take two columns. Combining marks are counted as one,
/// so text using them can still drift by a column.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1F64F
            | 0x1F900..=0x1F9FF
            | 0x20000..=0x3FFFD
    )
}

/// Aligned plain-text table, the meaning column only when the table has meanings.
///
/// An empty table gets its headers followed by [`EMPTY_NOTICE`].
pub fn write_table(table: &FrequencyTable, out: &mut impl Write) -> std::io::Result<()> {
    let with_meaning = table.includes_meaning();
    let columns = if with_meaning { 6 } else { 5 };

    let rows: Vec<Vec<String>> = table
        .ranked()
        .map(|(rank, row)| {
            let mut cells = vec![
                rank.to_string(),
                row.reference_frequency.to_string(),
                row.text_frequency.to_string(),
                row.word.clone(),
                row.example.clone(),
            ];
            if with_meaning {
                cells.push(row.meaning.clone().unwrap_or_default());
            }
            cells
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS[..columns].iter().map(|h| display_width(h)).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(display_width(cell));
        }
    }

    let headers: Vec<String> = HEADERS[..columns].iter().map(|h| h.to_string()).collect();
    write_line(out, &headers, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(out, &rule, &widths)?;
    for cells in &rows {
        write_line(out, cells, &widths)?;
    }
    if rows.is_empty() {
        writeln!(out, "{EMPTY_NOTICE}")?;
    }

    Ok(())
}

fn write_line(out: &mut impl Write, cells: &[String], widths: &[usize]) -> std::io::Result<()> {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            writeln!(out, "{cell}")?;
        } else {
            let padding = width - display_width(cell);
            write!(out, "{cell}{}  ", " ".repeat(padding))?;
        }
    }
    Ok(())
}

pub fn write_json(table: &FrequencyTable, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &table.rows)?;
    writeln!(out)?;
    Ok(())
}
