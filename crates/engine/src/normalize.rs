//! Cleanup of extracted document text.
//!
//! Text pulled out of PDFs and office documents carries layout noise: bullet
//! glyphs, page-number footers, hard line breaks and runs of blank lines.
//! Normalization reduces it to a single line of prose.

/// Markers stripped from the start of a line when followed by whitespace.
const BULLET_MARKERS: &[char] = &['•', '◦', '▪', '·', '-', '–', '—', '*'];

/// Normalize raw extracted text into clean prose.
pub fn normalize_text(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());

    for line in raw.lines() {
        let line: String = line
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        let line = strip_bullet(line.trim());

        if line.is_empty() || is_page_number(line) {
            continue;
        }

        for word in line.split_whitespace() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(word);
        }
    }

    result
}

fn strip_bullet(line: &str) -> &str {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(marker), Some(next)) if BULLET_MARKERS.contains(&marker) && next.is_whitespace() => {
            line[marker.len_utf8()..].trim_start()
        }
        (Some(marker), None) if BULLET_MARKERS.contains(&marker) => "",
        _ => line,
    }
}

fn is_page_number(line: &str) -> bool {
    line.chars().all(|c| c.is_ascii_digit())
}
