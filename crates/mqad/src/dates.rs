//! Date expression recognition in free text.
//!
//! A fixed regex table covering the date shapes that show up in member
//! messages: ISO and slash dates, month-name dates in either order,
//! relative words, "next/this" phrases, and bare weekday names. Matches
//! come back as the original substrings in order of appearance.
//!
//! Partial expressions ("Friday", "next week", "March 3") are read as
//! their next future occurrence when a consumer needs a point in time;
//! the scanner itself only recognizes and reports the text.

use regex::Regex;
use std::sync::LazyLock;

const MONTHS: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|\
Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Date shapes, most specific first so overlap resolution prefers them.
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // 2025-03-14
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
        // 3/14/25, 14/3/2025
        Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap(),
        // March 14, March 14th, Mar 14 2025
        Regex::new(&format!(
            r"(?i)\b(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s+\d{{4}})?\b"
        ))
        .unwrap(),
        // 14 March, 14th of March 2025
        Regex::new(&format!(
            r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{MONTHS})\.?(?:,?\s+\d{{4}})?\b"
        ))
        .unwrap(),
        // next Friday, this weekend, next month
        Regex::new(
            r"(?i)\b(?:next|this)\s+(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|week|weekend|month|year)\b",
        )
        .unwrap(),
        // today, tomorrow, tonight
        Regex::new(r"(?i)\b(?:today|tomorrow|tonight)\b").unwrap(),
        // bare weekday
        Regex::new(r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
            .unwrap(),
    ]
});

/// All date expressions in `text`, in order of appearance.
///
/// When two patterns match overlapping spans, the earlier-starting match
/// wins; ties go to the longer (more specific) one, so "next Friday" is
/// reported once rather than as "next Friday" plus "Friday".
pub fn extract_dates(text: &str) -> Vec<String> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for pattern in DATE_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            spans.push((m.start(), m.end()));
        }
    }

    spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut dates = Vec::new();
    let mut covered_until = 0;
    for (start, end) in spans {
        if start < covered_until {
            continue;
        }
        dates.push(text[start..end].to_string());
        covered_until = end;
    }
    dates
}
