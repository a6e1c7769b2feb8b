//! Corpus statistics.
//!
//! Serves the debug/stats endpoint and `mqactl analyze`: field-quality
//! counts, a member leaderboard, outlier numeric mentions, and members
//! whose messages carry enough distinct date expressions to look like a
//! scheduling conflict.

use crate::dates::extract_dates;
use chrono::DateTime;
use mqa_common::api::{CorpusStats, DateConflict, MemberCount};
use mqa_common::message::Message;
use std::collections::{HashMap, HashSet};

const TOP_MEMBERS: usize = 5;
const MAX_CONFLICTS: usize = 10;
const CONFLICT_THRESHOLD: usize = 3;
const OUTLIER_ABOVE: u64 = 10;

/// Compute statistics over a corpus snapshot.
pub fn corpus_stats(corpus: &[Message]) -> CorpusStats {
    let mut missing_id = 0;
    let mut missing_member_name = 0;
    let mut missing_text = 0;
    let mut missing_timestamp = 0;
    let mut bad_timestamps = 0;
    let mut large_number_mentions = 0;

    let mut per_member: HashMap<&str, usize> = HashMap::new();
    let mut dates_per_member: HashMap<&str, HashSet<String>> = HashMap::new();

    for m in corpus {
        if m.id.is_empty() {
            missing_id += 1;
        }
        if m.member_name.is_empty() {
            missing_member_name += 1;
        }
        if m.text.is_empty() {
            missing_text += 1;
        }
        match &m.timestamp {
            None => missing_timestamp += 1,
            Some(ts) => {
                if DateTime::parse_from_rfc3339(ts).is_err() {
                    bad_timestamps += 1;
                }
            }
        }

        if mentions_large_number(&m.text) {
            large_number_mentions += 1;
        }

        if !m.member_name.is_empty() {
            *per_member.entry(m.member_name.as_str()).or_default() += 1;
            dates_per_member
                .entry(m.member_name.as_str())
                .or_default()
                .extend(extract_dates(&m.text));
        }
    }

    let mut top_members: Vec<MemberCount> = per_member
        .into_iter()
        .map(|(member, messages)| MemberCount {
            member: member.to_string(),
            messages,
        })
        .collect();
    top_members.sort_by(|a, b| b.messages.cmp(&a.messages).then(a.member.cmp(&b.member)));
    top_members.truncate(TOP_MEMBERS);

    let mut date_conflicts: Vec<DateConflict> = dates_per_member
        .into_iter()
        .filter(|(_, dates)| dates.len() >= CONFLICT_THRESHOLD)
        .map(|(member, dates)| DateConflict {
            member: member.to_string(),
            distinct_dates: dates.len(),
        })
        .collect();
    date_conflicts.sort_by(|a, b| {
        b.distinct_dates
            .cmp(&a.distinct_dates)
            .then(a.member.cmp(&b.member))
    });
    date_conflicts.truncate(MAX_CONFLICTS);

    CorpusStats {
        total_messages: corpus.len(),
        missing_id,
        missing_member_name,
        missing_text,
        missing_timestamp,
        bad_timestamps,
        top_members,
        large_number_mentions,
        date_conflicts,
    }
}

/// Whether any whitespace-separated token is a number greater than 10.
fn mentions_large_number(text: &str) -> bool {
    text.split_whitespace()
        .any(|tok| matches!(tok.parse::<u64>(), Ok(n) if n > OUTLIER_ABOVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: &str, member: &str, text: &str, timestamp: Option<&str>) -> Message {
        Message {
            id: id.to_string(),
            member_name: member.to_string(),
            text: text.to_string(),
            timestamp: timestamp.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_field_counts() {
        let corpus = vec![
            msg("", "Layla", "hi", None),
            msg("m2", "", "", Some("2025-01-01T00:00:00Z")),
            msg("m3", "Omar", "hello", Some("yesterday-ish")),
        ];

        let stats = corpus_stats(&corpus);
        assert_eq!(stats.total_messages, 3);
        assert_eq!(stats.missing_id, 1);
        assert_eq!(stats.missing_member_name, 1);
        assert_eq!(stats.missing_text, 1);
        assert_eq!(stats.missing_timestamp, 1);
        assert_eq!(stats.bad_timestamps, 1);
    }

    #[test]
    fn test_top_members_sorted_and_capped() {
        let mut corpus = Vec::new();
        for member in ["Ana", "Ben", "Cleo", "Dev", "Eli", "Fay"] {
            corpus.push(msg("m", member, "hi", None));
        }
        corpus.push(msg("m", "Fay", "hi again", None));

        let stats = corpus_stats(&corpus);
        assert_eq!(stats.top_members.len(), 5);
        assert_eq!(stats.top_members[0].member, "Fay");
        assert_eq!(stats.top_members[0].messages, 2);
        // ties broken alphabetically
        assert_eq!(stats.top_members[1].member, "Ana");
    }

    #[test]
    fn test_large_number_counted_once_per_message() {
        let corpus = vec![
            msg("m1", "Omar", "I counted 42 and then 99 more", None),
            msg("m2", "Omar", "just 3 things", None),
        ];

        let stats = corpus_stats(&corpus);
        assert_eq!(stats.large_number_mentions, 1);
    }

    #[test]
    fn test_date_conflict_threshold() {
        let corpus = vec![
            msg("m1", "Vikram", "flights on 2025-01-02 and 2025-02-03", None),
            msg("m2", "Vikram", "or maybe 2025-03-04", None),
            msg("m3", "Nora", "see you on 2025-01-02", None),
        ];

        let stats = corpus_stats(&corpus);
        assert_eq!(stats.date_conflicts.len(), 1);
        assert_eq!(stats.date_conflicts[0].member, "Vikram");
        assert_eq!(stats.date_conflicts[0].distinct_dates, 3);
    }

    #[test]
    fn test_empty_corpus() {
        let stats = corpus_stats(&[]);
        assert_eq!(stats.total_messages, 0);
        assert!(stats.top_members.is_empty());
        assert!(stats.date_conflicts.is_empty());
    }
}
