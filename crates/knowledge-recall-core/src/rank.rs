//! Query ranker: substring scoring over titles, content, and summaries.
//!
//! Everything here is pure. No I/O, no hidden state; identical inputs
//! always produce identical output.
//!
//! # Scoring Algorithm
//!
//! 1. Lowercase the query once.
//! 2. For each candidate, lowercase `title`, `content`, and `summary`.
//! 3. Add [`TITLE_WEIGHT`] if the title contains the query,
//!    [`CONTENT_WEIGHT`] if the content does, and [`SUMMARY_WEIGHT`] if a
//!    non-empty summary does.
//! 4. Drop candidates that scored 0.
//! 5. Stable sort by score (desc); ties keep candidate order.
//! 6. Truncate to `limit`.
//!
//! Matching is exact substring containment. An empty query is contained in
//! every title and content, so every candidate scores at least 4.

use crate::models::{preview, ContentRecord, ScoreExplanation, SearchResult};

pub const TITLE_WEIGHT: u32 = 3;
pub const CONTENT_WEIGHT: u32 = 1;
pub const SUMMARY_WEIGHT: u32 = 2;

/// Result count used when the caller does not supply a limit.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Case-fold a query (or field) for comparison.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Evaluate each signal of `record` against an already-normalized query.
pub fn match_signals(record: &ContentRecord, normalized_query: &str) -> ScoreExplanation {
    ScoreExplanation {
        title_match: normalize(&record.title).contains(normalized_query),
        content_match: normalize(&record.content).contains(normalized_query),
        summary_match: record
            .summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .is_some_and(|s| normalize(s).contains(normalized_query)),
    }
}

/// Total weight of the matched signals.
pub fn signal_score(signals: &ScoreExplanation) -> u32 {
    let mut score = 0;
    if signals.title_match {
        score += TITLE_WEIGHT;
    }
    if signals.content_match {
        score += CONTENT_WEIGHT;
    }
    if signals.summary_match {
        score += SUMMARY_WEIGHT;
    }
    score
}

/// Score one record against an already-normalized query.
pub fn score_record(record: &ContentRecord, normalized_query: &str) -> u32 {
    signal_score(&match_signals(record, normalized_query))
}

/// Rank `records` against `query`, returning at most `limit` results.
///
/// Equivalent to [`rank_all_with`] without score explanations.
pub fn rank_all(records: &[ContentRecord], query: &str, limit: i64) -> Vec<SearchResult> {
    rank_all_with(records, query, limit, false)
}

/// Rank `records` against `query`.
///
/// Results with a zero score are dropped, the rest are ordered by
/// descending score with ties in input order, then truncated to `limit`.
/// A `limit` of zero or less yields an empty vector. When `explain` is
/// true each result carries its [`ScoreExplanation`].
pub fn rank_all_with(
    records: &[ContentRecord],
    query: &str,
    limit: i64,
    explain: bool,
) -> Vec<SearchResult> {
    if limit <= 0 {
        return Vec::new();
    }

    let normalized_query = normalize(query);

    let mut results: Vec<SearchResult> = records
        .iter()
        .map(|record| {
            let signals = match_signals(record, &normalized_query);
            SearchResult {
                id: record.id,
                title: record.title.clone(),
                url: record.url.clone(),
                kind: record.kind,
                content: preview(&record.content),
                score: signal_score(&signals),
                explain: explain.then_some(signals),
            }
        })
        .filter(|r| r.score > 0)
        .collect();

    // `sort_by` is stable, which keeps store order for equal scores.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

    results
}
