//! Fuzzy subsequence scoring for a single query/candidate pair.
//!
//! Every character of the query must appear, in order, somewhere in the
//! candidate. Comparison is case-insensitive, but match offsets refer to the
//! original candidate so callers can highlight the right characters.

/// Points awarded for every matched character.
const MATCH_SCORE: i32 = 10;
/// Bonus when a match directly follows the previous one.
const CONSECUTIVE_BONUS: i32 = 5;
/// Bonus when a match starts a word.
const WORD_BOUNDARY_BONUS: i32 = 15;
/// Bonus when the matched candidate character is uppercase.
const CAPITAL_BONUS: i32 = 10;
/// Penalty per skipped candidate character between two matches.
const GAP_PENALTY: i32 = 2;
/// Candidates shorter than this receive the difference as a bonus.
const SHORTNESS_THRESHOLD: i32 = 50;
/// Bonus when the whole candidate equals the query.
const EXACT_BONUS: i32 = 100;
/// Bonus when the candidate starts with the query.
const PREFIX_BONUS: i32 = 50;

/// The outcome of scoring one query against one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    /// Relevance score. Zero or below means no match.
    pub score: i32,
    /// Character offsets into the candidate that satisfied the query.
    pub matches: Vec<usize>,
}

impl Score {
    /// The "no match" result.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this result counts as a match.
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Fold a single character to lowercase.
///
/// Characters whose lowercase form expands to several characters fold to the
/// first one so that offsets stay aligned with the original text.
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '_')
}

/// Score `query` against `candidate`.
///
/// Returns [`Score::none`] when the query is empty or is not a
/// case-insensitive subsequence of the candidate.
pub fn score(query: &str, candidate: &str) -> Score {
    let query: Vec<char> = query.chars().map(fold).collect();
    if query.is_empty() {
        return Score::none();
    }

    let original: Vec<char> = candidate.chars().collect();
    let folded: Vec<char> = original.iter().copied().map(fold).collect();

    let mut total = 0;
    let mut matches = Vec::with_capacity(query.len());
    let mut query_idx = 0;
    let mut last_match: Option<usize> = None;

    for (i, &c) in folded.iter().enumerate() {
        if query_idx == query.len() {
            break;
        }
        if c != query[query_idx] {
            continue;
        }

        total += MATCH_SCORE;

        if last_match.is_some_and(|last| last + 1 == i) {
            total += CONSECUTIVE_BONUS;
        }

        if i == 0 || is_word_separator(original[i - 1]) {
            total += WORD_BOUNDARY_BONUS;
        }

        if fold(original[i]) != original[i] {
            total += CAPITAL_BONUS;
        }

        if let Some(last) = last_match {
            total -= GAP_PENALTY * (i - last - 1) as i32;
        }

        matches.push(i);
        last_match = Some(i);
        query_idx += 1;
    }

    if query_idx < query.len() {
        return Score::none();
    }

    total += (SHORTNESS_THRESHOLD - original.len() as i32).max(0);

    if folded == query {
        total += EXACT_BONUS;
    }
    if folded.starts_with(&query) {
        total += PREFIX_BONUS;
    }

    Score {
        score: total,
        matches,
    }
}
