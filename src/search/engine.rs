//! Ranking of arbitrary items by their best-matching text field.

use super::scorer::{self, Score};

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch<'a, T> {
    /// The matched item.
    pub item: &'a T,
    /// Score of the best-matching field.
    pub score: i32,
    /// Character offsets into the best-matching field.
    pub matches: Vec<usize>,
    /// Index of the best-matching field as returned by the extractor.
    pub field: usize,
}

/// Rank `items` against `query`.
///
/// `fields` extracts the searchable text of an item, primary field first.
/// Each field is scored independently and the strictly highest score wins,
/// so on ties the earlier field is kept.
///
/// A blank query returns every item unranked (score 0, no matches) in input
/// order. Otherwise items without a positive score are dropped and the rest
/// are sorted by descending score; equal scores keep their input order.
pub fn search<'a, T, F, I, S>(query: &str, items: &'a [T], fields: F) -> Vec<FuzzyMatch<'a, T>>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.trim().is_empty() {
        return items
            .iter()
            .map(|item| FuzzyMatch {
                item,
                score: 0,
                matches: Vec::new(),
                field: 0,
            })
            .collect();
    }

    let mut results: Vec<FuzzyMatch<'a, T>> = items
        .iter()
        .filter_map(|item| {
            let (field, best) = best_field(query, fields(item))?;
            Some(FuzzyMatch {
                item,
                score: best.score,
                matches: best.matches,
                field,
            })
        })
        .collect();

    // `sort_by` is stable, which keeps input order for equal scores.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Like [`search`], keeping at most `limit` results.
pub fn search_limited<'a, T, F, I, S>(
    query: &str,
    items: &'a [T],
    fields: F,
    limit: usize,
) -> Vec<FuzzyMatch<'a, T>>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = search(query, items, fields);
    results.truncate(limit);
    results
}

/// Pick the field with the strictly highest positive score.
fn best_field<I, S>(query: &str, fields: I) -> Option<(usize, Score)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<(usize, Score)> = None;

    for (idx, field) in fields.into_iter().enumerate() {
        let candidate = scorer::score(query, field.as_ref());
        let better = match &best {
            Some((_, current)) => candidate.score > current.score,
            None => true,
        };
        if better {
            best = Some((idx, candidate));
        }
    }

    best.filter(|(_, score)| score.is_match())
}
