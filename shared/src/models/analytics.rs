use serde::{Deserialize, Serialize};

/// How many categories the genre list and genre pie chart show before bucketing.
pub const DEFAULT_TOP_N: usize = 5;

/// Label of the synthetic bucket that sums every category past the top N.
pub const OTHERS_LABEL: &str = "Others";

/// One row of a bucketed distribution, ready for a chart or a text list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketEntry {
    pub label: String,
    pub value: u64,
}

impl BucketEntry {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Reduces a category → count mapping to its `n` largest categories,
/// sorted descending, followed by one "Others" entry summing the remainder.
///
/// Equal counts keep their input order. No "Others" entry is produced when
/// `n` or fewer categories exist, and an empty input yields an empty output.
pub fn bucket_top_n<'a, I>(entries: I, n: usize) -> Vec<BucketEntry>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut sorted: Vec<(&str, u64)> = entries.into_iter().collect();
    // `sort_by` is stable, which gives the tie-break.
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let remainder = if sorted.len() > n {
        Some(sorted.split_off(n))
    } else {
        None
    };

    let mut buckets: Vec<BucketEntry> = sorted
        .into_iter()
        .map(|(label, value)| BucketEntry::new(label, value))
        .collect();

    if let Some(rest) = remainder {
        let others = rest.iter().map(|(_, value)| *value).sum();
        buckets.push(BucketEntry::new(OTHERS_LABEL, others));
    }

    buckets
}
