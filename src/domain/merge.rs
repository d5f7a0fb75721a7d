use super::FeedEntry;

/// Concatenate batches in order and sort newest first. The sort is stable,
/// so entries with equal timestamps keep their concatenation order. Entries
/// sharing a link are all kept.
pub fn merge_newest_first<I>(batches: I) -> Vec<FeedEntry>
where
    I: IntoIterator<Item = Vec<FeedEntry>>,
{
    let mut merged: Vec<FeedEntry> = batches.into_iter().flatten().collect();
    merged.sort_by(|a, b| a.cmp_newest_first(b));
    merged
}
