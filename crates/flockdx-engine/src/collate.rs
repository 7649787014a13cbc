use std::collections::HashSet;

/// Drop repeated items, keeping the first occurrence, and cap the length.
pub(crate) fn unique_capped<I>(items: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(cap)
        .collect()
}
