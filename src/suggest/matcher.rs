/// Filter candidate labels by case-insensitive containment of `query`.
///
/// Returns the ordered subsequence of `candidates` whose lowercased text
/// contains the lowercased query ("Ind" matches "India" and "Indonesia").
/// An empty query keeps every candidate.
pub fn filter(candidates: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return candidates.to_vec();
    }

    let needle = query.to_lowercase();
    let matched: Vec<String> = candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    log::debug!(
        "filter: {} of {} candidates contain \"{}\"",
        matched.len(),
        candidates.len(),
        query
    );

    matched
}

/// Advance the selection cursor by `steps` "down" presses.
///
/// The cursor clamps at the last entry; pressing past the end keeps the
/// last entry selected. From `None` (nothing highlighted yet) the first
/// press lands on index 0. An empty list has no cursor.
pub fn advance_cursor(filtered: &[String], cursor: Option<usize>, steps: usize) -> Option<usize> {
    if filtered.is_empty() {
        return None;
    }

    let last = filtered.len() - 1;
    match (cursor, steps) {
        (current, 0) => current.map(|index| index.min(last)),
        (None, steps) => Some((steps - 1).min(last)),
        (Some(index), steps) => Some(index.saturating_add(steps).min(last)),
    }
}

/// Step the selection cursor back by `steps` "up" presses.
///
/// Stepping back past the first entry returns to the unselected state;
/// there is no wrap-around to the end of the list.
pub fn retreat_cursor(filtered: &[String], cursor: Option<usize>, steps: usize) -> Option<usize> {
    if filtered.is_empty() {
        return None;
    }

    let last = filtered.len() - 1;
    cursor.and_then(|index| index.min(last).checked_sub(steps))
}

/// Confirm the highlighted entry.
///
/// Returns `None` when the cursor holds no valid index: Enter on a list
/// that was never navigated confirms nothing.
pub fn confirm<'a>(filtered: &'a [String], cursor: Option<usize>) -> Option<&'a str> {
    filtered.get(cursor?).map(String::as_str)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
