//! Option filtering for the select menu
//!
//! The built-in filter is a plain case-insensitive substring match on each
//! option's label. Source order is preserved; nothing is scored or re-sorted.
//! Anything fuzzier belongs in a caller-supplied async search.

/// Filter options whose label contains `search_text`, ignoring case.
///
/// An empty `search_text` returns every option, in order.
pub fn filter_options<T, F>(options: &[T], search_text: &str, label: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    if search_text.is_empty() {
        return options.to_vec();
    }

    let needle = search_text.to_lowercase();
    options
        .iter()
        .filter(|option| label(option).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Wrap a (possibly out of range) index into `0..len`.
///
/// Anything below zero lands on the last index and anything past the end
/// lands on the first, so single steps cycle through the list in both
/// directions. Returns `None` for an empty list.
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let last = len - 1;
    if index < 0 {
        Some(last)
    } else if index as usize > last {
        Some(0)
    } else {
        Some(index as usize)
    }
}
