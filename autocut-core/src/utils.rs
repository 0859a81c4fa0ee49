//! Small string helpers shared by argument handling.

/// Removes every character of `remove_chars` from each item and drops items
/// left empty (e.g., `["a,", ",", "b"]` with `","` -> `["a", "b"]`).
#[must_use]
pub fn clean_list<S: AsRef<str>>(items: &[S], remove_chars: &str) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            item.as_ref()
                .chars()
                .filter(|c| !remove_chars.contains(*c))
                .collect::<String>()
        })
        .filter(|item| !item.is_empty())
        .collect()
}

/// `None`, `"none"` and `"unset"` all mean the option was not given.
#[must_use]
pub fn is_unset(value: Option<&str>) -> bool {
    matches!(value, None | Some("none") | Some("unset"))
}
