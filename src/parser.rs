/// Split freeform text into an ordered list of trimmed, non-empty entries.
///
/// The delimiter is chosen once for the whole input: if the text contains a
/// newline it is split on newlines, otherwise on commas. Commas inside a
/// newline-separated list are kept as part of the entry.
///
/// # Example
/// ```
/// use recipe_box::parse_list;
///
/// assert_eq!(parse_list("Water, Tea leaves"), vec!["Water", "Tea leaves"]);
/// assert_eq!(parse_list("a,b\nc"), vec!["a,b", "c"]);
/// ```
pub fn parse_list(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let delimiter = if text.contains('\n') { '\n' } else { ',' };

    text.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
