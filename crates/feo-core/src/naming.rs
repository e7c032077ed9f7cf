//! Identifier naming helpers.

/// Title-case each hyphen-separated token of an identifier and join the
/// tokens with single spaces.
///
/// `"service-now"` becomes `"Service Now"`; `"red-hat-insights"` becomes
/// `"Red Hat Insights"`. Only the first character of each token is changed.
/// Empty tokens (from leading, trailing, or doubled hyphens) are kept as empty
/// words so the transform stays a pure per-token mapping.
pub fn title_case_identifier(identifier: &str) -> String {
    identifier
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
