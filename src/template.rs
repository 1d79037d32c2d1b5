/// Replaces every `{key}` in `text` with its value. Keys are matched
/// literally with their braces, so a bare `domain` or `ip` is left alone.
pub fn substitute_placeholders(text: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(text.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{key}}}"), value)
        })
}
