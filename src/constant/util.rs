pub(crate) enum SensitiveMode {
    /// only the specified number of characters will be displayed at most.
    /// However, if the length is less than this number, none of them will be displayed.
    /// to ensure that there are definitely some characters that are not displayed.
    Normal(usize),
}

/// # get hidden sensitive string
///
/// convert string from "something" to "so*****ng"
///
/// ### Arguments
///
/// * `str`: original string
/// * `sensitive_mode`: mode to show sensitive string
pub(crate) fn get_hidden_sensitive_string(str: &str, sensitive_mode: SensitiveMode) -> String {
    let len = str.chars().count();
    let show_len = match sensitive_mode {
        SensitiveMode::Normal(shown_len) => shown_len,
    };

    let prefix_len = show_len / 2;
    let suffix_len = show_len - prefix_len;

    str.chars()
        .enumerate()
        .map(|(i, c)| {
            if len <= show_len || (i >= prefix_len && i < len - suffix_len) {
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// # get snippet
///
/// First `max_chars` characters of `content`, cut on a char boundary.
pub(crate) fn get_snippet(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
