use crate::accounts::ChatAccounts;

const ELLIPSIS: char = '…';

/// Escape control characters of the chat markup.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Cut a text to `max_chars` characters, the last one being an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.into();
    }

    let mut output: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    output.push(ELLIPSIS);
    output
}

/// Escape a text, cut so the escaped result holds in `max_chars` characters.
///
/// Escape sequences are never split.
pub fn escape_truncated(text: &str, max_chars: usize) -> String {
    let escaped = escape(text);
    if escaped.chars().count() <= max_chars {
        return escaped;
    }

    let budget = max_chars.saturating_sub(1);
    let mut output = String::new();
    let mut used = 0;
    for c in text.chars() {
        let piece = escape(c.encode_utf8(&mut [0; 4]));
        let len = piece.chars().count();
        if used + len > budget {
            break;
        }

        output.push_str(&piece);
        used += len;
    }

    output.push(ELLIPSIS);
    output
}

pub fn link(url: &str, text: &str) -> String {
    format!("<{}|{}>", url, escape(text))
}

/// Mention when the login has a chat account, italic login otherwise.
pub fn user_link(accounts: &ChatAccounts, login: &str) -> String {
    match accounts.get(login) {
        Some(account) => format!("<@{account}>"),
        None => format!("_{}_", escape(login)),
    }
}
