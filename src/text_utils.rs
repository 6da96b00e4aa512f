use chrono::{DateTime, NaiveDate};

/// Marker appended by the summarization helpers.
pub const ELLIPSIS: &str = "...";

/// Cuts `text` down to `max_chars` user-perceived characters plus the
/// ellipsis marker. Counts chars, not bytes, so multi-byte characters are
/// never split mid-codepoint. Text at or under the limit passes unchanged.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    format!("{}{}", prefix, ELLIPSIS)
}

/// First two whitespace-delimited words of a title, verbatim (punctuation
/// included), with the ellipsis marker when more words follow.
pub fn summarize_title(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() <= 2 {
        return title.to_string();
    }
    format!("{} {}{}", words[0], words[1], ELLIPSIS)
}

/// Parses the `published` field, which the API serves either as a bare date
/// or as a full RFC 3339 timestamp.
pub fn parse_published(buf: &str) -> Option<NaiveDate> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Some(date_time.date_naive());
    }
    NaiveDate::parse_from_str(buf, "%Y-%m-%d").ok()
}

pub fn format_published_long(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_published_short(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
