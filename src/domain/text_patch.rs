//! Exact-match text edits applied to files written by the scaffolding binary.
//!
//! Both operations return `None` when the target text is absent so callers can
//! report which file lacked it.

/// Remove `prefix` from the start of every line of the first occurrence of `target`.
pub fn uncomment(content: &str, target: &str, prefix: &str) -> Option<String> {
    if target.is_empty() {
        return None;
    }
    let idx = content.find(target)?;

    let uncommented = target
        .lines()
        .map(|line| line.strip_prefix(prefix).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..idx]);
    out.push_str(&uncommented);
    out.push_str(&content[idx + target.len()..]);
    Some(out)
}

/// Replace every occurrence of `old` with `new`.
pub fn replace_all(content: &str, old: &str, new: &str) -> Option<String> {
    if old.is_empty() || !content.contains(old) {
        return None;
    }
    Some(content.replace(old, new))
}
