//! Sentence-level search for career mentions

pub const SENTENCE_DELIMITER: &str = ". ";

/// Split on the literal `". "` delimiter. Pieces are not trimmed.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITER).collect()
}

/// First word of a multi-word career name, e.g. "Ingeniería" for
/// "Ingeniería Química". Single-word names have no general field.
pub fn general_field(career_name: &str) -> Option<&str> {
    let mut words = career_name.split_whitespace();
    let first = words.next()?;
    words.next().map(|_| first)
}

/// Trimmed sentences that mention `needle`, case-insensitively.
pub fn sentences_containing(sentences: &[&str], needle: &str) -> Vec<String> {
    let needle = needle.to_lowercase();
    sentences
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .map(|s| s.trim().to_string())
        .collect()
}

/// Sentences of `text` that mention the career by full name, or failing that
/// by its general field word.
pub fn find_mentions(career_name: &str, text: &str) -> Vec<String> {
    let name = career_name.trim();
    if name.is_empty() {
        return Vec::new();
    }

    let pieces = sentences(text);
    let mentions = sentences_containing(&pieces, name);
    if !mentions.is_empty() {
        return mentions;
    }

    match general_field(name) {
        Some(field) => sentences_containing(&pieces, field),
        None => Vec::new(),
    }
}

pub fn has_mentions(career_name: &str, text: &str) -> bool {
    !find_mentions(career_name, text).is_empty()
}
