//! Word/color list attached to the rotating-word element.

use tracing::warn;

use crate::error::RotatorError;

/// Attribute holding the JSON array of words.
pub const WORDS_ATTRIBUTE: &str = "data-words";
/// Attribute holding the JSON array of color names, parallel to the words.
pub const COLORS_ATTRIBUTE: &str = "data-colors";

/// One entry of the rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatingWord {
    pub word: String,
    pub color: String,
    /// Length in characters (not bytes)
    len: usize,
}

impl RotatingWord {
    pub fn new(word: impl Into<String>, color: impl Into<String>) -> Self {
        let word = word.into();
        let len = word.chars().count();
        Self {
            word,
            color: color.into(),
            len,
        }
    }

    pub fn char_len(&self) -> usize {
        self.len
    }

    /// First `n` characters of the word.
    pub fn prefix(&self, n: usize) -> &str {
        match self.word.char_indices().nth(n) {
            Some((end, _)) => &self.word[..end],
            None => &self.word,
        }
    }
}

/// Non-empty ordered list of rotating words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<RotatingWord>,
}

impl WordList {
    /// Pair words with colors.
    ///
    /// Lists of different lengths are clamped to the shorter one; empty words
    /// are dropped since there is nothing to type.
    pub fn from_pairs<W, C>(words: W, colors: C) -> Result<Self, RotatorError>
    where
        W: IntoIterator,
        W::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let entries: Vec<RotatingWord> = words
            .into_iter()
            .zip(colors)
            .map(|(w, c)| RotatingWord::new(w, c))
            .filter(|entry| entry.char_len() > 0)
            .collect();

        if entries.is_empty() {
            return Err(RotatorError::EmptyWordList);
        }
        Ok(Self { entries })
    }

    /// Parse the raw `data-words` / `data-colors` attribute values.
    pub fn from_attributes(words: Option<&str>, colors: Option<&str>) -> Result<Self, RotatorError> {
        let words = parse_list(WORDS_ATTRIBUTE, words)?;
        let colors = parse_list(COLORS_ATTRIBUTE, colors)?;

        if words.len() != colors.len() {
            warn!(
                words = words.len(),
                colors = colors.len(),
                "Rotating word lists differ in length, using the shorter"
            );
        }
        Self::from_pairs(words, colors)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, wrapping around the list.
    pub fn get(&self, index: usize) -> &RotatingWord {
        &self.entries[index % self.entries.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RotatingWord> {
        self.entries.iter()
    }
}

fn parse_list(attribute: &'static str, raw: Option<&str>) -> Result<Vec<String>, RotatorError> {
    let raw = raw.ok_or(RotatorError::MissingAttribute(attribute))?;
    serde_json::from_str(raw).map_err(|e| RotatorError::Malformed {
        attribute,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attributes() {
        let list = WordList::from_attributes(
            Some(r#"["Design","Build"]"#),
            Some(r#"["blue","green"]"#),
        )
        .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).word, "Design");
        assert_eq!(list.get(1).color, "green");
    }

    #[test]
    fn test_get_wraps() {
        let list = WordList::from_pairs(["a", "b"], ["x", "y"]).unwrap();
        assert_eq!(list.get(2).word, "a");
        assert_eq!(list.get(5).word, "b");
    }

    #[test]
    fn test_mismatched_lengths_clamp_to_shorter() {
        let list = WordList::from_attributes(
            Some(r#"["Design","Build","Ship"]"#),
            Some(r#"["blue"]"#),
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).word, "Design");
    }

    #[test]
    fn test_empty_words_dropped() {
        let list = WordList::from_pairs(["", "Build"], ["blue", "green"]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).color, "green");
    }

    #[test]
    fn test_empty_list_is_error() {
        let err = WordList::from_attributes(Some("[]"), Some("[]")).unwrap_err();
        assert_eq!(err, RotatorError::EmptyWordList);
    }

    #[test]
    fn test_missing_attribute() {
        let err = WordList::from_attributes(None, Some(r#"["blue"]"#)).unwrap_err();
        assert_eq!(err, RotatorError::MissingAttribute(WORDS_ATTRIBUTE));
    }

    #[test]
    fn test_malformed_attribute() {
        let err = WordList::from_attributes(Some(r#"["Design"]"#), Some("blue,green")).unwrap_err();
        assert!(matches!(
            err,
            RotatorError::Malformed { attribute: COLORS_ATTRIBUTE, .. }
        ));
    }

    #[test]
    fn test_prefix_counts_characters() {
        let entry = RotatingWord::new("Café", "coral");
        assert_eq!(entry.char_len(), 4);
        assert_eq!(entry.prefix(0), "");
        assert_eq!(entry.prefix(3), "Caf");
        assert_eq!(entry.prefix(4), "Café");
        assert_eq!(entry.prefix(10), "Café");
    }
}
