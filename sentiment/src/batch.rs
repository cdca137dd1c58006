//! Input normalization: raw textarea contents into an ordered feedback batch.
//!
//! DESIGN
//! ======
//! Normalization is a pure function over the whole buffer. Callers recompute
//! the batch on every edit instead of patching it, so there is no incremental
//! state to keep consistent.

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;

use serde::Serialize;

/// Ordered, non-empty, trimmed feedback lines.
///
/// Every element is non-empty after trimming and elements keep the order in
/// which they appeared in the source text. Only [`normalize`] builds one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeedbackBatch(Vec<String>);

/// Split `raw` on line boundaries (`\n` or `\r\n`), trim each line, and drop
/// the ones left empty.
#[must_use]
pub fn normalize(raw: &str) -> FeedbackBatch {
    FeedbackBatch(
        raw.lines()
            .map(trim_line)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect(),
    )
}

/// Strip Unicode whitespace and byte-order marks from both ends.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl FeedbackBatch {
    /// The lines in submission order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FeedbackBatch {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
