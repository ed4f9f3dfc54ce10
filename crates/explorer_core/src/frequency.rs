use std::collections::HashMap;

/// Occurrence counts per token, iterated in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a single left-to-right scan of `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        debug_assert_eq!(
            table.entries.iter().map(|(_, count)| count).sum::<usize>(),
            table.total
        );
        table
    }

    pub fn add(&mut self, token: &str) {
        self.total += 1;
        if let Some(&slot) = self.index.get(token) {
            self.entries[slot].1 += 1;
            return;
        }
        self.index.insert(token.to_string(), self.entries.len());
        self.entries.push((token.to_string(), 1));
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Number of tokens scanned, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }
}
