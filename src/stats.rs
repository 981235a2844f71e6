//! Classification counters for one pass over the listing.

use std::collections::HashMap;

use crate::listing::ObjectRecord;

/// Extension-map entry for attachments whose key contains no `.`.
pub const NO_EXTENSION: &str = "<ohne_endung>";

/// Running totals over the listing.
///
/// `total` counts every non-placeholder object and always equals
/// `csv_count + attachment_count`. `total_size` covers every listed object;
/// placeholders are zero bytes by definition.
#[derive(Debug, Default)]
pub struct BucketStats {
    pub total: u64,
    pub csv_count: u64,
    pub attachment_count: u64,
    pub total_size: u64,
    pub extensions: HashMap<String, u64>,
}

impl BucketStats {
    /// Fold one listed object into the totals.
    pub fn record(&mut self, record: &ObjectRecord) {
        self.total_size += record.size;

        // "Folder" placeholders some tools create.
        if record.key.ends_with('/') && record.size == 0 {
            return;
        }

        self.total += 1;
        let key_lower = record.key.to_lowercase();

        if key_lower.ends_with(".csv") {
            self.csv_count += 1;
            return;
        }

        self.attachment_count += 1;
        let extension = match key_lower.rfind('.') {
            Some(index) => key_lower[index + 1..].to_string(),
            None => NO_EXTENSION.to_string(),
        };
        *self.extensions.entry(extension).or_insert(0) += 1;
    }

    /// Extension counts, most frequent first; ties break alphabetically.
    pub fn extensions_by_count(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .extensions
            .iter()
            .map(|(extension, count)| (extension.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
