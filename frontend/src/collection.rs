//! Ordered, deduplicated list of files waiting for upload.
//!
//! Two entries never share the same [`FileKey`] (name and size). Insertion
//! order is kept across batches and removals.

use crate::types::{FileKey, SelectedFile};

/// Counts produced by one [`FileCollection::add_batch`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Files appended to the collection
    pub added: usize,
    /// Files skipped because an equal key was already present
    pub duplicates: usize,
}

impl AddOutcome {
    /// Info text, e.g. `"Added: 2. Skipped duplicates: 1"`.
    pub fn summary(&self) -> String {
        if self.duplicates > 0 {
            format!("Added: {}. Skipped duplicates: {}", self.added, self.duplicates)
        } else {
            format!("Added: {}", self.added)
        }
    }
}

/// The collection of selected files.
#[derive(Clone, Debug)]
pub struct FileCollection<H> {
    files: Vec<SelectedFile<H>>,
}

impl<H> Default for FileCollection<H> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<H> FileCollection<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedFile<H>> {
        self.files.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SelectedFile<H>> {
        self.files.get(index)
    }

    pub fn contains(&self, key: &FileKey) -> bool {
        self.files.iter().any(|f| f.name == key.name && f.size == key.size)
    }

    /// Append every file whose key is not present yet.
    ///
    /// Counts are taken inside the loop, so a duplicate within the batch
    /// itself is reported as a duplicate too.
    pub fn add_batch(&mut self, batch: impl IntoIterator<Item = SelectedFile<H>>) -> AddOutcome {
        let mut outcome = AddOutcome::default();

        for file in batch {
            if self.contains(&file.key()) {
                outcome.duplicates += 1;
            } else {
                self.files.push(file);
                outcome.added += 1;
            }
        }

        outcome
    }

    /// Remove the entry at `index`, or do nothing if it is out of range.
    pub fn remove(&mut self, index: usize) -> Option<SelectedFile<H>> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

impl<H: Clone> FileCollection<H> {
    /// Snapshot of the raw handles, in collection order.
    pub fn handles(&self) -> Vec<SelectedFile<H>> {
        self.files.clone()
    }
}

/// Keep only PDF files, preserving order.
pub fn filter_pdfs<H>(candidates: impl IntoIterator<Item = SelectedFile<H>>) -> Vec<SelectedFile<H>> {
    candidates.into_iter().filter(SelectedFile::is_pdf).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> SelectedFile<()> {
        SelectedFile::new(name, size, "application/pdf", ())
    }

    fn names(collection: &FileCollection<()>) -> Vec<&str> {
        collection.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut files = FileCollection::new();
        let outcome = files.add_batch(vec![pdf("a.pdf", 1), pdf("b.pdf", 2), pdf("c.pdf", 3)]);

        assert_eq!(outcome, AddOutcome { added: 3, duplicates: 0 });
        assert_eq!(names(&files), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_duplicate_across_batches() {
        let mut files = FileCollection::new();
        files.add_batch(vec![pdf("a.pdf", 100)]);
        let outcome = files.add_batch(vec![pdf("a.pdf", 100)]);

        assert_eq!(files.len(), 1);
        assert_eq!(outcome, AddOutcome { added: 0, duplicates: 1 });
    }

    #[test]
    fn test_duplicate_inside_batch() {
        let mut files = FileCollection::new();
        let outcome = files.add_batch(vec![pdf("a.pdf", 100), pdf("a.pdf", 100), pdf("b.pdf", 100)]);

        assert_eq!(outcome, AddOutcome { added: 2, duplicates: 1 });
        assert_eq!(names(&files), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_same_name_different_size_is_distinct() {
        let mut files = FileCollection::new();
        let outcome = files.add_batch(vec![pdf("a.pdf", 100), pdf("a.pdf", 101)]);

        assert_eq!(outcome.added, 2);
    }

    #[test]
    fn test_counts_after_uneven_batches() {
        let mut files = FileCollection::new();
        files.add_batch(vec![pdf("a.pdf", 1), pdf("b.pdf", 2), pdf("c.pdf", 3)]);
        let outcome = files.add_batch(vec![pdf("c.pdf", 3), pdf("d.pdf", 4)]);

        assert_eq!(outcome, AddOutcome { added: 1, duplicates: 1 });
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_no_two_entries_share_a_key() {
        let mut files = FileCollection::new();
        for _ in 0..3 {
            files.add_batch(vec![pdf("a.pdf", 1), pdf("b.pdf", 1), pdf("a.pdf", 2)]);
        }

        let keys: Vec<FileKey> = files.iter().map(|f| f.key()).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut files = FileCollection::new();
        files.add_batch(vec![pdf("a.pdf", 1), pdf("b.pdf", 2), pdf("c.pdf", 3)]);

        let removed = files.remove(1).unwrap();
        assert_eq!(removed.name, "b.pdf");
        assert_eq!(names(&files), vec!["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut files = FileCollection::new();
        files.add_batch(vec![pdf("a.pdf", 1)]);

        assert!(files.remove(5).is_none());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_filter_pdfs() {
        let batch = vec![
            pdf("a.pdf", 1),
            SelectedFile::new("b.txt", 1, "text/plain", ()),
            SelectedFile::new("C.Pdf", 1, "", ()),
        ];

        let filtered = filter_pdfs(batch);
        let names: Vec<&str> = filtered.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "C.Pdf"]);
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(AddOutcome { added: 3, duplicates: 0 }.summary(), "Added: 3");
        assert_eq!(
            AddOutcome { added: 0, duplicates: 1 }.summary(),
            "Added: 0. Skipped duplicates: 1"
        );
    }
}
