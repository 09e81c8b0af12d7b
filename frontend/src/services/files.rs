//! Conversion of browser file lists.

use web_sys::{File, FileList};

use crate::types::SelectedFile;

/// Read every entry of a picker or drop `FileList`, in order.
pub fn selected_files(list: &FileList) -> Vec<SelectedFile<File>> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64, file.type_(), file))
        .collect()
}
