use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CorpusError;

/// Discover candidate files in `dir`, sorted lexicographically by file name.
///
/// With an extension filter, only file names ending in the (dot-prefixed)
/// extension are taken. Without one, any file name containing a dot is
/// taken except `.ipynb` notebooks, which need conversion before they can
/// be compared. Subdirectories are not descended into: a corpus is one flat
/// directory of submissions.
pub(crate) fn discover_files(
    dir: &Path,
    ext_filter: Option<&str>,
) -> Result<Vec<(String, PathBuf)>, CorpusError> {
    if !dir.exists() {
        return Err(CorpusError::MissingDir(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory(dir.to_path_buf()));
    }

    let ext = ext_filter.map(dotted);

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let keep = match ext.as_deref() {
            Some(ext) => name.ends_with(ext),
            None => name.contains('.') && !name.ends_with(".ipynb"),
        };
        if keep {
            files.push((name, entry.path()));
        }
    }

    if files.is_empty() {
        return Err(CorpusError::NoDocuments {
            dir: dir.to_path_buf(),
            filter: ext,
        });
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Accepts an extension with or without its leading dot.
fn dotted(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
