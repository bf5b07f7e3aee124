//! Source weight meter behind `kgb`: how many non-whitespace characters the
//! bot's own source is made of.

use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Non-whitespace characters in `text`.
#[must_use]
pub fn count_non_whitespace(text: &str) -> u64 {
    text.chars().filter(|c| !c.is_whitespace()).map(|_| 1).sum()
}

fn has_listed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Walks `root` recursively and sums [`count_non_whitespace`] over every file
/// whose extension is in `extensions`.
///
/// Files are read at call time; nothing is cached. I/O errors are returned.
pub async fn measure(root: &Path, extensions: &[String]) -> Result<u64> {
    let mut total = 0;
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && has_listed_extension(&path, extensions) {
                let bytes = tokio::fs::read(&path).await?;
                total += count_non_whitespace(&String::from_utf8_lossy(&bytes));
            }
        }
    }

    tracing::debug!("Weighed {:?}: {} characters", root, total);
    Ok(total)
}

/// Reply styling the count as the bot's weight.
#[must_use]
pub fn weight_message(characters: u64) -> String {
    format!("⚖️ Il Ciccione Bot pesa **{characters} kg**")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::TempDir;

    fn rs() -> Vec<String> {
        vec!["rs".to_string()]
    }

    #[test]
    fn test_count_non_whitespace() {
        assert_eq!(count_non_whitespace(""), 0);
        assert_eq!(count_non_whitespace(" \t\n"), 0);
        assert_eq!(count_non_whitespace("fn main() {}\n"), 10);
        assert_eq!(count_non_whitespace("è ciccione"), 9);
    }

    #[tokio::test]
    async fn test_measure_walks_nested_directories() {
        let dir = TempDir::new("weight-nested");
        dir.write("main.rs", "fn main() {}\n");
        dir.write("bot/mod.rs", "pub mod a;");
        dir.write("bot/deep/a.rs", "  x  ");
        dir.write("notes.txt", "ignored entirely");

        let total = measure(dir.path(), &rs()).await.unwrap();
        assert_eq!(total, 10 + 8 + 1);
    }

    #[tokio::test]
    async fn test_measure_honours_extension_list() {
        let dir = TempDir::new("weight-ext");
        dir.write("lib.rs", "ab");
        dir.write("Cargo.toml", "cd");

        let exts = vec!["rs".to_string(), "toml".to_string()];
        assert_eq!(measure(dir.path(), &exts).await.unwrap(), 4);
        assert_eq!(measure(dir.path(), &rs()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_measure_empty_tree() {
        let dir = TempDir::new("weight-empty");
        assert_eq!(measure(dir.path(), &rs()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_measure_missing_root_is_io_error() {
        let dir = TempDir::new("weight-missing");
        let result = measure(&dir.path().join("absent"), &rs()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_weight_message() {
        assert_eq!(weight_message(1234), "⚖️ Il Ciccione Bot pesa **1234 kg**");
    }
}
