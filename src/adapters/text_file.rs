use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::ports::{InitOutcome, TitleStore};
use crate::utils::error::{AppError, Result};

/// 純文字檔，一行一個片名
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn write_lines(&self, titles: &[String]) -> Result<()> {
        let mut content = String::with_capacity(titles.iter().map(|t| t.len() + 1).sum());
        for title in titles {
            content.push_str(title);
            content.push('\n');
        }

        fs::write(&self.path, content).map_err(|source| AppError::StorageWriteError {
            path: self.display_path(),
            source,
        })
    }
}

/// `\r\n`、`\n`、`\r` 都視為換行；每行去除前後空白
fn split_lines(content: &str) -> Vec<String> {
    let mut titles: Vec<String> = content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(is_line_break))
        .map(|line| line.trim().to_string())
        .collect();

    // 結尾的換行不產生空白片名
    if content.is_empty() || content.ends_with(is_line_break) {
        titles.pop();
    }
    titles
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

impl TitleStore for TextFileStore {
    fn initialize(&self, defaults: &[String]) -> Result<InitOutcome> {
        if self.path.exists() {
            tracing::debug!("Storage file {} already exists", self.path.display());
            return Ok(InitOutcome::AlreadyExists);
        }

        self.write_lines(defaults)?;
        tracing::info!(
            "Created {} with {} default titles",
            self.path.display(),
            defaults.len()
        );
        Ok(InitOutcome::Created)
    }

    fn load(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                AppError::StorageNotFoundError {
                    path: self.display_path(),
                }
            } else {
                AppError::StorageReadError {
                    path: self.display_path(),
                    source,
                }
            }
        })?;

        let titles = split_lines(&content);
        tracing::debug!("Loaded {} titles from {}", titles.len(), self.path.display());
        Ok(titles)
    }

    fn save(&self, titles: &[String]) -> Result<()> {
        self.write_lines(titles)?;
        tracing::debug!("Saved {} titles to {}", titles.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.display_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_trims_each_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.txt");
        fs::write(&path, "  Alien \r\n\nHeat\n").unwrap();

        let store = TextFileStore::new(&path);
        assert_eq!(store.load().unwrap(), vec!["Alien", "", "Heat"]);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), Vec::<String>::new());
        assert_eq!(split_lines("Alien"), vec!["Alien"]);
        assert_eq!(split_lines("Alien\rHeat\r"), vec!["Alien", "Heat"]);
        assert_eq!(split_lines("Alien\r\n\r\nHeat\n"), vec!["Alien", "", "Heat"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = TextFileStore::new(dir.path().join("absent.txt"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, AppError::StorageNotFoundError { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_save_writes_newline_terminated_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.txt");
        let store = TextFileStore::new(&path);

        store
            .save(&["Alien".to_string(), "Heat".to_string()])
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Alien\nHeat\n");

        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = TextFileStore::new(dir.path().join("missing").join("movies.txt"));

        let err = store.save(&["Alien".to_string()]).unwrap_err();
        assert!(matches!(err, AppError::StorageWriteError { .. }));
        assert!(!err.is_recoverable());
    }
}
