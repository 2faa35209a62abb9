use std::path::PathBuf;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_single_line,
    Validate,
};

pub const DEFAULT_STORAGE_PATH: &str = "movies.txt";
pub const DEFAULT_SEPARATOR_WIDTH: usize = 55;
pub const DEFAULT_TITLES: [&str; 3] = [
    "Cat on a Hot Tin Roof",
    "On the Waterfront",
    "Monty Python and the Holy Grail",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieGuideConfig {
    pub storage_path: PathBuf,
    pub separator_width: usize,
    /// 建立新檔時寫入的片名
    pub default_titles: Vec<String>,
}

impl Default for MovieGuideConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            default_titles: DEFAULT_TITLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl MovieGuideConfig {
    /// 測試用：改用其他檔案路徑
    pub fn with_storage_path(path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: path.into(),
            ..Self::default()
        }
    }
}

impl Validate for MovieGuideConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage_path", &self.storage_path.to_string_lossy())?;
        validate_positive_number("separator_width", self.separator_width, 1)?;
        for title in &self.default_titles {
            validate_non_empty_string("default_titles", title)?;
            validate_single_line("default_titles", title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MovieGuideConfig::default();
        assert_eq!(config.storage_path, PathBuf::from("movies.txt"));
        assert_eq!(config.separator_width, 55);
        assert_eq!(config.default_titles.len(), 3);
        assert_eq!(config.default_titles[2], "Monty Python and the Holy Grail");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multiline_default_title_rejected() {
        let config = MovieGuideConfig {
            default_titles: vec!["Line one\nLine two".to_string()],
            ..MovieGuideConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_storage_path_rejected() {
        let config = MovieGuideConfig::with_storage_path("");
        assert!(config.validate().is_err());
    }
}
