use crate::utils::error::{AppError, Result};

/// 一筆價格 × 數量的計算
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub price: f64,
    pub quantity: u64,
}

impl LineItem {
    pub fn new(price: f64, quantity: u64) -> Self {
        Self { price, quantity }
    }

    pub fn total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// 依插入順序保存的片名清單，允許重複
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieList {
    titles: Vec<String>,
}

impl MovieList {
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn push(&mut self, title: String) {
        self.titles.push(title);
    }

    /// `position` 是 1-based，回傳被移除的片名
    pub fn remove_at(&mut self, position: usize) -> Result<String> {
        if position == 0 || position > self.titles.len() {
            return Err(AppError::IndexOutOfRangeError {
                index: position as i64,
                len: self.titles.len(),
            });
        }
        Ok(self.titles.remove(position - 1))
    }

    /// (1-based 編號, 片名)
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.titles
            .iter()
            .enumerate()
            .map(|(i, title)| (i + 1, title.as_str()))
    }
}

impl From<Vec<String>> for MovieList {
    fn from(titles: Vec<String>) -> Self {
        Self::new(titles)
    }
}
