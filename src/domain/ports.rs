use crate::utils::error::Result;

/// `initialize` 的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

/// 片名清單的持久化；每次變更都整份覆寫
pub trait TitleStore {
    /// 檔案不存在時寫入預設片名，已存在則不動
    fn initialize(&self, defaults: &[String]) -> Result<InitOutcome>;
    fn load(&self) -> Result<Vec<String>>;
    fn save(&self, titles: &[String]) -> Result<()>;
    /// 訊息中顯示的儲存位置
    fn location(&self) -> String;
}
