use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::utils::error::{AppError, Result};

/// 以行為單位的主控台輸入輸出
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn println(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// 顯示提示並讀一行，回傳值不含換行字元
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        // 非 UTF-8 的位元組換成 U+FFFD，交給驗證規則當成格式錯誤處理
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Err(AppError::InputClosedError);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let end = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(end);
        Ok(line)
    }
}
