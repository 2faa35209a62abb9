use std::io::{BufRead, Write};

use crate::adapters::Console;
use crate::config::MovieGuideConfig;
use crate::domain::model::MovieList;
use crate::domain::ports::{InitOutcome, TitleStore};
use crate::utils::error::{AppError, Result};
use crate::utils::format::{rule, separator};
use crate::utils::validation::{parse_position, validate_title};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieCommand {
    Display,
    Add,
    Delete,
    Exit,
    Invalid(String),
}

impl MovieCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MovieCommand::Display,
            "2" => MovieCommand::Add,
            "3" => MovieCommand::Delete,
            "4" => MovieCommand::Exit,
            other => MovieCommand::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// 選單迴圈：記憶體中的清單 + 每次變更後整份寫回 `store`
pub struct MovieGuide<S: TitleStore> {
    config: MovieGuideConfig,
    store: S,
    list: MovieList,
}

impl<S: TitleStore> MovieGuide<S> {
    pub fn new(config: MovieGuideConfig, store: S) -> Self {
        Self {
            config,
            store,
            list: MovieList::default(),
        }
    }

    pub fn list(&self) -> &MovieList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        self.bootstrap(console)?;

        loop {
            self.print_menu(console)?;
            let raw = console.prompt("Command: ")?;
            let command = MovieCommand::parse(&raw);
            tracing::debug!("Dispatching {:?}", command);

            if self.execute(command, console)? == Flow::Exit {
                break;
            }
        }

        tracing::info!("Movie guide finished with {} titles", self.list.len());
        Ok(())
    }

    /// 建立預設檔案並載入清單；失敗只回報，不中止
    pub fn bootstrap<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let location = self.store.location();

        match self.store.initialize(&self.config.default_titles) {
            Ok(InitOutcome::Created) => console.println(&format!(
                "\nSUCCESS: Created '{}' and added initial titles.",
                location
            ))?,
            Ok(InitOutcome::AlreadyExists) => console.println(&format!(
                "\nNote: '{}' already exists. Using existing file data.",
                location
            ))?,
            Err(e) => {
                tracing::error!("Initialization failed: {}", e);
                console.println(&format!(
                    "\nFATAL ERROR: Could not create or write to file '{}'.",
                    location
                ))?;
            }
        }

        let titles = match self.store.load() {
            Ok(titles) => titles,
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Load failed: {} ({})", e, e.recovery_suggestion());
                console.println(&e.user_friendly_message())?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        self.list = MovieList::new(titles);
        Ok(())
    }

    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: MovieCommand,
        console: &mut Console<R, W>,
    ) -> Result<Flow> {
        match command {
            MovieCommand::Display => self.display(console)?,
            MovieCommand::Add => self.add(console)?,
            MovieCommand::Delete => self.delete(console)?,
            MovieCommand::Exit => {
                let sep = separator(self.config.separator_width);
                console.println(&sep)?;
                console.println("Exiting program. All changes saved. Goodbye!")?;
                console.println(&sep)?;
                return Ok(Flow::Exit);
            }
            MovieCommand::Invalid(token) => {
                let sep = separator(self.config.separator_width);
                console.println(&sep)?;
                console.println(&format!(
                    "ERROR: Invalid command '{}'. Please choose 1, 2, 3, or 4.",
                    token
                ))?;
                console.println(&sep)?;
            }
        }
        Ok(Flow::Continue)
    }

    pub fn display<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        for line in self.render_list() {
            console.println(&line)?;
        }
        Ok(())
    }

    pub fn render_list(&self) -> Vec<String> {
        let width = self.config.separator_width;
        let mut lines = vec![separator(width)];

        if self.list.is_empty() {
            lines.push("The movie list is currently empty.".to_string());
        } else {
            lines.push("CURRENT MOVIE LIST:".to_string());
            lines.push(rule(width));
            lines.extend(
                self.list
                    .numbered()
                    .map(|(n, title)| format!("{}. {}", n, title)),
            );
        }

        lines.push(separator(width));
        lines
    }

    pub fn add<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let raw = console.prompt("\nEnter the title of the movie to add: ")?;

        match validate_title(&raw) {
            Ok(title) => {
                self.list.push(title.clone());
                if self.persist(console)? {
                    console.println(&format!(
                        "\nSUCCESS: '{}' was added and saved to file.",
                        title
                    ))?;
                }
            }
            Err(e) => {
                tracing::debug!("Rejected title {:?}", raw);
                console.println(&format!("\n{}", e.user_friendly_message()))?;
            }
        }

        self.display(console)
    }

    pub fn delete<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        self.display(console)?;

        if self.list.is_empty() {
            console.println("Nothing to delete.")?;
            return Ok(());
        }

        let raw = console.prompt("Enter the number of the movie to delete: ")?;
        match parse_position(&raw, self.list.len()) {
            Ok(position) => {
                let title = self.list.remove_at(position)?;
                if self.persist(console)? {
                    console.println(&format!(
                        "\nSUCCESS: '{}' was deleted and changes were saved to file.",
                        title
                    ))?;
                }
            }
            Err(e) => {
                tracing::debug!("Rejected position {:?}: {}", raw, e);
                console.println(&format!("\n{}", e.user_friendly_message()))?;
            }
        }

        self.display(console)
    }

    fn print_menu<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let sep = separator(self.config.separator_width);
        console.println(&format!("\n{}", sep))?;
        console.println("           FILE-BASED MOVIE LIST MANAGER")?;
        console.println(&sep)?;
        console.println("Please choose a command from the list below:")?;
        console.println("  1. Display Movies")?;
        console.println("  2. Add Movie")?;
        console.println("  3. Delete Movie")?;
        console.println("  4. Exit Program")?;
        console.println(&sep)
    }

    /// 寫回失敗時保留記憶體中的變更並回報，回傳是否成功
    fn persist<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<bool> {
        match self.store.save(self.list.titles()) {
            Ok(()) => Ok(true),
            Err(e @ AppError::StorageWriteError { .. }) => {
                tracing::error!("Save failed: {} ({})", e, e.recovery_suggestion());
                console.println(&format!("\n{}", e.user_friendly_message()))?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
