// Adapters layer: concrete implementations for the console and the text file store.

pub mod console;
pub mod text_file;

pub use console::Console;
pub use text_file::TextFileStore;
