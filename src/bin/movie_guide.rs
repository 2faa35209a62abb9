use console_labs::utils::{logger, validation::Validate};
use console_labs::{Console, MovieGuide, MovieGuideConfig, TextFileStore};

fn main() {
    // 初始化日誌
    logger::init_cli_logger();

    let config = MovieGuideConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!("Movie guide config: {:?}", config);

    let store = TextFileStore::new(config.storage_path.clone());
    let mut guide = MovieGuide::new(config, store);
    let mut console = Console::stdio();

    if let Err(e) = guide.run(&mut console) {
        tracing::error!(
            "Movie guide stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("\n{}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}
