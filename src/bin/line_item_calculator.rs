use console_labs::utils::{logger, validation::Validate};
use console_labs::{CalculatorConfig, CalculatorSession, Console};

fn main() {
    // 初始化日誌
    logger::init_cli_logger();

    let config = CalculatorConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!("Calculator config: {:?}", config);

    let session = CalculatorSession::new(config);
    let mut console = Console::stdio();

    if let Err(e) = session.run(&mut console) {
        tracing::error!(
            "Calculator stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("\n{}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}
