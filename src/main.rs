use clap::Parser;
use termtest::utils::{logger, validation::Validate};
use termtest::{CliConfig, LineSettings, MenuSession, SerialTransport};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting termtest");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match LineSettings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    // Single open-time check; no retry or reconnect by design of the tool.
    let transport = match SerialTransport::open(&settings) {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("❌ Failed to open {}: {}", settings.device, e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = MenuSession::new(transport);

    match session.run(stdin.lock(), stdout.lock()) {
        Ok(()) => {
            tracing::info!("✅ Session finished");
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
