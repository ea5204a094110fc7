use clap::Parser;
use poke_lookup::core::engine::{FailureKind, SearchOutcome};
use poke_lookup::core::ConfigProvider;
use poke_lookup::utils::{logger, validation::Validate};
use poke_lookup::{CliConfig, LocalSnapshot, LookupEngine, PokeApiClient, Session, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（沒有指定時使用預設值）
    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 應用命令列覆蓋設定
    cli.apply_overrides(&mut config);

    let verbose = cli.verbose || config.verbose();
    if cli.log_json || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting poke-lookup");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = PokeApiClient::from_config(&config)?;
    let engine = LookupEngine::new(client, config.initial_theme());
    let store = config.snapshot_path().map(LocalSnapshot::new);
    if let Some(store) = &store {
        tracing::info!("📁 Page snapshots go to: {}", store.path().display());
    }

    let mut session = Session::new(engine, store);
    let mut stdout = tokio::io::stdout();

    if let Some(query) = &cli.query {
        let outcome = session.run_once(query, &mut stdout).await?;
        let exit_code = match outcome {
            SearchOutcome::Failed(FailureKind::NotFound) => 2,
            SearchOutcome::Failed(FailureKind::Network) => 3,
            _ => 0,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
        return Ok(());
    }

    println!("{}\n", poke_lookup::app::session::HELP);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, &mut stdout).await?;

    tracing::info!("👋 Bye");
    Ok(())
}
