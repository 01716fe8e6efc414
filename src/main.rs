use clap::Parser;
use dice_locations::app::report;
use dice_locations::config::toml_config::AtlasConfig;
use dice_locations::utils::{logger, validation::Validate};
use dice_locations::{CliConfig, LocalFiles, LocationError, LocationLoader, Session};

fn main() {
    let config = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match &config.config {
        Some(path) => match AtlasConfig::from_file(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    let verbose = config.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    logger::init_logger(verbose, config.json_logs);

    tracing::info!("Starting dice-locations");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config, file_config.as_ref()) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig, file_config: Option<&AtlasConfig>) -> Result<(), LocationError> {
    config.validate()?;
    if let Some(file_config) = file_config {
        file_config.validate()?;
    }

    let base_dir = config
        .base_dir
        .clone()
        .or_else(|| file_config.and_then(|c| c.base_dir().map(str::to_string)));
    let source = LocalFiles::new(base_dir);

    let paths = report::collect_paths(file_config, &config.paths);
    let atlas = if paths.is_empty() {
        let stdin = std::io::stdin();
        Session::new(source).run(stdin.lock(), std::io::stdout())?
    } else {
        report::load_all(&LocationLoader::new(source), &paths)?
    };

    tracing::info!("Loaded {} locations", atlas.len());

    if config.check {
        report::check_destinations(&atlas);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_names(&mut out, &atlas, config.format)?;

    if let Some(name) = &config.roll {
        let seed = config.seed.or_else(|| file_config.and_then(|c| c.seed()));
        let mut rng = report::roll_rng(seed);
        let roll = atlas.roll(name, &mut rng)?;
        report::write_roll(&mut out, roll, config.format)?;
    }

    Ok(())
}
