use clap::Parser;
use safe_calc::core::rendezvous::run_two_phase;
use safe_calc::core::showcase::create_greeting;
use safe_calc::core::ConfigProvider;
use safe_calc::utils::error::ErrorSeverity;
use safe_calc::utils::validation::{validate_non_empty_string, Validate};
use safe_calc::utils::logger;
use safe_calc::{
    CalcConfig, CalcEngine, CalcError, CliConfig, Command, DivisionRequest, MemoryStore,
    ResultFormatter, SafeDivider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: &Command, config: &CalcConfig) -> safe_calc::Result<()> {
    match command {
        Command::Divide { dividend, divisor } => {
            let divider = SafeDivider::new(config.overflow_policy());
            let formatter = ResultFormatter::new(config.error_style());

            let outcome = divider.divide(DivisionRequest::new(*dividend, *divisor));
            println!("{}", formatter.format(&outcome));
            outcome.map(|_| ()).map_err(CalcError::from)
        }
        Command::Batch { json } => {
            if config.requests.is_empty() {
                return Err(CalcError::MissingConfigError {
                    field: "requests".to_string(),
                });
            }

            let engine = CalcEngine::with_config(MemoryStore::new(), config);
            let report = engine.run(&config.requests).await?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in &report.lines {
                    println!("{}", line);
                }
                println!(
                    "{} computed, {} reused, {} failed",
                    report.computed, report.reused, report.failed
                );
            }
            Ok(())
        }
        Command::Rendezvous { .. } => {
            let report = run_two_phase(config.workers())?;
            for (id, seen) in report.observed.iter().enumerate() {
                println!("Worker {} observed {} of {} arrivals", id, seen, report.workers);
            }
            if report.all_synchronized() {
                println!("✅ All {} workers synchronized", report.workers);
            }
            Ok(())
        }
        Command::Greet { name, age } => {
            validate_non_empty_string("name", name)?;
            println!("{}", create_greeting(name, *age));
            Ok(())
        }
    }
}
