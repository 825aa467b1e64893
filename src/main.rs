use clap::Parser;
use ipv4_subnet_calc::cli::Cli;
use ipv4_subnet_calc::config::Config;
use ipv4_subnet_calc::output::OutputFormat;
use ipv4_subnet_calc::shell;
use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config =
        Config::from_env_with_overrides(cli.min_prefix, cli.max_prefix, cli.log_config.clone())?;

    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!("Logging disabled, cannot load {}: {e}", config.log_config);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }
    log::info!("#Start main() bounds={:?}", config.bounds);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if cli.cidrs.is_empty() {
        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        shell::run_interactive(
            reader,
            &mut std::io::stdout(),
            &config,
            format,
            shell::shutdown_signal(),
        )
        .await?;
    } else {
        let mut stdout = std::io::stdout();
        let all_valid =
            shell::run_once(&cli.cidrs, &config, format, &mut stdout, &mut std::io::stderr())?;
        stdout.flush()?;
        if !all_valid {
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
