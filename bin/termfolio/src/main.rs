//! Termfolio - a portfolio command-line interpreter in your terminal
//!
//! Runs one interpreter session over stdin/stdout. Logs go to stderr.

mod app;

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, info};

use termfolio::ansi::Styler;
use termfolio::config::Config;
use termfolio::error::Result;
use termfolio::{handle_startup_error, init, init_with_config, sender_from_config, Session};

use app::Repl;

/// Command line options
#[derive(Debug)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Portfolio content file overriding the configured one
    content_path: Option<PathBuf>,
    /// Preference identity overriding the configured one
    identity: Option<String>,
    /// Keep preferences in memory only
    no_persist: bool,
    /// Enable debug logging
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs {
            config_path: None,
            content_path: None,
            identity: None,
            no_persist: false,
            debug: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let value = args.get(i + 1).ok_or("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(value));
                    i += 1;
                }
                "--content" => {
                    let value = args.get(i + 1).ok_or("Missing content file path")?;
                    app_args.content_path = Some(PathBuf::from(value));
                    i += 1;
                }
                "--identity" | "-i" => {
                    let value = args.get(i + 1).ok_or("Missing identity")?;
                    app_args.identity = Some(value.clone());
                    i += 1;
                }
                "--no-persist" => {
                    app_args.no_persist = true;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("{} v{}", termfolio::NAME, termfolio::VERSION);
                    process::exit(0);
                }
                arg => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("Termfolio - {}", termfolio::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    termfolio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>      Path to configuration file");
    println!("        --content <PATH>     Portfolio content file (TOML)");
    println!("    -i, --identity <NAME>    Preference identity to restore and save");
    println!("        --no-persist         Keep username and aliases in memory only");
    println!("    -d, --debug              Enable debug logging");
    println!("    -h, --help               Print this help message");
    println!("    -V, --version            Print version information");
    println!();
    println!("KEYS:");
    println!("    End a line with TAB to list suggestions for it.");
    println!("    A line holding only ESC, or Ctrl+C, cancels the contact dialog.");
    println!();
    println!("CONFIGURATION:");
    println!("    Termfolio looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $TERMFOLIO_CONFIG");
    println!("    3. $XDG_CONFIG_HOME/termfolio/config.toml");
    println!("    4. ~/.config/termfolio/config.{{toml,json}}");
    println!("    5. ~/.termfolio/config.toml");
    println!("    6. ./termfolio.toml");
    println!("    7. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    TERMFOLIO_CONFIG     Path to configuration file");
    println!("    TERMFOLIO_DEBUG      Enable debug logging (1 or true)");
    println!("    RUST_LOG             Set logging level (error, warn, info, debug, trace)");
    println!("    NO_COLOR             Disable ANSI styling");
}

fn init_logging(debug: bool) {
    let debug_env = env::var("TERMFOLIO_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if debug || debug_env { "debug" } else { "warn" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Load configuration from file or defaults and apply command-line overrides
fn load_configuration(args: &AppArgs) -> Result<Config> {
    let mut config = match &args.config_path {
        Some(path) => init_with_config(path)?,
        None => init()?,
    };

    if let Some(path) = &args.content_path {
        debug!("Using content from: {}", path.display());
        config.content.path = Some(path.clone());
    }
    if let Some(identity) = &args.identity {
        debug!("Using preference identity: {}", identity);
        config.session.identity = identity.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        print_help();
        process::exit(2);
    });

    init_logging(args.debug);
    info!("Starting {} v{}", termfolio::NAME, termfolio::VERSION);
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args).await {
        error!("Application failed: {}", e);
        eprintln!("{}", handle_startup_error(&e));
        process::exit(1);
    }

    info!("{} shutdown complete", termfolio::NAME);
}

async fn run(args: AppArgs) -> Result<()> {
    let config = load_configuration(&args)?;
    let sender = sender_from_config(&config.outbound)?;
    info!("Outbound messages go through the {} sender", sender.name());

    let session = Session::from_config(config, !args.no_persist)?;
    let color = std::io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none();

    Repl::new(session, sender, Styler::new(color)).run().await
}
