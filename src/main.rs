use bocli::actions::execute_command;
use bocli::commands::{build_cli, params::PARAMETER_VERBOSE};
use color_print::ceprintln;
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    // RUST_LOG wins over --verbose
    let default_level = if matches.get_flag(PARAMETER_VERBOSE) {
        "bocli=debug"
    } else {
        "bocli=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute_command(&matches).await {
        let code = e.exit_code();
        ceprintln!("<r><bold>ERROR:</bold></r> {}", e);
        tracing::debug!("Exiting with {:?}: {}", code, code.message());
        std::process::exit(code.code());
    }
}
