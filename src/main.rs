use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

pub use catalog::*;
pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::output::*;
pub use services::query::*;
pub use services::review::*;
pub use services::storage::*;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        if cli.json {
            let envelope = serde_json::json!({
                "ok": false,
                "error": { "code": error_code(&e), "message": e.to_string() }
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| envelope.to_string())
            );
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let catalog = load_active_catalog(cli.catalog.as_deref(), &config)?;
    handle_runtime_commands(cli, &catalog, &config)
}

/// Catalog source precedence: `--catalog` flag, config override, the default
/// path if present, otherwise the built-in seed.
fn load_active_catalog(flag: Option<&str>, config: &ConfigFile) -> anyhow::Result<Catalog> {
    if let Some(source) = flag.or(config.general.catalog.as_deref()) {
        return load_catalog(source);
    }
    let default = default_catalog_path()?;
    if default.exists() {
        return load_catalog(&default.to_string_lossy());
    }
    Ok(seed())
}

fn error_code(e: &anyhow::Error) -> &'static str {
    if e.downcast_ref::<ValidationError>().is_some() {
        "VALIDATION"
    } else if matches!(
        e.downcast_ref::<CatalogError>(),
        Some(CatalogError::PlaceNotFound(_))
    ) {
        "NOT_FOUND"
    } else {
        "ERROR"
    }
}
