use clap::Parser;
use mcprops::{EditorOptions, PageOptions, statics};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Edit a Minecraft server's server.properties through a form.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Server directory containing the properties file.
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Properties file name inside the server directory.
    #[arg(long, default_value = statics::PROPERTIES_FILENAME)]
    file: String,

    /// Copy the current file to `<file>.bak.<timestamp>` before every save.
    #[arg(long)]
    backup: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let options = EditorOptions {
        server_dir: cli.dir,
        page: PageOptions {
            filename: cli.file,
            backup_before_save: cli.backup,
        },
    };
    tracing::info!(dir = %options.server_dir.display(), "starting editor");

    mcprops::run_gui(options).map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
