use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use job_market::export::{self, Dataset};
use job_market::render::{self, OutputFormat};
use job_market::{logging, shell, snapshot, start_web_server, ConfigManager, Section, Selections};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "job-market-intel")]
#[command(about = "Indian job market intelligence dashboard")]
struct Cli {
    /// YAML or TOML config file (defaults to $DASHBOARD_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        #[arg(long)]
        address: Option<IpAddr>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print one dashboard page with default widget values
    Render {
        #[arg(long, default_value = "overview")]
        section: String,
        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,
    },
    /// Print a snapshot mapping as CSV
    Export { dataset: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfigManager::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve {
        address: None,
        port: None,
    }) {
        Command::Serve { address, port } => {
            let config = config.with_address(address).with_port(port);
            logging::init(&config.logging)?;
            info!(
                "Log filter: {} | JSON log: {}",
                config.logging.filter,
                config
                    .logging
                    .json_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "disabled".to_string())
            );
            start_web_server(config).await
        }
        Command::Render { section, format } => {
            let section: Section = section.parse()?;
            let page = shell::compose(
                &config.dashboard.page_title,
                section,
                snapshot(),
                &Selections::default(),
            );
            let output = render::render(&page, format, &config.dashboard.plotly_cdn)?;
            println!("{}", output);
            Ok(())
        }
        Command::Export { dataset } => {
            let dataset: Dataset = dataset.parse()?;
            let csv = export::to_csv(dataset, snapshot())
                .with_context(|| format!("Failed to export {}", dataset.name()))?;
            print!("{}", csv);
            Ok(())
        }
    }
}
