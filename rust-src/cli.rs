//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;
use crate::config::{API_URL_ENV, DEFAULT_API_URL};


/// chartboard - aggregate category records and render a six-chart dashboard
#[derive(Parser)]
#[command(name = "chartboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard from the API or a supplied payload
    Render {
        /// Base URL of the data API
        #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Payload file with {"categories": [...], "records": [...]}
        #[arg(short, long, conflicts_with = "stdin")]
        input: Option<PathBuf>,

        /// Read the payload from stdin
        #[arg(long)]
        stdin: bool,

        /// Output directory (default: ~/.chartboard/output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        /// TOML file listing mount ids and their sizes
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Open the output after rendering
        #[arg(long)]
        open: bool,
    },

    /// Print the per-category summary
    Summary {
        /// Base URL of the data API
        #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Payload file instead of the API
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}


/// Export format for rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One SVG file per chart
    Svg,
    /// One PNG image per chart
    Png,
    /// A single HTML page with every chart
    Html,
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { api_url, input, stdin, output, format, layout, open }) => {
            commands::render::run(commands::render::RenderOptions {
                api_url,
                input,
                stdin,
                output,
                format,
                layout,
                open,
            })?;
        }
        Some(Commands::Summary { api_url, input, json }) => {
            commands::summary::run(&api_url, input.as_deref(), json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
