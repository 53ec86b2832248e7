//! Schemadoc CLI - renders GraphQL schemas into HTML documentation

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod log;
mod render;

use log::LogLevel;

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(version = schemadoc_core::VERSION)]
#[command(about = "Render GraphQL schemas as cross-linked HTML", long_about = None)]
struct Cli {
    /// Log level; RUST_LOG takes precedence when set
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an SDL schema to HTML
    Render {
        /// Path to the .graphql schema file
        schema: PathBuf,

        /// Output file (defaults to the schema path with an .html extension, `-` for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to schemadoc.toml next to the schema)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit only the document body, without the page wrapper
        #[arg(long)]
        fragment: bool,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Open the generated file in a browser
        #[arg(long)]
        open: bool,
    },

    /// Print anchor ids in document order
    Anchors {
        /// Path to the .graphql schema file
        schema: PathBuf,

        /// Configuration file (defaults to schemadoc.toml next to the schema)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    log::init(cli.log_level);

    match cli.command {
        Commands::Render {
            schema,
            output,
            config,
            fragment,
            title,
            open,
        } => render::render(render::RenderOptions {
            schema,
            output,
            config,
            fragment,
            title,
            open,
        }),

        Commands::Anchors { schema, config } => {
            render::print_anchors(&schema, config.as_deref())
        }
    }
}
