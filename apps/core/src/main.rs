// PromptSmith command-line entry point
// Loads configuration, wires the pipeline and prints enriched prompts as JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use promptsmith_core::{AnalysisInput, PipelineConfig, PromptPipeline};
use std::io::Read;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "promptsmith", version, about = "Analyse and enhance LLM prompts")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "PROMPTSMITH_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse a prompt and print the enriched record
    Generate {
        /// Prompt text, or `-` to read from stdin
        text: String,
        /// Skip categorisation and use this category
        #[arg(long)]
        category: Option<String>,
        /// Rewriting style (professional, casual, academic, creative, technical, friendly)
        #[arg(long)]
        style: Option<String>,
        /// Complexity hint for the generative model
        #[arg(long)]
        complexity: Option<String>,
    },
    /// List the available categories
    Categories,
    /// List the available styles
    Styles,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_text(text: String) -> Result<String> {
    if text != "-" {
        return Ok(text);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read prompt from stdin")?;
    Ok(buffer)
}

async fn run(cli: Cli) -> Result<()> {
    let config = PipelineConfig::from_env()?;
    let pipeline = PromptPipeline::from_config(config)?;

    match cli.command {
        Command::Generate {
            text,
            category,
            style,
            complexity,
        } => {
            let text = read_text(text)?;
            if text.trim().is_empty() {
                bail!("Prompt text must not be empty");
            }

            let defaults = pipeline.config();
            let mut input = AnalysisInput::new(text)
                .with_style(style.unwrap_or_else(|| defaults.default_style.clone()))
                .with_complexity(complexity.unwrap_or_else(|| defaults.default_complexity.clone()));
            if let Some(category) = category {
                input = input.with_category(category);
            }

            let prompt = pipeline.run(input).await?;
            println!("{}", serde_json::to_string_pretty(&prompt)?);
        }
        Command::Categories => {
            for category in pipeline.categories() {
                println!("{}", category);
            }
        }
        Command::Styles => {
            for style in pipeline.styles() {
                println!("{}", style);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
