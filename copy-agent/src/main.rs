//! copywriter - brand-compliant copy from the command line
//!
//! ## Usage
//!
//! ```bash
//! # Generate copy for one or more JSON requests
//! copywriter --config copywriter.toml generate launch.json features.json --export out/
//!
//! # Score a piece of text against the configured brand
//! copywriter --config copywriter.toml score "Premium quality you can rely on"
//!
//! # Fit text to a word range
//! copywriter normalize "one two three" --min 5 --max 10 --brand Acme
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use copy_agent::{
    CopyAgent, CopywriterConfig, TelemetryConfig, bullet_lines, export_copy, export_guidelines,
    init_telemetry,
};
use copy_compliance::normalize_length;
use copy_core::{CopyConstraints, CopyContent, CopyRequest, FormatType, GeneratedCopy, InputValue};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// copywriter - brand-compliant marketing copy
#[derive(Parser, Debug)]
#[command(name = "copywriter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, default_value = "copywriter.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate rule-based copy for JSON request files
    Generate {
        /// Request files
        #[arg(required = true)]
        requests: Vec<PathBuf>,
        /// Directory to export each result into
        #[arg(short, long)]
        export: Option<PathBuf>,
        /// Write the generation history as JSON
        #[arg(long)]
        history_out: Option<PathBuf>,
    },
    /// Draft free-text copy through the text generator
    Draft {
        /// Request files
        #[arg(required = true)]
        requests: Vec<PathBuf>,
        /// Directory to export each result into
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
    /// Score text against the configured brand
    Score {
        /// Text to score
        text: String,
    },
    /// Fit text to a word-count range
    Normalize {
        /// Text to normalize
        text: String,
        /// Minimum word count
        #[arg(long, default_value_t = 10)]
        min: usize,
        /// Maximum word count
        #[arg(long, default_value_t = 50)]
        max: usize,
        /// Brand name used in filler phrases
        #[arg(long, default_value = "Brand")]
        brand: String,
    },
    /// Print or export the configured brand guidelines as JSON
    Guidelines {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the configuration and print it
    Config,
}

/// A request as written on disk. Constraints fall back to the configured defaults.
#[derive(Debug, Deserialize)]
struct RequestFile {
    content_type: String,
    #[serde(default)]
    input_data: IndexMap<String, InputValue>,
    #[serde(default)]
    target_format: Option<CopyConstraints>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    reference_copies: Option<Vec<String>>,
}

impl RequestFile {
    fn into_request(self, defaults: &CopyConstraints) -> Result<CopyRequest> {
        let request = CopyRequest {
            content_type: self.content_type,
            input_data: self.input_data,
            target_format: self.target_format.unwrap_or_else(|| defaults.clone()),
            context: self.context,
            reference_copies: self.reference_copies,
        };
        request.validate()?;
        Ok(request)
    }
}

fn load_config(path: &Path) -> Result<CopywriterConfig> {
    let config = CopywriterConfig::from_file(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    init_telemetry(&config.telemetry);
    Ok(config)
}

fn load_requests(paths: &[PathBuf], defaults: &CopyConstraints) -> Result<Vec<CopyRequest>> {
    paths
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading request {}", path.display()))?;
            let file: RequestFile = serde_json::from_str(&content)
                .with_context(|| format!("parsing request {}", path.display()))?;
            file.into_request(defaults)
                .with_context(|| format!("invalid request {}", path.display()))
        })
        .collect()
}

fn print_copy(copy: &GeneratedCopy, format: FormatType) {
    println!(
        "== {} | score {:.2} | {} words ==",
        copy.request_id, copy.compliance_score, copy.word_count
    );
    match (&copy.content, format) {
        (CopyContent::Text(text), FormatType::Bullet) => {
            for line in bullet_lines(text) {
                println!("{}", line);
            }
        }
        (content, _) => println!("{}", content.as_plain_text()),
    }
    println!();
}

fn export_into(dir: &Path, copy: &GeneratedCopy) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let extension = if copy.content.as_table().is_some() { "csv" } else { "txt" };
    let path = dir.join(format!("{}.{}", copy.request_id, extension));
    export_copy(copy, &path)?;
    println!("Exported {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { requests, export, history_out } => {
            let config = load_config(&cli.config)?;
            let requests = load_requests(&requests, &config.defaults)?;
            let agent = CopyAgent::new(config.brand)?;

            for request in &requests {
                let copy = agent.generate_copy(request)?;
                print_copy(&copy, request.target_format.format_type);
                if let Some(dir) = &export {
                    export_into(dir, &copy)?;
                }
            }

            print!("{}", agent.performance_metrics().format_summary());

            if let Some(path) = history_out {
                agent.export_history(&path)?;
                info!(path = %path.display(), "history written");
            }
        }
        Commands::Draft { requests, export } => {
            let config = load_config(&cli.config)?;
            let requests = load_requests(&requests, &config.defaults)?;
            let agent = CopyAgent::new(config.brand)?;

            let drafts =
                futures::future::try_join_all(requests.iter().map(|r| agent.draft_copy(r))).await?;

            for (copy, request) in drafts.iter().zip(&requests) {
                print_copy(copy, request.target_format.format_type);
                if let Some(dir) = &export {
                    export_into(dir, copy)?;
                }
            }
        }
        Commands::Score { text } => {
            let config = load_config(&cli.config)?;
            let agent = CopyAgent::new(config.brand)?;
            let report = agent.explain_score(&text);

            println!("Compliance score: {:.2}", report.score);
            if !report.avoid_hits.is_empty() {
                println!("Avoid words: {}", report.avoid_hits.join(", "));
            }
            if !report.preferred_hits.is_empty() {
                println!("Preferred words: {}", report.preferred_hits.join(", "));
            }
            for tone in &report.tone_matches {
                println!("Tone {}: {} (+{:.2})", tone.tone, tone.keywords.join(", "), tone.bonus);
            }
        }
        Commands::Normalize { text, min, max, brand } => {
            init_telemetry(&TelemetryConfig::default());
            let constraints = CopyConstraints::builder().min_length(min).max_length(max).build()?;
            println!("{}", normalize_length(&text, &constraints, &brand));
        }
        Commands::Guidelines { output } => {
            let config = load_config(&cli.config)?;
            match output {
                Some(path) => {
                    export_guidelines(&config.brand, &path)?;
                    println!("Exported {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&config.brand)?),
            }
        }
        Commands::Config => {
            let config = load_config(&cli.config)?;
            println!("Configuration is valid: {}", cli.config.display());
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
