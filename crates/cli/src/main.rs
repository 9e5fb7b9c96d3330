use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use country_cli::{http, SkillConfig, SkillHandler};
use country_protocol::SkillRequest;
use country_resolver::{CountryResolver, RestCountriesGateway};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "country-info")]
#[command(about = "Answers \"tell me about <country>\" voice requests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Country service root (overrides COUNTRY_INFO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a country phrase and print the spoken answer
    Ask(AskArgs),

    /// Answer one skill request (JSON) and print the skill response
    Handle(HandleArgs),

    /// Serve the skill over HTTP (POST /skill)
    Serve(ServeArgs),
}

#[derive(Args)]
struct AskArgs {
    /// Phrase as spoken, e.g. "north korea"
    #[arg(required = true, num_args = 1..)]
    phrase: Vec<String>,

    /// Print the matched record as JSON (`null` when nothing matched)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct HandleArgs {
    /// Inline JSON payload (mutually exclusive with --file)
    #[arg(long, conflicts_with = "file")]
    json: Option<String>,

    /// Path to file containing JSON payload
    #[arg(long)]
    file: Option<PathBuf>,

    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:7800 (overrides COUNTRY_INFO_BIND)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut config = SkillConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    // One client for the whole process; the gateway only holds a clone.
    let client = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;
    let gateway = RestCountriesGateway::new(client, &config.api_base_url)
        .with_context(|| format!("Invalid country service URL '{}'", config.api_base_url))?;
    let handler = SkillHandler::new(CountryResolver::new(gateway))
        .with_invocation_name(config.invocation_name.clone());

    match cli.command {
        Commands::Ask(args) => run_ask(args, &handler).await?,
        Commands::Handle(args) => run_handle(args, &handler).await?,
        Commands::Serve(args) => run_serve(args, config, handler).await?,
    }

    Ok(())
}

async fn run_ask(args: AskArgs, handler: &SkillHandler<RestCountriesGateway>) -> Result<()> {
    let phrase = args.phrase.join(" ");
    if args.json {
        let resolution = handler.resolver().resolve(&phrase).await?;
        print_stdout(&serde_json::to_string_pretty(&resolution.record())?)
    } else {
        let response = handler.answer(&phrase).await?;
        print_stdout(response.speech())
    }
}

async fn run_handle(args: HandleArgs, handler: &SkillHandler<RestCountriesGateway>) -> Result<()> {
    let raw = read_payload(&args)?;
    let request: SkillRequest =
        serde_json::from_str(&raw).context("Invalid JSON passed to --json/--file")?;
    let response = handler.handle(&request).await?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    print_stdout(&rendered)
}

async fn run_serve(
    args: ServeArgs,
    mut config: SkillConfig,
    handler: SkillHandler<RestCountriesGateway>,
) -> Result<()> {
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    log::info!(
        "Serving skill on http://{}/skill (country service {})",
        config.bind,
        config.api_base_url
    );
    http::serve(listener, http::router(handler)).await
}

fn read_payload(args: &HandleArgs) -> Result<String> {
    if let Some(raw) = &args.json {
        return Ok(raw.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read JSON from stdin")?;

    if buffer.trim().is_empty() {
        anyhow::bail!("Skill request is empty. Provide --json, --file, or pipe JSON via stdin.");
    }

    Ok(buffer)
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}
