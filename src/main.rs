mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::ApiGenerateRequest;
use content_engine::config::EngineConfig;
use content_engine::hashtags;
use content_engine::{format_number, format_percent, ContentEngine, SystemRandom};

#[derive(Parser)]
#[command(name = "content-engine", about = "Social content generation and scoring engine")]
struct Cli {
    /// Path to an engine.toml; defaults to CONTENT_ENGINE_CONFIG or config/engine.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Serve(ServeArgs),
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct GenerateArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    content_type: Option<String>,
    #[arg(long)]
    tone: Option<String>,
    #[arg(long)]
    audience: Option<String>,
    #[arg(long)]
    length: Option<String>,
    #[arg(long)]
    cta: Option<String>,
    #[arg(long)]
    monetization: Option<String>,
    #[arg(long)]
    followers: Option<u64>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/engine.toml")]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Generate(GenerateArgs::default()));

    match command {
        Command::Generate(args) => run_generate(args, load_config(cli.config)),
        Command::Serve(args) => {
            let config = load_config(cli.config);
            let host = args.host.unwrap_or_else(|| config.server.host.clone());
            let port = args.port.unwrap_or(config.server.port);
            let engine = ContentEngine::try_new(config).map_err(|err| err.to_string())?;
            server::serve(engine, host, port).await
        }
        Command::InitConfig(args) => init_config(&args.path, args.force),
    }
}

fn load_config(path: Option<PathBuf>) -> EngineConfig {
    match EngineConfig::load(path) {
        Ok((config, path)) => {
            debug!(path = ?path, "loaded engine config");
            config
        }
        Err(err) => {
            warn!(error = %err, "using default engine config");
            EngineConfig::default()
        }
    }
}

fn run_generate(args: GenerateArgs, config: EngineConfig) -> Result<(), String> {
    let text = read_text(args.text)?;
    let request = ApiGenerateRequest {
        description: Some(text),
        platform: args.platform,
        content_type: args.content_type,
        tone: args.tone,
        audience: args.audience,
        length: args.length,
        cta: args.cta,
        monetization: args.monetization,
        follower_count: args.followers,
        ..ApiGenerateRequest::default()
    };
    let (brief, warnings) = request.into_brief().map_err(|err| err.to_string())?;
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    let mut rng = match args.seed {
        Some(seed) => SystemRandom::seeded(seed),
        None => SystemRandom::new(),
    };
    let engine = ContentEngine::try_new(config).map_err(|err| err.to_string())?;
    let output = engine
        .generate(&brief, &mut rng)
        .map_err(|err| err.to_string())?;

    if args.json {
        let payload = serde_json::to_string_pretty(&output)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!("{}", output.title);
    println!(
        "Viral score: {} ({}) | intent {} | {} {}",
        output.viral_score,
        output.tier.label(),
        output.analysis.intent.key(),
        output.platform.key(),
        output.content_type.key()
    );
    println!(
        "Estimated views: {} | reach {} | engagement {}",
        format_number(output.estimated_views),
        format_number(output.estimated_reach),
        format_percent(output.estimated_engagement_rate)
    );
    println!(
        "Likes {} | comments {} | shares {} | saves {}",
        format_number(output.estimated_likes),
        format_number(output.estimated_comments),
        format_number(output.estimated_shares),
        format_number(output.estimated_saves)
    );

    println!("\n--- Caption ---\n{}", output.caption);
    println!("\n{}", hashtags::render(&output.hashtags));

    if args.details {
        println!("\n--- Body ---\n{}", output.body);
        println!("\n--- Script ---\n{}", output.script);
        let breakdown = &output.score_breakdown;
        println!(
            "\nScore terms: base {:.1} | intent {:+.1} | platform {:+.1} | strategy {:+.1} | audience {:+.1} | tone {:+.1} | urgency {:+.1} | sentiment {:+.1} | jitter {:+.1}",
            breakdown.base,
            breakdown.intent,
            breakdown.platform,
            breakdown.strategy,
            breakdown.audience,
            breakdown.tone,
            breakdown.urgency,
            breakdown.sentiment,
            breakdown.jitter
        );
        println!("Triggers: {}", output.psychological_triggers.join(", "));
    }

    if !output.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in output.recommendations {
            println!("- {}", recommendation);
        }
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        ));
    }
    EngineConfig::default()
        .write(path)
        .map_err(|err| err.to_string())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("description required: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
