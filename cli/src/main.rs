//! CLI entrypoint for horde-companion
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use companion_application::{GenerateReplyInput, GenerateReplyUseCase};
use companion_domain::{ModelCandidates, PromptComposer};
use companion_infrastructure::{ConfigLoader, FileConfig, HordeGateway};
use companion_presentation::{ChatRepl, Cli, ProgressReporter, ReplConfig, ReplyFormatter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    info!("Starting horde-companion");

    let candidates = if cli.model.is_empty() {
        config.orchestration.candidates()
    } else {
        ModelCandidates::parse(&cli.model).context("invalid --model value")?
    };
    let mood = cli.mood.unwrap_or(config.repl.default_mood);

    // === Dependency Injection ===
    let gateway = Arc::new(HordeGateway::from_config(&config.provider)?);
    info!(
        base_url = gateway.base_url(),
        candidates = candidates.len(),
        "Horde gateway ready"
    );

    let bot_name = config.persona.bot_name.clone();
    let use_case = GenerateReplyUseCase::new(gateway, config.orchestration.to_params(), candidates)
        .with_composer(PromptComposer::new(config.persona))
        .with_sampling(config.sampling)
        .with_generation_params(config.generation);

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.map(PathBuf::from),
            default_mood: mood,
            bot_name,
        };
        ChatRepl::new(use_case, repl_config).run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("A message is required. Use --chat for interactive mode."),
    };

    let mut input = GenerateReplyInput::new(message, mood);
    if let Some(note) = cli.note {
        input = input.with_prior_turn_note(note);
    }

    let result = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    println!("{}", ReplyFormatter::reply_text(&result));

    match result {
        Ok(reply) => {
            if cli.verbose > 0 {
                eprintln!("{}", ReplyFormatter::format_source(&reply));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            warn!(error = %failure, "No usable reply");
            Ok(ExitCode::FAILURE)
        }
    }
}
