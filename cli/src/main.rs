//! CLI entrypoint for kafka-chatbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chatbot_application::{
    ChatInvoker, CredentialSession, ListModelsUseCase, ModelAuthenticator, Notifier,
};
use chatbot_domain::{Conversation, Credentials, OutputFormat};
use chatbot_infrastructure::{BedrockAuthenticator, ConfigLoader, Severity};
use chatbot_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress,
};
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env values land in the process environment before config is merged
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting kafka-chatbot");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()?
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.apply_overrides(cli.region.as_deref(), cli.model_id.as_deref());

    if !config.output.color {
        colored::control::set_override(false);
    }

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => eprintln!("{} {}", "warning:".yellow().bold(), issue),
            Severity::Error => eprintln!("{} {}", "error:".red().bold(), issue),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Invalid configuration");
    }

    if cli.show_config {
        if cli.no_config {
            println!("Configuration files disabled (--no-config)");
        } else {
            ConfigLoader::print_config_sources(cli.config.as_ref());
        }
        println!();
        println!("Model:  {}", ConsoleFormatter::format_model(&config.model.id));
        println!("Region: {}", config.credentials().resolved_region());
        println!("{}", ConsoleFormatter::format_confluent(&config.confluent));
        return Ok(());
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
    };

    // === Dependency Injection ===
    let show_progress = config.repl.show_progress && !cli.quiet;
    let notifier: Arc<dyn Notifier> = if show_progress {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let authenticator =
        Arc::new(BedrockAuthenticator::new().with_profile(config.aws.profile.clone()));
    let mut session = CredentialSession::new(authenticator).with_notifier(notifier.clone());
    let invoker = ChatInvoker::new(config.model.to_invoke_options()).with_notifier(notifier.clone());
    let list_models = ListModelsUseCase::new().with_notifier(notifier);
    let credentials = config.credentials();

    // Chat mode
    if cli.chat {
        let history_file = config
            .repl
            .history_file
            .as_deref()
            .map(ConfigLoader::expand_home)
            .or_else(ConfigLoader::default_history_path);

        let mut repl = ChatRepl::new(session, invoker, credentials)
            .with_list_models(list_models)
            .with_confluent(config.confluent.clone())
            .with_system_prompt(config.model.system_prompt.clone())
            .with_config(ReplConfig { history_file })
            .with_output(output);

        repl.run().await?;
        return Ok(());
    }

    // Model listing mode
    if cli.list_models {
        authenticate(&mut session, &credentials).await?;
        let models = list_models.execute(session.handle()).await?;
        println!("{}", ConsoleFormatter::format_models(&models, output.format));
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    authenticate(&mut session, &credentials).await?;

    let mut conversation = Conversation::new();
    conversation.add_user_message(question);
    let messages = conversation.request_messages(config.model.system_prompt.as_deref());

    let result = invoker.invoke(session.handle(), &messages).await;

    println!(
        "{}",
        ConsoleFormatter::format_answer(&result, &config.model.id, output.format)
    );

    Ok(())
}

/// Initialize logging based on verbosity level, optionally into a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

async fn authenticate<A: ModelAuthenticator + 'static>(
    session: &mut CredentialSession<A>,
    credentials: &Credentials,
) -> Result<()> {
    session
        .authenticate(credentials)
        .await
        .context("Could not authenticate with AWS Bedrock")?;
    Ok(())
}
