//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers and model listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for chatbot_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => chatbot_domain::OutputFormat::Text,
            OutputFormat::Json => chatbot_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for kafka-chatbot
#[derive(Parser, Debug)]
#[command(name = "kafka-chatbot")]
#[command(author, version, about = "Ask AWS Bedrock for Flink SQL against your Confluent cluster")]
#[command(long_about = r#"
kafka-chatbot collects AWS credentials and Confluent connection settings,
authenticates against AWS Bedrock and forwards chat prompts to a Claude
text-completion model.

AWS credentials are taken from AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY /
AWS_SESSION_TOKEN / AWS_DEFAULT_REGION (a .env file is honoured), from the
[aws] section of a config file, or from the default AWS provider chain.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./chatbot.toml      Project-level config
3. ~/.config/kafka-chatbot/config.toml   Global config

Example:
  kafka-chatbot "Show the ten largest customer accounts"
  kafka-chatbot --chat --region eu-central-1
  kafka-chatbot --list-models --output json
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// List the foundation models available in the region and exit
    #[arg(long, conflicts_with = "chat")]
    pub list_models: bool,

    /// Bedrock model id (e.g. anthropic.claude-v2)
    #[arg(short, long = "model-id", value_name = "MODEL")]
    pub model_id: Option<String>,

    /// AWS region (defaults to us-west-2)
    #[arg(short, long, value_name = "REGION")]
    pub region: Option<String>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and Confluent settings, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "kafka-chatbot",
            "--region",
            "eu-west-1",
            "--model-id",
            "anthropic.claude-v2:1",
            "-vv",
            "-o",
            "json",
            "hello",
        ]);
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert_eq!(cli.model_id.as_deref(), Some("anthropic.claude-v2:1"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.question.as_deref(), Some("hello"));
        assert!(!cli.chat);
    }

    #[test]
    fn test_list_models_conflicts_with_chat() {
        assert!(Cli::try_parse_from(["kafka-chatbot", "--chat", "--list-models"]).is_err());
    }

    #[test]
    fn test_output_format_into_domain() {
        let format: chatbot_domain::OutputFormat = OutputFormat::Json.into();
        assert_eq!(format, chatbot_domain::OutputFormat::Json);
    }
}
