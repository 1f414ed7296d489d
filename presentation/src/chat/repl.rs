//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::config::{OutputConfig, ReplConfig};
use chatbot_application::{ChatInvoker, CredentialSession, ListModelsUseCase, ModelAuthenticator};
use chatbot_domain::{ConfluentSettings, Conversation, Credentials};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Auth,
    Models,
    Config,
    Clear,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.split_whitespace().next().unwrap_or_default() {
            "/quit" | "/exit" | "/q" => Command::Quit,
            "/help" | "/h" | "/?" => Command::Help,
            "/auth" | "/login" => Command::Auth,
            "/models" => Command::Models,
            "/config" => Command::Config,
            "/clear" | "/reset" => Command::Clear,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Interactive chat REPL
///
/// Owns the credential session for its whole lifetime; the conversation
/// lives only in memory and is dropped on exit.
pub struct ChatRepl<A: ModelAuthenticator + 'static> {
    session: CredentialSession<A>,
    invoker: ChatInvoker,
    list_models: ListModelsUseCase,
    credentials: Credentials,
    confluent: ConfluentSettings,
    system_prompt: Option<String>,
    conversation: Conversation,
    config: ReplConfig,
    output: OutputConfig,
}

impl<A: ModelAuthenticator + 'static> ChatRepl<A> {
    /// Create a new ChatRepl
    pub fn new(session: CredentialSession<A>, invoker: ChatInvoker, credentials: Credentials) -> Self {
        Self {
            session,
            invoker,
            list_models: ListModelsUseCase::new(),
            credentials,
            confluent: ConfluentSettings::default(),
            system_prompt: None,
            conversation: Conversation::new(),
            config: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_list_models(mut self, list_models: ListModelsUseCase) -> Self {
        self.list_models = list_models;
        self
    }

    pub fn with_confluent(mut self, confluent: ConfluentSettings) -> Self {
        self.confluent = confluent;
        self
    }

    /// Set a system message sent ahead of every conversation
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.config.history_file.clone();

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if !self.session.is_authenticated() {
            self.authenticate().await;
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Kafka Chatbot - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Model:  {}",
            ConsoleFormatter::format_model(&self.invoker.options().model)
        );
        println!("Region: {}", self.credentials.resolved_region());
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /auth             - Authenticate again with AWS Bedrock");
        println!("  /models           - List available foundation models");
        println!("  /config           - Show Confluent settings");
        println!("  /clear            - Start a new conversation");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    async fn authenticate(&mut self) {
        // The notifier has already shown the outcome
        if let Err(e) = self.session.authenticate(&self.credentials).await {
            debug!("REPL authentication failed: {}", e);
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Command::Quit => {
                println!("Bye!");
                true
            }
            Command::Help => {
                println!();
                Self::print_help();
                false
            }
            Command::Auth => {
                self.authenticate().await;
                false
            }
            Command::Models => {
                if let Ok(models) = self.list_models.execute(self.session.handle()).await {
                    println!("{}", ConsoleFormatter::format_models(&models, self.output.format));
                }
                false
            }
            Command::Config => {
                println!("{}", ConsoleFormatter::format_confluent(&self.confluent));
                false
            }
            Command::Clear => {
                self.conversation.clear();
                println!("Conversation cleared.");
                false
            }
            Command::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, line: &str) {
        println!();

        self.conversation.add_user_message(line);
        let messages = self
            .conversation
            .request_messages(self.system_prompt.as_deref());

        let result = self.invoker.invoke(self.session.handle(), &messages).await;

        println!(
            "{}",
            ConsoleFormatter::format_answer(&result, &self.invoker.options().model, self.output.format)
        );
        println!();

        self.conversation.add_assistant_message(result.into_text());
    }
}
