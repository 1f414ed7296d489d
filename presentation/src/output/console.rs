//! Console output formatter for answers, model listings and settings

use chatbot_domain::{ConfluentSettings, InvocationResult, ModelId, OutputFormat};
use colored::Colorize;
use serde_json::{Value, json};

/// Formats chatbot output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a model answer in the requested format
    pub fn format_answer(result: &InvocationResult, model: &ModelId, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_answer_text(result),
            OutputFormat::Json => Self::format_answer_json(result, model),
        }
    }

    fn format_answer_text(result: &InvocationResult) -> String {
        match result {
            InvocationResult::Text(text) => text.clone(),
            InvocationResult::Fallback(text) => format!(
                "{}\n{}",
                "(fallback answer, the model call failed)".yellow().dimmed(),
                text
            ),
        }
    }

    fn format_answer_json(result: &InvocationResult, model: &ModelId) -> String {
        let value = json!({
            "model": model.as_str(),
            "text": result.text(),
            "fallback": result.is_fallback(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Model id with its short label, e.g. `anthropic.claude-v2 (bedrock-claude-v2)`
    pub fn format_model(model: &ModelId) -> String {
        if model.label() == model.as_str() {
            model.as_str().to_string()
        } else {
            format!("{} ({})", model.as_str(), model.label().dimmed())
        }
    }

    /// Format a `ListFoundationModels` result in the requested format
    pub fn format_models(models: &Value, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_models_table(models),
            OutputFormat::Json => {
                serde_json::to_string_pretty(models).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }

    fn format_models_table(models: &Value) -> String {
        let summaries = models
            .get("modelSummaries")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut output = String::new();
        output.push_str(&Self::header("Foundation Models"));
        output.push('\n');

        if summaries.is_empty() {
            output.push_str(&format!("\n{}\n", "No models available.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        let field = |summary: &Value, key: &str| -> String {
            summary
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or("-")
                .to_string()
        };

        let width = summaries
            .iter()
            .map(|s| field(s, "modelId").len())
            .max()
            .unwrap_or(0);

        output.push('\n');
        for summary in summaries {
            output.push_str(&format!(
                "  {:<width$}  {} {}\n",
                field(summary, "modelId").yellow(),
                field(summary, "providerName").cyan(),
                field(summary, "modelName"),
                width = width
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Total:".cyan().bold(),
            summaries.len()
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Format Confluent settings with the secret masked
    pub fn format_confluent(settings: &ConfluentSettings) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Confluent Settings"));

        let fields = settings.display_fields();
        let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        for (name, value) in fields {
            let value = if value.is_empty() {
                "<unset>".dimmed().to_string()
            } else {
                value
            };
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                format!("{}:", name).cyan(),
                value,
                width = width + 1
            ));
        }

        let missing = settings.missing_fields();
        if !missing.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Missing:".yellow().bold(),
                missing.join(", ")
            ));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
