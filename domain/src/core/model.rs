//! Model value object representing a Bedrock text-completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bedrock text-completion models (Value Object)
///
/// These models accept the `Human:`/`Assistant:` prompt framing produced by
/// [`PromptTemplate`](crate::prompt::PromptTemplate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelId {
    ClaudeV2,
    ClaudeV21,
    ClaudeInstantV1,
    // Custom
    Custom(String),
}

impl ModelId {
    /// Get the Bedrock model identifier
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::ClaudeV2 => "anthropic.claude-v2",
            ModelId::ClaudeV21 => "anthropic.claude-v2:1",
            ModelId::ClaudeInstantV1 => "anthropic.claude-instant-v1",
            ModelId::Custom(s) => s,
        }
    }

    /// Short label shown next to the id in `--show-config` and the REPL banner.
    /// Also accepted as an alias when parsing.
    pub fn label(&self) -> &str {
        match self {
            ModelId::ClaudeV2 => "bedrock-claude-v2",
            ModelId::ClaudeV21 => "bedrock-claude-v2.1",
            ModelId::ClaudeInstantV1 => "bedrock-claude-instant-v1",
            ModelId::Custom(s) => s,
        }
    }

    /// Models known to accept the text-completion request shape
    pub fn known() -> Vec<ModelId> {
        vec![ModelId::ClaudeV2, ModelId::ClaudeV21, ModelId::ClaudeInstantV1]
    }
}

impl Default for ModelId {
    /// Returns the default model (Claude v2)
    fn default() -> Self {
        ModelId::ClaudeV2
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "anthropic.claude-v2" | "bedrock-claude-v2" => ModelId::ClaudeV2,
            "anthropic.claude-v2:1" | "bedrock-claude-v2.1" => ModelId::ClaudeV21,
            "anthropic.claude-instant-v1" | "bedrock-claude-instant-v1" => {
                ModelId::ClaudeInstantV1
            }
            other => ModelId::Custom(other.to_string()),
        })
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<ModelId>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in ModelId::known() {
            let parsed: ModelId = model.as_str().parse().unwrap();
            assert_eq!(parsed, model);
        }
    }

    #[test]
    fn test_label_alias_parses() {
        let parsed: ModelId = "bedrock-claude-v2".parse().unwrap();
        assert_eq!(parsed, ModelId::ClaudeV2);
    }

    #[test]
    fn test_custom_passthrough() {
        let parsed: ModelId = "meta.llama2-13b-chat-v1".parse().unwrap();
        assert_eq!(parsed, ModelId::Custom("meta.llama2-13b-chat-v1".to_string()));
        assert_eq!(parsed.as_str(), "meta.llama2-13b-chat-v1");
    }

    #[test]
    fn test_default_is_claude_v2() {
        assert_eq!(ModelId::default().as_str(), "anthropic.claude-v2");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&ModelId::ClaudeV21).unwrap();
        assert_eq!(json, "\"anthropic.claude-v2:1\"");
        let back: ModelId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModelId::ClaudeV21);
    }
}
