//! Outcome of a chat invocation

/// Placeholder returned whenever an invocation cannot produce text.
pub const FALLBACK_QUERY: &str = "select * from customer_accounts limit 10";

/// Generated text or the fallback value (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    Text(String),
    Fallback(String),
}

impl InvocationResult {
    pub fn text(&self) -> &str {
        match self {
            InvocationResult::Text(s) | InvocationResult::Fallback(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, InvocationResult::Fallback(_))
    }

    pub fn into_text(self) -> String {
        match self {
            InvocationResult::Text(s) | InvocationResult::Fallback(s) => s,
        }
    }
}

impl std::fmt::Display for InvocationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
