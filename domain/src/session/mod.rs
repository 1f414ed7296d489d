//! Conversation domain.
//!
//! - [`entities::ChatMessage`]: a single message within a conversation
//! - [`entities::Conversation`]: the ordered, append-only message list

pub mod entities;
