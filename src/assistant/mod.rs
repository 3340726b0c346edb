pub mod client;
pub mod gemini;
pub mod persona;
pub mod types;

pub use client::{ChatClient, ClientError, ReplyRequest};
pub use gemini::GeminiClient;
pub use types::{ChatMessage, Role, Transcript, FALLBACK_REPLY};
