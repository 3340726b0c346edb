//! # Application State
//!
//! Core business state. This module contains domain logic only - no
//! TUI-specific types. Presentation state (scroll offsets, the input
//! buffer) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn ChatClient>   // assistant backend
//! ├── model_name: String            // model asked for replies
//! ├── section: Section              // active portfolio tab
//! ├── chat: ChatWidget              // open flag, pending flag, transcript
//! └── status_message: String        // footer status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::assistant::{ChatClient, Transcript};

/// The portfolio sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Education,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Education,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The chat widget's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    /// Widget hidden. A request may still be in flight behind it.
    Closed,
    /// Widget visible, send control enabled.
    Idle,
    /// Widget visible, one request outstanding, send control disabled.
    Waiting,
}

/// Prompt shortcuts offered while the transcript is still empty. Picking one
/// fills the input and fires the send immediately.
pub const SUGGESTED_PROMPTS: &[&str] = &["IoT Project?", "Skills?", "Book System?"];

/// The chat widget: visibility, the one-outstanding-request flag, and the
/// session transcript.
///
/// `open` and `pending` are deliberately independent: closing the widget
/// does not cancel an in-flight request, and its reply is still appended
/// when it lands.
#[derive(Debug, Default)]
pub struct ChatWidget {
    pub open: bool,
    pub pending: bool,
    pub transcript: Transcript,
}

impl ChatWidget {
    pub fn phase(&self) -> ChatPhase {
        if !self.open {
            ChatPhase::Closed
        } else if self.pending {
            ChatPhase::Waiting
        } else {
            ChatPhase::Idle
        }
    }
}

pub struct App {
    pub client: Arc<dyn ChatClient>,
    pub model_name: String,
    pub section: Section,
    pub chat: ChatWidget,
    pub status_message: String,
}

impl App {
    pub fn new(client: Arc<dyn ChatClient>, model_name: String) -> Self {
        Self {
            client,
            model_name,
            section: Section::About,
            chat: ChatWidget::default(),
            status_message: String::from("Welcome! Press c to chat with Lina's assistant"),
        }
    }
}
