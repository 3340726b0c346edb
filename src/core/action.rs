//! # Actions
//!
//! Everything that can happen becomes an `Action`.
//! Visitor presses Tab? That's `Action::NextSection`.
//! The assistant answers? That's `Action::ReplyReceived(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No I/O happens here, which keeps every transition testable:
//! feed in actions, assert on the resulting state.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::state::{App, Section};

/// Every event the application reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Jump straight to a section (number keys).
    SelectSection(Section),
    /// Cycle forward through sections (Tab).
    NextSection,
    /// Cycle backward through sections (Shift+Tab).
    PrevSection,
    /// Show the chat widget.
    OpenChat,
    /// Hide the chat widget. An in-flight request keeps running.
    CloseChat,
    /// Submit a visitor message. Ignored while a request is outstanding or
    /// when the text is blank.
    SendMessage(String),
    /// The assistant's reply (or the fallback string) arrived.
    ReplyReceived(String),
    /// Leave the application.
    Quit,
}

/// I/O the caller must perform after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn one outbound assistant call for the given message text.
    SpawnReply(String),
    Quit,
}

/// The reducer: advances `app` by one action.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectSection(section) => {
            app.section = section;
            Effect::None
        }
        Action::NextSection => {
            app.section = app.section.next();
            Effect::None
        }
        Action::PrevSection => {
            app.section = app.section.prev();
            Effect::None
        }
        Action::OpenChat => {
            app.chat.open = true;
            Effect::None
        }
        Action::CloseChat => {
            // No cancellation: pending stays set and the eventual reply is
            // still appended to the transcript.
            app.chat.open = false;
            Effect::None
        }
        Action::SendMessage(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                debug!("Ignoring blank message");
                return Effect::None;
            }
            if app.chat.pending {
                debug!("Ignoring send while a reply is outstanding");
                return Effect::None;
            }
            let message = trimmed.to_string();
            app.chat.transcript.push_user(message.clone());
            app.chat.pending = true;
            Effect::SpawnReply(message)
        }
        Action::ReplyReceived(text) => {
            app.chat.transcript.push_model(text);
            app.chat.pending = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{Role, FALLBACK_REPLY};
    use crate::core::state::ChatPhase;
    use crate::test_support::test_app;

    #[test]
    fn test_active_section_is_last_selected() {
        let mut app = test_app();
        for action in [
            Action::SelectSection(Section::Skills),
            Action::NextSection,
            Action::SelectSection(Section::Projects),
            Action::PrevSection,
            Action::SelectSection(Section::Education),
        ] {
            update(&mut app, action);
        }
        assert_eq!(app.section, Section::Education);
    }

    #[test]
    fn test_section_cycling_from_last_wraps_to_first() {
        let mut app = test_app();
        app.section = Section::Education;
        update(&mut app, Action::NextSection);
        assert_eq!(app.section, Section::About);
        update(&mut app, Action::PrevSection);
        assert_eq!(app.section, Section::Education);
    }

    #[test]
    fn test_open_chat_enters_idle() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);
        assert_eq!(app.chat.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_send_appends_user_turn_and_waits() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);

        let effect = update(&mut app, Action::SendMessage("Skills?".to_string()));
        assert_eq!(effect, Effect::SpawnReply("Skills?".to_string()));
        assert_eq!(app.chat.phase(), ChatPhase::Waiting);
        assert_eq!(app.chat.transcript.len(), 1);
        assert_eq!(app.chat.transcript.last().unwrap().role, Role::User);
    }

    #[test]
    fn test_send_trims_surrounding_whitespace() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);
        let effect = update(&mut app, Action::SendMessage("  Skills?  \n".to_string()));
        assert_eq!(effect, Effect::SpawnReply("Skills?".to_string()));
        assert_eq!(app.chat.transcript.last().unwrap().text, "Skills?");
    }

    #[test]
    fn test_blank_send_is_a_no_op() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);

        for blank in ["", "   ", "\t\n  "] {
            let effect = update(&mut app, Action::SendMessage(blank.to_string()));
            assert_eq!(effect, Effect::None, "{blank:?} should not send");
        }
        assert!(app.chat.transcript.is_empty());
        assert_eq!(app.chat.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_second_send_while_waiting_is_a_no_op() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);
        update(&mut app, Action::SendMessage("first".to_string()));

        let effect = update(&mut app, Action::SendMessage("second".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.chat.transcript.len(), 1, "second send must not append");

        // Once the reply resolves, sending works again
        update(&mut app, Action::ReplyReceived("answer".to_string()));
        let effect = update(&mut app, Action::SendMessage("second".to_string()));
        assert_eq!(effect, Effect::SpawnReply("second".to_string()));
    }

    #[test]
    fn test_reply_appends_model_turn_in_order() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);
        update(&mut app, Action::SendMessage("Skills?".to_string()));
        update(
            &mut app,
            Action::ReplyReceived("Lina is skilled in C++, C#, and IoT.".to_string()),
        );

        let messages = app.chat.transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "Skills?");
        assert_eq!(messages[1].role, Role::Model);
        assert_eq!(messages[1].text, "Lina is skilled in C++, C#, and IoT.");
        assert_eq!(app.chat.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_fallback_reply_looks_like_a_normal_model_turn() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);
        update(&mut app, Action::SendMessage("Skills?".to_string()));
        update(&mut app, Action::ReplyReceived(FALLBACK_REPLY.to_string()));

        assert_eq!(app.chat.transcript.last().unwrap().role, Role::Model);
        assert_eq!(app.chat.transcript.last().unwrap().text, FALLBACK_REPLY);
        assert_eq!(app.chat.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_reply_still_lands_after_widget_closed() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);
        update(&mut app, Action::SendMessage("IoT Project?".to_string()));
        update(&mut app, Action::CloseChat);
        assert_eq!(app.chat.phase(), ChatPhase::Closed);
        assert!(app.chat.pending, "closing must not cancel the request");

        update(&mut app, Action::ReplyReceived("The ESP32 system...".to_string()));
        assert_eq!(app.chat.transcript.len(), 2);
        assert!(!app.chat.pending);

        // Reopening lands back in idle with the full transcript intact
        update(&mut app, Action::OpenChat);
        assert_eq!(app.chat.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_earlier_turns_are_never_reordered() {
        let mut app = test_app();
        update(&mut app, Action::OpenChat);
        update(&mut app, Action::SendMessage("one".to_string()));
        update(&mut app, Action::ReplyReceived("two".to_string()));
        update(&mut app, Action::SendMessage("three".to_string()));
        update(&mut app, Action::ReplyReceived("four".to_string()));

        let texts: Vec<&str> = app
            .chat
            .transcript
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
