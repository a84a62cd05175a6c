//! Messages exchanged with the dialogue overlay.
use bevy::prelude::Message;

use super::session::DialogueContent;

/// Request to open the overlay with the given content.
#[derive(Message, Debug, Clone)]
pub struct OpenDialogue {
    pub content: DialogueContent,
}

/// Advance or dismiss the open session. Every dismiss affordance writes one of these.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueCommand {
    Advance,
    Close,
}

/// Emitted exactly once per opened session, when it ends.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogueClosed;
