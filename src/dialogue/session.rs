//! Dialogue session state: one modal overlay at a time, with typewriter reveal in npc mode.
use std::{fmt, time::Duration};

use bevy::{input::keyboard::KeyCode, prelude::*};

use crate::content::types::{HouseContent, HouseKind, IslandEntry, NpcContent};

use super::events::{DialogueClosed, DialogueCommand};

const NPC_NEXT_HINT: &str = "Tap or [Space] for next \u{25b8}";
const NPC_LAST_HINT: &str = "Tap or [Space] to close";
const ISLAND_CLOSE_HINT: &str = "Tap here or press Esc to close";

/// Identifier assigned to each opened session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialogue-{:04}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueMode {
    Npc,
    Island,
}

impl DialogueMode {
    /// Keyboard bindings while a session of this mode is open.
    pub fn command_for_key(self, key: KeyCode) -> Option<DialogueCommand> {
        match (self, key) {
            (Self::Npc, KeyCode::Space | KeyCode::Enter) => Some(DialogueCommand::Advance),
            (Self::Npc, KeyCode::Escape) => Some(DialogueCommand::Close),
            (Self::Island, KeyCode::Space | KeyCode::Escape) => Some(DialogueCommand::Close),
            _ => None,
        }
    }
}

/// What an overlay shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogueContent {
    Npc {
        speaker: String,
        portrait: Option<String>,
        lines: Vec<String>,
    },
    Island {
        title: String,
        kind: HouseKind,
        entries: Vec<IslandEntry>,
    },
}

impl DialogueContent {
    /// Npc conversation for this visit; `None` when there is nothing to say.
    pub fn npc(npc: &NpcContent, talked_before: bool) -> Option<Self> {
        let lines = npc.lines(talked_before);
        if lines.is_empty() {
            return None;
        }
        Some(Self::Npc {
            speaker: npc.name.clone(),
            portrait: npc.portrait.clone(),
            lines: lines.to_vec(),
        })
    }

    pub fn island(house_key: &str, house: &HouseContent) -> Self {
        let kind = HouseKind::from_key(house_key);
        let title = if house.title.is_empty() {
            "Island".to_string()
        } else {
            house.title.clone()
        };
        Self::Island {
            title,
            kind,
            entries: house
                .entries
                .iter()
                .map(|entry| IslandEntry::parse(kind, entry))
                .collect(),
        }
    }

    pub fn mode(&self) -> DialogueMode {
        match self {
            Self::Npc { .. } => DialogueMode::Npc,
            Self::Island { .. } => DialogueMode::Island,
        }
    }
}

/// Character-by-character reveal of one line.
#[derive(Debug, Clone)]
pub struct Typewriter {
    line: String,
    total_chars: usize,
    shown_chars: usize,
    timer: Timer,
}

impl Typewriter {
    pub fn new(line: impl Into<String>, interval: Duration) -> Self {
        let line = line.into();
        let total_chars = line.chars().count();
        Self {
            line,
            total_chars,
            shown_chars: 0,
            timer: Timer::new(interval, TimerMode::Repeating),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.shown_chars >= self.total_chars
    }

    /// Reveals one character per elapsed interval. Returns true if text changed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.timer.tick(delta);
        let steps = self.timer.times_finished_this_tick() as usize;
        if steps == 0 {
            return false;
        }
        self.shown_chars = (self.shown_chars + steps).min(self.total_chars);
        true
    }

    pub fn complete(&mut self) {
        self.shown_chars = self.total_chars;
    }

    pub fn visible(&self) -> &str {
        match self.line.char_indices().nth(self.shown_chars) {
            Some((byte_index, _)) => &self.line[..byte_index],
            None => &self.line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, UI not yet on screen.
    Opening,
    Active,
}

/// Result of an advance action on the open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Mid-reveal line completed in place.
    Revealed,
    NextLine,
    Finished,
    Ignored,
}

#[derive(Debug)]
pub struct DialogueSession {
    id: SessionId,
    phase: SessionPhase,
    content: DialogueContent,
    line_index: usize,
    typewriter: Option<Typewriter>,
    ui_root: Option<Entity>,
}

impl DialogueSession {
    fn new(id: SessionId, content: DialogueContent, reveal_interval: Duration) -> Self {
        let typewriter = match &content {
            DialogueContent::Npc { lines, .. } => Some(Typewriter::new(
                lines.first().cloned().unwrap_or_default(),
                reveal_interval,
            )),
            DialogueContent::Island { .. } => None,
        };
        Self {
            id,
            phase: SessionPhase::Opening,
            content,
            line_index: 0,
            typewriter,
            ui_root: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> DialogueMode {
        self.content.mode()
    }

    pub fn content(&self) -> &DialogueContent {
        &self.content
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn ui_root(&self) -> Option<Entity> {
        self.ui_root
    }

    /// Currently visible portion of the current npc line.
    pub fn visible_text(&self) -> &str {
        self.typewriter.as_ref().map(Typewriter::visible).unwrap_or("")
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_revealing(&self) -> bool {
        self.typewriter
            .as_ref()
            .is_some_and(|typewriter| !typewriter.is_revealed())
    }

    fn line_count(&self) -> usize {
        match &self.content {
            DialogueContent::Npc { lines, .. } => lines.len(),
            DialogueContent::Island { .. } => 0,
        }
    }

    /// Footer hint matching the current mode and line.
    pub fn hint(&self) -> &'static str {
        match self.mode() {
            DialogueMode::Npc if self.line_index + 1 >= self.line_count() => NPC_LAST_HINT,
            DialogueMode::Npc => NPC_NEXT_HINT,
            DialogueMode::Island => ISLAND_CLOSE_HINT,
        }
    }

    fn advance(&mut self, reveal_interval: Duration) -> AdvanceOutcome {
        if self.phase == SessionPhase::Opening {
            return AdvanceOutcome::Ignored;
        }
        let DialogueContent::Npc { lines, .. } = &self.content else {
            return AdvanceOutcome::Finished;
        };

        if let Some(typewriter) = self.typewriter.as_mut() {
            if !typewriter.is_revealed() {
                typewriter.complete();
                return AdvanceOutcome::Revealed;
            }
        }

        let next = self.line_index + 1;
        match lines.get(next) {
            Some(line) => {
                self.line_index = next;
                self.typewriter = Some(Typewriter::new(line.clone(), reveal_interval));
                AdvanceOutcome::NextLine
            }
            None => AdvanceOutcome::Finished,
        }
    }
}

/// A session that just ended. The caller releases its UI and emits the closure signal.
#[derive(Debug)]
#[must_use]
pub struct ClosedSession {
    pub id: SessionId,
    pub ui_root: Option<Entity>,
}

impl ClosedSession {
    pub fn signal(&self) -> DialogueClosed {
        DialogueClosed
    }
}

/// Single source of truth for overlay state.
#[derive(Resource, Debug)]
pub struct DialogueOverlay {
    session: Option<DialogueSession>,
    next_id: u64,
    reveal_interval: Duration,
}

impl DialogueOverlay {
    pub fn new(reveal_interval: Duration) -> Self {
        Self {
            session: None,
            next_id: 0,
            reveal_interval,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DialogueSession> {
        self.session.as_ref()
    }

    /// Opens a fresh session, closing any open one first.
    pub fn open(&mut self, content: DialogueContent) -> (SessionId, Option<ClosedSession>) {
        let replaced = self.close();
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.session = Some(DialogueSession::new(id, content, self.reveal_interval));
        (id, replaced)
    }

    /// Ends the open session, dropping its typewriter. No-op when closed.
    pub fn close(&mut self) -> Option<ClosedSession> {
        self.session.take().map(|session| ClosedSession {
            id: session.id,
            ui_root: session.ui_root,
        })
    }

    /// Two-stage advance; closes the session once the last line is done.
    pub fn advance(&mut self) -> (AdvanceOutcome, Option<ClosedSession>) {
        let Some(session) = self.session.as_mut() else {
            return (AdvanceOutcome::Ignored, None);
        };
        let outcome = session.advance(self.reveal_interval);
        let closed = match outcome {
            AdvanceOutcome::Finished => self.close(),
            _ => None,
        };
        (outcome, closed)
    }

    pub fn apply(&mut self, command: DialogueCommand) -> Option<ClosedSession> {
        match command {
            DialogueCommand::Advance => self.advance().1,
            DialogueCommand::Close => self.close(),
        }
    }

    /// Records the spawned UI tree and starts the reveal.
    pub fn mark_presented(&mut self, ui_root: Entity) {
        if let Some(session) = self.session.as_mut() {
            session.ui_root = Some(ui_root);
            session.phase = SessionPhase::Active;
        }
    }

    /// Advances the typewriter of the active session. Returns true if text changed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.phase != SessionPhase::Active {
            return false;
        }
        session
            .typewriter
            .as_mut()
            .is_some_and(|typewriter| typewriter.tick(delta))
    }
}

impl Default for DialogueOverlay {
    fn default() -> Self {
        Self::new(Duration::from_millis(30))
    }
}
