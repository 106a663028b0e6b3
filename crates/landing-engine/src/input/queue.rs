use crate::page::element::CardIndex;
use crate::page::layout::Viewport;

/// Input event types the landing understands.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A click that did not land inside a card.
    BackgroundClick,
    /// A click on a card. Never bubbles into `BackgroundClick`.
    CardClick { index: CardIndex },
    /// The back control was activated.
    BackClick,
    /// A key was pressed; `key` is the DOM `KeyboardEvent.key` value.
    KeyDown { key: String },
    /// The viewport changed size.
    Resize { viewport: Viewport },
}

impl InputEvent {
    /// The key that triggers the enter transition.
    pub const ENTER_KEY: &'static str = "Enter";

    pub fn key_down(key: impl Into<String>) -> Self {
        InputEvent::KeyDown { key: key.into() }
    }

    pub fn card(index: u32) -> Self {
        InputEvent::CardClick { index: CardIndex(index) }
    }
}

/// A queue of input events.
/// The host pushes events as they arrive; the runner drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
