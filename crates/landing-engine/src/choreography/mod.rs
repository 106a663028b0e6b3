//! Timeline builders for the three landing choreographies.
//!
//! Each builder is a pure function from measured geometry and config to a
//! `Timeline<Cue>`. Side effects that are not numeric tweens (class toggles,
//! style resets, phase flips) are scheduled as cues and applied by the stage.

pub mod back;
pub mod enter;
pub mod insert;

use crate::extensions::timeline::Timeline;
use crate::page::element::CardIndex;

/// Discrete side effects scheduled inside a choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Enter: reveal the cards section, reset the cursor, mark the landing transitioned.
    RevealCards,
    /// Insert: the card hits the slot; light up the speed lines.
    Impact,
    /// Insert: show the back control and the game panel.
    RevealSecondary,
    /// Back: the back control and game panel finished fading out.
    HideSecondary,
    /// Back: return the selected card to the grid and bring its siblings home.
    RestoreSelection(CardIndex),
    /// Back: reset the slot assembly and unlock card clicks.
    FinishReturn,
}

/// A timeline whose cues are landing side effects.
pub type LandingTimeline = Timeline<Cue>;
