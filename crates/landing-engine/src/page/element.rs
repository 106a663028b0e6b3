use std::collections::BTreeSet;
use std::fmt;
use serde::Serialize;

/// Logical card index, read from the card's `data-index` attribute.
/// Independent of DOM order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CardIndex(pub u32);

/// Every page element the landing reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ElementId {
    Body,
    CardsSection,
    Card(CardIndex),
    SlotContainer,
    /// The bottom bar of the slot, used as the insertion reference.
    SlotBottom,
    SlotVoid,
    SpeedLines,
    BackButton,
    GameContent,
}

impl ElementId {
    /// CSS selector that locates this element in the document.
    pub fn selector(&self) -> String {
        match self {
            ElementId::Body => "body".to_string(),
            ElementId::CardsSection => ".cards-section".to_string(),
            ElementId::Card(idx) => format!(".card[data-index=\"{}\"]", idx.0),
            ElementId::SlotContainer => ".slot-container".to_string(),
            ElementId::SlotBottom => ".slot-bar.bottom".to_string(),
            ElementId::SlotVoid => ".slot-void".to_string(),
            ElementId::SpeedLines => ".speed-lines".to_string(),
            ElementId::BackButton => ".back-button".to_string(),
            ElementId::GameContent => ".game-content".to_string(),
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// CSS classes toggled by the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ClassName {
    Visible,
    Active,
    Selected,
    Inserting,
}

impl ClassName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::Visible => "visible",
            ClassName::Active => "active",
            ClassName::Selected => "selected",
            ClassName::Inserting => "inserting",
        }
    }

    pub const ALL: [ClassName; 4] = [
        ClassName::Visible,
        ClassName::Active,
        ClassName::Selected,
        ClassName::Inserting,
    ];
}

/// Body cursor affordance. The stylesheet supplies the initial pointer;
/// only the reset is ever written inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cursor {
    Default,
}

impl Cursor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
        }
    }
}

/// Inline style overrides. `None` means "not set inline"; the stylesheet wins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InlineStyle {
    pub opacity: Option<f32>,
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    /// `margin: 0` while the element is pinned to fixed coordinates.
    pub margin_reset: bool,
    pub cursor: Option<Cursor>,
}

impl InlineStyle {
    /// True when the element renders exactly as its resting layout:
    /// fully opaque, untranslated, and not pinned.
    pub fn is_at_rest(&self) -> bool {
        self.opacity.map_or(true, |o| (o - 1.0).abs() < 1e-4)
            && self.translate_x.map_or(true, |x| x.abs() < 1e-4)
            && self.translate_y.map_or(true, |y| y.abs() < 1e-4)
            && self.top.is_none()
            && self.left.is_none()
            && !self.margin_reset
    }

    /// Whether any transform component is set.
    pub fn has_transform(&self) -> bool {
        self.translate_x.is_some() || self.translate_y.is_some()
    }
}

/// Mirror of one DOM element: classes plus inline overrides.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ElementState {
    pub classes: BTreeSet<ClassName>,
    pub style: InlineStyle,
}

impl ElementState {
    pub fn has_class(&self, class: ClassName) -> bool {
        self.classes.contains(&class)
    }
}
