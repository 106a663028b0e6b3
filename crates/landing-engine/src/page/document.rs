use std::collections::{BTreeMap, BTreeSet};
use serde::{Serialize, Serializer};
use crate::api::error::{LandingError, Result};
use crate::extensions::tween::Property;
use super::element::{CardIndex, ClassName, Cursor, ElementId, ElementState};

/// Elements every landing page carries besides its cards.
pub const FIXED_ELEMENTS: [ElementId; 8] = [
    ElementId::Body,
    ElementId::CardsSection,
    ElementId::SlotContainer,
    ElementId::SlotBottom,
    ElementId::SlotVoid,
    ElementId::SpeedLines,
    ElementId::BackButton,
    ElementId::GameContent,
];

/// In-memory mirror of the page elements the landing touches.
///
/// Every mutation marks the element dirty; the host drains the dirty set once
/// per frame and writes those elements back to the real document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageState {
    #[serde(serialize_with = "serialize_by_selector")]
    elements: BTreeMap<ElementId, ElementState>,
    /// Card indices in document order.
    cards: Vec<CardIndex>,
    #[serde(skip)]
    dirty: BTreeSet<ElementId>,
}

impl PageState {
    /// A page with every fixed element plus the given cards (in document order).
    pub fn standard(cards: impl IntoIterator<Item = CardIndex>) -> Self {
        let cards = cards.into_iter().map(ElementId::Card);
        Self::from_elements(FIXED_ELEMENTS.into_iter().chain(cards))
    }

    /// A page holding exactly the given elements. Cards keep the order they appear in.
    pub fn from_elements(ids: impl IntoIterator<Item = ElementId>) -> Self {
        let mut page = Self::default();
        for id in ids {
            if let ElementId::Card(idx) = id {
                if !page.cards.contains(&idx) {
                    page.cards.push(idx);
                }
            }
            page.elements.entry(id).or_default();
        }
        page
    }

    /// Card indices in document order.
    pub fn cards(&self) -> &[CardIndex] {
        &self.cards
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    /// Look up an element that must exist.
    pub fn require(&self, id: ElementId) -> Result<&ElementState> {
        self.elements.get(&id).ok_or(LandingError::MissingElement(id))
    }

    fn require_mut(&mut self, id: ElementId) -> Result<&mut ElementState> {
        let el = self
            .elements
            .get_mut(&id)
            .ok_or(LandingError::MissingElement(id))?;
        self.dirty.insert(id);
        Ok(el)
    }

    // -- Classes --

    pub fn add_class(&mut self, id: ElementId, class: ClassName) -> Result<()> {
        self.require_mut(id)?.classes.insert(class);
        Ok(())
    }

    pub fn remove_class(&mut self, id: ElementId, class: ClassName) -> Result<()> {
        self.require_mut(id)?.classes.remove(&class);
        Ok(())
    }

    pub fn has_class(&self, id: ElementId, class: ClassName) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|el| el.has_class(class))
    }

    /// First card in document order carrying `selected`.
    pub fn selected_card(&self) -> Option<CardIndex> {
        self.cards
            .iter()
            .copied()
            .find(|idx| self.has_class(ElementId::Card(*idx), ClassName::Selected))
    }

    // -- Inline style --

    /// Inline value of an animatable style property, if set.
    pub fn style_value(&self, id: ElementId, prop: Property) -> Option<f32> {
        let style = &self.elements.get(&id)?.style;
        match prop {
            Property::Opacity => style.opacity,
            Property::Top => style.top,
            Property::Left => style.left,
            Property::TranslateX => style.translate_x,
            Property::TranslateY => style.translate_y,
            _ => None,
        }
    }

    /// Set an inline style property. Returns false for properties that are not
    /// CSS-backed (scale, 3D position).
    pub fn set_style(&mut self, id: ElementId, prop: Property, value: f32) -> Result<bool> {
        let style = &mut self.require_mut(id)?.style;
        let slot = match prop {
            Property::Opacity => &mut style.opacity,
            Property::Top => &mut style.top,
            Property::Left => &mut style.left,
            Property::TranslateX => &mut style.translate_x,
            Property::TranslateY => &mut style.translate_y,
            _ => return Ok(false),
        };
        *slot = Some(value);
        Ok(true)
    }

    pub fn set_margin_reset(&mut self, id: ElementId) -> Result<()> {
        self.require_mut(id)?.style.margin_reset = true;
        Ok(())
    }

    pub fn set_cursor(&mut self, cursor: Cursor) -> Result<()> {
        self.require_mut(ElementId::Body)?.style.cursor = Some(cursor);
        Ok(())
    }

    /// Drop every inline override on the element.
    pub fn clear_style(&mut self, id: ElementId) -> Result<()> {
        self.require_mut(id)?.style = Default::default();
        Ok(())
    }

    /// Drop only the inline opacity.
    pub fn clear_opacity(&mut self, id: ElementId) -> Result<()> {
        self.require_mut(id)?.style.opacity = None;
        Ok(())
    }

    // -- Sync --

    /// Elements changed since the last drain, in a stable order.
    pub fn drain_dirty(&mut self) -> Vec<ElementId> {
        std::mem::take(&mut self.dirty).into_iter().collect()
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Debug snapshot of every element's classes and overrides.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// JSON object keys must be strings, so elements are keyed by selector.
fn serialize_by_selector<S: Serializer>(
    elements: &BTreeMap<ElementId, ElementState>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(elements.iter().map(|(id, el)| (id.selector(), el)))
}
