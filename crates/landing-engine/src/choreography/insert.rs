use crate::api::config::ChoreographyConfig;
use crate::api::error::{LandingError, Result};
use crate::extensions::easing::Easing;
use crate::extensions::tween::{Property, Tween, TweenTarget};
use crate::page::document::PageState;
use crate::page::element::{CardIndex, ClassName, ElementId};
use crate::page::layout::{LayoutMeasure, Rect, Viewport};
use super::{Cue, LandingTimeline};

/// Geometry captured at click time. Everything downstream is computed from
/// this snapshot, so later layout shifts cannot bend the flight path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertPlan {
    pub card: CardIndex,
    /// Card box before it was pinned.
    pub card_rect: Rect,
    /// Bottom bar of the slot.
    pub slot_rect: Rect,
    pub viewport: Viewport,
    /// Horizontal position that centers the card over the slot.
    pub target_left: f32,
    /// Seated top: the card's bottom overlaps the slot by `slot_overlap`.
    pub target_top: f32,
    /// Hover point just above the slot before the drop.
    pub staging_top: f32,
}

impl InsertPlan {
    /// Measure the card and the slot bottom bar. Fails if either has no box.
    pub fn measure(
        layout: &dyn LayoutMeasure,
        card: CardIndex,
        config: &ChoreographyConfig,
    ) -> Result<Self> {
        let card_id = ElementId::Card(card);
        let card_rect = layout
            .bounding_rect(card_id)
            .ok_or(LandingError::MissingElement(card_id))?;
        let slot_rect = layout
            .bounding_rect(ElementId::SlotBottom)
            .ok_or(LandingError::MissingElement(ElementId::SlotBottom))?;
        Ok(Self::from_rects(card, card_rect, slot_rect, layout.viewport(), config))
    }

    pub fn from_rects(
        card: CardIndex,
        card_rect: Rect,
        slot_rect: Rect,
        viewport: Viewport,
        config: &ChoreographyConfig,
    ) -> Self {
        Self {
            card,
            card_rect,
            slot_rect,
            viewport,
            target_left: slot_rect.center_x() - card_rect.width / 2.0,
            target_top: slot_rect.top - config.slot_overlap,
            staging_top: slot_rect.top - card_rect.height - config.staging_gap,
        }
    }

    /// Horizontal distance a sibling travels to leave the viewport.
    pub fn slide_distance(&self, config: &ChoreographyConfig) -> f32 {
        self.viewport.width / 2.0 + config.slide_margin
    }
}

/// -1 for siblings with a lower logical index than the clicked card, +1 otherwise.
/// Document order plays no part.
pub fn slide_direction(sibling: CardIndex, clicked: CardIndex) -> f32 {
    if sibling < clicked {
        -1.0
    } else {
        1.0
    }
}

/// Lift the card out of the grid: mark it, and pin it at its current
/// viewport coordinates so the flight starts exactly where it sat.
pub fn pin_card(page: &mut PageState, plan: &InsertPlan) -> Result<()> {
    let card = ElementId::Card(plan.card);
    page.add_class(card, ClassName::Inserting)?;
    page.add_class(card, ClassName::Selected)?;
    page.set_style(card, Property::Top, plan.card_rect.top)?;
    page.set_style(card, Property::Left, plan.card_rect.left)?;
    page.set_margin_reset(card)?;
    Ok(())
}

/// Slot fade-in, siblings out, hover, drop, bounce, and the header promotion.
pub fn insert_timeline(config: &ChoreographyConfig, plan: &InsertPlan, cards: &[CardIndex]) -> LandingTimeline {
    let mut tl = LandingTimeline::new("insert");
    let card = TweenTarget::Element(ElementId::Card(plan.card));
    let slot = TweenTarget::Element(ElementId::SlotContainer);
    let void = TweenTarget::Element(ElementId::SlotVoid);

    tl.add(0.0, Tween::new(slot, 0.3, Easing::CubicOut).to(Property::Opacity, 1.0));

    let distance = plan.slide_distance(config);
    for sibling in cards.iter().filter(|c| **c != plan.card) {
        tl.add(
            0.1,
            Tween::new(TweenTarget::Element(ElementId::Card(*sibling)), 0.4, Easing::CubicIn)
                .to(Property::TranslateX, slide_direction(*sibling, plan.card) * distance)
                .to(Property::Opacity, 0.0),
        );
    }

    tl.add(
        0.3,
        Tween::new(card, 0.4, Easing::CubicOut)
            .to(Property::Top, plan.staging_top)
            .to(Property::Left, plan.target_left),
    )
    .add(0.85, Tween::new(card, 0.45, Easing::CubicIn).to(Property::Top, plan.target_top))
    .call(1.28, Cue::Impact)
    .add(1.3, Tween::new(card, 0.06, Easing::QuadOut).to(Property::Top, plan.target_top + config.bounce))
    .add(1.36, Tween::new(card, 0.06, Easing::QuadIn).to(Property::Top, plan.target_top));

    let header = config.header_top;
    tl.add(1.5, Tween::new(card, 0.5, Easing::CubicOut).to(Property::Top, header - config.slot_overlap))
        .add(1.5, Tween::new(slot, 0.5, Easing::CubicOut).to(Property::Top, header))
        .add(1.5, Tween::new(void, 0.5, Easing::CubicOut).to(Property::Top, header + config.void_offset))
        .call(2.0, Cue::RevealSecondary);

    tl
}
