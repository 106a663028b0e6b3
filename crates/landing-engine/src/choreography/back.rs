use crate::api::config::ChoreographyConfig;
use crate::api::error::Result;
use crate::extensions::easing::Easing;
use crate::extensions::tween::{Property, Tween, TweenTarget};
use crate::page::document::PageState;
use crate::page::element::{CardIndex, ClassName, ElementId};
use crate::page::layout::Viewport;
use super::{Cue, LandingTimeline};

/// When the selected card is handed back to the grid.
pub const RESTORE_AT: f32 = 0.9;
/// When the slot assembly is reset and card clicks unlock.
pub const FINISH_AT: f32 = 1.3;
pub const SIBLING_RETURN_DURATION: f32 = 0.4;

/// Resting positions the card and slot return to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnPlan {
    pub selected: CardIndex,
    /// Slot container top at rest.
    pub slot_top: f32,
    /// Card top while seated in the resting slot.
    pub card_top: f32,
}

impl ReturnPlan {
    pub fn new(selected: CardIndex, viewport: Viewport, config: &ChoreographyConfig) -> Self {
        let slot_top = viewport.height / 2.0 + config.slot_center_offset;
        Self {
            selected,
            slot_top,
            card_top: slot_top - config.slot_overlap,
        }
    }
}

/// Hide the secondary UI, sink the slot back to center, eject the card and
/// hand everything back to the grid.
pub fn return_timeline(config: &ChoreographyConfig, plan: &ReturnPlan) -> LandingTimeline {
    let mut tl = LandingTimeline::new("back");
    let card = TweenTarget::Element(ElementId::Card(plan.selected));
    let slot = TweenTarget::Element(ElementId::SlotContainer);
    let void = TweenTarget::Element(ElementId::SlotVoid);

    tl.add(
        0.0,
        Tween::new(TweenTarget::Element(ElementId::BackButton), 0.25, Easing::CubicIn)
            .to(Property::Opacity, 0.0),
    )
    .add(
        0.0,
        Tween::new(TweenTarget::Element(ElementId::GameContent), 0.25, Easing::CubicIn)
            .to(Property::Opacity, 0.0)
            .with_on_complete(Cue::HideSecondary),
    );

    tl.add(0.2, Tween::new(card, 0.4, Easing::CubicInOut).to(Property::Top, plan.card_top))
        .add(0.2, Tween::new(slot, 0.4, Easing::CubicInOut).to(Property::Top, plan.slot_top))
        .add(
            0.2,
            Tween::new(void, 0.4, Easing::CubicInOut).to(Property::Top, plan.slot_top + config.void_offset),
        )
        .add(0.6, Tween::new(card, 0.3, Easing::CubicOut).to(Property::Top, plan.card_top - config.eject_lift))
        .add(0.7, Tween::new(slot, 0.3, Easing::CubicIn).to(Property::Opacity, 0.0))
        .call(RESTORE_AT, Cue::RestoreSelection(plan.selected))
        .call(FINISH_AT, Cue::FinishReturn);

    tl
}

/// Put the selected card back into normal flow, fully visible.
pub fn restore_selection(page: &mut PageState, selected: CardIndex) -> Result<()> {
    let card = ElementId::Card(selected);
    page.remove_class(card, ClassName::Inserting)?;
    page.remove_class(card, ClassName::Selected)?;
    page.clear_style(card)?;
    page.set_style(card, Property::Opacity, 1.0)?;
    page.set_style(card, Property::TranslateY, 0.0)?;
    Ok(())
}

/// Slide every other card back to its grid position.
pub fn siblings_return_timeline(cards: &[CardIndex], selected: CardIndex) -> LandingTimeline {
    let mut tl = LandingTimeline::new("siblings-return");
    for sibling in cards.iter().filter(|c| **c != selected) {
        tl.add(
            0.0,
            Tween::new(TweenTarget::Element(ElementId::Card(*sibling)), SIBLING_RETURN_DURATION, Easing::CubicOut)
                .to(Property::TranslateX, 0.0)
                .to(Property::Opacity, 1.0),
        );
    }
    tl
}

/// Reset the slot assembly for the next insertion.
pub fn finish_return(page: &mut PageState) -> Result<()> {
    page.clear_style(ElementId::SlotContainer)?;
    page.set_style(ElementId::SlotContainer, Property::Opacity, 0.0)?;
    page.clear_style(ElementId::SlotVoid)?;
    page.remove_class(ElementId::SpeedLines, ClassName::Active)?;
    page.clear_opacity(ElementId::BackButton)?;
    page.clear_opacity(ElementId::GameContent)?;
    Ok(())
}
