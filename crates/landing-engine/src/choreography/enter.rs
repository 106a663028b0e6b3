use crate::api::config::ChoreographyConfig;
use crate::extensions::easing::Easing;
use crate::extensions::tween::{Property, Tween, TweenTarget};
use crate::page::element::{CardIndex, ElementId};
use super::{Cue, LandingTimeline};

pub const ZOOM_DURATION: f32 = 0.6;
pub const LABEL_FADE_DURATION: f32 = 0.3;
/// When the cards section becomes visible.
pub const REVEAL_AT: f32 = 0.5;
/// When the first card starts fading in.
pub const CARDS_AT: f32 = 0.6;
pub const CARD_FADE_DURATION: f32 = 0.5;

/// Circle blow-up, label fade and camera push, then the staggered card reveal.
pub fn enter_timeline(config: &ChoreographyConfig, cards: &[CardIndex]) -> LandingTimeline {
    let mut tl = LandingTimeline::new("enter");

    tl.add(
        0.0,
        Tween::new(TweenTarget::Circle, ZOOM_DURATION, Easing::CubicIn)
            .to(Property::ScaleX, config.circle_scale)
            .to(Property::ScaleY, config.circle_scale)
            .to(Property::ScaleZ, 1.0)
            .rendering(),
    )
    .add(
        0.0,
        Tween::new(TweenTarget::Label, LABEL_FADE_DURATION, Easing::CubicIn)
            .to(Property::Opacity, 0.0)
            .rendering(),
    )
    .add(
        0.0,
        Tween::new(TweenTarget::Camera, ZOOM_DURATION, Easing::CubicIn)
            .to(Property::PositionZ, config.camera_zoom_distance)
            .rendering(),
    )
    .call(REVEAL_AT, Cue::RevealCards);

    for (i, card) in cards.iter().enumerate() {
        let offset = CARDS_AT + i as f32 * config.card_stagger;
        tl.add(
            offset,
            Tween::new(TweenTarget::Element(ElementId::Card(*card)), CARD_FADE_DURATION, Easing::CubicOut)
                .to(Property::Opacity, 1.0)
                .to(Property::TranslateY, 0.0),
        );
    }

    tl
}
