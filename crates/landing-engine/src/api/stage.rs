use crate::api::config::LandingConfig;
use crate::api::error::LandingError;
use crate::choreography::{back, Cue, LandingTimeline};
use crate::core::phase::PhaseMachine;
use crate::core::scene::Scene;
use crate::extensions::timeline::TimelineHost;
use crate::extensions::tween::{Property, TweenTarget};
use crate::page::document::PageState;
use crate::page::element::{ClassName, Cursor, ElementId};
use crate::page::layout::LayoutMeasure;
use crate::renderer::camera::PerspectiveCamera;

/// Everything a landing timeline can touch: the 3D scene, the page mirror,
/// and the phase machine. Implements `TimelineHost` so choreographies stay
/// pure data.
pub struct Stage {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub page: PageState,
    pub phase: PhaseMachine,
    config: LandingConfig,
    layout: Box<dyn LayoutMeasure>,
    /// Timelines started from inside a cue; picked up by the controller.
    spawned: Vec<LandingTimeline>,
    render_requested: bool,
}

impl Stage {
    pub fn new(config: LandingConfig, page: PageState, layout: Box<dyn LayoutMeasure>) -> Self {
        let scene = Scene::new(&config.scene);
        let camera = PerspectiveCamera::from_config(&config.scene, layout.viewport().aspect());
        Self {
            scene,
            camera,
            page,
            phase: PhaseMachine::new(),
            config,
            layout,
            spawned: Vec::new(),
            render_requested: false,
        }
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn layout(&self) -> &dyn LayoutMeasure {
        self.layout.as_ref()
    }

    /// Fail with the first element the page is missing.
    pub fn require_all(&self, ids: &[ElementId]) -> Result<(), LandingError> {
        for id in ids {
            self.page.require(*id)?;
        }
        Ok(())
    }

    pub fn take_spawned(&mut self) -> Vec<LandingTimeline> {
        std::mem::take(&mut self.spawned)
    }

    /// Returns whether a render was requested since the last call, and clears it.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    fn read_scene(&self, target: TweenTarget, prop: Property) -> Option<f32> {
        let value = match (target, prop) {
            (TweenTarget::Circle, Property::ScaleX) => self.scene.circle.scale.x,
            (TweenTarget::Circle, Property::ScaleY) => self.scene.circle.scale.y,
            (TweenTarget::Circle, Property::ScaleZ) => self.scene.circle.scale.z,
            (TweenTarget::Circle, Property::PositionY) => self.scene.circle.position.y,
            (TweenTarget::Label, Property::Opacity) => self.scene.label.opacity,
            (TweenTarget::Label, Property::PositionY) => self.scene.label.position.y,
            (TweenTarget::Camera, Property::PositionY) => self.camera.position.y,
            (TweenTarget::Camera, Property::PositionZ) => self.camera.position.z,
            _ => return None,
        };
        Some(value)
    }

    fn scene_slot(&mut self, target: TweenTarget, prop: Property) -> Option<&mut f32> {
        let slot = match (target, prop) {
            (TweenTarget::Circle, Property::ScaleX) => &mut self.scene.circle.scale.x,
            (TweenTarget::Circle, Property::ScaleY) => &mut self.scene.circle.scale.y,
            (TweenTarget::Circle, Property::ScaleZ) => &mut self.scene.circle.scale.z,
            (TweenTarget::Circle, Property::PositionY) => &mut self.scene.circle.position.y,
            (TweenTarget::Label, Property::Opacity) => &mut self.scene.label.opacity,
            (TweenTarget::Label, Property::PositionY) => &mut self.scene.label.position.y,
            (TweenTarget::Camera, Property::PositionY) => &mut self.camera.position.y,
            (TweenTarget::Camera, Property::PositionZ) => &mut self.camera.position.z,
            _ => return None,
        };
        Some(slot)
    }
}

impl TimelineHost<Cue> for Stage {
    type Error = LandingError;

    fn read(&self, target: TweenTarget, prop: Property) -> f32 {
        match target {
            TweenTarget::Element(id) => self
                .page
                .style_value(id, prop)
                .unwrap_or_else(|| self.layout.computed_style(id, prop)),
            _ => self.read_scene(target, prop).unwrap_or_else(|| {
                log::warn!("{:?} has no animatable {:?}", target, prop);
                0.0
            }),
        }
    }

    fn write(&mut self, target: TweenTarget, prop: Property, value: f32) -> Result<(), LandingError> {
        match target {
            TweenTarget::Element(id) => {
                if !self.page.set_style(id, prop, value)? {
                    log::warn!("{:?} is not a style property of {}", prop, id);
                }
            }
            _ => match self.scene_slot(target, prop) {
                Some(slot) => *slot = value,
                None => log::warn!("{:?} has no animatable {:?}", target, prop),
            },
        }
        Ok(())
    }

    fn cue(&mut self, cue: Cue) -> Result<(), LandingError> {
        log::debug!("cue {:?}", cue);
        match cue {
            Cue::RevealCards => {
                if self.phase.complete_enter() {
                    log::info!("landing transitioned; idle loop halted");
                }
                self.page.add_class(ElementId::CardsSection, ClassName::Visible)?;
                self.page.set_cursor(Cursor::Default)?;
            }
            Cue::Impact => {
                self.page.add_class(ElementId::SpeedLines, ClassName::Active)?;
            }
            Cue::RevealSecondary => {
                self.page.add_class(ElementId::BackButton, ClassName::Visible)?;
                self.page.add_class(ElementId::GameContent, ClassName::Visible)?;
                if self.phase.complete_insert() {
                    log::info!("card inserted; back unlocked");
                }
            }
            Cue::HideSecondary => {
                self.page.remove_class(ElementId::BackButton, ClassName::Visible)?;
                self.page.remove_class(ElementId::GameContent, ClassName::Visible)?;
            }
            Cue::RestoreSelection(selected) => {
                back::restore_selection(&mut self.page, selected)?;
                self.spawned
                    .push(back::siblings_return_timeline(self.page.cards(), selected));
            }
            Cue::FinishReturn => {
                back::finish_return(&mut self.page)?;
                self.phase.finish_return();
                log::info!("card returned; insertion unlocked");
            }
        }
        Ok(())
    }

    fn request_render(&mut self) {
        self.render_requested = true;
    }
}
