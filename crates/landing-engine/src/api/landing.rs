use serde::Serialize;
use crate::api::config::LandingConfig;
use crate::api::error::{LandingError, Result};
use crate::api::stage::Stage;
use crate::choreography::{back, enter, insert, LandingTimeline};
use crate::core::phase::PhaseMachine;
use crate::core::scene::Scene;
use crate::core::time::{float_offset, IdleClock};
use crate::extensions::timeline::TimelineHost;
use crate::input::queue::InputEvent;
use crate::page::document::PageState;
use crate::page::element::{CardIndex, ElementId};
use crate::page::layout::{LayoutMeasure, Viewport};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::{FrameData, RenderSurface, SceneRenderer};

/// Elements the enter choreography writes to.
const ENTER_ELEMENTS: [ElementId; 2] = [ElementId::Body, ElementId::CardsSection];

/// Elements the insert and back choreographies write to.
const SLOT_ELEMENTS: [ElementId; 5] = [
    ElementId::SlotContainer,
    ElementId::SlotVoid,
    ElementId::SpeedLines,
    ElementId::BackButton,
    ElementId::GameContent,
];

/// Debug view of the whole landing.
#[derive(Serialize)]
struct Snapshot<'a> {
    phase: &'a PhaseMachine,
    idle_elapsed: f32,
    timelines: Vec<&'static str>,
    page: &'a PageState,
}

/// The landing controller: owns the stage, the running timelines, the idle
/// clock and the renderer, and turns input into choreography.
///
/// Drive it once per display frame with `tick`. Triggers return `Ok(false)`
/// when the phase machine rejects them; that is a normal outcome.
pub struct Landing<R: SceneRenderer> {
    stage: Stage,
    renderer: R,
    timelines: Vec<LandingTimeline>,
    idle: IdleClock,
    /// Labels of every timeline started, oldest first.
    history: Vec<&'static str>,
}

impl<R: SceneRenderer> Landing<R> {
    pub fn new(
        config: LandingConfig,
        page: PageState,
        layout: Box<dyn LayoutMeasure>,
        mut renderer: R,
    ) -> Self {
        let idle = IdleClock::from_config(&config.idle);
        renderer.resize(RenderSurface::fit(layout.viewport(), config.scene.max_pixel_ratio));
        let stage = Stage::new(config, page, layout);
        log::info!(
            "landing ready: {} cards, {:?} idle timing",
            stage.page.cards().len(),
            idle.timing()
        );
        Self {
            stage,
            renderer,
            timelines: Vec::new(),
            idle,
            history: Vec::new(),
        }
    }

    // -- Input --

    /// Route one input event. Returns whether it started or changed anything.
    pub fn handle(&mut self, event: &InputEvent) -> Result<bool> {
        match event {
            InputEvent::BackgroundClick => self.trigger_enter(),
            InputEvent::KeyDown { key } if key == InputEvent::ENTER_KEY => self.trigger_enter(),
            InputEvent::KeyDown { .. } => Ok(false),
            InputEvent::CardClick { index } => self.insert_card(*index),
            InputEvent::BackClick => self.go_back(),
            InputEvent::Resize { viewport } => {
                self.resize(*viewport);
                Ok(true)
            }
        }
    }

    /// Start the enter transition. Accepted once per page lifetime.
    pub fn trigger_enter(&mut self) -> Result<bool> {
        if self.stage.phase.is_animating() {
            log::debug!("enter ignored: already {:?}", self.stage.phase.enter());
            return Ok(false);
        }
        self.stage.require_all(&ENTER_ELEMENTS)?;
        if !self.stage.phase.begin_enter() {
            return Ok(false);
        }

        let timeline = enter::enter_timeline(&self.stage.config().choreography, self.stage.page.cards());
        self.start(timeline);
        Ok(true)
    }

    /// Fly the card into the slot. Ignored while any card is inserted or returning.
    pub fn insert_card(&mut self, card: CardIndex) -> Result<bool> {
        if self.stage.phase.card_inserted() {
            log::debug!("insert of card {} ignored: {:?}", card.0, self.stage.phase.card());
            return Ok(false);
        }
        self.stage.page.require(ElementId::Card(card))?;
        self.stage.require_all(&SLOT_ELEMENTS)?;
        let plan = insert::InsertPlan::measure(
            self.stage.layout(),
            card,
            &self.stage.config().choreography,
        )?;

        if !self.stage.phase.begin_insert() {
            return Ok(false);
        }
        insert::pin_card(&mut self.stage.page, &plan)?;
        let timeline = insert::insert_timeline(&self.stage.config().choreography, &plan, self.stage.page.cards());
        self.start(timeline);
        Ok(true)
    }

    /// Reverse the insertion. A no-op when nothing is selected, the insert has
    /// not settled yet, or a return is running.
    pub fn go_back(&mut self) -> Result<bool> {
        if self.stage.phase.is_going_back() {
            log::debug!("back ignored: return already running");
            return Ok(false);
        }
        let Some(selected) = self.stage.page.selected_card() else {
            log::debug!("back ignored: no selected card");
            return Ok(false);
        };
        self.stage.require_all(&SLOT_ELEMENTS)?;
        if !self.stage.phase.begin_return() {
            log::debug!("back ignored: {:?}", self.stage.phase.card());
            return Ok(false);
        }

        let config = &self.stage.config().choreography;
        let plan = back::ReturnPlan::new(selected, self.stage.layout().viewport(), config);
        let timeline = back::return_timeline(config, &plan);
        self.start(timeline);
        Ok(true)
    }

    /// Sync camera aspect and drawing-buffer size to a new viewport.
    /// Does not draw; the next requested frame picks up the new size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.stage.camera.set_aspect(viewport.aspect());
        let surface = RenderSurface::fit(viewport, self.stage.config().scene.max_pixel_ratio);
        self.renderer.resize(surface);
        log::debug!("resized to {}x{} @{}", surface.width, surface.height, surface.pixel_ratio);
    }

    fn start(&mut self, timeline: LandingTimeline) {
        log::info!("starting '{}' ({:.2}s)", timeline.label(), timeline.duration());
        self.history.push(timeline.label());
        self.timelines.push(timeline);
    }

    // -- Frame --

    /// Advance one display frame of `dt` seconds: run timelines, float the
    /// circle while idle, and draw if anything asked for it.
    ///
    /// A failing cue or write aborts its timeline and is returned after the
    /// remaining timelines have advanced.
    pub fn tick(&mut self, dt: f32) -> Result<()> {
        let result = self.advance_timelines(dt);
        self.idle_frame(dt);
        if self.stage.take_render_request() {
            self.renderer.render(&FrameData {
                scene: &self.stage.scene,
                camera: &self.stage.camera,
            });
        }
        result
    }

    fn advance_timelines(&mut self, dt: f32) -> Result<()> {
        let stage = &mut self.stage;
        let mut first_err = None;
        self.timelines.retain_mut(|tl| match tl.tick(dt, stage) {
            Ok(done) => !done,
            Err(err) => {
                log::error!("timeline '{}' aborted: {}", tl.label(), err);
                first_err.get_or_insert(err);
                false
            }
        });
        self.timelines.append(&mut self.stage.take_spawned());
        first_err.map_or(Ok(()), Err)
    }

    /// The idle loop. Stops for good once the landing has transitioned; the
    /// float freezes while the enter timeline runs, but frames still draw.
    fn idle_frame(&mut self, dt: f32) {
        let phase = &self.stage.phase;
        if phase.has_transitioned() {
            return;
        }
        let t = self.idle.advance(dt);
        if !phase.is_animating() {
            let offset = float_offset(t, &self.stage.config().idle);
            self.stage.scene.set_float_offset(offset);
        }
        self.stage.request_render();
    }

    // -- Accessors --

    pub fn phase(&self) -> &PhaseMachine {
        &self.stage.phase
    }

    pub fn page(&self) -> &PageState {
        &self.stage.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.stage.page
    }

    pub fn scene(&self) -> &Scene {
        &self.stage.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.stage.camera
    }

    pub fn config(&self) -> &LandingConfig {
        self.stage.config()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn idle_elapsed(&self) -> f32 {
        self.idle.elapsed()
    }

    /// Labels of the timelines still running.
    pub fn active_timelines(&self) -> Vec<&'static str> {
        self.timelines.iter().map(|tl| tl.label()).collect()
    }

    /// Labels of every timeline started so far.
    pub fn history(&self) -> &[&'static str] {
        &self.history
    }

    pub fn is_animating(&self) -> bool {
        self.stage.phase.is_animating()
    }

    pub fn has_transitioned(&self) -> bool {
        self.stage.phase.has_transitioned()
    }

    pub fn card_inserted(&self) -> bool {
        self.stage.phase.card_inserted()
    }

    pub fn is_going_back(&self) -> bool {
        self.stage.phase.is_going_back()
    }

    /// Phase, running timelines and page mirror as JSON.
    pub fn state_json(&self) -> Result<String> {
        let snapshot = Snapshot {
            phase: &self.stage.phase,
            idle_elapsed: self.idle.elapsed(),
            timelines: self.active_timelines(),
            page: &self.stage.page,
        };
        serde_json::to_string(&snapshot).map_err(LandingError::Snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::phase::CardPhase;
    use crate::extensions::tween::Property;
    use crate::page::element::ClassName;
    use crate::page::layout::{Rect, StaticLayout};
    use crate::renderer::frame::FrameBuffer;

    const DT: f32 = 1.0 / 60.0;

    fn layout_for(cards: &[CardIndex]) -> StaticLayout {
        let mut layout = StaticLayout::new(Viewport::new(1280.0, 720.0))
            .with_rect(ElementId::SlotBottom, Rect::new(340.0, 544.0, 600.0, 24.0))
            .with_style(ElementId::SlotContainer, Property::Opacity, 0.0);
        for (pos, card) in cards.iter().enumerate() {
            let id = ElementId::Card(*card);
            layout = layout
                .with_rect(id, Rect::new(100.0 + pos as f32 * 300.0, 200.0, 200.0, 280.0))
                .with_style(id, Property::Opacity, 0.0)
                .with_style(id, Property::TranslateY, 30.0);
        }
        layout
    }

    fn landing_with(order: &[u32]) -> Landing<FrameBuffer> {
        let cards: Vec<CardIndex> = order.iter().map(|i| CardIndex(*i)).collect();
        Landing::new(
            LandingConfig::default(),
            PageState::standard(cards.iter().copied()),
            Box::new(layout_for(&cards)),
            FrameBuffer::new(RenderSurface::default()),
        )
    }

    fn landing() -> Landing<FrameBuffer> {
        landing_with(&[0, 1, 2])
    }

    fn run(landing: &mut Landing<FrameBuffer>, seconds: f32) {
        let frames = (seconds / DT).round() as usize;
        for _ in 0..frames {
            landing.tick(DT).unwrap();
        }
    }

    fn count(landing: &Landing<FrameBuffer>, label: &str) -> usize {
        landing.history().iter().filter(|l| **l == label).count()
    }

    fn card(i: u32) -> ElementId {
        ElementId::Card(CardIndex(i))
    }

    #[test]
    fn idle_floats_and_renders_before_enter() {
        let mut landing = landing();
        run(&mut landing, 0.5);
        assert!(landing.scene().circle.position.y.abs() > 0.0);
        assert_eq!(landing.scene().label.position.y, landing.scene().circle.position.y);
        assert_eq!(landing.renderer().frames_rendered(), 30);
        assert!((landing.idle_elapsed() - 30.0 * 0.016).abs() < 1e-4);
    }

    #[test]
    fn float_freezes_while_enter_runs() {
        let mut landing = landing();
        run(&mut landing, 0.2);
        assert!(landing.trigger_enter().unwrap());
        let frozen = landing.scene().circle.position.y;
        run(&mut landing, 0.3);
        assert_eq!(landing.scene().circle.position.y, frozen);
        assert!(landing.scene().circle.scale.x > 1.0);
    }

    #[test]
    fn idle_halts_for_good_after_transition() {
        let mut landing = landing();
        landing.handle(&InputEvent::BackgroundClick).unwrap();
        run(&mut landing, 1.5);
        assert!(landing.has_transitioned());
        assert!(landing.active_timelines().is_empty());

        let elapsed = landing.idle_elapsed();
        let frames = landing.renderer().frames_rendered();
        let y = landing.scene().circle.position.y;
        run(&mut landing, 1.0);
        assert_eq!(landing.idle_elapsed(), elapsed);
        assert_eq!(landing.renderer().frames_rendered(), frames);
        assert_eq!(landing.scene().circle.position.y, y);

        assert!(!landing.trigger_enter().unwrap());
        assert!(!landing.handle(&InputEvent::key_down("Enter")).unwrap());
        assert_eq!(count(&landing, "enter"), 1);
    }

    #[test]
    fn enter_tweens_keep_rendering_after_idle_stops() {
        let mut landing = landing();
        landing.trigger_enter().unwrap();
        run(&mut landing, 0.52);
        assert!(landing.has_transitioned());
        let frames = landing.renderer().frames_rendered();
        run(&mut landing, 0.05);
        assert!(landing.renderer().frames_rendered() > frames);
    }

    #[test]
    fn enter_end_state() {
        let mut landing = landing();
        landing.trigger_enter().unwrap();
        run(&mut landing, 1.5);
        assert!((landing.scene().circle.scale.x - 50.0).abs() < 1e-3);
        assert_eq!(landing.scene().circle.scale.z, 1.0);
        assert!(landing.scene().label.opacity.abs() < 1e-4);
        assert!((landing.camera().position.z - 5.0).abs() < 1e-4);
        for i in 0..3 {
            let style = landing.page().get(card(i)).unwrap().style;
            assert!(style.is_at_rest(), "card {} not at rest: {:?}", i, style);
        }
        let body = landing.page().get(ElementId::Body).unwrap();
        assert_eq!(body.style.cursor, Some(crate::page::element::Cursor::Default));
    }

    #[test]
    fn end_to_end_click_reveals_cards_once() {
        let mut landing = landing();
        assert!(landing.handle(&InputEvent::BackgroundClick).unwrap());
        assert!(landing.is_animating());
        run(&mut landing, 0.55);
        assert!(landing.page().has_class(ElementId::CardsSection, ClassName::Visible));
        assert!(landing.has_transitioned());

        assert!(!landing.handle(&InputEvent::BackgroundClick).unwrap());
        assert_eq!(landing.history(), &["enter"]);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut landing = landing();
        assert!(!landing.handle(&InputEvent::key_down("Escape")).unwrap());
        assert!(!landing.is_animating());
        assert!(landing.handle(&InputEvent::key_down("Enter")).unwrap());
        assert!(landing.is_animating());
    }

    #[test]
    fn card_click_never_triggers_enter() {
        let mut landing = landing();
        landing.handle(&InputEvent::card(1)).unwrap();
        run(&mut landing, 0.6);
        assert!(!landing.is_animating());
        assert!(!landing.has_transitioned());
        assert_eq!(count(&landing, "enter"), 0);
    }

    #[test]
    fn double_insert_runs_once() {
        let mut landing = landing();
        assert!(landing.insert_card(CardIndex(1)).unwrap());
        assert!(!landing.insert_card(CardIndex(1)).unwrap());
        assert!(!landing.insert_card(CardIndex(2)).unwrap());
        assert_eq!(count(&landing, "insert"), 1);
        assert!(!landing.page().has_class(card(2), ClassName::Selected));
    }

    #[test]
    fn insert_pins_card_immediately() {
        let mut landing = landing();
        landing.insert_card(CardIndex(1)).unwrap();
        let page = landing.page();
        assert!(page.has_class(card(1), ClassName::Inserting));
        assert_eq!(page.style_value(card(1), Property::Top), Some(200.0));
        assert_eq!(page.style_value(card(1), Property::Left), Some(400.0));
    }

    #[test]
    fn insert_lands_card_in_header_slot() {
        let mut landing = landing();
        landing.insert_card(CardIndex(1)).unwrap();
        run(&mut landing, 1.29);
        assert!(landing.page().has_class(ElementId::SpeedLines, ClassName::Active));
        assert!(!landing.page().has_class(ElementId::BackButton, ClassName::Visible));

        run(&mut landing, 0.8);
        let page = landing.page();
        let top = page.style_value(card(1), Property::Top).unwrap();
        let left = page.style_value(card(1), Property::Left).unwrap();
        assert!((top - 20.0).abs() < 1e-3);
        assert!((left - 540.0).abs() < 1e-3);
        assert!((page.style_value(ElementId::SlotContainer, Property::Top).unwrap() - 60.0).abs() < 1e-3);
        assert!((page.style_value(ElementId::SlotVoid, Property::Top).unwrap() - 64.0).abs() < 1e-3);
        assert_eq!(page.style_value(ElementId::SlotContainer, Property::Opacity), Some(1.0));
        assert!(page.has_class(ElementId::BackButton, ClassName::Visible));
        assert!(page.has_class(ElementId::GameContent, ClassName::Visible));
    }

    #[test]
    fn siblings_slide_by_logical_index() {
        let mut landing = landing_with(&[2, 0, 1]);
        landing.insert_card(CardIndex(1)).unwrap();
        run(&mut landing, 0.6);
        let page = landing.page();
        let x = |i| page.style_value(card(i), Property::TranslateX).unwrap();
        assert!((x(0) + 840.0).abs() < 1e-3);
        assert!((x(2) - 840.0).abs() < 1e-3);
        assert_eq!(page.style_value(card(1), Property::TranslateX), None);
    }

    #[test]
    fn go_back_without_selection_is_silent() {
        let mut landing = landing();
        assert!(!landing.go_back().unwrap());
        assert!(!landing.is_going_back());
        assert!(landing.history().is_empty());

        let mut bare = Landing::new(
            LandingConfig::default(),
            PageState::from_elements([ElementId::Body]),
            Box::new(StaticLayout::new(Viewport::default())),
            FrameBuffer::new(RenderSurface::default()),
        );
        assert!(!bare.handle(&InputEvent::BackClick).unwrap());
    }

    #[test]
    fn go_back_while_returning_is_ignored() {
        let mut landing = landing();
        landing.insert_card(CardIndex(0)).unwrap();
        run(&mut landing, 2.1);
        assert!(landing.go_back().unwrap());
        assert!(landing.is_going_back());
        assert!(!landing.go_back().unwrap());
        assert!(!landing.insert_card(CardIndex(1)).unwrap());
        assert_eq!(count(&landing, "back"), 1);
    }

    #[test]
    fn back_waits_for_insert_to_settle() {
        let mut landing = landing();
        landing.insert_card(CardIndex(1)).unwrap();
        run(&mut landing, 0.5);
        assert!(!landing.go_back().unwrap());
        assert!(!landing.handle(&InputEvent::BackClick).unwrap());
        assert_eq!(count(&landing, "back"), 0);

        run(&mut landing, 3.0);
        let page = landing.page();
        assert!(landing.card_inserted());
        assert!(page.has_class(card(1), ClassName::Selected));
        assert!(page.has_class(ElementId::BackButton, ClassName::Visible));
        assert_eq!(landing.phase().card(), CardPhase::Inserted);

        assert!(landing.go_back().unwrap());
        run(&mut landing, 2.0);
        assert!(!landing.card_inserted());
        assert!(landing.page().get(card(1)).unwrap().style.is_at_rest());
    }

    #[test]
    fn full_return_restores_every_card() {
        let mut landing = landing();
        landing.trigger_enter().unwrap();
        run(&mut landing, 1.5);
        landing.insert_card(CardIndex(1)).unwrap();
        run(&mut landing, 2.1);
        landing.handle(&InputEvent::BackClick).unwrap();

        run(&mut landing, 1.0);
        // Restored at 0.9, siblings still sliding home.
        assert!(!landing.page().has_class(card(1), ClassName::Selected));
        assert!(landing.active_timelines().contains(&"siblings-return"));
        assert!(landing.card_inserted());

        run(&mut landing, 1.0);
        let page = landing.page();
        for i in 0..3 {
            let el = page.get(card(i)).unwrap();
            assert!(el.style.is_at_rest(), "card {} not at rest: {:?}", i, el.style);
            assert!(!el.has_class(ClassName::Selected));
            assert!(!el.has_class(ClassName::Inserting));
        }
        assert!(!page.has_class(ElementId::SpeedLines, ClassName::Active));
        assert!(!page.has_class(ElementId::BackButton, ClassName::Visible));
        assert_eq!(page.style_value(ElementId::BackButton, Property::Opacity), None);
        assert_eq!(page.style_value(ElementId::SlotContainer, Property::Opacity), Some(0.0));
        assert_eq!(page.style_value(ElementId::SlotContainer, Property::Top), None);
        assert!(!landing.card_inserted());
        assert!(!landing.is_going_back());
        assert!(landing.active_timelines().is_empty());

        assert!(landing.insert_card(CardIndex(2)).unwrap());
    }

    #[test]
    fn secondary_ui_hides_before_card_moves() {
        let mut landing = landing();
        landing.insert_card(CardIndex(0)).unwrap();
        run(&mut landing, 2.1);
        landing.go_back().unwrap();
        run(&mut landing, 0.27);
        let page = landing.page();
        assert!(!page.has_class(ElementId::BackButton, ClassName::Visible));
        assert!(!page.has_class(ElementId::GameContent, ClassName::Visible));
        assert_eq!(page.style_value(ElementId::GameContent, Property::Opacity), Some(0.0));
    }

    #[test]
    fn missing_slot_element_leaves_state_untouched() {
        let cards = [CardIndex(0)];
        let page = PageState::from_elements([
            ElementId::Body,
            ElementId::CardsSection,
            ElementId::SlotContainer,
            ElementId::Card(CardIndex(0)),
        ]);
        let mut landing = Landing::new(
            LandingConfig::default(),
            page,
            Box::new(layout_for(&cards)),
            FrameBuffer::new(RenderSurface::default()),
        );
        let err = landing.insert_card(CardIndex(0)).unwrap_err();
        assert!(matches!(err, LandingError::MissingElement(ElementId::SlotVoid)));
        assert!(!landing.card_inserted());
        assert!(!landing.page().has_class(card(0), ClassName::Selected));
    }

    #[test]
    fn unmeasured_slot_is_an_error() {
        let cards = [CardIndex(0)];
        let layout = StaticLayout::new(Viewport::default())
            .with_rect(ElementId::Card(CardIndex(0)), Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut landing = Landing::new(
            LandingConfig::default(),
            PageState::standard(cards),
            Box::new(layout),
            FrameBuffer::new(RenderSurface::default()),
        );
        let err = landing.handle(&InputEvent::card(0)).unwrap_err();
        assert!(matches!(err, LandingError::MissingElement(ElementId::SlotBottom)));
        assert!(!landing.card_inserted());
    }

    #[test]
    fn enter_without_cards_section_fails_fast() {
        let mut landing = Landing::new(
            LandingConfig::default(),
            PageState::from_elements([ElementId::Body]),
            Box::new(StaticLayout::new(Viewport::default())),
            FrameBuffer::new(RenderSurface::default()),
        );
        let err = landing.trigger_enter().unwrap_err();
        assert!(matches!(err, LandingError::MissingElement(ElementId::CardsSection)));
        assert!(!landing.is_animating());
    }

    #[test]
    fn resize_updates_camera_and_surface() {
        let mut landing = landing();
        let viewport = Viewport::new(1000.0, 500.0).with_pixel_ratio(3.0);
        assert!(landing.handle(&InputEvent::Resize { viewport }).unwrap());
        assert_eq!(landing.camera().aspect, 2.0);
        let surface = landing.renderer().surface();
        assert_eq!(surface.width, 1000.0);
        assert_eq!(surface.pixel_ratio, 2.0);
    }

    #[test]
    fn state_json_reports_phase_and_page() {
        let mut landing = landing();
        landing.trigger_enter().unwrap();
        run(&mut landing, 0.55);
        let json = landing.state_json().unwrap();
        assert!(json.contains("\"enter\":\"Transitioned\""));
        assert!(json.contains(".cards-section"));
    }

    #[test]
    fn wall_clock_timing_follows_dt() {
        let config = LandingConfig::from_json(r#"{"idle": {"timing": "wall_clock"}}"#).unwrap();
        let cards = [CardIndex(0)];
        let mut landing = Landing::new(
            config,
            PageState::standard(cards),
            Box::new(layout_for(&cards)),
            FrameBuffer::new(RenderSurface::default()),
        );
        landing.tick(0.1).unwrap();
        landing.tick(0.1).unwrap();
        assert!((landing.idle_elapsed() - 0.2).abs() < 1e-6);
    }
}
