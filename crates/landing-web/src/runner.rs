use landing_engine::{
    ElementId, ElementState, FrameBuffer, InputEvent, InputQueue, Landing, LandingConfig,
    LayoutMeasure, PageState, RenderSurface, Result, FRAME_FLOATS,
};

/// Wires the landing engine into a host frame loop.
///
/// The host pushes input as it arrives and calls `tick` once per display
/// refresh. Queued input is handled at the start of the tick, then timelines
/// advance and the frame buffer is refreshed. DOM-free, so the browser glue
/// lives in `lib.rs` and `dom.rs`.
pub struct LandingRunner {
    landing: Landing<FrameBuffer>,
    input: InputQueue,
}

impl LandingRunner {
    pub fn new(config: LandingConfig, page: PageState, layout: Box<dyn LayoutMeasure>) -> Self {
        let surface = RenderSurface::fit(layout.viewport(), config.scene.max_pixel_ratio);
        Self {
            landing: Landing::new(config, page, layout, FrameBuffer::new(surface)),
            input: InputQueue::new(),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Handle queued input, then advance one frame.
    ///
    /// Every queued event is handled even if an earlier one fails; the first
    /// error is returned after the frame has advanced.
    pub fn tick(&mut self, dt: f32) -> Result<()> {
        let mut first_err = None;
        for event in self.input.drain() {
            if let Err(err) = self.landing.handle(&event) {
                log::error!("{:?} failed: {}", event, err);
                first_err.get_or_insert(err);
            }
        }

        let ticked = self.landing.tick(dt);
        match first_err {
            Some(err) => Err(err),
            None => ticked,
        }
    }

    /// Elements changed since the last call, with their current state.
    pub fn take_dirty(&mut self) -> Vec<(ElementId, ElementState)> {
        let page = self.landing.page_mut();
        page.drain_dirty()
            .into_iter()
            .filter_map(|id| page.get(id).map(|el| (id, el.clone())))
            .collect()
    }

    pub fn landing(&self) -> &Landing<FrameBuffer> {
        &self.landing
    }

    // ---- Pointer accessors for the host renderer ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.landing.renderer().as_ptr()
    }

    pub fn frame_floats(&self) -> u32 {
        FRAME_FLOATS as u32
    }

    pub fn label_text(&self) -> String {
        self.landing.scene().label.text.clone()
    }

    pub fn label_font(&self) -> String {
        self.landing.scene().label.font.clone()
    }

    pub fn state_json(&self) -> Result<String> {
        self.landing.state_json()
    }
}
