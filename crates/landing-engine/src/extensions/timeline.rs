// extensions/timeline.rs
//
// Timeline: an offset-ordered list of tweens and cue calls, advanced by dt.
// Decoupled from the stage: every read/write goes through `TimelineHost`.
//
// Usage:
//   let mut tl = Timeline::new("enter");
//   tl.add(0.0, Tween::new(TweenTarget::Camera, 0.6, Easing::CubicIn).to(Property::PositionZ, 5.0));
//   tl.call(0.5, Cue::RevealCards);
//   while !tl.tick(dt, &mut stage)? {}

use super::tween::{Property, Tween, TweenTarget};

/// The world a timeline animates.
pub trait TimelineHost<C> {
    /// Raised by writes or cues; aborts the current tick.
    type Error;

    /// Current value of a property (captured as the tween's start value).
    fn read(&self, target: TweenTarget, prop: Property) -> f32;

    /// Write an eased value.
    fn write(&mut self, target: TweenTarget, prop: Property, value: f32) -> Result<(), Self::Error>;

    /// A cue was reached (call entry or tween completion).
    fn cue(&mut self, cue: C) -> Result<(), Self::Error>;

    /// A tween with `render_on_update` changed something visible.
    fn request_render(&mut self) {}
}

/// One scheduled step.
#[derive(Debug, Clone)]
pub enum Step<C> {
    Tween(Tween<C>),
    Call(C),
}

#[derive(Debug, Clone)]
enum EntryState {
    Pending,
    /// Start values, one per tween property.
    Running { from: Vec<f32> },
    Done,
}

#[derive(Debug, Clone)]
struct Entry<C> {
    offset: f32,
    step: Step<C>,
    state: EntryState,
}

/// Fire-and-forget sequence of steps at absolute offsets from its own start.
#[derive(Debug, Clone)]
pub struct Timeline<C> {
    label: &'static str,
    /// Sorted by offset; ties keep insertion order.
    entries: Vec<Entry<C>>,
    elapsed: f32,
}

impl<C: Copy> Timeline<C> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: Vec::new(),
            elapsed: 0.0,
        }
    }

    /// Schedule a tween at `offset` seconds.
    pub fn add(&mut self, offset: f32, tween: Tween<C>) -> &mut Self {
        self.insert(offset, Step::Tween(tween));
        self
    }

    /// Schedule a cue at `offset` seconds.
    pub fn call(&mut self, offset: f32, cue: C) -> &mut Self {
        self.insert(offset, Step::Call(cue));
        self
    }

    fn insert(&mut self, offset: f32, step: Step<C>) {
        let offset = offset.max(0.0);
        let idx = self.entries.partition_point(|e| e.offset <= offset);
        self.entries.insert(idx, Entry {
            offset,
            step,
            state: EntryState::Pending,
        });
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Offset at which the last step ends.
    pub fn duration(&self) -> f32 {
        self.entries
            .iter()
            .map(|e| match &e.step {
                Step::Tween(t) => e.offset + t.duration.max(0.0),
                Step::Call(_) => e.offset,
            })
            .fold(0.0, f32::max)
    }

    /// Scheduled steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = (f32, &Step<C>)> {
        self.entries.iter().map(|e| (e.offset, &e.step))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every step has run to completion.
    pub fn is_finished(&self) -> bool {
        self.entries
            .iter()
            .all(|e| matches!(e.state, EntryState::Done))
    }

    /// Advance by `dt` seconds, applying every step whose offset has been reached.
    /// Returns true once the whole timeline has finished.
    pub fn tick<H: TimelineHost<C>>(&mut self, dt: f32, host: &mut H) -> Result<bool, H::Error> {
        self.elapsed += dt.max(0.0);
        let now = self.elapsed;

        for entry in self.entries.iter_mut() {
            if entry.offset > now {
                break;
            }

            if matches!(entry.state, EntryState::Pending) {
                entry.state = match &entry.step {
                    Step::Call(cue) => {
                        host.cue(*cue)?;
                        EntryState::Done
                    }
                    Step::Tween(tween) => EntryState::Running {
                        from: tween
                            .values
                            .iter()
                            .map(|(prop, _)| host.read(tween.target, *prop))
                            .collect(),
                    },
                };
            }

            let finished = match (&entry.state, &entry.step) {
                (EntryState::Running { from }, Step::Tween(tween)) => {
                    let t = tween.progress(now - entry.offset);
                    for (i, (prop, _)) in tween.values.iter().enumerate() {
                        host.write(tween.target, *prop, tween.sample(i, from[i], t))?;
                    }
                    if tween.render_on_update {
                        host.request_render();
                    }
                    if t >= 1.0 {
                        if let Some(cue) = tween.on_complete {
                            host.cue(cue)?;
                        }
                        true
                    } else {
                        false
                    }
                }
                _ => false,
            };

            if finished {
                entry.state = EntryState::Done;
            }
        }

        let done = self.is_finished();
        if done {
            log::trace!("timeline '{}' finished at {:.3}s", self.label, now);
        }
        Ok(done)
    }
}
