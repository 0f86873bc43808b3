use egui::{Context, Pos2, Rect};

use super::{InputEvent, InputSample};
use crate::config::DEFAULT_PRESSURE;
use crate::normalize::CanvasSize;
use crate::util::time;

/// The pointer facts we need from one egui frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFrame {
    /// Latest pointer position in screen coordinates, `None` once it left the window
    pub pos: Option<Pos2>,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
    /// Touch force, when the device reports one
    pub force: Option<f32>,
    /// Capture time in milliseconds
    pub time_ms: f64,
}

/// Handles converting raw egui input into capture-level [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    pointer_down: bool,
    last_pos: Option<Pos2>,
    default_pressure: f64,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pointer_down: false,
            last_pos: None,
            default_pressure: DEFAULT_PRESSURE,
        }
    }

    /// Pressure reported for mice and other devices without force sensing
    pub fn with_default_pressure(mut self, pressure: f64) -> Self {
        self.default_pressure = pressure;
        self
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// The current surface extent in device pixels
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(
            f64::from(self.canvas_rect.width()),
            f64::from(self.canvas_rect.height()),
        )
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Read this frame's pointer state from egui and translate it
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let frame = ctx.input(|input| {
            let force = input.raw.events.iter().rev().find_map(|event| match event {
                egui::Event::Touch { force, .. } => *force,
                _ => None,
            });
            PointerFrame {
                pos: input.pointer.latest_pos(),
                pressed: input.pointer.primary_pressed(),
                released: input.pointer.primary_released(),
                force,
                time_ms: time::now_millis(),
            }
        });
        self.translate(frame)
    }

    /// Turn one frame of pointer state into capture events.
    ///
    /// A press only counts inside the canvas. Once pressed, moves outside
    /// the canvas are still reported (they get clamped on normalization),
    /// and the stroke ends on release or when the pointer leaves the window.
    pub fn translate(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if frame.pressed && !self.pointer_down {
            if let Some(pos) = frame.pos.filter(|pos| self.canvas_rect.contains(*pos)) {
                events.push(InputEvent::PointerDown(self.sample(pos, &frame)));
                self.pointer_down = true;
                self.last_pos = Some(pos);
            }
        } else if self.pointer_down {
            match frame.pos {
                Some(pos) if Some(pos) != self.last_pos => {
                    events.push(InputEvent::PointerMove(self.sample(pos, &frame)));
                    self.last_pos = Some(pos);
                }
                Some(_) => {}
                None => {
                    log::debug!("Pointer left the window mid-stroke, ending stroke");
                    self.finish(&mut events);
                    return events;
                }
            }
        }

        if frame.released && self.pointer_down {
            self.finish(&mut events);
        }

        events
    }

    fn finish(&mut self, events: &mut Vec<InputEvent>) {
        events.push(InputEvent::PointerUp);
        self.pointer_down = false;
        self.last_pos = None;
    }

    fn sample(&self, pos: Pos2, frame: &PointerFrame) -> InputSample {
        let local = pos - self.canvas_rect.min;
        let pressure = frame
            .force
            .map(f64::from)
            .unwrap_or(self.default_pressure);
        InputSample {
            x: f64::from(local.x),
            y: f64::from(local.y),
            t: frame.time_ms,
            pressure: Some(pressure),
        }
    }
}
