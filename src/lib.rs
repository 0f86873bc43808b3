#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod normalize;
pub mod panels;
pub mod processing;
pub mod renderer;
pub mod session;
pub mod state;
pub mod stroke;
pub mod util;

pub use app::SketchApp;
pub use command::StrokeHistory;
pub use config::{CaptureConfig, ProcessingConfig};
pub use error::{ConfigError, SessionError};
pub use input::{InputEvent, InputHandler, InputSample};
pub use normalize::{CanvasSize, denormalize, normalize};
pub use processing::{StrokeProcessor, filter_noise, simplify, smooth};
pub use renderer::Renderer;
pub use session::{FORMAT_VERSION, Intent, IntentAction, Session};
pub use state::{CaptureContext, CaptureState};
pub use stroke::{Point, Stroke, StrokeRef, StrokeStyle, StylePatch, Tool};
