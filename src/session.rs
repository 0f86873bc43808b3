//! The exportable session record.
//!
//! A [`Session`] is plain data: it is what gets handed to transport and
//! storage, and it round-trips through JSON without loss.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SessionResult;
use crate::normalize::CanvasSize;
use crate::stroke::Stroke;

/// Record format stamped into every exported session
pub const FORMAT_VERSION: &str = "1.0.0";

/// What the user wants done with the drawing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentAction {
    AddTextAnimation,
    Highlight,
    Animate,
    Mask,
    #[default]
    None,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub action: IntentAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Intent {
    pub fn new(action: IntentAction) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// One capture lifetime, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub canvas_size: CanvasSize,
    pub strokes: Vec<Stroke>,
    pub intent: Intent,
    pub start_time: f64,
    #[serde(rename = "version")]
    pub format_version: String,
}

impl Session {
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SessionResult<Self> {
        let session: Self = serde_json::from_str(json)?;
        if session.format_version != FORMAT_VERSION {
            // Older or newer records are still readable, so only warn
            log::warn!(
                "Session {} has format version {}, expected {}",
                session.session_id,
                session.format_version,
                FORMAT_VERSION
            );
        }
        Ok(session)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> SessionResult<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn load_from(path: impl AsRef<Path>) -> SessionResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}
