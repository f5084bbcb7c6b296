//! Recorded drag scenarios.

use crate::AppError;
use dragbound_core::{InputEvent, SceneNode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// Press on the element with id `target`.
    Press { target: String, event: InputEvent },
    /// Pointer moved.
    Move { event: InputEvent },
    /// Pointer released.
    Release,
}

impl Step {
    /// Action name as written in scenario files.
    pub fn action(&self) -> &'static str {
        match self {
            Step::Press { .. } => "press",
            Step::Move { .. } => "move",
            Step::Release => "release",
        }
    }
}

/// A scene plus the drag setup and the steps to replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub scene: SceneNode,
    /// Element id of the draggable element.
    pub draggable: String,
    /// Element id of the bounding container, if movement is constrained.
    #[serde(default)]
    pub bounding: Option<String>,
    /// Selector for the drag handles inside the draggable element.
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parse a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = r#"{
        "scene": {
            "tag": "div", "id": "container",
            "rect": { "x": 0, "y": 0, "width": 400, "height": 300 },
            "children": [
                { "tag": "div", "id": "dialog",
                  "rect": { "x": 100, "y": 100, "width": 200, "height": 100 } }
            ]
        },
        "draggable": "dialog",
        "bounding": "container",
        "steps": [
            { "action": "press", "target": "dialog",
              "event": { "kind": "pointer", "position": { "x": 150, "y": 120 } } },
            { "action": "move",
              "event": { "kind": "touch", "touches": [{ "x": 160, "y": 130 }] } },
            { "action": "release" }
        ]
    }"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();
        assert_eq!(scenario.draggable, "dialog");
        assert_eq!(scenario.bounding.as_deref(), Some("container"));
        assert_eq!(scenario.handle, None);
        assert_eq!(scenario.steps.len(), 3);
        assert_eq!(scenario.steps[0].action(), "press");
        assert!(matches!(&scenario.steps[1], Step::Move { event } if event.is_touch()));
        assert_eq!(scenario.steps[2], Step::Release);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SCENARIO.as_bytes()).unwrap();

        let scenario = Scenario::load(file.path()).unwrap();
        assert_eq!(scenario.scene.children.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Scenario::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_invalid_step() {
        let result = Scenario::from_json(
            r#"{ "scene": { "tag": "div", "rect": { "x": 0, "y": 0 } },
                 "draggable": "a", "steps": [{ "action": "hover" }] }"#,
        );
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
