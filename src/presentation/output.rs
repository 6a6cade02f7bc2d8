//! JSON output shapes for `--json`
//!
//! One JSON object per line, so CI can stream results.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{ComponentDescriptor, ConfigDocument};

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OutputEvent<'a> {
    Generated {
        component: &'a str,
        file: &'a str,
        bytes: usize,
        hash: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    Failed {
        component: &'a str,
        error: String,
    },
    Component {
        name: &'a str,
        file: &'a str,
        comment_prefix: &'a str,
    },
}

impl<'a> OutputEvent<'a> {
    pub fn generated(document: &'a ConfigDocument, path: Option<&Path>) -> Self {
        OutputEvent::Generated {
            component: document.component(),
            file: document.file_name(),
            bytes: document.len(),
            hash: document.hash(),
            path: path.map(|p| p.display().to_string()),
        }
    }

    pub fn failed(component: &'a str, error: &dyn std::error::Error) -> Self {
        OutputEvent::Failed {
            component,
            error: error.to_string(),
        }
    }

    pub fn component(component: &'a ComponentDescriptor) -> Self {
        OutputEvent::Component {
            name: component.name(),
            file: component.config_file_name(),
            comment_prefix: component.comment_prefix(),
        }
    }

    /// Serialize as a single JSON line
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_event_shape() {
        let document = ConfigDocument::new("echo", "echo.yml", "a: 1\n");
        let line = OutputEvent::generated(&document, None).to_json_line();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["event"], "generated");
        assert_eq!(value["component"], "echo");
        assert_eq!(value["file"], "echo.yml");
        assert_eq!(value["bytes"], 5);
        assert!(value.get("path").is_none());
    }

    #[test]
    fn component_event_shape() {
        let deck = ComponentDescriptor::new("deck", "settings.js", "// ");
        let line = OutputEvent::component(&deck).to_json_line();
        assert_eq!(
            line,
            r#"{"event":"component","name":"deck","file":"settings.js","comment_prefix":"// "}"#
        );
    }
}
