//! Controls Panel Widget
//!
//! Property grid for editing a demo's inputs. Each control is a typed
//! (label, value) pair; the demo preview reads current values back through
//! the typed getters and re-renders on every change.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────┐
//! │ label          [text input]    │
//! │ size           [sm][md][lg]    │
//! │ outlined       [toggler]       │
//! │ corner radius  ─────○────  4   │
//! └────────────────────────────────┘
//! ```

mod message;
mod view;

pub use message::ControlsMessage;
pub use view::controls_view;

/// A single control's value, constrained to its declared domain
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    /// On/off switch
    Bool(bool),
    /// One option out of a fixed list (`selected` indexes `options`)
    Select {
        options: Vec<String>,
        selected: usize,
    },
    /// Bounded number, stepped slider in the UI
    Number {
        value: f32,
        min: f32,
        max: f32,
        step: f32,
    },
    /// Free text
    Text(String),
}

/// A labeled control in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    /// Row label, also the lookup key for the typed getters
    pub label: String,
    /// Current value and its domain
    pub value: ControlValue,
}

/// State for a demo's controls panel
#[derive(Debug, Clone, Default)]
pub struct ControlsState {
    /// Controls in declaration order
    controls: Vec<ControlSpec>,
}

impl ControlsState {
    /// Create an empty controls panel (demo without controls)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the demo declared any controls
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// All controls in declaration order
    pub fn controls(&self) -> &[ControlSpec] {
        &self.controls
    }

    /// Declare an on/off control
    pub fn with_bool(mut self, label: &str, default: bool) -> Self {
        self.controls.push(ControlSpec {
            label: label.to_string(),
            value: ControlValue::Bool(default),
        });
        self
    }

    /// Declare a select control; `selected` is clamped into the option list
    pub fn with_select(mut self, label: &str, options: &[&str], selected: usize) -> Self {
        let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let selected = selected.min(options.len().saturating_sub(1));
        self.controls.push(ControlSpec {
            label: label.to_string(),
            value: ControlValue::Select { options, selected },
        });
        self
    }

    /// Declare a bounded numeric control
    pub fn with_number(mut self, label: &str, value: f32, min: f32, max: f32, step: f32) -> Self {
        self.controls.push(ControlSpec {
            label: label.to_string(),
            value: ControlValue::Number {
                value: value.clamp(min, max),
                min,
                max,
                step,
            },
        });
        self
    }

    /// Declare a free-text control
    pub fn with_text(mut self, label: &str, default: &str) -> Self {
        self.controls.push(ControlSpec {
            label: label.to_string(),
            value: ControlValue::Text(default.to_string()),
        });
        self
    }

    /// Get a boolean control's value by label (false if absent)
    pub fn bool_value(&self, label: &str) -> bool {
        match self.find(label) {
            Some(ControlValue::Bool(v)) => *v,
            _ => false,
        }
    }

    /// Get a select control's chosen option by label
    pub fn selected_option(&self, label: &str) -> Option<&str> {
        match self.find(label) {
            Some(ControlValue::Select { options, selected }) => {
                options.get(*selected).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Get a numeric control's value by label (0.0 if absent)
    pub fn number_value(&self, label: &str) -> f32 {
        match self.find(label) {
            Some(ControlValue::Number { value, .. }) => *value,
            _ => 0.0,
        }
    }

    /// Get a text control's value by label ("" if absent)
    pub fn text_value(&self, label: &str) -> &str {
        match self.find(label) {
            Some(ControlValue::Text(v)) => v,
            _ => "",
        }
    }

    fn find(&self, label: &str) -> Option<&ControlValue> {
        self.controls
            .iter()
            .find(|spec| spec.label == label)
            .map(|spec| &spec.value)
    }

    /// Set a boolean control by index, returning whether the value changed
    pub fn set_bool(&mut self, index: usize, value: bool) -> bool {
        match self.controls.get_mut(index) {
            Some(ControlSpec {
                value: ControlValue::Bool(v),
                ..
            }) if *v != value => {
                *v = value;
                true
            }
            _ => false,
        }
    }

    /// Pick a select control's option by index; out-of-range picks are ignored
    pub fn set_select(&mut self, index: usize, option: usize) -> bool {
        match self.controls.get_mut(index) {
            Some(ControlSpec {
                value: ControlValue::Select { options, selected },
                ..
            }) if option < options.len() && *selected != option => {
                *selected = option;
                true
            }
            _ => false,
        }
    }

    /// Set a numeric control by index, clamping to the control's range
    pub fn set_number(&mut self, index: usize, value: f32) -> bool {
        match self.controls.get_mut(index) {
            Some(ControlSpec {
                value:
                    ControlValue::Number {
                        value: v, min, max, ..
                    },
                ..
            }) => {
                let clamped = value.clamp(*min, *max);
                if *v != clamped {
                    *v = clamped;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Set a text control by index
    pub fn set_text(&mut self, index: usize, value: String) -> bool {
        match self.controls.get_mut(index) {
            Some(ControlSpec {
                value: ControlValue::Text(v),
                ..
            }) if *v != value => {
                *v = value;
                true
            }
            _ => false,
        }
    }

    /// Handle a message and update state
    ///
    /// Returns true if a value actually changed (the demo preview and the
    /// state visualizer re-render from the new values).
    pub fn handle_message(&mut self, message: ControlsMessage) -> bool {
        match message {
            ControlsMessage::SetBool { index, value } => self.set_bool(index, value),
            ControlsMessage::SetSelect { index, option } => self.set_select(index, option),
            ControlsMessage::SetNumber { index, value } => self.set_number(index, value),
            ControlsMessage::SetText { index, value } => self.set_text(index, value),
        }
    }

    /// Snapshot of the current values, keyed by label, in declaration order
    ///
    /// Select controls snapshot as their chosen option string.
    pub fn snapshot(&self) -> serde_yaml::Mapping {
        let mut map = serde_yaml::Mapping::new();
        for spec in &self.controls {
            let value = match &spec.value {
                ControlValue::Bool(v) => serde_yaml::Value::Bool(*v),
                ControlValue::Select { options, selected } => serde_yaml::Value::String(
                    options.get(*selected).cloned().unwrap_or_default(),
                ),
                ControlValue::Number { value, .. } => {
                    serde_yaml::Value::Number((*value as f64).into())
                }
                ControlValue::Text(v) => serde_yaml::Value::String(v.clone()),
            };
            map.insert(serde_yaml::Value::String(spec.label.clone()), value);
        }
        map
    }

    /// Snapshot rendered as YAML text for the state visualizer
    pub fn snapshot_yaml(&self) -> String {
        match serde_yaml::to_string(&self.snapshot()) {
            Ok(yaml) => yaml,
            Err(e) => {
                log::warn!("controls: failed to render state snapshot: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_state() -> ControlsState {
        ControlsState::new()
            .with_text("label", "beta")
            .with_select("size", &["sm", "md", "lg"], 1)
            .with_bool("outlined", false)
            .with_number("corner radius", 4.0, 0.0, 12.0, 1.0)
    }

    #[test]
    fn test_typed_getters_return_defaults() {
        let state = demo_state();
        assert_eq!(state.text_value("label"), "beta");
        assert_eq!(state.selected_option("size"), Some("md"));
        assert!(!state.bool_value("outlined"));
        assert_eq!(state.number_value("corner radius"), 4.0);
        // Absent labels fall back to neutral values
        assert_eq!(state.text_value("missing"), "");
        assert_eq!(state.selected_option("missing"), None);
    }

    #[test]
    fn test_number_clamps_to_declared_range() {
        let mut state = demo_state();
        assert!(state.set_number(3, 99.0));
        assert_eq!(state.number_value("corner radius"), 12.0);
        assert!(state.set_number(3, -5.0));
        assert_eq!(state.number_value("corner radius"), 0.0);
        // Clamped to the same value: no change reported
        assert!(!state.set_number(3, -1.0));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut state = demo_state();
        assert!(!state.set_select(1, 7));
        assert_eq!(state.selected_option("size"), Some("md"));
        assert!(state.set_select(1, 2));
        assert_eq!(state.selected_option("size"), Some("lg"));
    }

    #[test]
    fn test_handle_message_reports_change() {
        let mut state = demo_state();
        assert!(state.handle_message(ControlsMessage::SetBool {
            index: 2,
            value: true,
        }));
        // Same value again: no change
        assert!(!state.handle_message(ControlsMessage::SetBool {
            index: 2,
            value: true,
        }));
        // Wrong index: ignored
        assert!(!state.handle_message(ControlsMessage::SetBool {
            index: 9,
            value: false,
        }));
    }

    #[test]
    fn test_snapshot_keeps_declaration_order() {
        let state = demo_state();
        let keys: Vec<String> = state
            .snapshot()
            .keys()
            .filter_map(|k| k.as_str().map(String::from))
            .collect();
        assert_eq!(keys, ["label", "size", "outlined", "corner radius"]);

        let yaml = state.snapshot_yaml();
        assert!(yaml.contains("size: md"));
        assert!(yaml.contains("outlined: false"));
    }
}
