// src/chart/layout.rs
use serde_json::{json, Map, Value};

pub const DARK_TEMPLATE: &str = "plotly_dark";

// Merged layout options: fixed dark-theme defaults overridden by whatever
// the plot spec supplies. The defaults are rebuilt per merge, never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    options: Map<String, Value>,
}

impl Layout {
    pub fn defaults() -> Map<String, Value> {
        let mut options = Map::new();
        options.insert("template".to_string(), json!(DARK_TEMPLATE));
        options.insert(
            "margin".to_string(),
            json!({"l": 40, "r": 40, "t": 60, "b": 40}),
        );
        options.insert("title_x".to_string(), json!(0.5));
        options
    }

    /// Shallow merge: caller-supplied keys win, unspecified keys keep their
    /// default value.
    pub fn merged(overrides: &Map<String, Value>) -> Self {
        let mut options = Self::defaults();
        for (key, value) in overrides {
            options.insert(key.clone(), value.clone());
        }
        Self { options }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Chart title, accepting both `"title": "text"` and
    /// `"title": {"text": "..."}` plotly forms.
    pub fn title(&self) -> Option<&str> {
        match self.options.get("title")? {
            Value::String(text) => Some(text),
            Value::Object(title) => title.get("text").and_then(Value::as_str),
            _ => None,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_no_overrides() {
        let layout = Layout::merged(&Map::new());
        assert_eq!(layout.get("template"), Some(&json!(DARK_TEMPLATE)));
        assert_eq!(layout.get("title_x"), Some(&json!(0.5)));
        assert_eq!(
            layout.get("margin"),
            Some(&json!({"l": 40, "r": 40, "t": 60, "b": 40}))
        );
    }

    #[test]
    fn overrides_win_and_unspecified_keys_survive() {
        let mut overrides = Map::new();
        overrides.insert("template".to_string(), json!("plotly_white"));
        overrides.insert("title".to_string(), json!("Revenue"));

        let layout = Layout::merged(&overrides);
        assert_eq!(layout.get("template"), Some(&json!("plotly_white")));
        assert_eq!(layout.get("title_x"), Some(&json!(0.5)));
        assert_eq!(layout.title(), Some("Revenue"));
    }

    #[test]
    fn title_accepts_object_form() {
        let mut overrides = Map::new();
        overrides.insert("title".to_string(), json!({"text": "Margins"}));
        assert_eq!(Layout::merged(&overrides).title(), Some("Margins"));
    }
}
