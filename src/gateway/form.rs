// ABOUTME: Serializable description of a gateway configuration form and its submitted values
// ABOUTME: The host renders the elements; submitted values come back as a flat key/value map

use serde::Serialize;
use serde_json::{Map, Value};

/// Values submitted from a configuration form, keyed by element key
pub type FormValues = Map<String, Value>;

/// One element of a configuration form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormElement {
    /// Collapsible group of elements
    Details {
        key: String,
        title: String,
        open: bool,
        children: Vec<FormElement>,
    },
    /// Single line text input
    Textfield {
        key: String,
        title: String,
        default_value: String,
    },
    /// Boolean checkbox
    Checkbox {
        key: String,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        default_value: bool,
    },
}

impl FormElement {
    pub fn key(&self) -> &str {
        match self {
            FormElement::Details { key, .. }
            | FormElement::Textfield { key, .. }
            | FormElement::Checkbox { key, .. } => key,
        }
    }

    /// Depth-first search for an element by key
    pub fn find(&self, key: &str) -> Option<&FormElement> {
        if self.key() == key {
            return Some(self);
        }
        match self {
            FormElement::Details { children, .. } => children.iter().find_map(|c| c.find(key)),
            _ => None,
        }
    }
}

/// A configuration form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigForm {
    pub elements: Vec<FormElement>,
}

impl ConfigForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: FormElement) {
        self.elements.push(element);
    }

    /// Find an element anywhere in the form
    pub fn find(&self, key: &str) -> Option<&FormElement> {
        self.elements.iter().find_map(|e| e.find(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigForm {
        let mut form = ConfigForm::new();
        form.push(FormElement::Details {
            key: "group".into(),
            title: "Group".into(),
            open: true,
            children: vec![FormElement::Checkbox {
                key: "flag".into(),
                title: "Flag".into(),
                description: None,
                default_value: true,
            }],
        });
        form
    }

    #[test]
    fn test_find_nested() {
        let form = sample();
        assert!(matches!(
            form.find("flag"),
            Some(FormElement::Checkbox { default_value: true, .. })
        ));
        assert!(form.find("missing").is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "elements": [{
                    "type": "details",
                    "key": "group",
                    "title": "Group",
                    "open": true,
                    "children": [{
                        "type": "checkbox",
                        "key": "flag",
                        "title": "Flag",
                        "default_value": true
                    }]
                }]
            })
        );
    }
}
