use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

/// Field names in the order the contact form lays its controls out.
pub const CANONICAL_NAMES: [&str; 5] = ["name", "email", "phone", "instagram", "message"];

/// Name for a control at `index` that has none of its own.
pub fn canonical_name(index: usize) -> String {
    CANONICAL_NAMES
        .get(index)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("field_{}", index))
}

/// Fills in missing names by position. Controls that already carry a
/// non-empty name keep it, so running this twice changes nothing.
pub fn normalize_names(names: &[Option<String>]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| match name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => canonical_name(index),
        })
        .collect()
}

/// The contact form's values, trimmed, lifted out of the DOM once.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub instagram: String,
    pub message: String,
}

impl ContactFields {
    /// Builds the struct from `(name, value)` pairs. Unknown names are ignored
    /// and a later duplicate overwrites an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut fields = ContactFields::default();
        for (name, value) in pairs {
            let value = value.as_ref().trim().to_string();
            match name.as_ref() {
                "name" => fields.name = value,
                "email" => fields.email = value,
                "phone" => fields.phone = value,
                "instagram" => fields.instagram = value,
                "message" => fields.message = value,
                _ => {}
            }
        }
        fields
    }
}

enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn name(&self) -> String {
        match self {
            Control::Input(input) => input.name(),
            Control::TextArea(area) => area.name(),
        }
    }

    fn set_name(&self, name: &str) {
        match self {
            Control::Input(input) => input.set_name(name),
            Control::TextArea(area) => area.set_name(name),
        }
    }

    fn value(&self) -> String {
        match self {
            Control::Input(input) => input.value(),
            Control::TextArea(area) => area.value(),
        }
    }
}

fn controls(form: &HtmlFormElement) -> Vec<Control> {
    let Ok(nodes) = form.query_selector_all("input, textarea") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| match node.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Control::Input(input)),
            Err(node) => node.dyn_into::<HtmlTextAreaElement>().ok().map(Control::TextArea),
        })
        .collect()
}

/// Names every unnamed control in `form` by position and returns the
/// resulting `(name, value)` pairs in document order.
pub fn normalize_form(form: &HtmlFormElement) -> Vec<(String, String)> {
    let controls = controls(form);
    let existing: Vec<Option<String>> = controls
        .iter()
        .map(|control| Some(control.name()))
        .collect();
    let names = normalize_names(&existing);

    controls
        .iter()
        .zip(names)
        .map(|(control, name)| {
            if control.name() != name {
                control.set_name(&name);
            }
            (name, control.value())
        })
        .collect()
}

pub fn read_form(form: &HtmlFormElement) -> ContactFields {
    ContactFields::from_pairs(normalize_form(form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unnamed_controls_get_canonical_names_by_position() {
        let names = normalize_names(&[None, None, None, None, None]);
        assert_eq!(names, vec!["name", "email", "phone", "instagram", "message"]);
    }

    #[test]
    fn existing_names_are_kept() {
        let names = normalize_names(&[
            Some("full_name".to_string()),
            None,
            Some(String::new()),
        ]);
        assert_eq!(names, vec!["full_name", "email", "phone"]);
    }

    #[test]
    fn extra_controls_get_placeholder_names() {
        let names = normalize_names(&vec![None; 7]);
        assert_eq!(names[5], "field_5");
        assert_eq!(names[6], "field_6");
    }

    #[test]
    fn pairs_are_trimmed_and_unknown_names_dropped() {
        let fields = ContactFields::from_pairs([
            ("name", "  Ana "),
            ("email", "ana@mail.com\n"),
            ("field_5", "ignored"),
            ("message", " Hello there, course team "),
        ]);
        assert_eq!(fields.name, "Ana");
        assert_eq!(fields.email, "ana@mail.com");
        assert_eq!(fields.phone, "");
        assert_eq!(fields.message, "Hello there, course team");
    }

    proptest! {
        #[test]
        fn normalizing_twice_matches_normalizing_once(
            names in proptest::collection::vec(proptest::option::of("[a-z_]{0,8}"), 0..10)
        ) {
            let once = normalize_names(&names);
            let again: Vec<Option<String>> = once.iter().cloned().map(Some).collect();
            prop_assert_eq!(normalize_names(&again), once);
        }
    }
}
