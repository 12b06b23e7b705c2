//! Declarative form definitions.
//!
//! A form is a static list of [`FieldDef`]s. Binding request parameters and
//! validating them is done by the owning domain with plain structs and
//! `validator`; this module only turns the definition, the submitted values
//! and the field errors into a [`FormView`] for the `form` partial.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use validator::ValidationErrors;

/// HTML widget used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Search,
    Color,
    /// Single choice rendered as a `<select>`
    Choice,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Search => "search",
            FieldKind::Color => "color",
            FieldKind::Choice => "select",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Request parameter name
    pub name: &'static str,
    pub kind: FieldKind,
    /// `None` renders no `<label>`
    pub label: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub max_length: Option<u64>,
    pub choices: Vec<Choice>,
}

impl FieldDef {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            label: None,
            placeholder: None,
            required: false,
            max_length: None,
            choices: Vec::new(),
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn choices(mut self, choices: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        self.choices = choices
            .into_iter()
            .map(|(label, value)| Choice { label, value })
            .collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDefinition {
    pub name: &'static str,
    pub method: &'static str,
    pub action: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldDef>,
}

impl FormDefinition {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Bind submitted values and errors for rendering.
    pub fn view(&self, values: &HashMap<String, String>, errors: &FormErrors) -> FormView {
        let fields = self
            .fields
            .iter()
            .map(|field| {
                let value = values.get(field.name).cloned().unwrap_or_default();
                let choices = field
                    .choices
                    .iter()
                    .map(|choice| ChoiceView {
                        label: choice.label,
                        value: choice.value,
                        selected: choice.value == value,
                    })
                    .collect();

                FieldView {
                    id: format!("{}_{}", self.name, field.name),
                    name: field.name,
                    kind: field.kind,
                    input_type: field.kind.input_type(),
                    label: field.label,
                    placeholder: field.placeholder,
                    required: field.required,
                    max_length: field.max_length,
                    choices,
                    value,
                    errors: errors.get(field.name).to_vec(),
                }
            })
            .collect();

        FormView {
            name: self.name,
            method: self.method,
            action: self.action,
            submit_label: self.submit_label,
            fields,
            valid: errors.is_empty(),
        }
    }

    /// View with no submitted values and no errors.
    pub fn empty_view(&self) -> FormView {
        self.view(&HashMap::new(), &FormErrors::default())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceView {
    pub label: &'static str,
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub id: String,
    pub name: &'static str,
    pub kind: FieldKind,
    pub input_type: &'static str,
    pub label: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub max_length: Option<u64>,
    pub choices: Vec<ChoiceView>,
    pub value: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub name: &'static str,
    pub method: &'static str,
    pub action: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
    pub valid: bool,
}

impl FormView {
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Error messages per request parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collect `validator` errors, keyed by the camelCase parameter name.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut form_errors = Self::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&error.code).to_string());
                form_errors.add(to_camel_case(&field), message);
            }
        }
        form_errors
    }
}

fn default_message(code: &str) -> &'static str {
    match code {
        "length" => "Cette valeur n'a pas la bonne longueur.",
        "required" => "Cette valeur ne doit pas être vide.",
        "range" => "Cette valeur est hors limites.",
        "regex" => "Cette valeur n'est pas valide.",
        _ => "Cette valeur n'est pas valide.",
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
