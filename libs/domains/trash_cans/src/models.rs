use core_views::{FieldDef, FieldKind, FormDefinition};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// `#rrggbb`, as submitted by an HTML color input
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Custom validator for trash can colors
fn validate_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        let mut error = ValidationError::new("color");
        error.message = Some("Cette valeur n'est pas une couleur valide.".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrashCan {
    pub id: i32,
    pub name: String,
    /// Lower-case `#rrggbb`
    pub color: String,
}

/// Validated input for a new trash can
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrashCan {
    pub name: String,
    pub color: String,
}

/// Raw `application/x-www-form-urlencoded` submission
///
/// Missing fields bind as empty strings so they fail validation instead of
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct TrashCanForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Le nom doit contenir entre 1 et 255 caractères."))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_color"))]
    #[schema(example = "#2e7d32")]
    pub color: String,
}

impl TrashCanForm {
    /// Field definitions of the trash can form
    pub fn definition() -> FormDefinition {
        FormDefinition {
            name: "trash_can",
            method: "post",
            action: "/trash-cans",
            submit_label: "Enregistrer",
            fields: vec![
                FieldDef::new("name", FieldKind::Text)
                    .label("Nom")
                    .required()
                    .max_length(255),
                FieldDef::new("color", FieldKind::Color)
                    .label("Couleur")
                    .required(),
            ],
        }
    }

    /// Submitted values keyed by parameter name, for re-rendering
    pub fn values(&self) -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), self.name.clone()),
            ("color".to_string(), self.color.clone()),
        ])
    }

    /// Trim, validate and normalize the color to lower case.
    pub fn bind(&self) -> Result<NewTrashCan, ValidationErrors> {
        let trimmed = Self {
            name: self.name.trim().to_string(),
            color: self.color.trim().to_string(),
        };
        trimmed.validate()?;

        Ok(NewTrashCan {
            name: trimmed.name,
            color: trimmed.color.to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_views::FormErrors;

    fn form(name: &str, color: &str) -> TrashCanForm {
        TrashCanForm {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_bind_normalizes() {
        let new = form("  Verre ", "#2E7D32").bind().unwrap();
        assert_eq!(
            new,
            NewTrashCan {
                name: "Verre".to_string(),
                color: "#2e7d32".to_string()
            }
        );
    }

    #[test]
    fn test_color_must_be_six_hex_digits() {
        for color in ["", "2e7d32", "#2e7d3", "#2e7d322", "#zzzzzz", "red"] {
            let errors = form("Verre", color).bind().unwrap_err();
            let form_errors = FormErrors::from_validation(&errors);
            assert_eq!(
                form_errors.get("color"),
                ["Cette valeur n'est pas une couleur valide.".to_string()],
                "{:?}",
                color
            );
        }
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(form("   ", "#000000").bind().is_err());
        assert!(form(&"a".repeat(256), "#000000").bind().is_err());
        assert!(form(&"a".repeat(255), "#000000").bind().is_ok());
    }

    #[test]
    fn test_definition_fields() {
        let definition = TrashCanForm::definition();
        assert_eq!(definition.field("name").unwrap().max_length, Some(255));
        assert_eq!(definition.field("color").unwrap().kind.input_type(), "color");
        assert!(definition.fields.iter().all(|f| f.required));
    }
}
