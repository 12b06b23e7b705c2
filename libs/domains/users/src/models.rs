use chrono::{DateTime, Utc};
use core_views::{FieldDef, FieldKind, FormDefinition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

/// Registered user, read-only for this application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Given name
    pub name: String,
    pub family_name: String,
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// `dd/mm/yyyy`
    pub fn registered_on(&self) -> String {
        self.registered_at.format("%d/%m/%Y").to_string()
    }
}

/// Sort order of the user directory, submitted as `trie=0..3`
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
    EnumIter,
    ToSchema,
)]
pub enum SortOrder {
    /// Username A to Z
    #[default]
    #[strum(serialize = "A à Z")]
    Alphabetical,
    /// Username Z to A
    #[strum(serialize = "Z à A")]
    ReverseAlphabetical,
    /// Most recently registered first
    #[strum(serialize = "plus récent")]
    MostRecent,
    /// Least recently registered first
    #[strum(serialize = "moins récent")]
    LeastRecent,
}

impl SortOrder {
    /// `(label, value)` pairs in form order
    pub fn choices() -> Vec<(&'static str, &'static str)> {
        Self::iter()
            .map(|order| (<&'static str>::from(order), order.value_str()))
            .collect()
    }

    fn value_str(self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "0",
            SortOrder::ReverseAlphabetical => "1",
            SortOrder::MostRecent => "2",
            SortOrder::LeastRecent => "3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a sort order")]
pub struct InvalidSortOrder(String);

/// Only the exact submitted values `"0"` to `"3"` are accepted.
impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|order| order.value_str() == s)
            .ok_or_else(|| InvalidSortOrder(s.to_string()))
    }
}

/// Bound and validated directory search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    pub username: Option<String>,
    pub name: Option<String>,
    pub family_name: Option<String>,
    pub trie: SortOrder,
}

impl UserSearch {
    /// Case-insensitive substring match on every non-empty filter
    pub fn matches(&self, user: &User) -> bool {
        fn contains(haystack: &str, needle: &Option<String>) -> bool {
            needle
                .as_ref()
                .is_none_or(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
        }

        contains(&user.username, &self.username)
            && contains(&user.name, &self.name)
            && contains(&user.family_name, &self.family_name)
    }
}

fn default_trie() -> String {
    SortOrder::default().value_str().to_string()
}

fn validate_sort_order(value: &str) -> Result<(), ValidationError> {
    value.parse::<SortOrder>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("choice");
        error.message = Some("Le choix sélectionné est invalide.".into());
        error
    })
}

/// Raw `GET /users` query string
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserSearchForm {
    /// Username filter
    #[serde(default)]
    #[validate(length(max = 180))]
    pub username: Option<String>,

    /// Given name filter
    #[serde(default)]
    #[validate(length(max = 180))]
    pub name: Option<String>,

    /// Family name filter
    #[serde(default, rename = "familyName")]
    #[validate(length(max = 180))]
    pub family_name: Option<String>,

    /// Sort order: 0 = A à Z, 1 = Z à A, 2 = plus récent, 3 = moins récent
    #[serde(default = "default_trie")]
    #[validate(custom(function = "validate_sort_order"))]
    pub trie: String,
}

impl Default for UserSearchForm {
    fn default() -> Self {
        Self {
            username: None,
            name: None,
            family_name: None,
            trie: default_trie(),
        }
    }
}

impl UserSearchForm {
    /// Field definitions of the search form
    pub fn definition() -> FormDefinition {
        FormDefinition {
            name: "user_search",
            method: "get",
            action: "/users",
            submit_label: "Rechercher",
            fields: vec![
                FieldDef::new("username", FieldKind::Search).placeholder("Nom d'utilisateur"),
                FieldDef::new("name", FieldKind::Search).placeholder("Prénom"),
                FieldDef::new("familyName", FieldKind::Search).placeholder("Nom de famille"),
                FieldDef::new("trie", FieldKind::Choice)
                    .required()
                    .choices(SortOrder::choices()),
            ],
        }
    }

    /// Submitted values keyed by parameter name, for re-rendering
    pub fn values(&self) -> HashMap<String, String> {
        [
            ("username", self.username.clone()),
            ("name", self.name.clone()),
            ("familyName", self.family_name.clone()),
            ("trie", Some(self.trie.clone())),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
    }

    /// Validate and convert into a search. Blank text filters are dropped.
    pub fn bind(&self) -> Result<UserSearch, ValidationErrors> {
        self.validate()?;

        let trie = self.trie.parse::<SortOrder>().map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add("trie", ValidationError::new("choice"));
            errors
        })?;

        Ok(UserSearch {
            username: non_blank(&self.username),
            name: non_blank(&self.name),
            family_name: non_blank(&self.family_name),
            trie,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_views::FormErrors;

    fn form(trie: &str) -> UserSearchForm {
        UserSearchForm {
            trie: trie.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_order_accepts_exactly_four_values() {
        for (raw, expected) in [
            ("0", SortOrder::Alphabetical),
            ("1", SortOrder::ReverseAlphabetical),
            ("2", SortOrder::MostRecent),
            ("3", SortOrder::LeastRecent),
        ] {
            assert_eq!(raw.parse::<SortOrder>().unwrap(), expected);
        }
        for raw in ["4", "-1", "00", " 1", "", "deux"] {
            assert!(raw.parse::<SortOrder>().is_err(), "{:?} accepted", raw);
        }
    }

    #[test]
    fn test_sort_order_labels_match_display() {
        for (order, (label, _)) in SortOrder::iter().zip(SortOrder::choices()) {
            assert_eq!(order.to_string(), label);
        }
        assert_eq!(SortOrder::LeastRecent.to_string(), "moins récent");
    }

    #[test]
    fn test_definition_fields() {
        let definition = UserSearchForm::definition();
        let names: Vec<_> = definition.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["username", "name", "familyName", "trie"]);

        let trie = definition.field("trie").unwrap();
        assert!(trie.required);
        assert_eq!(trie.choices.len(), 4);
        assert_eq!(trie.choices[2].label, "plus récent");
        assert_eq!(trie.choices[2].value, "2");
        assert!(definition.fields.iter().all(|f| f.label.is_none()));
    }

    #[test]
    fn test_bind_defaults_and_trims() {
        let form = UserSearchForm {
            username: Some("  ".to_string()),
            family_name: Some(" Dupont ".to_string()),
            ..Default::default()
        };
        let search = form.bind().unwrap();

        assert_eq!(search.username, None);
        assert_eq!(search.family_name.as_deref(), Some("Dupont"));
        assert_eq!(search.trie, SortOrder::Alphabetical);
    }

    #[test]
    fn test_bind_rejects_unknown_sort_order() {
        let errors = form("7").bind().unwrap_err();
        let form_errors = FormErrors::from_validation(&errors);
        assert_eq!(form_errors.get("trie"), ["Le choix sélectionné est invalide.".to_string()]);
    }

    #[test]
    fn test_values_use_parameter_names() {
        let form = UserSearchForm {
            family_name: Some("Martin".to_string()),
            ..form("3")
        };
        let values = form.values();
        assert_eq!(values.get("familyName").map(String::as_str), Some("Martin"));
        assert_eq!(values.get("trie").map(String::as_str), Some("3"));
        assert!(!values.contains_key("username"));
    }

    #[test]
    fn test_search_matches_all_filters() {
        let user = User {
            id: 1,
            username: "adupont".to_string(),
            name: "Alice".to_string(),
            family_name: "Dupont".to_string(),
            registered_at: Utc.with_ymd_and_hms(2023, 3, 1, 8, 0, 0).unwrap(),
        };
        let search = UserSearch {
            name: Some("ali".to_string()),
            family_name: Some("DUP".to_string()),
            ..Default::default()
        };
        assert!(search.matches(&user));

        let miss = UserSearch {
            username: Some("bmartin".to_string()),
            ..search
        };
        assert!(!miss.matches(&user));
        assert_eq!(user.registered_on(), "01/03/2023");
    }
}
