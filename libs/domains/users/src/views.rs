use core_views::{FormView, ViewEngine, ViewResult};
use serde::Serialize;

use crate::models::User;

pub const INDEX: &str = "user/index";

/// Register the user directory page on the shared engine.
pub fn register_templates(engine: &mut ViewEngine) -> ViewResult<()> {
    engine.register_template(INDEX, include_str!("../templates/index.hbs"))
}

#[derive(Debug, Serialize)]
struct UserRow<'a> {
    username: &'a str,
    name: &'a str,
    family_name: &'a str,
    registered_on: String,
}

/// Data of the directory page
#[derive(Debug, Serialize)]
pub struct IndexData<'a> {
    title: &'static str,
    form: FormView,
    users: Vec<UserRow<'a>>,
}

impl<'a> IndexData<'a> {
    pub fn new(form: FormView, users: &'a [User]) -> Self {
        Self {
            title: "Utilisateurs",
            form,
            users: users
                .iter()
                .map(|u| UserRow {
                    username: &u.username,
                    name: &u.name,
                    family_name: &u.family_name,
                    registered_on: u.registered_on(),
                })
                .collect(),
        }
    }
}
