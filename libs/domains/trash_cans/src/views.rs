use core_views::{FormView, ViewEngine, ViewResult};
use serde::Serialize;

use crate::models::TrashCan;

pub const INDEX: &str = "trash_can/index";
pub const NEW: &str = "trash_can/new";

const TEMPLATES: [(&str, &str); 2] = [
    (INDEX, include_str!("../templates/index.hbs")),
    (NEW, include_str!("../templates/new.hbs")),
];

/// Register the trash can pages on the shared engine.
pub fn register_templates(engine: &mut ViewEngine) -> ViewResult<()> {
    engine.register_templates(TEMPLATES)
}

#[derive(Debug, Serialize)]
pub struct IndexData<'a> {
    pub title: &'static str,
    pub trash_cans: &'a [TrashCan],
}

#[derive(Debug, Serialize)]
pub struct FormData {
    pub title: &'static str,
    pub form: FormView,
}
