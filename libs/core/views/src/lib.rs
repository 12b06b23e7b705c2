//! Server-side HTML rendering for the catalog.
//!
//! - [`ViewEngine`]: Handlebars registry with the shared layout and form partial
//! - [`HtmlView`]: rendered page + status code, usable as an axum response
//! - [`form`]: declarative form definitions rendered by the `form` partial

mod engine;
mod error;
pub mod form;

pub use engine::{BASE_LAYOUT, FORM_PARTIAL, HtmlView, ViewEngine};
pub use error::{ViewError, ViewResult};
pub use form::{Choice, FieldDef, FieldKind, FieldView, FormDefinition, FormErrors, FormView};
