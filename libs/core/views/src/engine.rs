use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::error::{ViewError, ViewResult};

/// Layout shared by every page. Pages fill it through an inline `content` partial:
///
/// ```handlebars
/// {{#> base}}{{#*inline "content"}}<h1>{{title}}</h1>{{/inline}}{{/base}}
/// ```
pub const BASE_LAYOUT: &str = include_str!("../templates/base.hbs");

/// Generic form renderer, fed a [`FormView`](crate::FormView) as `form`:
///
/// ```handlebars
/// {{> form form=search_form}}
/// ```
pub const FORM_PARTIAL: &str = include_str!("../templates/form.hbs");

/// Handlebars registry holding the layout, the form partial and every page
/// template registered by the domain crates.
///
/// Built once at startup, then shared read-only behind an `Arc`.
pub struct ViewEngine {
    handlebars: Handlebars<'static>,
}

impl ViewEngine {
    /// Create an engine with the layout and form partial registered.
    pub fn new() -> ViewResult<Self> {
        let mut engine = Self {
            handlebars: Handlebars::new(),
        };
        engine.register_template("base", BASE_LAYOUT)?;
        engine.register_template("form", FORM_PARTIAL)?;
        Ok(engine)
    }

    /// Register (or replace) a template; it is also usable as a partial.
    pub fn register_template(&mut self, name: &str, source: &str) -> ViewResult<()> {
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| ViewError::Register {
                name: name.to_string(),
                source: Box::new(e),
            })?;
        debug!(template = name, "Registered template");
        Ok(())
    }

    /// Register a batch of `(name, source)` templates.
    pub fn register_templates<'a, I>(&mut self, templates: I) -> ViewResult<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        templates
            .into_iter()
            .try_for_each(|(name, source)| self.register_template(name, source))
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a template to a string.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> ViewResult<String> {
        self.handlebars
            .render(name, data)
            .map_err(|e| ViewError::Render {
                name: name.to_string(),
                source: Box::new(e),
            })
    }

    /// Render a template into a 200 HTML page.
    pub fn view<T: Serialize>(&self, name: &str, data: &T) -> ViewResult<HtmlView> {
        self.render(name, data).map(HtmlView::ok)
    }
}

/// A rendered HTML page with its status code.
#[derive(Debug, Clone)]
pub struct HtmlView {
    pub status: StatusCode,
    pub html: String,
}

impl HtmlView {
    pub fn ok(html: String) -> Self {
        Self {
            status: StatusCode::OK,
            html,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl IntoResponse for HtmlView {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.html,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE: &str = r#"{{#> base}}{{#*inline "content"}}<h1>{{heading}}</h1>{{/inline}}{{/base}}"#;

    fn engine() -> ViewEngine {
        let mut engine = ViewEngine::new().unwrap();
        engine.register_template("test/page", PAGE).unwrap();
        engine
    }

    #[test]
    fn test_page_renders_inside_layout() {
        let html = engine()
            .render("test/page", &json!({ "title": "Accueil", "heading": "Produits" }))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Accueil - Catalogue produits</title>"));
        assert!(html.contains("<h1>Produits</h1>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = engine()
            .render("test/page", &json!({ "heading": "<b>x</b>" }))
            .unwrap();
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let mut engine = ViewEngine::new().unwrap();
        let err = engine
            .register_template("broken", "{{#if}}unclosed")
            .unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let err = engine().render("missing", &json!({})).unwrap_err();
        assert!(matches!(err, ViewError::Render { .. }));
    }

    #[test]
    fn test_register_templates_batch() {
        let mut engine = ViewEngine::new().unwrap();
        engine
            .register_templates([("a", "A"), ("b", "{{> a}}B")])
            .unwrap();
        assert!(engine.has_template("a"));
        assert_eq!(engine.render("b", &json!({})).unwrap(), "AB");
    }

    #[test]
    fn test_html_view_status() {
        let view = HtmlView::ok("<p>x</p>".to_string()).with_status(StatusCode::UNPROCESSABLE_ENTITY);
        let response = view.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_view_response_body_is_rendered_page() {
        use http_body_util::BodyExt;

        let response = engine()
            .view("test/page", &json!({ "heading": "Poubelles" }))
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<h1>Poubelles</h1>"));
    }
}
