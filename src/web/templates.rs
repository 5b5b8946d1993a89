//! Template engine
//!
//! Renders pages through Tera. Templates are embedded in the binary so a
//! deployment is a single file; the `display_date` filter formats the
//! loose ISO dates coming back from the store, falling back to the raw
//! string when a row carries something unparseable.

use std::collections::HashMap;

use anyhow::{Context as AnyhowContext, Result};
use chrono::{DateTime, NaiveDate};
use rust_embed::RustEmbed;
use tera::{Context, Tera, Value};

use crate::models::ServiceMode;
use crate::theme;
use crate::web::flash::{Flash, SUCCESS_DISPLAY_MS};

/// Embedded page templates
#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateFiles;

/// Tera engine over the embedded templates
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        let mut files = Vec::new();
        for name in TemplateFiles::iter() {
            let file = TemplateFiles::get(&name)
                .with_context(|| format!("embedded template {name} missing"))?;
            let source = String::from_utf8(file.data.into_owned())
                .with_context(|| format!("embedded template {name} is not UTF-8"))?;
            files.push((name.to_string(), source));
        }
        tera.add_raw_templates(files)
            .context("failed to compile templates")?;
        tera.register_filter("display_date", display_date);

        Ok(Self { tera })
    }

    /// Render one template with the given context
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(name, context)
            .with_context(|| format!("failed to render template {name}"))
    }

    /// Context fields every page needs: the active mode, the pending
    /// flash message and the timing constants the page script relies on.
    pub fn base_context(mode: ServiceMode, flash: Option<&Flash>) -> Context {
        let mut context = Context::new();
        context.insert("mode", mode.as_str());
        context.insert("other_mode", mode.toggled().as_str());
        context.insert("is_aluminium", &(mode == ServiceMode::Aluminium));
        context.insert("flash", &flash);
        context.insert("flash_display_ms", &SUCCESS_DISPLAY_MS);
        context.insert("scroll_delay_ms", &theme::ANCHOR_SCROLL_DELAY_MS);
        context
    }
}

/// Format a stored date for display: `Oct 15, 2023`.
///
/// Accepts RFC 3339 stamps and bare `YYYY-MM-DD` dates; anything else is
/// passed through unchanged rather than erroring the whole page.
fn display_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = match value.as_str() {
        Some(s) => s,
        None => return Ok(value.clone()),
    };

    let formatted = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map(|date| date.format("%b %e, %Y").to_string().replace("  ", " "));

    match formatted {
        Ok(pretty) => Ok(Value::String(pretty)),
        Err(_) => Ok(Value::String(raw.to_string())),
    }
}
