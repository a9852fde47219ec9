//! Template rendering.
//!
//! A `Renderer` owns one compiled template. The embedded template is compiled
//! once per process and shared; configured templates are compiled when their
//! renderer is built. Rendering either returns the whole class or an error.

use crate::{descriptor::ClassDescriptor, error::Error};
use automap_config::TemplateConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::{fmt::Write as _, fs, path::Path, sync::LazyLock};
use tracing::debug;

const TEMPLATE_NAME: &str = "map_backed.java";

/// The template compiled into the crate.
pub const EMBEDDED_TEMPLATE: &str = include_str!("../templates/map_backed.java.j2");

static EMBEDDED: LazyLock<Result<Renderer, String>> =
    LazyLock::new(|| Renderer::from_source(EMBEDDED_TEMPLATE).map_err(|err| err.to_string()));

///
/// Renderer
///

#[derive(Clone, Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// The shared renderer for the embedded template.
    pub fn embedded() -> Result<&'static Self, Error> {
        EMBEDDED
            .as_ref()
            .map_err(|message| Error::EmbeddedTemplate(message.clone()))
    }

    /// Compile `source` as the class template.
    pub fn from_source(source: impl Into<String>) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("java_string", java_string);
        env.add_template_owned(TEMPLATE_NAME, source.into())?;

        Ok(Self { env })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::TemplateIo {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loading class template");

        Self::from_source(source)
    }

    /// Renderer for a configured template, or `None` when the embedded one
    /// should be used.
    pub fn from_config(config: &TemplateConfig) -> Result<Option<Self>, Error> {
        config.path.as_ref().map(Self::from_path).transpose()
    }

    pub fn render(&self, descriptor: &ClassDescriptor) -> Result<String, Error> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let source = template.render(descriptor)?;

        debug!(
            class = %descriptor.class_name,
            bytes = source.len(),
            "class rendered"
        );

        Ok(source)
    }
}

/// Quote `value` as a Java string literal.
#[must_use]
pub fn java_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');

    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }

    out.push('"');
    out
}
