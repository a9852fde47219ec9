use automap_config::ConfigError;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// Error
///
/// Every variant aborts generation for the request it came from; no partial
/// source text is ever returned alongside one.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("embedded template failed to compile: {0}")]
    EmbeddedTemplate(String),

    #[error("'{type_name}' is not assignable to java.util.Map<java.lang.String, java.lang.Object>")]
    Inapplicable { type_name: String },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to read template '{path}': {source}")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
