use std::path::PathBuf;
use thiserror::Error;

use crate::selector::Selector;

/// Errors that can occur while generating the console artifacts
#[derive(Debug, Error)]
pub enum GenError {
    /// An embedded template failed to parse
    #[error("Failed to parse template {name}: {source}")]
    TemplateParse {
        /// Template name
        name: &'static str,
        /// Parser error
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// Rendering failed, usually a model field the template expects is missing
    #[error("Failed to render template {name}: {source}")]
    TemplateRender {
        /// Template name
        name: &'static str,
        /// Render error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Output file or directory could not be created
    #[error("Failed to create {}: {source}", .path.display())]
    FileCreate {
        /// Destination path
        path: PathBuf,
        /// IO error
        #[source]
        source: std::io::Error,
    },

    /// Existing output file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        /// Existing file path
        path: PathBuf,
        /// IO error
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        /// Destination path
        path: PathBuf,
        /// IO error
        #[source]
        source: std::io::Error,
    },

    /// Two signatures hash to the same 4-byte selector
    #[error("Selector {selector} is shared by {first} and {second}")]
    SelectorCollision {
        /// The colliding selector
        selector: Selector,
        /// Canonical text of the earlier entry
        first: String,
        /// Canonical text of the later entry
        second: String,
    },

    /// Check mode found files that differ from freshly rendered output
    #[error("Generated files are out of date: {}", display_paths(.0))]
    Stale(Vec<PathBuf>),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_lists_every_path() {
        let err = GenError::Stale(vec![PathBuf::from("out/args.rs"), PathBuf::from("out/console.sol")]);
        assert_eq!(
            err.to_string(),
            "Generated files are out of date: out/args.rs, out/console.sol"
        );
    }

    #[test]
    fn test_collision_message() {
        let err = GenError::SelectorCollision {
            selector: Selector::new([0xde, 0xad, 0xbe, 0xef]),
            first: "log(uint)".to_string(),
            second: "log(bool)".to_string(),
        };
        assert_eq!(err.to_string(), "Selector 0xdeadbeef is shared by log(uint) and log(bool)");
    }
}
