//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, Result,
    error::SourceContext,
    manifest::Manifest,
    validate::{find_name_span, validate_identifier},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "pybarrel.toml")
    }
}

impl Manifest {
    /// Open and parse a pybarrel.toml file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a pybarrel.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
///
/// Every module key and every supplemental name must be a valid Python
/// identifier; a bad entry is fatal before any source file is processed.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    for (module, names) in &manifest.globals {
        validate_name(module, "module", ctx)?;

        let context = format!("global in '{}'", module);
        for name in names {
            validate_name(name, &context, ctx)?;
        }
    }
    Ok(())
}

/// Validate that a name is a usable Python identifier.
fn validate_name(name: &str, context: &str, ctx: &SourceContext) -> Result<()> {
    let span = find_name_span(ctx.src(), name);

    if let Some(reason) = validate_identifier(name) {
        if reason.is_keyword {
            return Err(ctx.reserved_keyword_error(name, context, span));
        }
        return Err(ctx.invalid_identifier_error(name, context, reason.message, span));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_parse_valid_manifest() {
        let manifest = Manifest::from_str(
            r#"
            exclude = ["setup.py"]

            [globals]
            mod_b = ["DEFAULT_TIMEOUT"]
            "#,
        )
        .unwrap();
        assert_eq!(manifest.exclude, ["setup.py"]);
        assert_eq!(manifest.names_for("mod_b"), ["DEFAULT_TIMEOUT"]);
    }

    #[test]
    fn test_non_table_globals_is_parse_error() {
        let err = Manifest::from_str(r#"globals = "mod_b""#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_string_name_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            [globals]
            mod_b = [1, 2]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_module_rejected() {
        let err = Manifest::from_str(
            r#"
            [globals]
            class = ["x"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
        assert!(err.to_string().contains("reserved keyword"));
    }

    #[test]
    fn test_keyword_global_rejected_with_module_context() {
        let err = Manifest::from_str(
            r#"
            [globals]
            mod_b = ["lambda"]
            "#,
        )
        .unwrap_err();
        match *err {
            Error::ReservedKeyword { ref context, .. } => {
                assert_eq!(context, "global in 'mod_b'");
            }
            ref other => panic!("expected ReservedKeyword, got {:?}", other),
        }
    }

    #[test]
    fn test_dashed_module_rejected() {
        let err = Manifest::from_str(
            r#"
            [globals]
            "my-mod" = ["x"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Manifest::from_file("/definitely/not/here/pybarrel.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
