use thiserror::Error;

/// Errors raised while extracting declarations from a source file.
///
/// `Unparseable` and `Syntax` mark a file the caller should skip: the file
/// contributes no declarations, but the run continues for the remaining
/// modules.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to load the Python grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no syntax tree")]
    Unparseable,

    #[error("source contains syntax errors")]
    Syntax,
}
