//! Python relative import builder.

use crate::SourceBuilder;

/// Builder for a `from .<module> import (...)` statement.
///
/// Names are listed one per line, comma-terminated, in insertion order.
#[derive(Debug, Clone)]
pub struct FromImport {
    module: String,
    names: Vec<String>,
}

impl FromImport {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
        }
    }

    /// Import a named symbol.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Import named symbols from an iterator.
    pub fn names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// The bare module name the import targets.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The imported names, in statement order.
    pub fn exported(&self) -> &[String] {
        &self.names
    }

    /// True when the statement would import nothing.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render the import to a SourceBuilder.
    pub fn render(&self, builder: SourceBuilder) -> SourceBuilder {
        let mut builder = builder
            .line(&format!("from .{} import (", self.module))
            .indent();
        for name in &self.names {
            builder = builder.line(&format!("{},", name));
        }
        builder.dedent().line(")")
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(SourceBuilder::python()).build()
    }
}
