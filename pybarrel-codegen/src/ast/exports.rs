//! `__all__` declaration builder.

use crate::SourceBuilder;

/// Builder for the `__all__ = [...]` declaration.
///
/// Names are quoted string literals, one per line, comma-terminated, in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct DunderAll {
    names: Vec<String>,
}

impl DunderAll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an exported name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Declare exported names from an iterator.
    pub fn names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Render the declaration to a SourceBuilder.
    pub fn render(&self, builder: SourceBuilder) -> SourceBuilder {
        let mut builder = builder.line("__all__ = [").indent();
        for name in &self.names {
            builder = builder.line(&format!("'{}',", name));
        }
        builder.dedent().line("]")
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        self.render(SourceBuilder::python()).build()
    }
}
