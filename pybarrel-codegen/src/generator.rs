//! Export manifest assembly.

use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use pybarrel_core::{Declarations, module_stem};
use pybarrel_manifest::Manifest;

use crate::{
    SourceBuilder,
    ast::{DunderAll, FromImport},
};

/// The generation result: ordered per-module import blocks plus the
/// flattened list of every exported name.
///
/// The flattened list equals the concatenation, in module order, of each
/// module's functions, then classes, then globals, then supplemental
/// names. A module with nothing to export contributes no block and no
/// names.
#[derive(Debug)]
pub struct ExportManifest {
    blocks: Vec<FromImport>,
    exports: Vec<String>,
}

impl ExportManifest {
    /// Build the manifest from extracted declarations and the
    /// supplemental-globals table.
    ///
    /// `modules` iterates in discovery order; that order, the per-module
    /// declaration order and the table order fully determine the output.
    pub fn build(modules: &IndexMap<PathBuf, Declarations>, supplemental: &Manifest) -> Self {
        let mut blocks = Vec::new();
        let mut exports = Vec::new();

        for (path, decls) in modules {
            let Some(module) = module_stem(path) else {
                continue;
            };

            let supplement = supplemental.names_for(&module);
            if decls.is_empty() && supplement.is_empty() {
                continue;
            }

            let block = FromImport::new(&module)
                .names(decls.functions.iter().cloned())
                .names(decls.classes.iter().cloned())
                .names(decls.globals.iter().cloned())
                .names(supplement.iter().cloned());

            exports.extend(block.exported().iter().cloned());
            blocks.push(block);
        }

        Self { blocks, exports }
    }

    /// The import blocks, in module order.
    pub fn blocks(&self) -> &[FromImport] {
        &self.blocks
    }

    /// Number of modules contributing an import block.
    pub fn module_count(&self) -> usize {
        self.blocks.len()
    }

    /// The flattened export list, in output order.
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// Names exported by more than one module, each reported once in
    /// first-collision order. Duplicates stay in the output; this exists
    /// so callers can warn about them.
    pub fn duplicates(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for name in &self.exports {
            if !seen.insert(name.as_str()) && !duplicates.contains(name) {
                duplicates.push(name.clone());
            }
        }
        duplicates
    }

    /// Render the full initializer document.
    ///
    /// Import blocks come first, then one blank line (also emitted when
    /// there are no blocks), then the `__all__` declaration.
    pub fn render(&self) -> String {
        let mut builder = SourceBuilder::python();
        for block in &self.blocks {
            builder = block.render(builder);
        }
        builder = builder.blank();
        DunderAll::new()
            .names(self.exports.iter().cloned())
            .render(builder)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(functions: &[&str], classes: &[&str], globals: &[&str]) -> Declarations {
        Declarations {
            functions: functions.iter().map(|s| s.to_string()).collect(),
            classes: classes.iter().map(|s| s.to_string()).collect(),
            globals: globals.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn modules(entries: Vec<(&str, Declarations)>) -> IndexMap<PathBuf, Declarations> {
        entries
            .into_iter()
            .map(|(path, d)| (PathBuf::from(path), d))
            .collect()
    }

    #[test]
    fn test_end_to_end_example() {
        let modules = modules(vec![
            ("pkg/mod_a.py", decls(&["foo"], &["Bar"], &[])),
            ("pkg/mod_b.py", decls(&[], &[], &["x"])),
        ]);
        let manifest = ExportManifest::build(&modules, &Manifest::default());

        assert_eq!(
            manifest.render(),
            "from .mod_a import (\n    foo,\n    Bar,\n)\nfrom .mod_b import (\n    x,\n)\n\n__all__ = [\n    'foo',\n    'Bar',\n    'x',\n]\n"
        );
    }

    #[test]
    fn test_export_order_is_functions_classes_globals_supplemental() {
        let modules = modules(vec![(
            "pkg/mod_a.py",
            decls(&["f1", "f2"], &["C1"], &["g1"]),
        )]);
        let supplemental: Manifest = "[globals]\nmod_a = [\"s1\", \"s2\"]\n".parse().unwrap();

        let manifest = ExportManifest::build(&modules, &supplemental);
        assert_eq!(manifest.exports(), ["f1", "f2", "C1", "g1", "s1", "s2"]);
    }

    #[test]
    fn test_empty_module_is_skipped() {
        let modules = modules(vec![
            ("pkg/mod_a.py", decls(&["foo"], &[], &[])),
            ("pkg/empty.py", Declarations::new()),
        ]);
        let manifest = ExportManifest::build(&modules, &Manifest::default());

        assert_eq!(manifest.module_count(), 1);
        assert_eq!(manifest.exports(), ["foo"]);
        assert!(!manifest.render().contains("empty"));
    }

    #[test]
    fn test_supplemental_only_module_gets_a_block() {
        let modules = modules(vec![("pkg/constants.py", Declarations::new())]);
        let supplemental: Manifest = "[globals]\nconstants = [\"VERSION\"]\n".parse().unwrap();

        let manifest = ExportManifest::build(&modules, &supplemental);
        assert_eq!(manifest.module_count(), 1);
        assert_eq!(manifest.exports(), ["VERSION"]);
        assert!(
            manifest
                .render()
                .contains("from .constants import (\n    VERSION,\n)")
        );
    }

    #[test]
    fn test_supplemental_for_unknown_module_is_ignored() {
        let modules = modules(vec![("pkg/mod_a.py", decls(&["foo"], &[], &[]))]);
        let supplemental: Manifest = "[globals]\nmissing = [\"ghost\"]\n".parse().unwrap();

        let manifest = ExportManifest::build(&modules, &supplemental);
        assert_eq!(manifest.exports(), ["foo"]);
    }

    #[test]
    fn test_duplicates_are_kept_and_reported() {
        let modules = modules(vec![
            ("pkg/mod_a.py", decls(&["shared", "only_a"], &[], &[])),
            ("pkg/mod_b.py", decls(&["shared"], &[], &[])),
        ]);
        let manifest = ExportManifest::build(&modules, &Manifest::default());

        assert_eq!(manifest.exports(), ["shared", "only_a", "shared"]);
        assert_eq!(manifest.duplicates(), ["shared"]);

        let rendered = manifest.render();
        assert_eq!(rendered.matches("'shared',").count(), 2);
    }

    #[test]
    fn test_no_modules_renders_empty_all() {
        let manifest = ExportManifest::build(&IndexMap::new(), &Manifest::default());
        assert_eq!(manifest.render(), "\n__all__ = [\n]\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let modules = modules(vec![
            ("pkg/mod_b.py", decls(&[], &[], &["x"])),
            ("pkg/mod_a.py", decls(&["foo"], &["Bar"], &[])),
        ]);
        let supplemental: Manifest = "[globals]\nmod_b = [\"extra\"]\n".parse().unwrap();

        let first = ExportManifest::build(&modules, &supplemental).render();
        let second = ExportManifest::build(&modules, &supplemental).render();
        assert_eq!(first, second);

        // Module order follows map order, not alphabetical order.
        assert!(first.find("mod_b").unwrap() < first.find("mod_a").unwrap());
    }
}
