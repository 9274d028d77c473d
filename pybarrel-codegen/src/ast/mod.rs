//! Python statement builders.

mod exports;
mod imports;

pub use exports::DunderAll;
pub use imports::FromImport;
