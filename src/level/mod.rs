mod catalog;
mod legend;
mod parse;
mod selector;
mod validate;

pub use catalog::{LevelCatalog, LevelTemplate};
pub use parse::parse_template;
#[cfg(test)]
pub use parse::ParsedLevel;
pub use selector::{select_next, RandomSource, RngSource};
pub use validate::validate_catalog;
