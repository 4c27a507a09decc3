//! Configuration section definitions.

mod categories;
mod content;
mod showcase;
mod site;

pub use categories::CategoriesConfig;
pub use content::ContentConfig;
pub use showcase::ShowcaseConfig;
pub use site::SiteInfoConfig;
