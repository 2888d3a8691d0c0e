mod load;
mod types;

pub use load::{load_default, load_from, CONFIG_ENV, DEFAULT_CONFIG_PATH};
pub use types::*;
