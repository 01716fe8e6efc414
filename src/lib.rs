pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::session::Session;
pub use config::{cli::LocalFiles, CliConfig, OutputFormat};
pub use core::{
    atlas::Atlas,
    loader::{parse_location, read_location, LocationLoader},
    selector::select_roll,
};
pub use domain::model::{Location, Roll};
pub use domain::ports::LocationSource;
pub use utils::error::{LocationError, Result};
