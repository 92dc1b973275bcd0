pub mod config_load;

pub use config_load::{Config, PanelConfig, PathConfig, WindowConfig};
