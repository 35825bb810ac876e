//! Project configuration (appengine.toml)
//!
//! Layers, lowest precedence first:
//! - Built-in defaults
//! - appengine.toml in the project root
//! - Command-line overrides

pub mod defaults;
pub mod merge;
pub mod parser;
pub mod schema;
pub mod store;

pub use defaults::{CONFIG_FILE_NAME, config_path};
pub use merge::{ConfigOverrides, merge_overrides};
pub use parser::{parse_appengine_toml, parse_appengine_toml_str, to_toml};
pub use schema::{
    AppEngineConfig, DeployConfig, DescriptorConfig, StageConfig, ToolsConfig,
};
pub use store::ConfigStore;
