/// Configuration system
///
/// - `macros`: the `config_struct!` macro (struct + embedded defaults)
/// - `schemas`: every configuration section with its defaults
/// - `utils`: loading, command-line overrides and validation
#[macro_use]
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{
    AptosIndexerConfig, Config, GeckoTerminalConfig, MerkleConfig, SourcesConfig,
    WebserverConfig,
};
pub use utils::{
    load_config_from_path, load_config_with_overrides, parse_config, ConfigOverrides,
    CONFIG_FILE_PATH,
};
