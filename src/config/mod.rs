pub mod runtime;

pub use self::runtime::{load_config, parse_config, OutputConfig, RuntimeConfig};
