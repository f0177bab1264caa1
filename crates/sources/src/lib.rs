pub use self::config::SourceConfig;
pub use self::lookup::{get_value_or_default, GetValueOrDefault};
pub use self::record::{ChecksumMismatch, CompressedSourceFile};
pub use self::sourcemap::SourceMap;

pub mod config;
pub mod loader;
pub mod lookup;
pub mod record;
pub mod sourcemap;

pub type Error = Box<dyn std::error::Error>;
pub type Result<T> = std::result::Result<T, Error>;
