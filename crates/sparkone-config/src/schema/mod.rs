//! Configuration schema types for SparkOne.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod endpoint;
mod probe;
mod speech;
mod system;

pub use endpoint::*;
pub use probe::*;
pub use speech::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for SparkOne.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SparkoneConfig {
    pub endpoint: EndpointConfig,
    pub probe: ProbeConfig,
    pub speech: SpeechConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
