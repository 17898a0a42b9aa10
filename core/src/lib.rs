//! Multi-stream Lehmer random number generator.
//!
//! One master seed is planted into 256 streams spaced MAX_DRAWS draws apart
//! on the period of `x -> 48271 * x mod (2^31 - 1)`. Every stream is fully
//! reproducible; none is suitable for cryptographic use.

pub mod bank;
pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod modular;
pub mod planter;
pub mod seed;
pub mod selector;
pub mod self_test;
pub mod snapshot;
pub mod types;

pub use error::{LehmerError, LehmerResult};
pub use generator::Generator;
pub use lifecycle::LifecycleWarning;
