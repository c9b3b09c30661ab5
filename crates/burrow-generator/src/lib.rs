//! Short code generation for the Burrow URL shortener.
//!
//! [`HashidsGenerator`] encodes a per-call numeric seed with the hashids
//! scheme, salted by the original URL. Seeds come from a [`SeedSource`]
//! chosen at construction time.

pub mod hashids;
pub mod seed;
pub mod stub;

pub use hashids::{HashidsGenerator, HashidsSettings, DEFAULT_MIN_LENGTH};
pub use seed::{FixedSeed, SeedSource, SystemClockSeed};
pub use stub::StubHasher;
