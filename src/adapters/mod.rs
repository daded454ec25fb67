// Adapters layer: concrete implementations of the domain ports (clock, randomness, storage).

pub mod clock;
pub mod random;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use random::{FixedRandom, SeededRandom, ThreadRandom};
pub use storage::{JsonFileStore, MemoryStore};
