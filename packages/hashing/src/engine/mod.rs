//! Block-level SHA-256 machinery
//!
//! - `constants` - IV and round constants
//! - `schedule` - message schedule expansion
//! - `compress` - compression round plus the raw `compress` primitive
//! - `accumulator` - running state

pub mod accumulator;
pub mod compress;
pub mod constants;
pub mod schedule;

pub use accumulator::StateAccumulator;
pub use compress::{compress, compress_at, compression_round};
pub use constants::{BLOCK_LEN, DIGEST_LEN, IV, ROUND_CONSTANTS, STATE_WORDS};
pub use schedule::MessageSchedule;
