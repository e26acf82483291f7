//! Core - simulation-agnostic building blocks
//!
//! - thread_pool: fixed worker pool over a FIFO job queue
//! - latch:       count-down completion barrier for fire-and-forget jobs
//! - random:      xorshift32 streams seeded per tick/lane
//! - error:       startup error taxonomy

pub mod error;
pub mod latch;
pub mod random;
pub mod thread_pool;

pub use error::EngineError;
pub use latch::{Latch, LatchGuard};
pub use thread_pool::{PoolError, ThreadPool};
