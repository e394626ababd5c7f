//! Application module containing the flyover demo loop.

mod flyover;

pub use flyover::run_flyover;
