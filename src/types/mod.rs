//! Type definitions

pub mod batch;
pub mod order;

pub use batch::*;
pub use order::*;
