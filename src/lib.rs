#![doc = include_str!("../README.md")]

#[cfg(feature = "heap")]
pub mod heap;
pub mod prelude;
#[cfg(feature = "stack")]
pub mod stack;
