#[cfg(feature = "heap")]
pub use crate::heap::PriorityHeap;
#[cfg(feature = "stack")]
pub use crate::stack::Stack;
