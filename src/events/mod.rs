pub mod pointer;
pub mod viewport;

pub use pointer::wire_pointer_handlers;
pub use viewport::{wire_resize, wire_visibility};
