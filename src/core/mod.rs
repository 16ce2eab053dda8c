pub mod background;
pub mod color;
pub mod config;
pub mod connections;
pub mod constants;
pub mod debounce;
pub mod field;
pub mod pointer;
pub mod scheduler;
pub mod surface;

pub use background::paint_background;
pub use color::{ColorStop, Palette, Rgba};
pub use config::{FieldConfig, Variant};
pub use connections::ConnectionRenderer;
pub use debounce::Debouncer;
pub use field::PointField;
pub use pointer::PointerState;
pub use scheduler::{FrameScheduler, Startup, Visibility};
pub use surface::{Composite, DrawSurface, LineCap, RadialGradient};
