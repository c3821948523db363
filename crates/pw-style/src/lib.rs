//! Style model: text styles, container styles and the tag/class registry.

mod alignment;
pub mod config;
pub mod container;
mod registry;
mod text;

pub use alignment::Alignment;
pub use alignment::TextAlignment;
pub use config::StyleConfig;
pub use container::ContainerStyle;
pub use container::Edges;
pub use registry::StyleRegistry;
pub use text::Color;
pub use text::FontWeight;
pub use text::TextStyle;
