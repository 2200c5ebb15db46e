pub mod annotate;
pub mod io;
pub mod render;
pub mod snapshot;

// Re-export key types for easier usage
pub use annotate::*;
pub use render::{
    EntityNavigator, EventLog, NavigationEvent, RenderItem, RenderOptions, render_html,
    render_segments,
};
