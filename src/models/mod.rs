pub mod render_options;

pub use render_options::{LabelField, RenderOptions};
