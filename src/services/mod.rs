pub mod render_service;

pub use render_service::{OutputTarget, RenderService};
