#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod parser;
pub mod render;
pub mod resolve;
pub mod session;
pub mod simulation;
pub mod theme;

pub use config::{Config, GraphSettings, RenderConfig, load_config};
pub use geometry::{LinkPath, Point, compute_path};
pub use model::GraphModel;
pub use parser::{RawDocument, parse_document};
pub use render::render_svg;
pub use session::GraphSession;

#[cfg(feature = "cli")]
pub use cli::run;
