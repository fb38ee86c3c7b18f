//! Renders a contribution calendar as a fixed grid of colored squares with
//! a submarine that sails between randomly chosen days.
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use sgr_render::{render_svg, GridConfig};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let svg = render_svg(&[], &GridConfig::default(), &mut rng);
//! assert!(svg.contains(r#"width="728px""#));
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod submarine;
pub mod svg;
pub mod waypoint;

pub use config::GridConfig;
pub use error::{RenderError, Result};
pub use svg::{render_svg, write_svg};
