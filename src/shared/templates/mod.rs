//! HTML page templates.
//!
//! Templates live in `templates/` at the crate root, use Jinja2 syntax and are
//! compiled into the binary.

pub mod engine;

pub use engine::render_template;
