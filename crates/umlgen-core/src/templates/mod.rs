pub mod dir;
pub mod language;
pub mod renderer;
pub mod testers;

pub use dir::*;
pub use language::*;
pub use renderer::*;
