mod filters;
mod renderer;
mod values;

pub use renderer::{PageRenderer, RenderOutcome};
pub use values::json_to_liquid;
