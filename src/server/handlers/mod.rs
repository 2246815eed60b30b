mod assets;
mod pages;

pub use assets::{favicon, robots};
pub use pages::dispatch;
