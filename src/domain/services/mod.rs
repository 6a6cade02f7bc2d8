//! Domain Services
//!
//! Stateless rules of the resolution pipeline.

mod artifact_locator;
mod banner;

pub use artifact_locator::locate;
pub use banner::{edit_warning, with_edit_warning};
