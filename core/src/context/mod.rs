//! Context attachment.
//!
//! Component code talks to a [`Context`]. The application holds a
//! [`ContextContainer`] whose delegate is attached during launch; calls made
//! before that degrade to empty values instead of failing.

mod container;
mod traits;

pub use container::ContextContainer;
pub use traits::{ComponentConnection, ComponentManager, Context};
