//! Prompt domain
//!
//! Persona templates and the composer that flattens them into a single
//! completion prompt.

mod composer;
mod template;

pub use composer::PromptComposer;
pub use template::{BOT_NAME_PLACEHOLDER, PersonaTemplates};
