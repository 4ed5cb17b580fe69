//! Small building blocks shared by every view.

mod button;
mod input;
mod modal_overlay;
mod spinner;

pub use button::{Button, ButtonVariant};
pub use input::{ErrorBanner, Input, Label};
pub use modal_overlay::ModalOverlay;
pub use spinner::Spinner;
