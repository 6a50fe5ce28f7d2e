//! UI state for the two list views: the list controller, the record form and the
//! modal that hosts it.

pub mod form_state;
pub mod list_state;
pub mod modal_state;

pub use form_state::{FormError, FormMode, FormState, Submission};
pub use list_state::{ListController, LoadState};
pub use modal_state::ModalState;
