//! Overlay dialogs rendered on top of the main screen

pub mod delete_confirmation_dialog;
pub mod error_dialog;

pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use error_dialog::ErrorDialog;
