//! Blocking yes/no confirmation shown before destructive actions.
//!
//! Declining must abort the operation before any network call is made.

pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}
