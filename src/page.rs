//! Page abstraction the behaviors are written against
//!
//! The behaviors only ever look elements up, read one attribute, flip one
//! class and ask one yes/no question, so that is the whole surface. The
//! `wasm` module implements these traits over the real DOM; tests implement
//! them with scripted doubles.

use crate::error::EnhanceResult;

/// Lookup surface of a document
pub trait Page {
    type Element: PageElement + Clone;

    /// Find the single element with the given id, if any
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Find the first element matching a selector. Errors if the selector
    /// engine rejects the selector itself.
    fn first_matching(&self, selector: &str) -> EnhanceResult<Option<Self::Element>>;

    /// All elements carrying the given attribute, in document order
    fn marked_elements(&self, attribute: &str) -> EnhanceResult<Vec<Self::Element>>;
}

/// Per-element surface
pub trait PageElement {
    /// Current value of an attribute, `None` when absent
    fn attribute(&self, name: &str) -> Option<String>;

    /// Invert membership of a class, returning the new membership state.
    /// Errors if the class list rejects the name (empty or whitespace).
    fn toggle_class(&self, class: &str) -> EnhanceResult<bool>;
}

/// Blocking yes/no prompt
pub trait ConfirmDialog {
    /// Show `message` and block until answered; `true` means accepted
    fn confirm(&self, message: &str) -> bool;
}
