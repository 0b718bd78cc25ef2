//! Confirmation guard behavior

use crate::config::EnhanceConfig;
use crate::error::EnhanceResult;
use crate::page::{ConfirmDialog, Page, PageElement};

/// Outcome of a click on a guarded element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickVerdict {
    /// Let the default action run
    Proceed,
    /// Cancel the default action
    Suppress,
}

/// Confirmation prompt in front of an element's default action
#[derive(Debug, Clone)]
pub struct ConfirmGuard {
    /// Attribute marking guarded elements; its value is the prompt message
    pub attribute: String,
    /// Message used when the attribute value is empty or absent
    pub default_message: String,
}

impl ConfirmGuard {
    /// Build from configuration
    pub fn from_config(config: &EnhanceConfig) -> Self {
        Self {
            attribute: config.confirm_attribute.clone(),
            default_message: config.default_confirm_message.clone(),
        }
    }

    /// Snapshot of the elements to guard, in document order.
    ///
    /// One-shot by design: elements inserted after this scan are never
    /// guarded unless the host explicitly re-runs the enhancement.
    pub fn targets<P: Page>(&self, page: &P) -> EnhanceResult<Vec<P::Element>> {
        page.marked_elements(&self.attribute)
    }

    /// Prompt message for one element: the attribute's current value, or the
    /// default when the value is empty or the attribute has been removed
    /// since the scan. A whitespace-only value counts as a real message.
    pub fn message(&self, element: &impl PageElement) -> String {
        match element.attribute(&self.attribute) {
            Some(value) if !value.is_empty() => value,
            _ => self.default_message.clone(),
        }
    }

    /// React to a click on a guarded element: prompt, then map the answer to
    /// a verdict on the click's default action
    pub fn handle_click(
        &self,
        element: &impl PageElement,
        dialog: &impl ConfirmDialog,
    ) -> ClickVerdict {
        if dialog.confirm(&self.message(element)) {
            ClickVerdict::Proceed
        } else {
            ClickVerdict::Suppress
        }
    }
}

impl Default for ConfirmGuard {
    fn default() -> Self {
        Self::from_config(&EnhanceConfig::default())
    }
}
