//! Site Enhance - progressive enhancement for server-rendered pages
//!
//! This library replaces the classic site-wide enhancement script with a
//! WASM module, supporting:
//! - Mobile navigation toggle (a control that opens/closes the nav links)
//! - Confirmation guards (`data-confirm` elements ask before acting)
//! - JSON-configurable ids, selectors, class and attribute names
//!
//! ## Example
//! ```rust
//! use site_enhance::prelude::*;
//!
//! // Tailor the behaviors to the host page; absent fields keep the defaults
//! let config = EnhanceConfig::from_json(r#"{"nav_open_class": "expanded"}"#).unwrap();
//!
//! let toggle = NavToggle::from_config(&config);
//! assert_eq!(toggle.control_id, "nav-toggle");
//! assert_eq!(toggle.open_class, "expanded");
//!
//! let guard = ConfirmGuard::from_config(&config);
//! assert_eq!(guard.attribute, "data-confirm");
//! assert_eq!(guard.default_message, "確定嗎？");
//! ```
//!
//! In the browser the compiled module attaches both behaviors on load:
//! ```text
//! <script type="module">
//!   import init from './pkg/site_enhance.js';
//!   await init();
//! </script>
//! ```

pub mod config;
pub mod confirm;
pub mod error;
pub mod nav;
pub mod page;

// Re-export common types
pub mod prelude {
    pub use crate::config::EnhanceConfig;
    pub use crate::confirm::{ClickVerdict, ConfirmGuard};
    pub use crate::error::{EnhanceError, EnhanceResult};
    pub use crate::nav::NavToggle;
    pub use crate::page::{ConfirmDialog, Page, PageElement};
}

#[cfg(feature = "wasm")]
pub mod wasm;
