//! Mobile nav toggle behavior

use crate::config::EnhanceConfig;
use crate::error::{EnhanceError, EnhanceResult};
use crate::page::{Page, PageElement};

/// Open/close toggle for the mobile navigation menu
///
/// The control element is located once, at bind time; the links container is
/// re-queried on every click, so markup swapped in after binding still works.
#[derive(Debug, Clone)]
pub struct NavToggle {
    /// Id of the clickable control
    pub control_id: String,
    /// Selector of the links container
    pub links_selector: String,
    /// Class whose presence on the container means "menu open"
    pub open_class: String,
}

impl NavToggle {
    /// Build from configuration
    pub fn from_config(config: &EnhanceConfig) -> Self {
        Self {
            control_id: config.nav_toggle_id.clone(),
            links_selector: config.nav_links_selector.clone(),
            open_class: config.nav_open_class.clone(),
        }
    }

    /// Locate the toggle control. `None` means the page has no mobile nav
    /// and the behavior stays unbound; that is not an error.
    pub fn locate_control<P: Page>(&self, page: &P) -> Option<P::Element> {
        page.element_by_id(&self.control_id)
    }

    /// React to a click on the control: re-query the links container and
    /// invert the open class on it, returning the new membership state.
    ///
    /// The container is an unchecked precondition of the page markup. When
    /// it is missing at click time this returns
    /// [`EnhanceError::ElementNotFound`] for the caller to report; nothing
    /// else happens.
    pub fn handle_click<P: Page>(&self, page: &P) -> EnhanceResult<bool> {
        let links = page
            .first_matching(&self.links_selector)?
            .ok_or_else(|| EnhanceError::ElementNotFound(self.links_selector.clone()))?;
        links.toggle_class(&self.open_class)
    }
}

impl Default for NavToggle {
    fn default() -> Self {
        Self::from_config(&EnhanceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_copies_selectors() {
        let config = EnhanceConfig {
            nav_toggle_id: "menu-button".to_string(),
            nav_links_selector: "#menu".to_string(),
            nav_open_class: "visible".to_string(),
            ..EnhanceConfig::default()
        };
        let toggle = NavToggle::from_config(&config);
        assert_eq!(toggle.control_id, "menu-button");
        assert_eq!(toggle.links_selector, "#menu");
        assert_eq!(toggle.open_class, "visible");
    }

    #[test]
    fn test_default_matches_site_markup() {
        let toggle = NavToggle::default();
        assert_eq!(toggle.control_id, "nav-toggle");
        assert_eq!(toggle.links_selector, ".nav-links");
        assert_eq!(toggle.open_class, "open");
    }
}
