//! State behind the page's interactive widgets.
//!
//! Components hold these in signals and derive classes and styles from them.

pub const MENU_ICON_CLOSED: &str = "fas fa-bars";
pub const MENU_ICON_OPEN: &str = "fas fa-times";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn list_class(self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    pub fn icon_class(self) -> &'static str {
        if self.open {
            MENU_ICON_OPEN
        } else {
            MENU_ICON_CLOSED
        }
    }
}

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: all 0.8s cubic-bezier(0.5, 0, 0, 1);";

/// Entrance animation for one element.
///
/// `Idle` until the client takes over (server markup stays visible), then
/// `Hidden` until the first intersection. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Idle,
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn arm(&mut self) {
        if *self == Self::Idle {
            *self = Self::Hidden;
        }
    }

    /// Feed one intersection observation. Returns true only on the
    /// transition into `Revealed`, which is when observing should stop.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && *self != Self::Revealed {
            *self = Self::Revealed;
            true
        } else {
            false
        }
    }

    pub fn class(self) -> Option<&'static str> {
        (self == Self::Revealed).then_some("revealed")
    }

    pub fn style(self) -> Option<&'static str> {
        (self == Self::Hidden).then_some(REVEAL_HIDDEN_STYLE)
    }
}

/// Full-screen image viewer. `Some(src)` while open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    image: Option<String>,
}

impl LightboxState {
    /// Open on the element's full-image reference. Empty references are
    /// ignored, same as elements without one.
    pub fn open(&mut self, full_img: Option<&str>) {
        if let Some(src) = full_img.filter(|s| !s.is_empty()) {
            self.image = Some(src.to_string());
        }
    }

    pub fn close(&mut self) {
        self.image = None;
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Escape closes an open viewer. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Clicks on the backdrop itself close the viewer, clicks on the image
    /// (or anything inside the backdrop) don't.
    pub fn handle_backdrop_click(&mut self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.close();
        }
    }
}

/// Element id targeted by an in-page anchor, `None` for anything that isn't
/// a `#fragment` link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_twice_restores_state() {
        let mut menu = MenuState::default();
        let initial = menu.list_class();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.list_class(), "nav-links active");
        assert_eq!(menu.icon_class(), MENU_ICON_OPEN);
        menu.toggle();
        assert_eq!(menu.list_class(), initial);
        assert_eq!(menu.icon_class(), MENU_ICON_CLOSED);
    }

    #[test]
    fn test_menu_link_click_closes_and_resets_icon() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.icon_class(), MENU_ICON_CLOSED);

        // closing a closed menu is a no-op
        menu.close();
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = RevealState::default();
        assert_eq!(reveal.style(), None);
        reveal.arm();
        assert_eq!(reveal.style(), Some(REVEAL_HIDDEN_STYLE));
        assert_eq!(reveal.class(), None);

        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert_eq!(reveal.class(), Some("revealed"));
        assert_eq!(reveal.style(), None);

        // leaving and re-entering the viewport doesn't re-trigger
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(true));
        assert!(!reveal.observe(true));
        assert_eq!(reveal, RevealState::Revealed);
    }

    #[test]
    fn test_reveal_arm_after_reveal_keeps_revealed() {
        let mut reveal = RevealState::default();
        assert!(reveal.observe(true));
        reveal.arm();
        assert_eq!(reveal, RevealState::Revealed);
    }

    #[test]
    fn test_lightbox_open_uses_exact_reference() {
        let mut lightbox = LightboxState::default();
        lightbox.open(Some("/images/certs/aws-full.png?v=2"));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.image(), Some("/images/certs/aws-full.png?v=2"));
    }

    #[test]
    fn test_lightbox_ignores_missing_reference() {
        let mut lightbox = LightboxState::default();
        lightbox.open(None);
        assert!(!lightbox.is_open());
        lightbox.open(Some(""));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_lightbox_close_paths() {
        let mut lightbox = LightboxState::default();

        lightbox.open(Some("/a.png"));
        lightbox.close();
        assert!(!lightbox.is_open());

        lightbox.open(Some("/a.png"));
        lightbox.handle_backdrop_click(false);
        assert!(lightbox.is_open());
        lightbox.handle_backdrop_click(true);
        assert!(!lightbox.is_open());

        lightbox.open(Some("/a.png"));
        assert!(!lightbox.handle_key("Enter"));
        assert!(lightbox.is_open());
        assert!(lightbox.handle_key("Escape"));
        assert!(!lightbox.is_open());

        // Escape with nothing open is ignored
        assert!(!lightbox.handle_key("Escape"));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#projects"), Some("projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/Resume-2025.pdf"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
    }
}
