use std::{cell::RefCell, rc::Rc};

use crate::navigation::{
    destination::{Destination, Navigator},
    scroll_lock::{PageBody, ScrollLock},
};

/// Scroll offset past which the bar switches to its condensed style.
pub const SCROLLED_OFFSET: f64 = 50.0;

pub const CONTACT: &str = "/contact";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub destination: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        destination: "/",
    },
    NavItem {
        label: "About",
        destination: "/about",
    },
    NavItem {
        label: "Careers",
        destination: "/careers",
    },
    NavItem {
        label: "Enterprise Structure",
        destination: "/enterprise-structure",
    },
    NavItem {
        label: "Value Journey",
        destination: "/journey-strategy",
    },
];

/// Sister sites listed in the logo dropdown.
pub const WEBSITES: [NavItem; 3] = [
    NavItem {
        label: "OphoTech",
        destination: "https://stellar-kelpie-d06cc0.netlify.app/",
    },
    NavItem {
        label: "OphoDigital",
        destination: "https://radiant-sfogliatella-1938a8.netlify.app",
    },
    NavItem {
        label: "OphoSecure",
        destination: "https://elegant-biscotti-53e2a2.netlify.app",
    },
];

/// Top navigation bar: logo dropdown, scroll state and the mobile menu.
///
/// While the mobile menu is open the bar holds a [`ScrollLock`]; closing the
/// menu or dropping the bar releases it.
#[derive(Debug)]
pub struct NavBar {
    body: Rc<RefCell<PageBody>>,
    dropdown_open: bool,
    scrolled: bool,
    menu: Option<ScrollLock>,
}

impl NavBar {
    pub fn new(body: Rc<RefCell<PageBody>>) -> Self {
        let scrolled = body.borrow().scroll_y > SCROLLED_OFFSET;
        Self {
            body,
            dropdown_open: false,
            scrolled,
            menu: None,
        }
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn logo_hover(&mut self) {
        self.dropdown_open = true;
    }

    pub fn dropdown_leave(&mut self) {
        self.dropdown_open = false;
    }

    pub fn logo_click(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Open a sister site by label and close the dropdown.
    ///
    /// Returns whether a site with that label exists.
    pub fn choose_website(&mut self, label: &str, navigator: &mut dyn Navigator) -> bool {
        let Some(site) = WEBSITES.iter().find(|w| w.label == label) else {
            return false;
        };
        let destination = Destination::new(site.destination);
        if !destination.is_placeholder() {
            navigator.navigate(&destination);
        }
        self.dropdown_open = false;
        true
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.body.borrow_mut().scroll_y = scroll_y;
        self.scrolled = scroll_y > SCROLLED_OFFSET;
    }

    pub fn toggle_menu(&mut self) {
        if self.menu.take().is_none() {
            self.menu = Some(ScrollLock::acquire(self.body.clone()));
        }
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Follow a nav item; the mobile menu closes behind it.
    pub fn select(&mut self, label: &str, navigator: &mut dyn Navigator) -> bool {
        let Some(item) = NAV_ITEMS.iter().find(|i| i.label == label) else {
            return false;
        };
        navigator.navigate(&Destination::new(item.destination));
        self.close_menu();
        true
    }

    pub fn contact(&mut self, navigator: &mut dyn Navigator) {
        navigator.navigate(&Destination::new(CONTACT));
        self.close_menu();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/navbar.rs"]
mod tests;
