use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

/// Top-level page shown in the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl View {
    /// Navbar order.
    pub const ALL: [View; 4] = [View::Home, View::About, View::Services, View::Contact];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Services => "Services",
            View::Contact => "Contact",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Holds the active view. Every view is reachable from every other one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    pub fn active(&self) -> View {
        self.active
    }
}

impl Reducible for ViewRouter {
    type Action = View;

    fn reduce(self: Rc<Self>, view: View) -> Rc<Self> {
        if self.active == view {
            return self;
        }
        Rc::new(ViewRouter { active: view })
    }
}

/// Jump back to the top after switching views.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(ViewRouter::default().active(), View::Home);
    }

    #[test]
    fn set_view_then_read_returns_it() {
        for view in View::ALL {
            let router = Rc::new(ViewRouter::default()).reduce(view);
            assert_eq!(router.active(), view);
        }
    }

    #[test]
    fn any_view_reachable_from_any_other() {
        for from in View::ALL {
            for to in View::ALL {
                let router = Rc::new(ViewRouter::default()).reduce(from).reduce(to);
                assert_eq!(router.active(), to);
            }
        }
    }

    #[test]
    fn reselecting_active_view_keeps_state() {
        let router = Rc::new(ViewRouter::default()).reduce(View::Services);
        let again = router.clone().reduce(View::Services);
        assert!(Rc::ptr_eq(&router, &again));
    }

    #[test]
    fn labels_follow_nav_order() {
        let labels: Vec<_> = View::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Contact"]);
    }
}
