//! Where the confirmation screen can send the user next.
//!
//! The view only declares these requests as anchor targets. The page is
//! served without a hydration bundle, so the browser performs the transition.

use crate::frontend::components::button::ButtonVariant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Checkout,
}

impl Destination {
    pub const fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Checkout => "/checkout",
        }
    }
}

/// Intent to move the visible location to `path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: &'static str,
}

/// A labelled navigation trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub destination: Destination,
    pub variant: ButtonVariant,
}

impl NavAction {
    pub const fn request(&self) -> NavigationRequest {
        NavigationRequest {
            path: self.destination.path(),
        }
    }
}
