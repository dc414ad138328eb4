//! Navigation bar menu state.
//!
//! One value describes every menu in the bar, so at most one dropdown or
//! drawer section can be open. Transitions are pure: `(state, event) -> state`.

use storefront_catalog::CategoryId;

/// Width in CSS pixels at and above which the desktop menus are used.
pub const DESKTOP_BREAKPOINT_PX: f64 = 900.0;

/// Layout mode picked from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < DESKTOP_BREAKPOINT_PX {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Viewport::Mobile)
    }
}

/// Which menu, if any, is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    /// A desktop dropdown anchored on the given category button.
    DesktopOpen(CategoryId),
    /// The mobile drawer, all sections collapsed.
    MobileOpen,
    /// The mobile drawer with one accordion section expanded.
    MobileExpanded(CategoryId),
}

/// Things that can happen to the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// A desktop category button was clicked.
    OpenDropdown(CategoryId),
    /// The desktop dropdown asked to close (escape, backdrop).
    CloseDropdown,
    /// A subcategory entry was picked from a dropdown or the drawer.
    SelectSubcategory,
    /// The hamburger button was pressed.
    ToggleDrawer,
    /// The drawer asked to close.
    CloseDrawer,
    /// A drawer section header was pressed.
    ToggleSection(CategoryId),
    /// A click landed outside any open menu.
    ClickOutside,
    /// The router moved to a new location.
    RouteChanged,
    /// The viewport crossed the breakpoint.
    ViewportChanged(Viewport),
}

impl MenuState {
    /// Compute the state after `event`.
    pub fn apply(&self, event: &MenuEvent) -> MenuState {
        use MenuState::*;

        match (self, event) {
            (_, MenuEvent::OpenDropdown(id)) => DesktopOpen(id.clone()),

            (DesktopOpen(_), MenuEvent::CloseDropdown) => Closed,
            (_, MenuEvent::CloseDropdown) => self.clone(),

            (_, MenuEvent::SelectSubcategory) => Closed,

            (Closed | DesktopOpen(_), MenuEvent::ToggleDrawer) => MobileOpen,
            (MobileOpen | MobileExpanded(_), MenuEvent::ToggleDrawer) => Closed,

            (MobileOpen | MobileExpanded(_), MenuEvent::CloseDrawer) => Closed,
            (_, MenuEvent::CloseDrawer) => self.clone(),

            (MobileOpen, MenuEvent::ToggleSection(id)) => MobileExpanded(id.clone()),
            (MobileExpanded(current), MenuEvent::ToggleSection(id)) if current == id => MobileOpen,
            (MobileExpanded(_), MenuEvent::ToggleSection(id)) => MobileExpanded(id.clone()),
            (_, MenuEvent::ToggleSection(_)) => self.clone(),

            (_, MenuEvent::ClickOutside | MenuEvent::RouteChanged | MenuEvent::ViewportChanged(_)) => {
                Closed
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, MenuState::Closed)
    }

    /// Whether the desktop dropdown for `id` is showing.
    pub fn is_dropdown_open(&self, id: &CategoryId) -> bool {
        matches!(self, MenuState::DesktopOpen(open) if open == id)
    }

    pub fn is_drawer_open(&self) -> bool {
        matches!(self, MenuState::MobileOpen | MenuState::MobileExpanded(_))
    }

    /// Whether the drawer section for `id` is expanded.
    pub fn is_section_expanded(&self, id: &CategoryId) -> bool {
        matches!(self, MenuState::MobileExpanded(open) if open == id)
    }
}
