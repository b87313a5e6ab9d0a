//! Pointer hit classification
//!
//! A press is classified against the widget's layout before it reaches the
//! controller. The clear control and the open menu are checked before the
//! container, since the menu may be drawn outside the container bounds.

/// A cell position, as reported by terminal mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (u32::from(point.x), u32::from(point.y));
        let (x, y) = (u32::from(self.x), u32::from(self.y));
        px >= x
            && py >= y
            && px < x + u32::from(self.width)
            && py < y + u32::from(self.height)
    }
}

/// Where a pointer press landed relative to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Anywhere outside the widget
    Outside,
    /// Inside the widget, but not on the menu or the clear control
    Container,
    /// Inside the open option menu
    Menu,
    /// On the clear control
    ClearControl,
}

/// Current layout of one widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetRegions {
    /// Bounds of the whole control (label excluded)
    pub container: Rect,
    /// Bounds of the option menu while it is shown
    pub menu: Option<Rect>,
    /// Bounds of the clear control while it is shown
    pub clear_control: Option<Rect>,
}

impl WidgetRegions {
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            ..Default::default()
        }
    }

    pub fn with_menu(mut self, menu: Rect) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn with_clear_control(mut self, clear_control: Rect) -> Self {
        self.clear_control = Some(clear_control);
        self
    }

    pub fn classify(&self, point: Point) -> PointerTarget {
        if self.clear_control.is_some_and(|r| r.contains(point)) {
            PointerTarget::ClearControl
        } else if self.menu.is_some_and(|r| r.contains(point)) {
            PointerTarget::Menu
        } else if self.container.contains(point) {
            PointerTarget::Container
        } else {
            PointerTarget::Outside
        }
    }
}
