//! Highlight state shared by the map and the area chart.
//!
//! Both render passes read the same snapshot each cycle instead of a shared
//! mutable variable. The controller is the only writer; it produces a new
//! snapshot from each map hover event and hands copies to the renderers.

/// Immutable snapshot of the highlighted borough, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    active: Option<String>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn borough(name: impl Into<String>) -> Self {
        Self {
            active: Some(name.into()),
        }
    }

    /// The active borough as the filter argument for
    /// [`select_value`](crate::process::select_value).
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

/// Single owner of the current highlight.
///
/// Hovering a borough replaces the highlight; nothing ever clears it back
/// to none, so once any hover has happened some borough stays highlighted.
/// That matches the map's current hover-only event wiring.
#[derive(Debug, Default)]
pub struct HighlightController {
    current: Highlight,
}

impl HighlightController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hover and return the snapshot renderers should use next.
    pub fn on_hover(&mut self, borough: &str) -> Highlight {
        self.current = Highlight::borough(borough);
        self.current.clone()
    }

    pub fn snapshot(&self) -> Highlight {
        self.current.clone()
    }
}
