//! Which overlays are showing: the section panel and the profile modal.
//!
//! The two layers are independent flags. The modal always stacks above the
//! panel, so Escape peels the modal first. Nothing here persists.

/// What a pointer activation landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionTarget {
    /// A planet, by section id.
    Section(String),
    Sun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    Panel,
    Profile,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayController {
    panel: Option<String>,
    profile_open: bool,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a selection: planets open their panel, the sun opens the profile.
    /// Returns the layer that changed, if any.
    pub fn select(&mut self, target: SelectionTarget) -> Option<OverlayLayer> {
        match target {
            SelectionTarget::Section(id) => self.open(id).then_some(OverlayLayer::Panel),
            SelectionTarget::Sun => self.open_profile().then_some(OverlayLayer::Profile),
        }
    }

    /// Show the panel for `id`, replacing any open panel. Returns `true` on change.
    pub fn open(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.panel.as_deref() == Some(id.as_str()) {
            return false;
        }
        log::debug!("panel open: {}", id);
        self.panel = Some(id);
        true
    }

    /// Hide the panel. No-op when nothing is open.
    pub fn close(&mut self) -> bool {
        if self.panel.take().is_none() {
            return false;
        }
        log::debug!("panel closed");
        true
    }

    pub fn open_profile(&mut self) -> bool {
        if self.profile_open {
            return false;
        }
        log::debug!("profile open");
        self.profile_open = true;
        true
    }

    pub fn close_profile(&mut self) -> bool {
        if !self.profile_open {
            return false;
        }
        log::debug!("profile closed");
        self.profile_open = false;
        true
    }

    /// Escape: close the top-most open layer.
    pub fn dismiss_top(&mut self) -> Option<OverlayLayer> {
        let layer = self.top_layer()?;
        self.close_layer(layer);
        Some(layer)
    }

    /// Click on a layer's backdrop closes that layer only.
    pub fn close_layer(&mut self, layer: OverlayLayer) -> bool {
        match layer {
            OverlayLayer::Panel => self.close(),
            OverlayLayer::Profile => self.close_profile(),
        }
    }

    pub fn top_layer(&self) -> Option<OverlayLayer> {
        if self.profile_open {
            Some(OverlayLayer::Profile)
        } else if self.panel.is_some() {
            Some(OverlayLayer::Panel)
        } else {
            None
        }
    }

    pub fn panel_id(&self) -> Option<&str> {
        self.panel.as_deref()
    }

    pub fn is_profile_open(&self) -> bool {
        self.profile_open
    }
}
