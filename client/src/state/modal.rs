//! Shared confirmation modal state.
//!
//! Visible exactly when a message is set. There is no stack: a later `show`
//! overwrites the message of a modal that is already open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Where a click on the open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    /// The overlay outside the content box.
    Backdrop,
    /// Anywhere inside the content box.
    Content,
    CloseControl,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub message: Option<String>,
}

impl ModalState {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    /// Hide for the close control or a backdrop click; content clicks keep it open.
    pub fn dismiss_on_click(&mut self, target: ModalClick) {
        match target {
            ModalClick::Backdrop | ModalClick::CloseControl => self.hide(),
            ModalClick::Content => {}
        }
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}
