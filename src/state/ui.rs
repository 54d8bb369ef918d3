//! Shell UI state: toasts and the mobile sidebar.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Single-slot toast. A new toast replaces the previous one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub current: Option<(ToastKind, String)>,
}

impl ToastState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some((ToastKind::Success, message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some((ToastKind::Error, message.into()));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// Sidebar open/closed state (only matters on narrow viewports).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
}
