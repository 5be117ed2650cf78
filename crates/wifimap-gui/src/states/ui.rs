use std::time::Duration;

/// Overall UI state that is not part of the survey session.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Duration of the last completed scan.
    pub last_scan: Option<Duration>,
    pub scans_completed: usize,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
