//! Loading spinner.

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    pub frame: usize,
}

impl Spinner {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }
}
