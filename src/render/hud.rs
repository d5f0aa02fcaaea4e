/// Receiver of score and end-screen updates
pub trait ScoreBoard {
    fn publish_score(&mut self, score: u32);

    /// Called once when a game ends
    fn publish_final_score(&mut self, score: u32);

    fn set_end_screen_visible(&mut self, visible: bool);
}

/// Score and end-screen values shown around the canvas
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub final_score: Option<u32>,
    pub end_screen_visible: bool,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreBoard for Hud {
    fn publish_score(&mut self, score: u32) {
        self.score = score;
    }

    fn publish_final_score(&mut self, score: u32) {
        self.final_score = Some(score);
    }

    fn set_end_screen_visible(&mut self, visible: bool) {
        self.end_screen_visible = visible;
    }
}
