use anyhow::Result;

use crate::core::{GameEnd, GameSnapshot, TurnOutcome};
use crate::engine::TurnObserver;
use crate::fb::FrameBuffer;
use crate::frame_stats::FrameStats;
use crate::game_view::{GameView, HudView};
use crate::renderer::TerminalRenderer;
use crate::types::PlayerInput;

/// Draws every turn to the terminal and times it
///
/// The frame rate shown on screen is the previous turn's.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    stats: FrameStats,
}

impl TerminalScreen {
    pub fn new(view: GameView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            stats: FrameStats::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.renderer.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let hud = HudView {
            frame_secs: self.stats.last_secs(),
        };
        let viewport = self.renderer.viewport();
        self.view.render_into(snap, &hud, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}

impl TurnObserver for TerminalScreen {
    fn game_started(&mut self, game: &GameSnapshot) -> Result<()> {
        self.draw(game)
    }

    fn input_received(&mut self, _input: PlayerInput) -> Result<()> {
        self.stats.begin();
        Ok(())
    }

    fn turn_finished(&mut self, _outcome: &TurnOutcome, game: &GameSnapshot) -> Result<()> {
        self.draw(game)?;
        self.stats.finish();
        Ok(())
    }

    fn game_finished(&mut self, _end: GameEnd, game: &GameSnapshot) -> Result<()> {
        self.draw(game)
    }
}
