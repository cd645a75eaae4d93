//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, in terminal cells:
//!
//! ```text
//! row 0        ...THE SNAIL TRAIL...
//! rows 2..22   garden (one glyph per cell)   | side panel at column 33
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::frame_stats::frame_rate_label;
use crate::types::{Occupant, Position, GARDEN_HEIGHT, GARDEN_WIDTH, LETTUCE_QUOTA};

pub const TITLE: &str = "...THE SNAIL TRAIL...";
pub const PROMPT: &str = "PRESS 'Q' TO QUIT OR ANY KEY TO CONTINUE";

/// Top row of the garden
const GARDEN_TOP: u16 = 2;
/// Left column of the side panel
const PANEL_LEFT: u16 = GARDEN_WIDTH as u16 + 3;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Extra information shown next to the garden that is not part of the game
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudView {
    /// Seconds taken by the last turn's update and render
    pub frame_secs: Option<f64>,
}

/// Draws the garden and its side panel
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    show_pellets: bool,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw pellets instead of hiding them as blank ground
    pub fn with_pellets_shown(mut self, show: bool) -> Self {
        self.show_pellets = show;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        fb.put_str(0, 0, TITLE, CellStyle::fg(Rgb::new(255, 255, 0)).bold());

        for (r, line) in snap.garden.iter().enumerate() {
            for (c, &occupant) in line.iter().enumerate() {
                let (ch, style) = self.glyph(occupant);
                fb.put_char(c as u16, GARDEN_TOP + r as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, hud);

        if snap.over {
            let prompt = CellStyle::fg(Rgb::new(255, 255, 0)).on(Rgb::new(160, 0, 0));
            fb.put_str(PANEL_LEFT, GARDEN_TOP + 16, PROMPT, prompt);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Screen position of a garden cell
    pub fn cell_origin(pos: Position) -> (u16, u16) {
        (pos.col as u16, GARDEN_TOP + pos.row as u16)
    }

    fn glyph(&self, occupant: Occupant) -> (char, CellStyle) {
        let ground = Rgb::new(0, 70, 0);
        let style = match occupant {
            Occupant::Wall => CellStyle::fg(Rgb::new(170, 120, 60)).on(Rgb::new(60, 40, 20)),
            Occupant::Blank => CellStyle::fg(Rgb::WHITE).on(ground),
            Occupant::Slime => CellStyle::fg(Rgb::new(180, 255, 180)).on(ground),
            Occupant::Pellet if !self.show_pellets => {
                return (' ', CellStyle::fg(Rgb::WHITE).on(ground))
            }
            Occupant::Pellet => CellStyle::fg(Rgb::new(90, 160, 255)).on(ground),
            Occupant::Lettuce => CellStyle::fg(Rgb::new(120, 255, 60)).on(ground).bold(),
            Occupant::Snail => CellStyle::fg(Rgb::new(255, 220, 80)).on(ground).bold(),
            Occupant::Frog => CellStyle::fg(Rgb::new(40, 200, 40)).on(ground).bold(),
            Occupant::FrogRemains => CellStyle::fg(Rgb::new(200, 60, 60)).on(ground),
            Occupant::DeadSnail => CellStyle::fg(Rgb::new(255, 80, 80)).on(ground).bold(),
        };
        (occupant.symbol(), style)
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &HudView) {
        let text = CellStyle::fg(Rgb::WHITE);
        let info = CellStyle::fg(Rgb::new(255, 255, 0)).on(Rgb::new(160, 0, 0));
        let y = |row: u16| GARDEN_TOP + row;

        fb.put_str(PANEL_LEFT, y(0), &format!("SEED: {}", snap.seed), text);
        fb.put_str(PANEL_LEFT, y(1), &format!("TURN: {}", snap.turn), text);

        if let Some(secs) = hud.frame_secs {
            fb.put_str(PANEL_LEFT, y(4), &frame_rate_label(secs), text);
        }

        let controls = format!(
            "TO MOVE USE ARROW KEYS - EAT ALL LETTUCES ({})",
            Occupant::Lettuce.symbol()
        );
        fb.put_str(PANEL_LEFT, y(10), &controls, info);
        fb.put_str(PANEL_LEFT, y(11), "TO QUIT USE 'Q'", info);

        fb.put_str(PANEL_LEFT, y(13), snap.message.text(), text.bold());

        let pellets = format!("SLITHERED OVER {} PELLETS SO FAR!", snap.pellets);
        fb.put_str(PANEL_LEFT, y(15), &pellets, text);

        let eaten = format!("LETTUCES EATEN: {} OF {}", snap.lettuces, LETTUCE_QUOTA);
        fb.put_str(PANEL_LEFT, y(GARDEN_HEIGHT as u16 - 1), &eaten, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, GardenLayout, SequenceRng};
    use crate::types::{Direction, Message};

    fn wide() -> Viewport {
        Viewport::new(100, 24)
    }

    fn layout() -> GardenLayout {
        GardenLayout {
            snail: Position::new(4, 4),
            pellets: vec![Position::new(4, 5)],
            lettuces: vec![Position::new(6, 6)],
            frogs: [Position::new(18, 28), Position::new(18, 27)],
        }
    }

    fn char_at(fb: &FrameBuffer, pos: Position) -> char {
        let (x, y) = GameView::cell_origin(pos);
        fb.get(x, y).map(|c| c.ch).unwrap_or('?')
    }

    #[test]
    fn test_title_and_walls() {
        let game = GameState::from_layout(&layout(), SequenceRng::repeat(0));
        let fb = GameView::new().render(&game.snapshot(), &HudView::default(), wide());

        assert!(fb.row_text(0).starts_with(TITLE));
        assert!(fb.row_text(GARDEN_TOP).starts_with(&"+".repeat(GARDEN_WIDTH as usize)));
        assert_eq!(char_at(&fb, Position::new(4, 4)), '&');
        assert_eq!(char_at(&fb, Position::new(6, 6)), '@');
        assert_eq!(char_at(&fb, Position::new(18, 28)), 'M');
    }

    #[test]
    fn test_pellets_hidden_unless_enabled() {
        let game = GameState::from_layout(&layout(), SequenceRng::repeat(0));
        let snap = game.snapshot();

        let hidden = GameView::new().render(&snap, &HudView::default(), wide());
        assert_eq!(char_at(&hidden, Position::new(4, 5)), ' ');

        let shown = GameView::new()
            .with_pellets_shown(true)
            .render(&snap, &HudView::default(), wide());
        assert_eq!(char_at(&shown, Position::new(4, 5)), '-');
    }

    #[test]
    fn test_panel_shows_message_and_pellets() {
        let mut game = GameState::from_layout(&layout(), SequenceRng::repeat(0));
        game.step(Direction::Right);
        let snap = game.snapshot();
        assert_eq!(snap.message, Message::Pellet);

        let hud = HudView {
            frame_secs: Some(0.5),
        };
        let fb = GameView::new().render(&snap, &hud, wide());
        let screen: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();

        assert!(screen.iter().any(|l| l.contains("SLITHERED OVER 1 PELLETS SO FAR!")));
        assert!(screen.iter().any(|l| l.contains("FRAME RATE = 2.000 at 0.500 s/frame")));
        assert!(screen.iter().any(|l| l.contains("TURN: 1")));
        assert!(!screen.iter().any(|l| l.contains(PROMPT)));
        assert_eq!(char_at(&fb, Position::new(4, 4)), '.');
    }

    #[test]
    fn test_prompt_after_game_over() {
        let mut game = GameState::from_layout(&layout(), SequenceRng::repeat(0));
        game.finish();
        let fb = GameView::new().render(&game.snapshot(), &HudView::default(), wide());
        let screen: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();

        assert!(screen.iter().any(|l| l.contains(PROMPT)));
        assert!(screen.iter().any(|l| l.contains(Message::Survived.text())));
    }

    #[test]
    fn test_small_viewport_clips_without_panic() {
        let game = GameState::from_layout(&layout(), SequenceRng::repeat(0));
        let hud = HudView::default();
        let fb = GameView::new().render(&game.snapshot(), &hud, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.row_text(0), &TITLE[..10]);
    }
}
