use snail_trail::core::GameState;
use snail_trail::term::{GameView, HudView, Viewport, PROMPT, TITLE};
use snail_trail::types::{Direction, Occupant, GARDEN_HEIGHT};

fn screen_lines(view: GameView, game: &GameState) -> Vec<String> {
    let fb = view.render(&game.snapshot(), &HudView::default(), Viewport::new(90, 24));
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn term_view_draws_garden_glyph_for_glyph() {
    let mut game = GameState::new(31337);
    for dir in [Direction::Left, Direction::Up, Direction::Up] {
        if !game.is_over() {
            game.step(dir);
        }
    }

    let lines = screen_lines(GameView::new().with_pellets_shown(true), &game);
    assert!(lines[0].starts_with(TITLE));

    for (r, expected) in game.garden().to_lines().iter().enumerate() {
        assert!(
            lines[2 + r].starts_with(expected.as_str()),
            "row {}: {:?} vs {:?}",
            r,
            lines[2 + r],
            expected
        );
    }
}

#[test]
fn term_view_hides_pellets_by_default() {
    let game = GameState::new(5);
    let lines = screen_lines(GameView::new(), &game);
    let pellet = Occupant::Pellet.symbol();

    for line in &lines[2..2 + GARDEN_HEIGHT as usize] {
        assert!(!line[..30].contains(pellet), "pellet visible in {:?}", line);
    }
    assert!(game.garden().count(Occupant::Pellet) > 0);
}

#[test]
fn term_view_prompts_after_finish() {
    let mut game = GameState::new(8);
    assert!(!screen_lines(GameView::new(), &game).iter().any(|l| l.contains(PROMPT)));

    game.finish();
    let lines = screen_lines(GameView::new(), &game);
    assert!(lines.iter().any(|l| l.contains(PROMPT)));
    assert!(lines.iter().any(|l| l.contains(game.message().text())));
}
