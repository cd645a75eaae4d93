use std::collections::VecDeque;

use anyhow::Result;
use log::info;

use crate::core::{GameEnd, GameSnapshot, GameState, RandomSource, TurnOutcome};
use crate::types::PlayerInput;

/// Source of player inputs, one per turn
///
/// `next_input` may block (the keyboard does). Errors end the session.
pub trait InputProvider {
    fn next_input(&mut self) -> Result<PlayerInput>;
}

impl<P: InputProvider + ?Sized> InputProvider for &mut P {
    fn next_input(&mut self) -> Result<PlayerInput> {
        (**self).next_input()
    }
}

impl<P: InputProvider + ?Sized> InputProvider for Box<P> {
    fn next_input(&mut self) -> Result<PlayerInput> {
        (**self).next_input()
    }
}

/// Hooks called as a game progresses
///
/// Renderers and recorders implement this. All hooks default to no-ops.
pub trait TurnObserver {
    fn game_started(&mut self, _game: &GameSnapshot) -> Result<()> {
        Ok(())
    }

    /// Called as soon as an input arrives, before the turn runs
    fn input_received(&mut self, _input: PlayerInput) -> Result<()> {
        Ok(())
    }

    fn turn_finished(&mut self, _outcome: &TurnOutcome, _game: &GameSnapshot) -> Result<()> {
        Ok(())
    }

    fn game_finished(&mut self, _end: GameEnd, _game: &GameSnapshot) -> Result<()> {
        Ok(())
    }
}

impl TurnObserver for () {}

impl<O: TurnObserver + ?Sized> TurnObserver for &mut O {
    fn game_started(&mut self, game: &GameSnapshot) -> Result<()> {
        (**self).game_started(game)
    }

    fn input_received(&mut self, input: PlayerInput) -> Result<()> {
        (**self).input_received(input)
    }

    fn turn_finished(&mut self, outcome: &TurnOutcome, game: &GameSnapshot) -> Result<()> {
        (**self).turn_finished(outcome, game)
    }

    fn game_finished(&mut self, end: GameEnd, game: &GameSnapshot) -> Result<()> {
        (**self).game_finished(end, game)
    }
}

impl<O: TurnObserver> TurnObserver for Option<O> {
    fn game_started(&mut self, game: &GameSnapshot) -> Result<()> {
        match self {
            Some(o) => o.game_started(game),
            None => Ok(()),
        }
    }

    fn input_received(&mut self, input: PlayerInput) -> Result<()> {
        match self {
            Some(o) => o.input_received(input),
            None => Ok(()),
        }
    }

    fn turn_finished(&mut self, outcome: &TurnOutcome, game: &GameSnapshot) -> Result<()> {
        match self {
            Some(o) => o.turn_finished(outcome, game),
            None => Ok(()),
        }
    }

    fn game_finished(&mut self, end: GameEnd, game: &GameSnapshot) -> Result<()> {
        match self {
            Some(o) => o.game_finished(end, game),
            None => Ok(()),
        }
    }
}

/// Fan out to two observers, first `A` then `B`
impl<A: TurnObserver, B: TurnObserver> TurnObserver for (A, B) {
    fn game_started(&mut self, game: &GameSnapshot) -> Result<()> {
        self.0.game_started(game)?;
        self.1.game_started(game)
    }

    fn input_received(&mut self, input: PlayerInput) -> Result<()> {
        self.0.input_received(input)?;
        self.1.input_received(input)
    }

    fn turn_finished(&mut self, outcome: &TurnOutcome, game: &GameSnapshot) -> Result<()> {
        self.0.turn_finished(outcome, game)?;
        self.1.turn_finished(outcome, game)
    }

    fn game_finished(&mut self, end: GameEnd, game: &GameSnapshot) -> Result<()> {
        self.0.game_finished(end, game)?;
        self.1.game_finished(end, game)
    }
}

/// Fixed list of inputs, then Quit forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<PlayerInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = PlayerInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    /// Inputs not yet handed out
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl InputProvider for ScriptedInput {
    fn next_input(&mut self) -> Result<PlayerInput> {
        Ok(self.inputs.pop_front().unwrap_or(PlayerInput::Quit))
    }
}

/// Play `game` until the snail dies, wins or the player quits
///
/// Quit is checked once per turn, before the turn runs. The game is always
/// closed with [`GameState::finish`] before returning.
pub fn play_game<R, I, O>(
    game: &mut GameState<R>,
    input: &mut I,
    observer: &mut O,
) -> Result<GameEnd>
where
    R: RandomSource,
    I: InputProvider + ?Sized,
    O: TurnObserver + ?Sized,
{
    info!("game started (seed {})", game.seed());
    observer.game_started(&game.snapshot())?;

    while !game.is_over() {
        let next = input.next_input()?;
        observer.input_received(next)?;
        match next {
            PlayerInput::Quit => break,
            PlayerInput::Move(direction) => {
                let outcome = game.step(direction);
                observer.turn_finished(&outcome, &game.snapshot())?;
            }
        }
    }

    let end = game.finish();
    info!("game finished after {} turns: {:?}", game.turn(), end);
    observer.game_finished(end, &game.snapshot())?;
    Ok(end)
}

/// Play games back to back until the player declines another go
///
/// Game `n` (0-based) is seeded `first_seed + n`. After each game one more
/// input answers the "another go?" prompt: Quit ends the session, anything
/// else starts the next game.
pub fn play_session<I, O>(first_seed: u32, input: &mut I, observer: &mut O) -> Result<Vec<GameEnd>>
where
    I: InputProvider + ?Sized,
    O: TurnObserver + ?Sized,
{
    let mut ends = Vec::new();
    loop {
        let seed = first_seed.wrapping_add(ends.len() as u32);
        let mut game = GameState::new(seed);
        ends.push(play_game(&mut game, input, observer)?);

        if input.next_input()? == PlayerInput::Quit {
            break;
        }
    }
    info!("session over after {} games", ends.len());
    Ok(ends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GardenLayout, SequenceRng};
    use crate::types::{Direction, Message, Occupant, Position};

    #[derive(Default)]
    struct Tally {
        started: usize,
        turns: Vec<u32>,
        finished: Option<GameEnd>,
    }

    impl TurnObserver for Tally {
        fn game_started(&mut self, _game: &GameSnapshot) -> Result<()> {
            self.started += 1;
            Ok(())
        }

        fn turn_finished(&mut self, outcome: &TurnOutcome, _game: &GameSnapshot) -> Result<()> {
            self.turns.push(outcome.turn);
            Ok(())
        }

        fn game_finished(&mut self, end: GameEnd, _game: &GameSnapshot) -> Result<()> {
            self.finished = Some(end);
            Ok(())
        }
    }

    fn quiet_game(layout: GardenLayout) -> GameState<SequenceRng> {
        GameState::from_layout(&layout, SequenceRng::repeat(0))
    }

    fn far_frogs() -> [Position; 2] {
        [Position::new(18, 28), Position::new(18, 1)]
    }

    #[test]
    fn test_quit_ends_game_alive() {
        let mut game = quiet_game(GardenLayout {
            snail: Position::new(2, 14),
            pellets: vec![],
            lettuces: vec![],
            frogs: far_frogs(),
        });
        let mut input = ScriptedInput::new([
            PlayerInput::Move(Direction::Right),
            PlayerInput::Quit,
            PlayerInput::Move(Direction::Right),
        ]);
        let mut tally = Tally::default();

        let end = play_game(&mut game, &mut input, &mut tally).unwrap();

        assert_eq!(end, GameEnd::Quit);
        assert_eq!(tally.started, 1);
        assert_eq!(tally.turns, vec![1]);
        assert_eq!(tally.finished, Some(GameEnd::Quit));
        assert_eq!(input.remaining(), 1);
        assert_eq!(game.message(), Message::Survived);
    }

    #[test]
    fn test_death_stops_reading_input() {
        let mut game = quiet_game(GardenLayout {
            snail: Position::new(5, 5),
            pellets: vec![],
            lettuces: vec![],
            frogs: [Position::new(5, 6), Position::new(18, 28)],
        });
        let mut input = ScriptedInput::new([
            PlayerInput::Move(Direction::Right),
            PlayerInput::Move(Direction::Down),
        ]);

        let end = play_game(&mut game, &mut input, &mut ()).unwrap();

        assert_eq!(end, GameEnd::Died);
        assert_eq!(input.remaining(), 1);
        assert_eq!(game.message(), Message::RestInPeas);
        assert!(game.garden().is(Position::new(5, 6), Occupant::DeadSnail));
    }

    #[test]
    fn test_win_reports_survival() {
        let lettuces = vec![
            Position::new(9, 11),
            Position::new(9, 12),
            Position::new(9, 13),
            Position::new(9, 14),
        ];
        let mut game = quiet_game(GardenLayout {
            snail: Position::new(9, 10),
            pellets: vec![],
            lettuces,
            frogs: far_frogs(),
        });
        let mut input = ScriptedInput::new([PlayerInput::Move(Direction::Right); 4]);
        let mut tally = Tally::default();

        let end = play_game(&mut game, &mut input, &mut tally).unwrap();

        assert_eq!(end, GameEnd::Won);
        assert_eq!(tally.turns.len(), 4);
        assert_eq!(game.lettuces_eaten(), 4);
        assert_eq!(game.message(), Message::Survived);
    }

    #[test]
    fn test_observer_pair_sees_every_turn() {
        let mut game = quiet_game(GardenLayout {
            snail: Position::new(2, 2),
            pellets: vec![],
            lettuces: vec![],
            frogs: far_frogs(),
        });
        let mut input = ScriptedInput::new([PlayerInput::Move(Direction::Down); 3]);
        let mut pair = (Tally::default(), Some(Tally::default()));

        play_game(&mut game, &mut input, &mut pair).unwrap();

        assert_eq!(pair.0.turns, vec![1, 2, 3]);
        assert_eq!(pair.1.as_ref().map(|t| t.turns.len()), Some(3));
    }

    #[test]
    fn test_session_plays_until_declined() {
        // Quit each game at once; "any key" at the first prompt, Quit at the second.
        let mut input = ScriptedInput::new([
            PlayerInput::Quit,
            PlayerInput::Move(Direction::Left),
            PlayerInput::Quit,
            PlayerInput::Quit,
            PlayerInput::Move(Direction::Up),
        ]);
        let mut tally = Tally::default();

        let ends = play_session(10, &mut input, &mut tally).unwrap();

        assert_eq!(ends, vec![GameEnd::Quit, GameEnd::Quit]);
        assert_eq!(tally.started, 2);
        assert!(tally.turns.is_empty());
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_session_ends_when_input_runs_out() {
        let mut input = ScriptedInput::default();
        let ends = play_session(1, &mut input, &mut ()).unwrap();
        assert_eq!(ends, vec![GameEnd::Quit]);
    }
}
