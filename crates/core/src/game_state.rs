//! Game state module - one garden, one snail, two frogs, one slime ledger
//!
//! [`GameState`] owns everything a game needs and exposes a single
//! deterministic transition, [`GameState::step`]. A turn runs in a fixed order:
//!
//! 1. the snail tries to move ([`GameState::apply_player_move`])
//! 2. the oldest slime deposit dissolves ([`GameState::dissolve_slime`])
//! 3. the snail is (re)drawn at its position
//! 4. each frog leaps toward the snail and may meet an eagle ([`GameState::advance_frog`])
//!
//! Frogs sit out the turn once the snail is dead or has eaten its fill.

use arrayvec::ArrayVec;
use log::debug;

use crate::creatures::{leap_toward, Frog, Snail};
use crate::garden::Garden;
use crate::rng::{RandomSource, SimpleRng};
use crate::slime::SlimeLedger;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameEvent, Message, Occupant, Position, SnailAction, EAGLE_STRIKE, GARDEN_HEIGHT,
    GARDEN_WIDTH, LETTUCE_QUOTA, NUM_FROGS, NUM_PELLETS, PELLET_THRESHOLD,
};

/// Most game events a single turn can produce (one slime, one per frog)
pub const MAX_TURN_EVENTS: usize = 1 + NUM_FROGS;

/// Explicit placement of everything in a fresh garden
///
/// Used to set up scripted games. Placement follows the same rules as a
/// random scatter: pellets and lettuces go down first, frogs last (a frog on a
/// pellet destroys it, a frog on a lettuce masks it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenLayout {
    pub snail: Position,
    pub pellets: Vec<Position>,
    pub lettuces: Vec<Position>,
    pub frogs: [Position; NUM_FROGS],
}

/// Everything that happened during one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// 1-based turn number within the game
    pub turn: u32,
    /// The direction the player asked for
    pub command: Direction,
    /// What the snail did with it
    pub action: SnailAction,
    /// Garden events, in the order they happened
    pub events: ArrayVec<GameEvent, MAX_TURN_EVENTS>,
    /// Status message after the turn
    pub message: Message,
    pub alive: bool,
    pub won: bool,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// All lettuces eaten
    Won,
    /// Player quit with the snail still alive
    Quit,
    /// Pellets or a frog got the snail
    Died,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    garden: Garden,
    snail: Snail,
    frogs: [Frog; NUM_FROGS],
    slime: SlimeLedger,
    /// Slime laid by this turn's move, committed to the ledger during decay
    pending_slime: Option<Position>,
    won: bool,
    finished: Option<GameEnd>,
    message: Message,
    turn: u32,
    seed: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Start a new game with a randomly scattered garden
    pub fn new(seed: u32) -> Self {
        Self::scattered(SimpleRng::new(seed), seed)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Start a new game, scattering the garden with `rng`
    ///
    /// `seed` is only recorded for display and replay; all draws come from `rng`.
    pub fn scattered(mut rng: R, seed: u32) -> Self {
        let snail = random_interior(&mut rng);

        let mut garden = Garden::new();
        garden.set(snail, Occupant::Snail);

        let mut pellets = Vec::with_capacity(NUM_PELLETS);
        for _ in 0..NUM_PELLETS {
            let pos = loop {
                let pos = random_interior(&mut rng);
                if pos != snail && !pellets.contains(&pos) {
                    break pos;
                }
            };
            pellets.push(pos);
        }

        let mut lettuces = Vec::with_capacity(LETTUCE_QUOTA as usize);
        for _ in 0..LETTUCE_QUOTA {
            let pos = loop {
                let pos = random_interior(&mut rng);
                if pos != snail && !pellets.contains(&pos) && !lettuces.contains(&pos) {
                    break pos;
                }
            };
            lettuces.push(pos);
        }

        let mut frogs = [Position::default(); NUM_FROGS];
        for i in 0..NUM_FROGS {
            frogs[i] = loop {
                let pos = random_interior(&mut rng);
                if pos != snail && !frogs[..i].contains(&pos) {
                    break pos;
                }
            };
        }

        let layout = GardenLayout {
            snail,
            pellets,
            lettuces,
            frogs,
        };
        let mut state = Self::from_layout(&layout, rng);
        state.seed = seed;
        state
    }

    /// Start a new game from an explicit layout
    pub fn from_layout(layout: &GardenLayout, rng: R) -> Self {
        debug_assert!(layout.snail.is_interior(), "snail must start inside the walls");

        let mut garden = Garden::new();
        garden.set(layout.snail, Occupant::Snail);
        for &pos in &layout.pellets {
            garden.set(pos, Occupant::Pellet);
        }
        for &pos in &layout.lettuces {
            garden.set(pos, Occupant::Lettuce);
        }

        let mut frogs = [Frog::new(Position::default()); NUM_FROGS];
        for (frog, &pos) in frogs.iter_mut().zip(layout.frogs.iter()) {
            *frog = Frog::new(pos);
            if garden.is(pos, Occupant::Lettuce) {
                frog.masked_lettuce = Some(pos);
            }
            garden.set(pos, Occupant::Frog);
        }

        Self {
            garden,
            snail: Snail::new(layout.snail),
            frogs,
            slime: SlimeLedger::new(),
            pending_slime: None,
            won: false,
            finished: None,
            message: Message::Ready,
            turn: 0,
            seed: 0,
            rng,
        }
    }

    /// Run one full turn for the given player direction
    ///
    /// Once the game is over this is a no-op that reports the frozen state.
    pub fn step(&mut self, direction: Direction) -> TurnOutcome {
        let mut events = ArrayVec::new();

        if self.is_over() {
            return TurnOutcome {
                turn: self.turn,
                command: direction,
                action: SnailAction::NoMove,
                events,
                message: self.message,
                alive: self.snail.alive,
                won: self.won,
            };
        }

        self.turn += 1;
        let action = self.apply_player_move(direction);

        if let Some(at) = self.dissolve_slime() {
            events.push(GameEvent::SlimeDissolved { at });
        }

        self.garden.set(self.snail.position, Occupant::Snail);

        for index in 0..NUM_FROGS {
            if let Some(event) = self.advance_frog(index) {
                events.push(event);
            }
        }

        TurnOutcome {
            turn: self.turn,
            command: direction,
            action,
            events,
            message: self.message,
            alive: self.snail.alive,
            won: self.won,
        }
    }

    /// Resolve the snail's move against whatever occupies the target cell
    ///
    /// A successful move leaves slime on the cell the snail left; the deposit is
    /// handed to the slime ledger by the next [`GameState::dissolve_slime`].
    pub fn apply_player_move(&mut self, direction: Direction) -> SnailAction {
        if self.is_over() {
            return SnailAction::NoMove;
        }
        if direction == Direction::None {
            self.message = Message::InvalidKey;
            return SnailAction::NoMove;
        }

        let from = self.snail.position;
        let target = from.step(direction);

        match self.garden.at(target) {
            Occupant::Blank | Occupant::FrogRemains => {
                self.slither(from, target);
                self.message = Message::Moved;
                SnailAction::HitOther
            }
            Occupant::Pellet => {
                self.slither(from, target);
                self.snail.pellets += 1;
                if self.snail.pellets >= PELLET_THRESHOLD {
                    self.snail.alive = false;
                    self.message = Message::TooManyPellets;
                    debug!("turn {}: snail poisoned at {:?}", self.turn, target);
                    SnailAction::HitFinalPellet
                } else {
                    self.message = Message::Pellet;
                    SnailAction::HitPellet
                }
            }
            Occupant::Lettuce => {
                self.slither(from, target);
                self.snail.lettuces += 1;
                if self.snail.lettuces >= LETTUCE_QUOTA {
                    self.won = true;
                    self.message = Message::LastLettuce;
                    debug!("turn {}: last lettuce eaten", self.turn);
                    SnailAction::HitFinalLettuce
                } else {
                    self.message = Message::Lettuce;
                    SnailAction::HitLettuce
                }
            }
            Occupant::Frog => {
                // A final trail of slime, never recorded in the ledger.
                self.garden.set(from, Occupant::Slime);
                self.snail.position = target;
                self.snail.alive = false;
                self.message = Message::HitFrog;
                debug!("turn {}: snail ran into a frog at {:?}", self.turn, target);
                SnailAction::HitFrog
            }
            Occupant::Wall => {
                self.message = Message::Wall;
                SnailAction::HitWall
            }
            Occupant::Slime | Occupant::Snail | Occupant::DeadSnail => {
                self.message = Message::BlockedBySlime;
                SnailAction::HitSlime
            }
        }
    }

    fn slither(&mut self, from: Position, to: Position) {
        self.garden.set(from, Occupant::Slime);
        self.pending_slime = Some(from);
        self.snail.position = to;
    }

    /// Advance the slime ledger one turn
    ///
    /// The deposit laid `SLIME_LIFETIME` turns ago is blanked out. The cell is
    /// written unconditionally, even if a frog has landed there since.
    pub fn dissolve_slime(&mut self) -> Option<Position> {
        let expired = self.slime.advance(self.pending_slime.take())?;
        self.garden.set(expired, Occupant::Blank);
        Some(expired)
    }

    /// Leap one frog toward the snail and roll for an eagle strike
    ///
    /// Does nothing for a frog already taken by an eagle, or when the snail is
    /// dead or full.
    pub fn advance_frog(&mut self, index: usize) -> Option<GameEvent> {
        let from = self.frogs.get(index)?.position?;
        if self.is_over() {
            return None;
        }

        let mask = self.frogs[index].masked_lettuce.take();
        match self.frog_sharing(index, from) {
            // The frog left behind keeps the cell and takes over any lettuce.
            Some(other) => {
                if mask.is_some() {
                    self.frogs[other].masked_lettuce = mask;
                }
            }
            None => {
                let vacated = if mask.is_some() {
                    Occupant::Lettuce
                } else {
                    Occupant::Blank
                };
                self.garden.set(from, vacated);
            }
        }

        let to = leap_toward(from, self.snail.position);
        let on_lettuce = self.garden.is(to, Occupant::Lettuce);

        if self.eagle_strikes() {
            self.frogs[index].remove();
            let left_behind = if on_lettuce {
                Occupant::Lettuce
            } else if self.frog_sharing(index, to).is_some() {
                Occupant::Frog
            } else {
                Occupant::FrogRemains
            };
            self.garden.set(to, left_behind);
            self.message = Message::EagleGotFrog;
            debug!("turn {}: eagle took frog {} at {:?}", self.turn, index, to);
            return Some(GameEvent::EagleTookFrog { frog: index, at: to });
        }

        self.frogs[index].position = Some(to);

        if to == self.snail.position {
            self.snail.alive = false;
            self.message = Message::FrogGotYou;
            debug!("turn {}: frog {} landed on the snail", self.turn, index);
            return Some(GameEvent::FrogHitsSnail { frog: index, at: to });
        }

        if on_lettuce {
            self.frogs[index].masked_lettuce = Some(to);
        }
        self.garden.set(to, Occupant::Frog);
        Some(GameEvent::FrogLanded { frog: index, at: to })
    }

    /// Another frog still in the garden sitting at `pos`
    fn frog_sharing(&self, index: usize, pos: Position) -> Option<usize> {
        self.frogs
            .iter()
            .enumerate()
            .find(|&(i, frog)| i != index && frog.position == Some(pos))
            .map(|(i, _)| i)
    }

    fn eagle_strikes(&mut self) -> bool {
        self.rng.next_below(EAGLE_STRIKE) == EAGLE_STRIKE - 1
    }

    /// Close the game: lay out the shell if the snail died and set the final message
    ///
    /// Idempotent; later calls return the first result.
    pub fn finish(&mut self) -> GameEnd {
        if let Some(end) = self.finished {
            return end;
        }

        let end = if !self.snail.alive {
            self.garden.set(self.snail.position, Occupant::DeadSnail);
            self.message = Message::RestInPeas;
            GameEnd::Died
        } else {
            self.message = Message::Survived;
            if self.won {
                GameEnd::Won
            } else {
                GameEnd::Quit
            }
        };

        self.finished = Some(end);
        end
    }

    /// Whether no further turns can be played
    pub fn is_over(&self) -> bool {
        !self.snail.alive || self.won || self.finished.is_some()
    }

    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn snail(&self) -> &Snail {
        &self.snail
    }

    pub fn frogs(&self) -> &[Frog; NUM_FROGS] {
        &self.frogs
    }

    pub fn slime(&self) -> &SlimeLedger {
        &self.slime
    }

    /// Pellets slithered over so far
    pub fn pellets(&self) -> u32 {
        self.snail.pellets
    }

    /// Lettuces eaten so far
    pub fn lettuces_eaten(&self) -> u32 {
        self.snail.lettuces
    }

    pub fn is_alive(&self) -> bool {
        self.snail.alive
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Result recorded by [`GameState::finish`], if it has been called
    pub fn end(&self) -> Option<GameEnd> {
        self.finished
    }

    pub fn message(&self) -> Message {
        self.message
    }

    /// Turns played so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Lettuces still in the garden, including any hidden under frogs
    pub fn lettuces_remaining(&self) -> usize {
        let hidden = self
            .frogs
            .iter()
            .filter(|f| f.masked_lettuce.is_some())
            .count();
        self.garden.count(Occupant::Lettuce) + hidden
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.garden = *self.garden.rows();
        out.snail = self.snail.position;
        for (slot, frog) in out.frogs.iter_mut().zip(self.frogs.iter()) {
            *slot = frog.position;
        }
        out.alive = self.snail.alive;
        out.won = self.won;
        out.over = self.is_over();
        out.pellets = self.snail.pellets;
        out.lettuces = self.snail.lettuces;
        out.message = self.message;
        out.turn = self.turn;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Uniform interior cell, row drawn first
fn random_interior<R: RandomSource>(rng: &mut R) -> Position {
    let row = 1 + rng.next_below((GARDEN_HEIGHT - 2) as u32) as i8;
    let col = 1 + rng.next_below((GARDEN_WIDTH - 2) as u32) as i8;
    Position::new(row, col)
}
