use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snail_trail::core::{GameState, GardenLayout, SequenceRng};
use snail_trail::engine::{play_game, ScriptedInput};
use snail_trail::types::{Direction, PlayerInput, Position};

fn bench_new_game(c: &mut Criterion) {
    let mut seed = 0u32;
    c.bench_function("new_game_scatter", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            GameState::new(black_box(seed))
        })
    });
}

fn bench_turn(c: &mut Criterion) {
    // A snail pacing up and down next to the wall while the frogs close in.
    let layout = GardenLayout {
        snail: Position::new(9, 1),
        pellets: vec![],
        lettuces: vec![],
        frogs: [Position::new(1, 28), Position::new(18, 28)],
    };
    let template = GameState::from_layout(&layout, SequenceRng::repeat(0));

    c.bench_function("turn_step", |b| {
        b.iter_batched(
            || template.clone(),
            |mut game| game.step(black_box(Direction::Down)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_game(c: &mut Criterion) {
    let pattern = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    let moves: Vec<PlayerInput> = pattern
        .iter()
        .cycle()
        .take(200)
        .map(|&d| PlayerInput::Move(d))
        .collect();

    c.bench_function("scripted_game_200_inputs", |b| {
        b.iter(|| {
            let mut game = GameState::new(black_box(12345));
            let mut input = ScriptedInput::new(moves.iter().copied());
            play_game(&mut game, &mut input, &mut ())
        })
    });
}

criterion_group!(benches, bench_new_game, bench_turn, bench_full_game);
criterion_main!(benches);
