use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::{
    standard_deck, Board, ComputerAgent, ComputerMemory, GameBuilder, GameConfig, GameRng, MatchGame, TimingConfig,
};

fn play_out(seed: u64) -> MatchGame {
    let config = GameConfig::default().with_seed(seed).with_timing(TimingConfig::instant());
    let mut game = GameBuilder::new(config).build().unwrap();
    let mut picker = GameRng::new(seed).for_context("human");

    while !game.is_over() {
        if game.pending_step().is_some() {
            game.advance().unwrap();
            continue;
        }
        let hidden = game.board().hidden_positions();
        for p in picker.sample(&hidden, 2) {
            game.activate_card(p).unwrap();
        }
    }
    game
}

fn bench_full_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("full_game_random_human", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_out(seed))
        })
    });
}

fn bench_agent_choice(c: &mut Criterion) {
    let board = Board::deal(&standard_deck());
    let mut agent = ComputerAgent::new(GameRng::new(1));
    c.bench_function("agent_choose_two_cards", |b| {
        b.iter(|| {
            let mut memory = ComputerMemory::new();
            black_box(agent.choose_two_cards(&board, &mut memory).unwrap())
        })
    });
}

fn bench_replay(c: &mut Criterion) {
    let record = play_out(7).record();
    c.bench_function("replay_record", |b| b.iter(|| black_box(MatchGame::replay(&record).unwrap())));
}

criterion_group!(benches, bench_full_game, bench_agent_choice, bench_replay);
criterion_main!(benches);
