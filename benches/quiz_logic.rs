use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kids_quiz::core::{QuestionGenerator, RoundController, TranslationDeck};
use kids_quiz::leaderboard::{admit, qualifies, LeaderboardEntry};
use kids_quiz::term::{GameOverPanel, QuizFrame, QuizView, Viewport};
use kids_quiz::types::GameKind;

fn bench_generate(c: &mut Criterion) {
    let mut gen = QuestionGenerator::new(12345);
    let mut deck = TranslationDeck::new();

    c.bench_function("generate_arithmetic", |b| b.iter(|| black_box(gen.arithmetic())));
    c.bench_function("generate_translation", |b| {
        b.iter(|| black_box(gen.translation(&mut deck)))
    });
}

fn bench_submit(c: &mut Criterion) {
    let mut round = RoundController::new(GameKind::Math, "bench", false, 12345);
    round.start();

    c.bench_function("submit_answer", |b| {
        b.iter(|| {
            if round.is_over() {
                round.restart();
            }
            black_box(round.submit(black_box("42")));
        })
    });
}

fn bench_admit(c: &mut Criterion) {
    let entries: Vec<LeaderboardEntry> = (0..40)
        .map(|i| LeaderboardEntry::new(format!("p{}", i % 15), GameKind::ALL[i % 4], i as u32, None, "01/01/24"))
        .collect();

    c.bench_function("qualifies", |b| {
        b.iter(|| qualifies(GameKind::Math, black_box(12), &entries))
    });
    c.bench_function("admit", |b| {
        b.iter(|| {
            let entry = LeaderboardEntry::new("new", GameKind::Math, 30, None, "01/01/24");
            black_box(admit(entry, entries.clone()))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut round = RoundController::new(GameKind::Translation, "bench", true, 12345);
    round.start();
    let snap = round.snapshot();
    let view = QuizView::new();
    let mut fb = kids_quiz::term::FrameBuffer::new(80, 24);

    c.bench_function("render_quiz_frame", |b| {
        b.iter(|| {
            let frame = QuizFrame {
                snapshot: &snap,
                answer: "שלום",
                game_over: GameOverPanel::default(),
            };
            view.render_into(&frame, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(benches, bench_generate, bench_submit, bench_admit, bench_render);
criterion_main!(benches);
