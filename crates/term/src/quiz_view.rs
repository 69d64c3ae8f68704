//! QuizView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{EndReason, Question, RoundPhase, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::leaderboard::LeaderboardEntry;

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

/// Everything drawn on the game-over panel beyond the snapshot itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOverPanel<'a> {
    /// One-line result of offering the score to the leaderboard.
    pub notice: Option<&'a str>,
    pub standings: &'a [LeaderboardEntry],
}

/// One frame's worth of input.
#[derive(Debug, Clone, Copy)]
pub struct QuizFrame<'a> {
    pub snapshot: &'a SessionSnapshot,
    /// Answer typed so far.
    pub answer: &'a str,
    pub game_over: GameOverPanel<'a>,
}

const PANEL_W: u16 = 46;
const BAR_W: u16 = 20;

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const TITLE: CellStyle = CellStyle::fg(Rgb::new(120, 200, 255)).bold();
const HEART: CellStyle = CellStyle::fg(Rgb::new(230, 70, 90)).bold();
const GOOD: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120));
const WARN: CellStyle = CellStyle::fg(Rgb::new(240, 200, 80));
const BAD: CellStyle = CellStyle::fg(Rgb::new(230, 80, 80)).bold();
const HINT: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160)).dim();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

#[derive(Debug, Clone, Copy, Default)]
pub struct QuizView;

impl QuizView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &QuizFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let snap = frame.snapshot;
        let panel_w = PANEL_W.min(viewport.width);
        let x = viewport.width.saturating_sub(panel_w) / 2;
        let inner_x = x + 2;
        let mut y = 0;

        // Header.
        let mut title = snap.kind.display_name().to_string();
        if let Some(level) = snap.level {
            title.push_str(&format!("  ·  Level {level}"));
        }
        fb.put_str_centered(x, panel_w, y, &title, TITLE);
        y += 1;
        draw_rule(fb, x, y, panel_w);
        y += 1;

        let after_name = fb.put_str(inner_x, y, &snap.player_name, TEXT);
        let score = format!("Score: {}", snap.score);
        let score_x = (x + panel_w).saturating_sub(score.chars().count() as u16 + 2);
        fb.put_str(score_x.max(after_name + 1), y, &score, TEXT.bold());
        y += 1;

        self.draw_hearts(fb, inner_x, y, snap);
        y += 1;

        if snap.timer_enabled {
            self.draw_countdown(fb, inner_x, y, snap);
        }
        y += 2;

        match snap.phase {
            RoundPhase::AwaitingAnswer => {
                if let Some(question) = &snap.question {
                    fb.put_str(inner_x, y, &instruction(question), TEXT);
                    y += 2;
                    fb.put_str_centered(x, panel_w, y, &shown_prompt(question), TITLE);
                    y += 2;
                    let end = fb.put_str(inner_x, y, "> ", HINT);
                    let end = fb.put_str(end, y, frame.answer, TEXT.bold());
                    fb.put_char(end, y, '_', HINT);
                    y += 2;
                    fb.put_str(inner_x, y, "Enter: answer   Esc: quit", HINT);
                }
            }
            RoundPhase::Revealing => {
                if let Some(answer) = snap.revealed_answer() {
                    fb.put_str(inner_x, y, "Not quite!", BAD);
                    y += 2;
                    fb.put_str(inner_x, y, "The correct word was:", TEXT);
                    y += 1;
                    fb.put_str(inner_x, y, &answer, WARN.bold());
                    y += 2;
                    fb.put_str(inner_x, y, "Press Enter to continue", HINT);
                }
            }
            RoundPhase::Ended(reason) => {
                self.draw_game_over(fb, x, panel_w, y, viewport, snap, reason, &frame.game_over);
            }
        }

        draw_rule(fb, x, viewport.height.saturating_sub(1), panel_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &QuizFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_hearts(&self, fb: &mut FrameBuffer, x: u16, y: u16, snap: &SessionSnapshot) {
        let mut cx = x;
        for i in 0..snap.max_hearts {
            let ch = if i < snap.hearts { '♥' } else { '♡' };
            fb.put_char(cx, y, ch, HEART);
            cx += 2;
        }
    }

    fn draw_countdown(&self, fb: &mut FrameBuffer, x: u16, y: u16, snap: &SessionSnapshot) {
        let filled = (snap.time_fraction() * BAR_W as f32).round() as u16;
        let style = match snap.time_left {
            0..=5 => BAD,
            6..=10 => WARN,
            _ => GOOD,
        };
        fb.fill_rect(x, y, filled.min(BAR_W), 1, '█', style);
        fb.fill_rect(x + filled.min(BAR_W), y, BAR_W - filled.min(BAR_W), 1, '░', HINT);
        fb.put_str(x + BAR_W + 1, y, &format!("{}s", snap.time_left), style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        w: u16,
        mut y: u16,
        viewport: Viewport,
        snap: &SessionSnapshot,
        reason: EndReason,
        panel: &GameOverPanel<'_>,
    ) {
        fb.put_str_centered(x, w, y, "GAME OVER", BAD);
        y += 1;
        fb.put_str_centered(x, w, y, end_reason_text(reason), WARN);
        y += 2;
        fb.put_str_centered(x, w, y, &format!("Final score: {}", snap.score), TEXT.bold());
        y += 1;
        if let Some(notice) = panel.notice {
            fb.put_str_centered(x, w, y, notice, GOOD);
        }
        y += 2;

        if !panel.standings.is_empty() {
            fb.put_str_centered(x, w, y, "Top 10", TITLE);
            y += 1;
            for (i, entry) in panel.standings.iter().enumerate() {
                if y + 2 >= viewport.height {
                    break;
                }
                let style = if entry.name == snap.player_name { GOOD } else { TEXT };
                fb.put_str(x + 2, y, &standing_line(i + 1, entry), style);
                y += 1;
            }
            y += 1;
        }

        fb.put_str_centered(x, w, y, "r: play again   q: quit", HINT);
    }
}

/// What the player is asked to do for `question`.
pub fn instruction(question: &Question) -> String {
    match question {
        Question::Arithmetic { .. } => "How much is:".to_string(),
        Question::LetterAdjacency { direction, .. } => {
            format!("Which letter comes {} this one?", direction.as_str())
        }
        Question::VocabularyWord { .. } => "Type the word in English".to_string(),
        Question::TranslationWord { .. } => "Translate to Hebrew:".to_string(),
    }
}

/// The spelling game shows the picture, never the word.
fn shown_prompt(question: &Question) -> String {
    match question {
        Question::VocabularyWord { icon, .. } => format!("[ {icon} ]"),
        _ => question.prompt(),
    }
}

pub fn end_reason_text(reason: EndReason) -> &'static str {
    match reason {
        EndReason::HeartsExhausted => "Out of hearts!",
        EndReason::TimeUp => "Time's up!",
        EndReason::PoolExhausted => "No more questions",
        EndReason::Abandoned => "Game left early",
    }
}

fn standing_line(rank: usize, entry: &LeaderboardEntry) -> String {
    let level = entry.level.map(|l| format!("L{l}")).unwrap_or_default();
    format!("{rank:>2}. {:<16.16} {:>4} {:>3}  {}", entry.name, entry.points, level, entry.date)
}

fn draw_rule(fb: &mut FrameBuffer, x: u16, y: u16, w: u16) {
    fb.fill_rect(x, y, w, 1, '─', BORDER);
}
