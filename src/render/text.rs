use core::fmt::Write;

use crate::model::{PlayUpdate, ScreenContext, ScreenKind, Symbol};

pub const MAX_LINES: usize = 5;

pub type Line = heapless::String<16>;
pub type Lines = heapless::Vec<Line, MAX_LINES>;

const WELCOME_LINES: [&str; 4] = [
    " KEEP COPYING ",
    "  AND NOBODY  ",
    "   EXPLODES   ",
    " press button",
];

/// Scores are stored in points and shown times ten.
const SCORE_SCALE: u32 = 10;

/// Text lines of one screen, top to bottom. A blank cue yields no lines.
pub fn screen_lines(kind: ScreenKind, param: u16, context: &ScreenContext) -> Lines {
    let mut lines = Lines::new();
    match kind {
        ScreenKind::Welcome => {
            for text in WELCOME_LINES {
                push(&mut lines, literal(text));
            }
        }
        ScreenKind::Ready => {
            push(&mut lines, format_round(param));
            push(&mut lines, format_score(context.score));
            push(&mut lines, literal("READY"));
        }
        ScreenKind::Instruction => {
            let symbol = symbol_from_param(param);
            if !symbol.is_blank() {
                push(&mut lines, literal(symbol.label()));
            }
        }
        ScreenKind::Go => push(&mut lines, literal("GO!")),
        ScreenKind::PlayUpdate => {
            let update = PlayUpdate::unpack(param);
            push(&mut lines, format_round(context.round));
            push(&mut lines, format_score(context.score));
            push(&mut lines, format_time(update.time));
            if !update.symbol.is_blank() {
                push(&mut lines, literal(update.symbol.label()));
            }
        }
        ScreenKind::RoundComplete => push(&mut lines, literal("BOMB DEFUSED!")),
        ScreenKind::GameComplete => {
            push(&mut lines, literal("GAME OVER"));
            push(&mut lines, literal("High Scores"));
            for (rank, score) in context.high_scores.iter().enumerate() {
                push(&mut lines, format_ranked(rank + 1, *score));
            }
        }
        ScreenKind::Demo => push(&mut lines, literal("DEMO")),
    }
    lines
}

pub fn format_round(round: u16) -> Line {
    let mut out = Line::new();
    let _ = write!(&mut out, "R{round}");
    out
}

pub fn format_score(score: u16) -> Line {
    let mut out = Line::new();
    let _ = write!(&mut out, "S {}", u32::from(score) * SCORE_SCALE);
    out
}

pub fn format_time(seconds: u8) -> Line {
    let mut out = Line::new();
    let _ = write!(&mut out, "T {seconds}");
    out
}

pub fn format_ranked(rank: usize, score: u16) -> Line {
    let mut out = Line::new();
    let _ = write!(&mut out, "{rank}. {}", u32::from(score) * SCORE_SCALE);
    out
}

fn symbol_from_param(param: u16) -> Symbol {
    u8::try_from(param)
        .ok()
        .and_then(Symbol::from_u8)
        .unwrap_or(Symbol::Blank)
}

fn literal(text: &str) -> Line {
    let mut out = Line::new();
    let _ = out.push_str(text);
    out
}

fn push(lines: &mut Lines, line: Line) {
    let _ = lines.push(line);
}
