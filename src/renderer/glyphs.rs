//! Bar-segment bitmap font
//!
//! Each glyph is a handful of filled bars on an 8x16 cell. Digits, the
//! Latin alphabet, `:` and `!` are defined. Other letters render as a solid
//! cell and everything else renders blank.

/// A filled bar: `(dx, dy, w, h)` relative to the cell's top-left
pub type Bar = (i32, i32, i32, i32);

/// Horizontal advance per character
pub const ADVANCE: i32 = 10;

const TOP: Bar = (0, 0, 8, 2);
const MID: Bar = (0, 7, 8, 2);
const BOT: Bar = (0, 14, 8, 2);
const UL: Bar = (0, 0, 2, 8);
const LL: Bar = (0, 8, 2, 8);
const UR: Bar = (6, 0, 2, 8);
const LR: Bar = (6, 8, 2, 8);
const STEM: Bar = (3, 0, 2, 16);

const ZERO: &[Bar] = &[TOP, BOT, UL, LL, UR, LR];
const ONE: &[Bar] = &[STEM];
const TWO: &[Bar] = &[TOP, UR, MID, LL, BOT];
const THREE: &[Bar] = &[TOP, UR, MID, LR, BOT];
const FOUR: &[Bar] = &[UL, MID, UR, LR];
const FIVE: &[Bar] = &[TOP, UL, MID, LR, BOT];
const SIX: &[Bar] = &[TOP, UL, LL, MID, LR, BOT];
const SEVEN: &[Bar] = &[TOP, UR, LR];
const EIGHT: &[Bar] = &[TOP, MID, BOT, UL, LL, UR, LR];
const NINE: &[Bar] = &[TOP, UL, UR, MID, LR, BOT];

const A: &[Bar] = &[TOP, UL, UR, MID, LL, LR];
const B: &[Bar] = &[UL, LL, (0, 0, 6, 2), (6, 2, 2, 5), (0, 7, 6, 2), (6, 9, 2, 5), (0, 14, 6, 2)];
const C: &[Bar] = &[TOP, UL, LL, BOT];
const D: &[Bar] = &[UL, LL, (0, 0, 6, 2), (6, 2, 2, 12), (0, 14, 6, 2)];
const E: &[Bar] = &[TOP, UL, LL, MID, BOT];
const F: &[Bar] = &[TOP, UL, LL, MID];
const G: &[Bar] = &[TOP, UL, LL, BOT, LR, (4, 7, 4, 2)];
const H: &[Bar] = &[UL, LL, UR, LR, MID];
const J: &[Bar] = &[(6, 0, 2, 14), (0, 14, 6, 2), (0, 10, 2, 4)];
const K: &[Bar] = &[UL, LL, (2, 7, 2, 2), (4, 5, 2, 2), (4, 9, 2, 2), (6, 0, 2, 5), (6, 11, 2, 5)];
const L: &[Bar] = &[UL, LL, BOT];
const M: &[Bar] = &[UL, LL, UR, LR, (2, 0, 2, 6), (4, 0, 2, 6)];
const N: &[Bar] = &[UL, LL, UR, LR, (2, 2, 2, 4), (4, 6, 2, 4)];
const P: &[Bar] = &[TOP, UL, LL, UR, MID];
const Q: &[Bar] = &[TOP, UL, LL, UR, LR, BOT, (4, 10, 2, 4)];
const R: &[Bar] = &[TOP, UL, LL, UR, MID, (4, 9, 2, 7)];
const T: &[Bar] = &[TOP, STEM];
const U: &[Bar] = &[UL, LL, UR, LR, BOT];
const V: &[Bar] = &[(0, 0, 2, 12), (6, 0, 2, 12), (2, 12, 4, 2)];
const W: &[Bar] = &[UL, LL, UR, LR, (3, 8, 2, 8)];
const X: &[Bar] = &[(0, 0, 2, 6), (6, 0, 2, 6), (2, 6, 4, 4), (0, 10, 2, 6), (6, 10, 2, 6)];
const Y: &[Bar] = &[(1, 0, 2, 6), (5, 0, 2, 6), (3, 6, 2, 10)];
const Z: &[Bar] = &[TOP, (6, 2, 2, 3), (4, 5, 2, 3), (2, 8, 2, 3), (0, 11, 2, 3), BOT];
const COLON: &[Bar] = &[(3, 4, 2, 2), (3, 11, 2, 2)];
const BANG: &[Bar] = &[(3, 0, 2, 10), (3, 13, 2, 3)];
const BLOCK: &[Bar] = &[(0, 0, 8, 16)];

/// Bars for a character (case-insensitive)
pub fn glyph(ch: char) -> &'static [Bar] {
    match ch.to_ascii_uppercase() {
        '0' | 'O' => ZERO,
        '1' | 'I' => ONE,
        '2' => TWO,
        '3' => THREE,
        '4' => FOUR,
        '5' | 'S' => FIVE,
        '6' => SIX,
        '7' => SEVEN,
        '8' => EIGHT,
        '9' => NINE,
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        ':' => COLON,
        '!' => BANG,
        c if c.is_alphabetic() => BLOCK,
        _ => &[],
    }
}
