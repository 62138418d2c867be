use super::*;
use crate::ui::core::style::{Color, Style};

#[test]
fn default_is_a_plain_space() {
    let t = Tixel::default();
    assert_eq!(t.symbol, " ");
    assert_eq!(t.style, Style::default());
}

#[test]
fn blank_carries_the_style() {
    let style = Style::default().bg(Color::BLUE);
    let t = Tixel::blank(style);
    assert_eq!(t.symbol, " ");
    assert_eq!(t.style, style);
}

#[test]
fn equality_covers_symbol_and_style() {
    let a = Tixel::new('x', Style::default());
    assert_eq!(a, Tixel::new('x', Style::default()));
    assert_ne!(a, Tixel::new('y', Style::default()));
    assert_ne!(a, Tixel::new('x', Style::default().fg(Color::RED)));
}
