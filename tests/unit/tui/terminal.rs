use super::*;

fn tixel(symbol: &str) -> Tixel {
    Tixel {
        symbol: symbol.into(),
        style: Style::default(),
    }
}

#[test]
fn cells_are_positioned_and_printed() {
    let mut sink = CrosstermScreen::new(Vec::new());
    sink.write_cell(3, 1, &tixel("x")).unwrap();

    let out = String::from_utf8_lossy(&sink.out);
    // MoveTo is 1-based row;col.
    assert!(out.contains("\u{1b}[2;4H"));
    assert!(out.contains('x'));
}

#[test]
fn styles_are_replayed_per_cell() {
    let mut sink = CrosstermScreen::new(Vec::new());
    let cell = Tixel::new(
        'x',
        Style::default().fg(Color::RED).add_mod(Mod::BOLD | Mod::REVERSE),
    );
    sink.write_cell(0, 0, &cell).unwrap();

    let out = String::from_utf8_lossy(&sink.out);
    assert!(out.contains("[38;5;1m"));
    assert!(out.contains("[1m"));
    assert!(out.contains("[7m"));
}

#[test]
fn unset_colors_fall_back_to_the_terminal_default() {
    let mut sink = CrosstermScreen::new(Vec::new());
    sink.write_cell(0, 0, &tixel("x")).unwrap();

    let out = String::from_utf8_lossy(&sink.out);
    assert!(out.contains("[39m"));
    assert!(out.contains("[49m"));
}

#[test]
fn wide_glyph_continuations_are_skipped() {
    let mut sink = CrosstermScreen::new(Vec::new());
    sink.write_cell(0, 0, &tixel("你")).unwrap();
    let len = sink.out.len();

    // The glyph already covers column 1, so its padding cell is dropped.
    sink.write_cell(1, 0, &tixel(" ")).unwrap();
    assert_eq!(sink.out.len(), len);

    sink.write_cell(2, 0, &tixel("y")).unwrap();
    assert!(sink.out.len() > len);
}

#[test]
fn the_skip_window_does_not_leak_across_rows() {
    let mut sink = CrosstermScreen::new(Vec::new());
    sink.write_cell(0, 0, &tixel("你")).unwrap();
    let len = sink.out.len();

    sink.write_cell(1, 1, &tixel("z")).unwrap();
    assert!(sink.out.len() > len);
}

#[test]
fn flush_resets_the_attributes() {
    let mut sink = CrosstermScreen::new(Vec::new());
    sink.write_cell(0, 0, &tixel("x")).unwrap();
    sink.flush().unwrap();

    let out = String::from_utf8_lossy(&sink.out);
    assert!(out.ends_with("\u{1b}[0m"));
}
