use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::ui::core::app::{App, Panel};
use crate::ui::core::event::Event;
use crate::ui::core::geom::Size;
use crate::ui::core::tree::ViewId;

fn mount(button: Button) -> (App, ViewId) {
    let mut app = App::new(Size::new(30, 4));
    let id = app.tree_mut().insert(button);
    app.push_panel(Panel::new(id));
    app.focus_next();
    (app, id)
}

fn press(app: &mut App) -> bool {
    app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Enter)))
}

fn counted(kind: ButtonKind) -> (Button, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    let button = Button::new("ok")
        .kind(kind)
        .on_press(move |_| seen.set(seen.get() + 1));
    (button, count)
}

#[test]
fn momentary_fires_every_press_and_stays_off() {
    let (button, count) = counted(ButtonKind::Momentary);
    let (mut app, id) = mount(button);

    assert!(press(&mut app));
    assert!(press(&mut app));
    assert_eq!(count.get(), 2);
    assert!(!app.tree().widget::<Button>(id).unwrap().state());
}

#[test]
fn toggle_flips_state_on_each_press() {
    let (button, count) = counted(ButtonKind::Toggle);
    let (mut app, id) = mount(button);

    press(&mut app);
    assert!(app.tree().widget::<Button>(id).unwrap().state());
    press(&mut app);
    assert!(!app.tree().widget::<Button>(id).unwrap().state());
    assert_eq!(count.get(), 2);
}

#[test]
fn latch_fires_only_once() {
    let (button, count) = counted(ButtonKind::Latch);
    let (mut app, id) = mount(button);

    press(&mut app);
    press(&mut app);
    assert!(app.tree().widget::<Button>(id).unwrap().state());
    assert_eq!(count.get(), 1);
}

#[test]
fn space_also_presses() {
    let (button, count) = counted(ButtonKind::Momentary);
    let (mut app, _) = mount(button);

    assert!(app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Char(' ')))));
    assert_eq!(count.get(), 1);
}

#[test]
fn other_keys_bubble_past_the_button() {
    let (mut app, _) = mount(Button::new("ok"));
    assert!(!app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Char('x')))));
}

#[test]
fn the_callback_talks_to_the_app() {
    let (mut app, _) = mount(Button::new("quit").on_press(|cx| cx.quit()));
    press(&mut app);
    assert!(app.quit_requested());
}

#[test]
fn draws_its_label_with_a_focus_affordance() {
    let (mut app, _) = mount(Button::new("ok"));
    app.step(Event::Key(KeyEvent::plain(KeyCode::Unknown)));

    let screen = app.screen();
    assert_eq!(screen.front(0, 0).unwrap().symbol, "[");
    assert_eq!(screen.front(2, 0).unwrap().symbol, "o");
    assert!(screen.front(0, 0).unwrap().style.mods.contains(Mod::REVERSE));
}
