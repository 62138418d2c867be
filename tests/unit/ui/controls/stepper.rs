use super::*;
use crate::ui::core::app::{App, Panel};
use crate::ui::core::event::Event;
use crate::ui::core::geom::Size;
use crate::ui::core::tree::ViewId;

fn mount(stepper: Stepper) -> (App, ViewId) {
    let mut app = App::new(Size::new(30, 4));
    let id = app.tree_mut().insert(stepper);
    app.push_panel(Panel::new(id));
    app.focus_next();
    (app, id)
}

#[test]
fn bounds_clamp_the_value() {
    let mut stepper = Stepper::new().minimum(0).maximum(10);
    stepper.set_value(42);
    assert_eq!(stepper.value(), 10);
    stepper.set_value(-42);
    assert_eq!(stepper.value(), 0);
}

#[test]
fn builders_clamp_the_current_value() {
    assert_eq!(Stepper::new().minimum(5).value(), 5);
    assert_eq!(Stepper::new().maximum(-3).value(), -3);
}

#[test]
fn increments_move_in_step_units() {
    let mut stepper = Stepper::new().step(5).maximum(12);
    stepper.increment();
    stepper.increment();
    assert_eq!(stepper.value(), 10);
    stepper.increment();
    assert_eq!(stepper.value(), 12);
    stepper.decrement();
    assert_eq!(stepper.value(), 7);
}

#[test]
fn a_nonpositive_step_is_rejected() {
    let mut stepper = Stepper::new().step(0);
    stepper.increment();
    assert_eq!(stepper.value(), 1);
}

#[test]
fn up_and_down_adjust_through_dispatch() {
    let (mut app, id) = mount(Stepper::new().minimum(0).maximum(10).step(5));

    let up = Event::Key(KeyEvent::plain(KeyCode::Up));
    assert!(app.dispatch(&up));
    assert!(app.dispatch(&up));
    assert!(app.dispatch(&up));
    assert_eq!(app.tree().widget::<Stepper>(id).unwrap().value(), 10);

    assert!(app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Down))));
    assert_eq!(app.tree().widget::<Stepper>(id).unwrap().value(), 5);

    assert!(!app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Left))));
}

#[test]
fn draws_the_value_and_the_arrows() {
    let (mut app, _) = mount(Stepper::new().minimum(7));
    app.step(Event::Key(KeyEvent::plain(KeyCode::Unknown)));

    let screen = app.screen();
    assert_eq!(screen.front(0, 0).unwrap().symbol, "7");
    assert_eq!(screen.front(28, 0).unwrap().symbol, "▲");
    assert_eq!(screen.front(29, 0).unwrap().symbol, "▼");
}
