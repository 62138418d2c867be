use super::*;
use crate::ui::core::app::{App, Panel};
use crate::ui::core::event::Event;
use crate::ui::core::geom::Size;
use crate::ui::core::screen::Screen;
use crate::ui::core::tree::{ViewId, ViewTree};
use crate::ui::views::FillView;

fn split_tree(axis: Axis, frame: Rect) -> (ViewTree, ViewId, ViewId, ViewId) {
    let mut tree = ViewTree::new();
    let root = tree.insert(SplitView::new(axis));
    let first = tree.insert(FillView::new('a'));
    let second = tree.insert(FillView::new('b'));
    tree.attach(root, first).unwrap();
    tree.attach(root, second).unwrap();
    tree.set_frame(root, frame);
    tree.layout(root);
    (tree, root, first, second)
}

#[test]
fn horizontal_partition_leaves_a_divider_column() {
    let (tree, root, first, second) = split_tree(Axis::Horizontal, Rect::new(0, 0, 21, 10));

    assert_eq!(tree.frame(first), Some(Rect::new(0, 0, 10, 10)));
    assert_eq!(tree.frame(second), Some(Rect::new(11, 0, 10, 10)));

    let mut screen = Screen::new(Size::new(21, 10));
    tree.draw(
        root,
        &mut screen,
        Rect::new(0, 0, 21, 10),
        Pos::default(),
        None,
    );
    assert_eq!(screen.back(10, 0).unwrap().symbol, "│");
    assert_eq!(screen.back(9, 0).unwrap().symbol, "a");
    assert_eq!(screen.back(11, 0).unwrap().symbol, "b");
}

#[test]
fn vertical_partition_stacks_children() {
    let (tree, _, first, second) = split_tree(Axis::Vertical, Rect::new(0, 0, 10, 11));

    assert_eq!(tree.frame(first), Some(Rect::new(0, 0, 10, 5)));
    assert_eq!(tree.frame(second), Some(Rect::new(0, 6, 10, 5)));
}

#[test]
fn without_a_divider_children_meet() {
    let mut tree = ViewTree::new();
    let root = tree.insert(SplitView::new(Axis::Horizontal).with_divider(false));
    let first = tree.insert(FillView::new('a'));
    let second = tree.insert(FillView::new('b'));
    tree.attach(root, first).unwrap();
    tree.attach(root, second).unwrap();
    tree.set_frame(root, Rect::new(0, 0, 20, 4));
    tree.layout(root);

    assert_eq!(tree.frame(first), Some(Rect::new(0, 0, 10, 4)));
    assert_eq!(tree.frame(second), Some(Rect::new(10, 0, 10, 4)));
}

#[test]
fn ratio_is_clamped() {
    let mut split = SplitView::new(Axis::Horizontal).with_ratio(2.0);
    assert_eq!(split.ratio(), 1.0);
    split.set_ratio(-1.0);
    assert_eq!(split.ratio(), 0.0);
}

#[test]
fn a_lone_child_is_left_alone() {
    let mut tree = ViewTree::new();
    let root = tree.insert(SplitView::new(Axis::Vertical));
    let only = tree.insert(FillView::new('a'));
    tree.attach(root, only).unwrap();
    tree.set_frame(root, Rect::new(0, 0, 10, 10));
    tree.set_frame(only, Rect::new(1, 2, 3, 4));
    tree.layout(root);

    assert_eq!(tree.frame(only), Some(Rect::new(1, 2, 3, 4)));
}

#[test]
fn arrow_keys_move_the_divider() {
    let mut app = App::new(Size::new(20, 10));
    let root = app.tree_mut().insert(SplitView::new(Axis::Horizontal));
    let first = app.tree_mut().insert(FillView::new('a'));
    let second = app.tree_mut().insert(FillView::new('b'));
    app.tree_mut().attach(root, first).unwrap();
    app.tree_mut().attach(root, second).unwrap();
    app.push_panel(Panel::new(root));
    app.focus_next();
    app.layout_panels();

    app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Right)));
    let ratio = app.tree().widget::<SplitView>(root).unwrap().ratio();
    assert!((ratio - 0.6).abs() < 1e-5);

    app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Left)));
    app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Left)));
    let ratio = app.tree().widget::<SplitView>(root).unwrap().ratio();
    assert!((ratio - 0.4).abs() < 1e-5);

    // Keys across the axis are declined.
    assert!(!app.dispatch(&Event::Key(KeyEvent::plain(KeyCode::Up))));
}
