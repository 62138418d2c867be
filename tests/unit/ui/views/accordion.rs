use super::*;
use crate::ui::core::app::{App, Panel};
use crate::ui::core::event::Event;
use crate::ui::core::geom::Size;
use crate::ui::core::screen::Screen;
use crate::ui::core::tree::{ViewId, ViewTree};
use crate::ui::views::FillView;

fn accordion_tree(sections: usize, multiple: bool) -> (ViewTree, ViewId, Vec<ViewId>) {
    let mut tree = ViewTree::new();
    let mut acc = AccordionView::new().allow_multiple(multiple);
    for i in 0..sections {
        acc.add_section(format!("s{i}"));
    }
    let root = tree.insert(acc);
    let mut children = Vec::new();
    for _ in 0..sections {
        let child = tree.insert(FillView::new('.'));
        tree.attach(root, child).unwrap();
        // Sections keep their own content heights.
        tree.set_frame(child, Rect::new(0, 0, 0, 3));
        children.push(child);
    }
    tree.set_frame(root, Rect::new(0, 0, 10, 12));
    tree.layout(root);
    (tree, root, children)
}

#[test]
fn layout_stacks_bars_and_expanded_content() {
    let (tree, _, children) = accordion_tree(3, false);

    // First section expanded by default: bar, 3 content rows, then the
    // remaining bars packed beneath.
    assert!(!tree.hidden(children[0]));
    assert_eq!(tree.frame(children[0]), Some(Rect::new(0, 1, 10, 3)));
    assert!(tree.hidden(children[1]));
    assert!(tree.hidden(children[2]));
}

#[test]
fn single_expansion_collapses_the_rest() {
    let (mut tree, root, children) = accordion_tree(2, false);

    let acc = tree.widget_mut::<AccordionView>(root).unwrap();
    acc.set_expanded(1, true);
    assert!(!acc.is_expanded(0));
    assert!(acc.is_expanded(1));

    tree.layout(root);
    assert!(tree.hidden(children[0]));
    assert!(!tree.hidden(children[1]));
    // Section 1's content sits under two bars.
    assert_eq!(tree.frame(children[1]), Some(Rect::new(0, 2, 10, 3)));
}

#[test]
fn multiple_expansion_keeps_sections_open() {
    let (mut tree, root, children) = accordion_tree(2, true);

    let acc = tree.widget_mut::<AccordionView>(root).unwrap();
    acc.set_expanded(1, true);
    assert!(acc.is_expanded(0));
    assert!(acc.is_expanded(1));

    tree.layout(root);
    assert_eq!(tree.frame(children[0]), Some(Rect::new(0, 1, 10, 3)));
    assert_eq!(tree.frame(children[1]), Some(Rect::new(0, 5, 10, 3)));
}

#[test]
fn bars_mark_selection_and_expansion() {
    let (tree, root, _) = accordion_tree(2, false);

    let mut screen = Screen::new(Size::new(10, 12));
    tree.draw(
        root,
        &mut screen,
        Rect::new(0, 0, 10, 12),
        Pos::default(),
        None,
    );

    // Expanded selected section: 'v' marker, reversed bar.
    assert_eq!(screen.back(1, 0).unwrap().symbol, "v");
    assert!(screen.back(1, 0).unwrap().style.mods.contains(Mod::REVERSE));
    // Collapsed unselected section: '>' marker on the grey bar.
    assert_eq!(screen.back(1, 4).unwrap().symbol, ">");
    assert_eq!(screen.back(1, 4).unwrap().style.bg, Some(Color::GREY));
}

#[test]
fn keys_drive_selection_and_expansion() {
    let mut app = App::new(Size::new(10, 12));
    let mut acc = AccordionView::new();
    acc.add_section("a");
    acc.add_section("b");
    let root = app.tree_mut().insert(acc);
    for _ in 0..2 {
        let child = app.tree_mut().insert(FillView::new('.'));
        app.tree_mut().attach(root, child).unwrap();
        app.tree_mut().set_frame(child, Rect::new(0, 0, 0, 2));
    }
    app.push_panel(Panel::new(root));
    app.focus_next();
    app.layout_panels();

    app.step(Event::Key(KeyEvent::plain(KeyCode::Down)));
    assert_eq!(app.tree().widget::<AccordionView>(root).unwrap().selected(), 1);

    app.step(Event::Key(KeyEvent::plain(KeyCode::Right)));
    let acc = app.tree().widget::<AccordionView>(root).unwrap();
    assert!(acc.is_expanded(1));
    assert!(!acc.is_expanded(0));

    app.step(Event::Key(KeyEvent::plain(KeyCode::Left)));
    assert!(!app.tree().widget::<AccordionView>(root).unwrap().is_expanded(1));

    app.step(Event::Key(KeyEvent::plain(KeyCode::Up)));
    assert_eq!(app.tree().widget::<AccordionView>(root).unwrap().selected(), 0);
}
