use super::*;
use crate::ui::core::geom::Size;
use crate::ui::core::screen::Screen;
use crate::ui::core::tree::ViewTree;
use crate::ui::views::EmptyView;

fn symbol_at(screen: &Screen, x: u16, y: u16) -> &str {
    screen.back(x, y).unwrap().symbol.as_str()
}

#[test]
fn content_child_is_inset_by_one() {
    let mut tree = ViewTree::new();
    let root = tree.insert(BoxView::new());
    let child = tree.insert(EmptyView);
    tree.attach(root, child).unwrap();
    tree.set_frame(root, Rect::new(0, 0, 10, 6));
    tree.layout(root);

    assert_eq!(tree.frame(child), Some(Rect::new(1, 1, 8, 4)));
}

#[test]
fn draws_border_and_centered_title() {
    let mut tree = ViewTree::new();
    let root = tree.insert(BoxView::new().title("hi"));
    tree.set_frame(root, Rect::new(0, 0, 8, 4));
    tree.layout(root);

    let mut screen = Screen::new(Size::new(8, 4));
    tree.draw(
        root,
        &mut screen,
        Rect::new(0, 0, 8, 4),
        Pos::default(),
        None,
    );

    assert_eq!(symbol_at(&screen, 0, 0), "┌");
    assert_eq!(symbol_at(&screen, 7, 3), "┘");
    // " hi " centered on the top edge.
    assert_eq!(symbol_at(&screen, 3, 0), "h");
    assert_eq!(symbol_at(&screen, 4, 0), "i");
}

#[test]
fn survives_having_no_child() {
    let mut tree = ViewTree::new();
    let root = tree.insert(BoxView::new());
    tree.set_frame(root, Rect::new(0, 0, 4, 3));
    tree.layout(root);

    let mut screen = Screen::new(Size::new(4, 3));
    tree.draw(
        root,
        &mut screen,
        Rect::new(0, 0, 4, 3),
        Pos::default(),
        None,
    );
    assert_eq!(symbol_at(&screen, 0, 0), "┌");
}
