use super::*;
use crate::ui::core::style::Style;
use crate::ui::core::tixel::Tixel;

struct Plain;
impl Widget for Plain {}

/// Paints its whole frame with one character.
struct Glyph(char);
impl Widget for Glyph {
    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let size = canvas.size();
        for y in 0..size.h as i32 {
            for x in 0..size.w as i32 {
                canvas.set(Pos::new(x, y), Tixel::new(self.0, Style::default()));
            }
        }
    }
}

struct Clipper;
impl Widget for Clipper {
    fn clip_rect(&self, size: Size) -> Option<Rect> {
        Some(Rect::from_size(size))
    }
}

/// Lays its children out as one full-width row each.
struct Shelf;
impl Widget for Shelf {
    fn layout(&mut self, cx: &mut LayoutCx<'_>) {
        let w = cx.size().w;
        for (i, child) in cx.children().into_iter().enumerate() {
            cx.set_frame(child, Rect::new(0, i as i32, w, 1));
        }
    }
}

fn symbol_at(screen: &Screen, x: u16, y: u16) -> &str {
    screen.back(x, y).unwrap().symbol.as_str()
}

#[test]
fn attach_builds_ordered_children() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Plain);
    let a = tree.insert(Plain);
    let b = tree.insert(Plain);
    tree.attach(root, a).unwrap();
    tree.attach(root, b).unwrap();

    assert_eq!(tree.children(root), &[a, b]);
    assert_eq!(tree.parent(a), Some(root));
    assert_eq!(tree.parent(root), None);
}

#[test]
fn attach_rejects_a_second_parent() {
    let mut tree = ViewTree::new();
    let p1 = tree.insert(Plain);
    let p2 = tree.insert(Plain);
    let child = tree.insert(Plain);
    tree.attach(p1, child).unwrap();

    assert_eq!(tree.attach(p2, child), Err(TreeError::AlreadyAttached));
    assert_eq!(tree.parent(child), Some(p1));
}

#[test]
fn attach_rejects_cycles() {
    let mut tree = ViewTree::new();
    let a = tree.insert(Plain);
    let b = tree.insert(Plain);
    let c = tree.insert(Plain);
    tree.attach(a, b).unwrap();
    tree.attach(b, c).unwrap();

    assert_eq!(tree.attach(a, a), Err(TreeError::AttachCycle));
    assert_eq!(tree.attach(c, a), Err(TreeError::AttachCycle));
}

#[test]
fn attach_rejects_unknown_ids() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Plain);
    let gone = tree.insert(Plain);
    tree.remove(gone);

    assert_eq!(tree.attach(root, gone), Err(TreeError::UnknownView));
    assert_eq!(tree.attach(gone, root), Err(TreeError::UnknownView));
}

#[test]
fn detach_keeps_the_subtree_in_the_arena() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Plain);
    let mid = tree.insert(Plain);
    let leaf = tree.insert(Plain);
    tree.attach(root, mid).unwrap();
    tree.attach(mid, leaf).unwrap();

    assert_eq!(tree.detach(mid), Some(root));
    assert!(tree.children(root).is_empty());
    assert_eq!(tree.parent(mid), None);
    assert!(tree.contains(leaf));
    assert_eq!(tree.parent(leaf), Some(mid));
}

#[test]
fn remove_drops_the_whole_subtree() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Plain);
    let mid = tree.insert(Plain);
    let leaf = tree.insert(Plain);
    tree.attach(root, mid).unwrap();
    tree.attach(mid, leaf).unwrap();

    tree.remove(mid);
    assert!(tree.contains(root));
    assert!(!tree.contains(mid));
    assert!(!tree.contains(leaf));
    assert!(tree.children(root).is_empty());
}

#[test]
fn stale_handles_answer_safely() {
    let mut tree = ViewTree::new();
    let gone = tree.insert(Plain);
    tree.remove(gone);

    assert!(!tree.contains(gone));
    assert_eq!(tree.frame(gone), None);
    assert!(tree.children(gone).is_empty());
    assert!(tree.hidden(gone));
    assert!(tree.widget_dyn(gone).is_none());
}

#[test]
fn widgets_downcast_to_their_concrete_type() {
    let mut tree = ViewTree::new();
    let id = tree.insert(Glyph('x'));

    assert_eq!(tree.widget::<Glyph>(id).unwrap().0, 'x');
    assert!(tree.widget::<Plain>(id).is_none());
    tree.widget_mut::<Glyph>(id).unwrap().0 = 'y';
    assert_eq!(tree.widget::<Glyph>(id).unwrap().0, 'y');
}

#[test]
fn take_widget_lends_the_slot_out() {
    let mut tree = ViewTree::new();
    let id = tree.insert(Glyph('x'));

    let widget = tree.take_widget(id).unwrap();
    assert!(tree.widget_dyn(id).is_none());
    tree.put_widget(id, widget);
    assert!(tree.widget_dyn(id).is_some());
}

#[test]
fn layout_runs_top_down() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Shelf);
    let row = tree.insert(Shelf);
    let cell = tree.insert(Plain);
    tree.attach(root, row).unwrap();
    tree.attach(row, cell).unwrap();

    tree.set_frame(root, Rect::new(0, 0, 12, 6));
    tree.layout(root);

    // The row got its frame from the root before laying out its own child.
    assert_eq!(tree.frame(row), Some(Rect::new(0, 0, 12, 1)));
    assert_eq!(tree.frame(cell), Some(Rect::new(0, 0, 12, 1)));
}

#[test]
fn draw_skips_hidden_subtrees() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Plain);
    let child = tree.insert(Glyph('x'));
    tree.attach(root, child).unwrap();
    tree.set_frame(root, Rect::new(0, 0, 4, 1));
    tree.set_frame(child, Rect::new(0, 0, 4, 1));
    tree.set_hidden(child, true);

    let mut screen = Screen::new(Size::new(4, 1));
    tree.draw(root, &mut screen, Rect::new(0, 0, 4, 1), Pos::default(), None);

    assert!(screen.diff().is_empty());
}

#[test]
fn overflow_is_visible_without_a_clipping_parent() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Plain);
    let child = tree.insert(Glyph('x'));
    tree.attach(root, child).unwrap();
    tree.set_frame(root, Rect::new(0, 0, 2, 1));
    tree.set_frame(child, Rect::new(0, 0, 5, 1));

    let mut screen = Screen::new(Size::new(8, 1));
    tree.draw(root, &mut screen, Rect::new(0, 0, 8, 1), Pos::default(), None);

    // The child paints past its parent's frame, up to its own.
    assert_eq!(symbol_at(&screen, 4, 0), "x");
    assert_eq!(symbol_at(&screen, 5, 0), " ");
}

#[test]
fn clip_rect_confines_descendants() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Clipper);
    let child = tree.insert(Glyph('x'));
    tree.attach(root, child).unwrap();
    tree.set_frame(root, Rect::new(1, 0, 3, 1));
    tree.set_frame(child, Rect::new(-1, 0, 8, 2));

    let mut screen = Screen::new(Size::new(8, 2));
    tree.draw(root, &mut screen, Rect::new(0, 0, 8, 2), Pos::default(), None);

    for x in 0..8u16 {
        for y in 0..2u16 {
            let inside = (1..4).contains(&x) && y == 0;
            assert_eq!(symbol_at(&screen, x, y) == "x", inside, "cell ({x},{y})");
        }
    }
}

#[test]
fn nested_clips_intersect() {
    let mut tree = ViewTree::new();
    let outer = tree.insert(Clipper);
    let inner = tree.insert(Clipper);
    let leaf = tree.insert(Glyph('x'));
    tree.attach(outer, inner).unwrap();
    tree.attach(inner, leaf).unwrap();
    tree.set_frame(outer, Rect::new(0, 0, 5, 2));
    tree.set_frame(inner, Rect::new(2, 0, 5, 2));
    tree.set_frame(leaf, Rect::new(-2, 0, 10, 2));

    let mut screen = Screen::new(Size::new(10, 2));
    tree.draw(outer, &mut screen, Rect::new(0, 0, 10, 2), Pos::default(), None);

    // Only the overlap of the two clip regions (columns 2..5) is painted.
    for x in 0..10u16 {
        let inside = (2..5).contains(&x);
        assert_eq!(symbol_at(&screen, x, 0) == "x", inside, "column {x}");
    }
}

#[test]
fn child_frames_are_relative_to_the_parent() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Plain);
    let child = tree.insert(Glyph('x'));
    tree.attach(root, child).unwrap();
    tree.set_frame(root, Rect::new(2, 1, 6, 3));
    tree.set_frame(child, Rect::new(1, 1, 1, 1));

    let mut screen = Screen::new(Size::new(10, 5));
    tree.draw(root, &mut screen, Rect::new(0, 0, 10, 5), Pos::default(), None);

    assert_eq!(symbol_at(&screen, 3, 2), "x");
}
