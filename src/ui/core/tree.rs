use std::any::Any;
use std::fmt;

use slotmap::{new_key_type, SlotMap};

use super::canvas::Canvas;
use super::geom::{Pos, Rect, Size};
use super::screen::Screen;
use super::widget::Widget;

new_key_type! {
    /// Stable handle to a view in the arena. Handles outlive detachment:
    /// a stale handle fails the `contains` check instead of dangling.
    pub struct ViewId;
}

#[derive(Debug, PartialEq, Eq)]
pub enum TreeError {
    UnknownView,
    AlreadyAttached,
    AttachCycle,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownView => write!(f, "view id is not in the arena"),
            TreeError::AlreadyAttached => write!(f, "view already has a parent"),
            TreeError::AttachCycle => {
                write!(f, "cannot attach a view inside its own subtree")
            }
        }
    }
}

impl std::error::Error for TreeError {}

struct ViewNode {
    widget: Option<Box<dyn Widget>>,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    frame: Rect,
    hidden: bool,
}

/// Arena of views. Parent→child edges in `children` are the only ownership
/// edges; `parent` is a back reference used for chain traversal only.
/// `attach` rejects edges that would make a view its own ancestor, so every
/// parent walk terminates.
#[derive(Default)]
pub struct ViewTree {
    arena: SlotMap<ViewId, ViewNode>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, widget: impl Widget) -> ViewId {
        self.arena.insert(ViewNode {
            widget: Some(Box::new(widget)),
            parent: None,
            children: Vec::new(),
            frame: Rect::default(),
            hidden: false,
        })
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.arena.get(id)?.parent
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.arena
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn frame(&self, id: ViewId) -> Option<Rect> {
        self.arena.get(id).map(|n| n.frame)
    }

    pub fn set_frame(&mut self, id: ViewId, frame: Rect) {
        if let Some(node) = self.arena.get_mut(id) {
            node.frame = frame;
        }
    }

    /// Stale handles count as hidden so traversals skip them.
    pub fn hidden(&self, id: ViewId) -> bool {
        self.arena.get(id).map(|n| n.hidden).unwrap_or(true)
    }

    pub fn set_hidden(&mut self, id: ViewId, hidden: bool) {
        if let Some(node) = self.arena.get_mut(id) {
            node.hidden = hidden;
        }
    }

    pub fn is_ancestor(&self, ancestor: ViewId, mut descendant: ViewId) -> bool {
        while let Some(node) = self.arena.get(descendant) {
            match node.parent {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => descendant = parent,
                None => break,
            }
        }
        false
    }

    pub fn attach(&mut self, parent: ViewId, child: ViewId) -> Result<(), TreeError> {
        if !self.arena.contains_key(parent) || !self.arena.contains_key(child) {
            return Err(TreeError::UnknownView);
        }
        if self.arena[child].parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(TreeError::AttachCycle);
        }
        self.arena[child].parent = Some(parent);
        self.arena[parent].children.push(child);
        Ok(())
    }

    /// Unlink `child` from its parent, keeping its subtree intact in the
    /// arena. Returns the former parent.
    pub fn detach(&mut self, child: ViewId) -> Option<ViewId> {
        let parent = self.arena.get_mut(child)?.parent.take()?;
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.retain(|&c| c != child);
        }
        Some(parent)
    }

    /// Detach `id` and drop its whole subtree from the arena.
    pub fn remove(&mut self, id: ViewId) {
        self.detach(id);
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.arena.remove(cur) {
                stack.extend(node.children);
            }
        }
    }

    pub fn widget_dyn(&self, id: ViewId) -> Option<&dyn Widget> {
        self.arena.get(id)?.widget.as_deref()
    }

    pub fn widget<W: Widget>(&self, id: ViewId) -> Option<&W> {
        let w = self.arena.get(id)?.widget.as_deref()?;
        (w as &dyn Any).downcast_ref()
    }

    pub fn widget_mut<W: Widget>(&mut self, id: ViewId) -> Option<&mut W> {
        let w = self.arena.get_mut(id)?.widget.as_deref_mut()?;
        (w as &mut dyn Any).downcast_mut()
    }

    /// Lend a widget out for a callback. The node stays in the arena with an
    /// empty slot; `put_widget` restores it (or drops the box if the node was
    /// removed during the callback).
    pub fn take_widget(&mut self, id: ViewId) -> Option<Box<dyn Widget>> {
        self.arena.get_mut(id)?.widget.take()
    }

    pub fn put_widget(&mut self, id: ViewId, widget: Box<dyn Widget>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.widget = Some(widget);
        }
    }

    /// Top-down layout pass: give every widget a chance to place its
    /// children, then recurse. Hidden subtrees are laid out too, so they
    /// have consistent frames the moment they are shown again.
    pub fn layout(&mut self, id: ViewId) {
        let Some(size) = self.frame(id).map(|f| f.size()) else {
            return;
        };
        if let Some(mut widget) = self.take_widget(id) {
            let mut cx = LayoutCx {
                tree: self,
                id,
                size,
            };
            widget.layout(&mut cx);
            self.put_widget(id, widget);
        }
        for child in self.children(id).to_vec() {
            self.layout(child);
        }
    }

    /// Paint `id` and its subtree. `clip` is the accumulated clip region of
    /// the ancestors in screen coordinates; a view's own writes are further
    /// confined to its frame, and only views with a `clip_rect` tighten the
    /// region their descendants inherit.
    pub fn draw(
        &self,
        id: ViewId,
        screen: &mut Screen,
        clip: Rect,
        parent_origin: Pos,
        focus: Option<ViewId>,
    ) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        if node.hidden {
            return;
        }
        let frame = node.frame.translate(parent_origin.x, parent_origin.y);
        let own_clip = clip.intersect(frame);
        let mut child_clip = clip;
        if let Some(widget) = node.widget.as_deref() {
            let mut canvas = Canvas::new(screen, frame.pos(), own_clip, frame.size());
            widget.draw(&mut canvas, focus == Some(id));
            if let Some(local) = widget.clip_rect(frame.size()) {
                child_clip = own_clip.intersect(local.translate(frame.x, frame.y));
            }
        }
        for &child in &node.children {
            self.draw(child, screen, child_clip, frame.pos(), focus);
        }
    }
}

/// Scoped access a widget gets to its own slot of the tree during layout:
/// its size, its children, and their frames. The widget itself is lent out
/// of the arena for the duration, so it cannot alias itself through the
/// context.
pub struct LayoutCx<'a> {
    tree: &'a mut ViewTree,
    id: ViewId,
    size: Size,
}

impl LayoutCx<'_> {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn children(&self) -> Vec<ViewId> {
        self.tree.children(self.id).to_vec()
    }

    pub fn child_count(&self) -> usize {
        self.tree.children(self.id).len()
    }

    pub fn frame(&self, child: ViewId) -> Rect {
        self.tree.frame(child).unwrap_or_default()
    }

    pub fn set_frame(&mut self, child: ViewId, frame: Rect) {
        self.tree.set_frame(child, frame);
    }

    pub fn set_hidden(&mut self, child: ViewId, hidden: bool) {
        self.tree.set_hidden(child, hidden);
    }

    pub fn widget_mut<W: Widget>(&mut self, child: ViewId) -> Option<&mut W> {
        self.tree.widget_mut(child)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
