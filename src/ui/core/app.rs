use std::io;

use tracing::{debug, trace};

use super::canvas::{BorderKind, Canvas};
use super::event::{Event, KeyCode, KeyEvent, Outcome};
use super::focus;
use super::geom::{Pos, Rect, Size};
use super::screen::{Patch, Screen};
use super::style::{Mod, Style};
use super::tixel::Tixel;
use super::tree::{ViewId, ViewTree};
use super::widget::Widget;

/// Blocking input collaborator: one translated event per call. `Ok(None)`
/// means the raw input did not translate to anything (and is dropped).
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Option<Event>>;
}

/// Output collaborator: receives the cells produced by the screen diff,
/// followed by one `flush` per commit.
pub trait CellWriter {
    fn write_cell(&mut self, x: u16, y: u16, cell: &Tixel) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Cover the whole screen.
    Fill,
    /// A fixed rectangle in screen coordinates.
    Fixed(Rect),
    /// A fixed size centered on the screen.
    Centered(Size),
}

/// A top-level surface owning one root view. Panels form a stack; the
/// topmost modal panel (or the topmost panel, if none is modal) is the only
/// one eligible to receive focus-driven input.
pub struct Panel {
    root: ViewId,
    placement: Placement,
    modal: bool,
    title: Option<String>,
    border: bool,
    dismiss_on_esc: bool,
    background: Style,
    frame: Rect,
}

impl Panel {
    pub fn new(root: ViewId) -> Self {
        Self {
            root,
            placement: Placement::Fill,
            modal: false,
            title: None,
            border: false,
            dismiss_on_esc: false,
            background: Style::default(),
            frame: Rect::default(),
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn modal(mut self, yn: bool) -> Self {
        self.modal = yn;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn bordered(mut self, yn: bool) -> Self {
        self.border = yn;
        self
    }

    /// Let Esc (offered through the responder chain) close this panel.
    pub fn dismiss_on_esc(mut self, yn: bool) -> Self {
        self.dismiss_on_esc = yn;
        self
    }

    pub fn background(mut self, style: Style) -> Self {
        self.background = style;
        self
    }

    pub fn root(&self) -> ViewId {
        self.root
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    /// Screen rectangle from the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    fn compute_frame(&self, screen: Size) -> Rect {
        match self.placement {
            Placement::Fill => Rect::from_size(screen),
            Placement::Fixed(rect) => rect,
            Placement::Centered(size) => Rect::from_size(screen).centered(size.w, size.h),
        }
    }

    /// Where the root view lives, inset past the title row and border.
    fn content_rect(&self) -> Rect {
        let mut r = self.frame;
        if self.title.is_some() {
            r.y += 1;
            r.h = r.h.saturating_sub(1);
        }
        if self.border {
            r = r.inset(1);
        }
        r
    }

    fn draw_chrome(&self, screen: &mut Screen) {
        let clip = self.frame.intersect(Rect::from_size(screen.size()));
        let mut canvas = Canvas::new(screen, self.frame.pos(), clip, self.frame.size());
        canvas.fill_rect(canvas.bounds(), self.background);
        if let Some(title) = &self.title {
            let style = self.background.add_mod(Mod::REVERSE);
            canvas.fill_rect(Rect::new(0, 0, self.frame.w, 1), style);
            canvas.text(Pos::new(1, 0), title, style);
        }
        if self.border {
            let mut r = canvas.bounds();
            if self.title.is_some() {
                r.y += 1;
                r.h = r.h.saturating_sub(1);
            }
            canvas.border(r, self.background, BorderKind::Plain);
        }
    }
}

/// Application-level key bindings. Policy, not mechanism: dispatch only
/// cares that these are control-modified.
#[derive(Clone, Copy, Debug)]
pub struct Bindings {
    pub next_focus: KeyEvent,
    pub previous_focus: KeyEvent,
    pub quit: KeyEvent,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            next_focus: KeyEvent::ctrl(KeyCode::Tab),
            previous_focus: KeyEvent::ctrl(KeyCode::BackTab),
            quit: KeyEvent::ctrl(KeyCode::Char('q')),
        }
    }
}

impl Bindings {
    /// Extra modifiers on the incoming key (Shift on a BackTab, say) do not
    /// break the match.
    fn matches(binding: KeyEvent, key: KeyEvent) -> bool {
        binding.code == key.code && key.modifiers.contains(binding.modifiers)
    }
}

/// The result of processing one event.
#[derive(Debug)]
pub struct StepReport {
    pub consumed: bool,
    pub quit: bool,
    pub patches: Vec<Patch>,
}

/// Process-level root responder: owns the view tree, the screen, the panel
/// stack and the focus. All state is mutated from whatever single thread
/// drives `step`; there is no interior synchronization.
pub struct App {
    tree: ViewTree,
    screen: Screen,
    panels: Vec<Panel>,
    focus: Option<ViewId>,
    bindings: Bindings,
    quit: bool,
}

impl App {
    pub fn new(size: Size) -> Self {
        Self {
            tree: ViewTree::new(),
            screen: Screen::new(size),
            panels: Vec::new(),
            focus: None,
            bindings: Bindings::default(),
            quit: false,
        }
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ViewTree {
        &mut self.tree
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn size(&self) -> Size {
        self.screen.size()
    }

    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    pub fn focused(&self) -> Option<ViewId> {
        self.focus
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Push a panel on top of the stack. The root must be a detached root
    /// in this app's tree and not backing another panel.
    pub fn push_panel(&mut self, panel: Panel) -> bool {
        let root = panel.root;
        if !self.tree.contains(root)
            || self.tree.parent(root).is_some()
            || self.panels.iter().any(|p| p.root == root)
        {
            debug!(?root, "push_panel rejected");
            return false;
        }
        debug!(?root, modal = panel.modal, "push panel");
        self.panels.push(panel);
        // A newly eligible panel starts unfocused; focus pointing into a
        // now-covered panel is stale.
        self.validate_focus();
        true
    }

    /// Pop the topmost panel, clearing focus if it pointed into it. Focus is
    /// not restored on the uncovered panel; it stays unset until navigation
    /// or an explicit `set_focus`. The popped panel's root stays in the
    /// arena for reuse (call `remove` to drop it).
    pub fn pop_panel(&mut self) -> Option<Panel> {
        let panel = self.panels.pop()?;
        debug!(root = ?panel.root, "pop panel");
        self.clear_focus_under(panel.root);
        self.validate_focus();
        Some(panel)
    }

    fn pop_panel_at(&mut self, ix: usize) -> Panel {
        let panel = self.panels.remove(ix);
        debug!(root = ?panel.root, "dismiss panel");
        self.clear_focus_under(panel.root);
        self.validate_focus();
        panel
    }

    /// The panel eligible for focus-driven input: the topmost modal panel,
    /// or the topmost panel when no modal is on the stack.
    pub fn top_eligible(&self) -> Option<&Panel> {
        self.panels
            .iter()
            .rev()
            .find(|p| p.modal)
            .or_else(|| self.panels.last())
    }

    /// Focus `id`. Rejected (focus unchanged) unless `id` is a focusable
    /// view visibly attached under the top eligible panel.
    pub fn set_focus(&mut self, id: ViewId) -> bool {
        let focusable = self
            .tree
            .widget_dyn(id)
            .map(|w| w.focusable())
            .unwrap_or(false);
        self.focus_on(id, focusable)
    }

    fn focus_on(&mut self, id: ViewId, focusable: bool) -> bool {
        let Some(root) = self.top_eligible().map(|p| p.root) else {
            return false;
        };
        if !focusable || !self.visibly_attached(id, root) {
            debug!(?id, "focus rejected");
            return false;
        }
        debug!(?id, "focus set");
        self.focus = Some(id);
        true
    }

    pub fn clear_focus(&mut self) {
        if self.focus.take().is_some() {
            debug!("focus cleared");
        }
    }

    pub fn focus_next(&mut self) -> Option<ViewId> {
        self.move_focus(focus::next)
    }

    pub fn focus_previous(&mut self) -> Option<ViewId> {
        self.move_focus(focus::previous)
    }

    fn move_focus(
        &mut self,
        advance: fn(&ViewTree, ViewId, Option<ViewId>) -> Option<ViewId>,
    ) -> Option<ViewId> {
        let root = self.top_eligible().map(|p| p.root)?;
        self.focus = advance(&self.tree, root, self.focus);
        debug!(focus = ?self.focus, "focus moved");
        self.focus
    }

    /// Detach a view, atomically clearing focus if the focused view was in
    /// the detached subtree.
    pub fn detach(&mut self, id: ViewId) {
        self.clear_focus_under(id);
        self.tree.detach(id);
    }

    /// Remove a subtree from the arena entirely, clearing focus likewise.
    pub fn remove(&mut self, id: ViewId) {
        self.clear_focus_under(id);
        self.tree.remove(id);
    }

    fn clear_focus_under(&mut self, id: ViewId) {
        if let Some(f) = self.focus {
            if f == id || self.tree.is_ancestor(id, f) {
                self.clear_focus();
            }
        }
    }

    /// True when every link from `id` up to `root` exists and nothing on
    /// the way (including `id` itself) is hidden.
    fn visibly_attached(&self, id: ViewId, root: ViewId) -> bool {
        let mut cur = id;
        loop {
            if self.tree.hidden(cur) {
                return false;
            }
            if cur == root {
                return true;
            }
            match self.tree.parent(cur) {
                Some(parent) => cur = parent,
                None => return false,
            }
        }
    }

    /// Drop a focus reference that no longer points at a focusable view
    /// visibly attached under the top eligible panel. A stale handle is
    /// treated as "no such responder", never dereferenced.
    fn validate_focus(&mut self) {
        let Some(id) = self.focus else {
            return;
        };
        let ok = self.top_eligible().map(|p| p.root).is_some_and(|root| {
            self.tree
                .widget_dyn(id)
                .map(|w| w.focusable())
                .unwrap_or(false)
                && self.visibly_attached(id, root)
        });
        if !ok {
            debug!(?id, "dropping stale focus");
            self.focus = None;
        }
    }

    /// Route one event. Returns whether anything consumed it; an event the
    /// whole chain declines is "unhandled", not an error.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        trace!(?event, "dispatch");
        match event {
            Event::Resize(size) => {
                debug!(w = size.w, h = size.h, "resize");
                self.screen.resize(*size);
                true
            }
            Event::Key(key) if key.is_control() => self.handle_control_key(key),
            Event::Key(key) => self.dispatch_plain_key(key),
        }
    }

    /// Control-modified keys start (and end) at the application; they are
    /// never offered to the focused widget.
    fn handle_control_key(&mut self, key: &KeyEvent) -> bool {
        if Bindings::matches(self.bindings.quit, *key) {
            self.quit = true;
            true
        } else if Bindings::matches(self.bindings.next_focus, *key) {
            self.focus_next();
            true
        } else if Bindings::matches(self.bindings.previous_focus, *key) {
            self.focus_previous();
            true
        } else {
            trace!(?key, "unhandled control key");
            false
        }
    }

    /// Plain keys start at the focused widget and bubble parent by parent
    /// to the panel root, then the owning panel, then the application.
    /// Attach-time cycle rejection guarantees the walk terminates.
    fn dispatch_plain_key(&mut self, key: &KeyEvent) -> bool {
        self.validate_focus();
        let Some(start) = self.focus else {
            trace!(?key, "no focus, key unhandled");
            return false;
        };
        let panel_ix = self.panel_index_of(start);
        let mut cur = Some(start);
        while let Some(id) = cur {
            if self.offer_key(id, key).is_consumed() {
                return true;
            }
            cur = self.tree.parent(id);
        }
        if let Some(ix) = panel_ix {
            if self.panel_handle_key(ix, key) {
                return true;
            }
        }
        trace!(?key, "key fell off the responder chain");
        false
    }

    fn offer_key(&mut self, id: ViewId, key: &KeyEvent) -> Outcome {
        let focusable = self
            .tree
            .widget_dyn(id)
            .map(|w| w.focusable())
            .unwrap_or(false);
        let Some(mut widget) = self.tree.take_widget(id) else {
            return Outcome::Ignored;
        };
        let mut cx = EventCx {
            app: self,
            id,
            self_focusable: focusable,
        };
        let outcome = widget.handle_key(key, &mut cx);
        self.tree.put_widget(id, widget);
        outcome
    }

    fn panel_handle_key(&mut self, ix: usize, key: &KeyEvent) -> bool {
        let Some(panel) = self.panels.get(ix) else {
            return false;
        };
        if panel.dismiss_on_esc && key.code == KeyCode::Esc && key.modifiers.is_empty() {
            self.pop_panel_at(ix);
            return true;
        }
        false
    }

    fn root_of(&self, id: ViewId) -> ViewId {
        let mut cur = id;
        while let Some(parent) = self.tree.parent(cur) {
            cur = parent;
        }
        cur
    }

    fn panel_index_of(&self, id: ViewId) -> Option<usize> {
        let root = self.root_of(id);
        self.panels.iter().position(|p| p.root == root)
    }

    /// Process one event: dispatch, re-layout, repaint, diff, commit. The
    /// whole step runs without suspension; nothing observes the tree in a
    /// half-dispatched state.
    pub fn step(&mut self, event: Event) -> StepReport {
        let consumed = self.dispatch(&event);
        if self.quit {
            return StepReport {
                consumed,
                quit: true,
                patches: Vec::new(),
            };
        }
        self.layout_panels();
        self.validate_focus();
        self.paint();
        let patches = self.screen.diff();
        self.screen.commit();
        StepReport {
            consumed,
            quit: false,
            patches,
        }
    }

    /// Recompute panel frames for the current screen size and lay out every
    /// panel's tree top-down.
    pub fn layout_panels(&mut self) {
        let size = self.screen.size();
        for ix in 0..self.panels.len() {
            self.panels[ix].frame = self.panels[ix].compute_frame(size);
            let content = self.panels[ix].content_rect();
            let root = self.panels[ix].root;
            self.tree.set_frame(root, content);
            self.tree.layout(root);
        }
    }

    /// Repaint the whole back buffer, panels bottom to top. Each panel's
    /// content is clipped to its content rect.
    fn paint(&mut self) {
        self.screen.clear_back();
        let screen_rect = Rect::from_size(self.screen.size());
        for panel in &self.panels {
            panel.draw_chrome(&mut self.screen);
            let clip = panel.content_rect().intersect(screen_rect);
            self.tree
                .draw(panel.root, &mut self.screen, clip, Pos::default(), self.focus);
        }
    }

    /// The event loop: block on the input collaborator, process one event,
    /// replay the diff into the output collaborator, flush, repeat until a
    /// quit request.
    pub fn run(
        &mut self,
        source: &mut dyn EventSource,
        sink: &mut dyn CellWriter,
    ) -> io::Result<()> {
        loop {
            let Some(event) = source.next_event()? else {
                continue;
            };
            let report = self.step(event);
            if report.quit {
                return Ok(());
            }
            for patch in &report.patches {
                for (i, cell) in patch.cells.iter().enumerate() {
                    sink.write_cell(patch.x + i as u16, patch.y, cell)?;
                }
            }
            sink.flush()?;
        }
    }
}

/// What a widget may do to the application while handling an event. The
/// widget itself is lent out of the arena for the duration, so reaching
/// its own slot through the context yields nothing.
pub struct EventCx<'a> {
    app: &'a mut App,
    id: ViewId,
    self_focusable: bool,
}

impl EventCx<'_> {
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// This widget's frame in parent coordinates.
    pub fn own_frame(&self) -> Rect {
        self.app.tree.frame(self.id).unwrap_or_default()
    }

    pub fn frame(&self, id: ViewId) -> Rect {
        self.app.tree.frame(id).unwrap_or_default()
    }

    pub fn children(&self) -> Vec<ViewId> {
        self.app.tree.children(self.id).to_vec()
    }

    pub fn widget_mut<W: Widget>(&mut self, id: ViewId) -> Option<&mut W> {
        self.app.tree.widget_mut(id)
    }

    pub fn focused(&self) -> Option<ViewId> {
        self.app.focus
    }

    pub fn set_focus(&mut self, id: ViewId) -> bool {
        if id == self.id {
            self.app.focus_on(id, self.self_focusable)
        } else {
            self.app.set_focus(id)
        }
    }

    pub fn clear_focus(&mut self) {
        self.app.clear_focus();
    }

    pub fn detach(&mut self, id: ViewId) {
        self.app.detach(id);
    }

    pub fn remove(&mut self, id: ViewId) {
        self.app.remove(id);
    }

    pub fn push_panel(&mut self, panel: Panel) -> bool {
        self.app.push_panel(panel)
    }

    pub fn pop_panel(&mut self) -> Option<Panel> {
        self.app.pop_panel()
    }

    pub fn quit(&mut self) {
        self.app.request_quit();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/app.rs"]
mod tests;
