//! Widget gallery: one screenful of everything, driven through the real
//! terminal collaborators. Ctrl+Tab cycles focus, Ctrl+Q quits.

use std::io;

use tixelkit::ui::controls::{Button, ButtonKind, ListView, Slider, Stepper, TextField};
use tixelkit::ui::core::app::{App, CellWriter, Panel, Placement, StepReport};
use tixelkit::ui::core::event::Event;
use tixelkit::ui::core::geom::{Rect, Size};
use tixelkit::ui::core::tree::ViewId;
use tixelkit::ui::views::{AccordionView, Axis, ClipView, FillView, ScrollView, SplitView, TabView, TextView};
use tixelkit::tui::{terminal_size, CrosstermEvents, CrosstermScreen, TerminalGuard};

const LONG_TEXT: &str = "\
The responder chain routes every keystroke from the focused control up
through its ancestor views, the owning panel, and finally the application.

Scroll this text with the arrow keys, PageUp/PageDown, Home and End while
the scroll view holds focus (it sits in the chain above the text).

Each processed event repaints the view tree into a back buffer; only the
cells that differ from the committed frame are written to the terminal.";

fn build_dialog(app: &mut App) -> ViewId {
    let tree = app.tree_mut();
    let root = tree.insert(ClipView);
    let text = tree.insert(TextView::new("Press Esc to dismiss this dialog."));
    let close = tree.insert(
        Button::new("Close").on_press(|cx| {
            cx.pop_panel();
        }),
    );
    tree.attach(root, text).expect("fresh dialog tree");
    tree.attach(root, close).expect("fresh dialog tree");
    tree.set_frame(text, Rect::new(1, 1, 34, 1));
    tree.set_frame(close, Rect::new(1, 3, 11, 1));
    root
}

fn build_ui(app: &mut App) {
    let dialog_root = build_dialog(app);

    let tree = app.tree_mut();
    let root = tree.insert(SplitView::new(Axis::Horizontal).with_ratio(0.3));

    // Left pane: a scrollable list.
    let left = tree.insert(ScrollView::new().autohide(true));
    let mut list = ListView::default();
    for i in 1..=40 {
        list.push_item(format!("item {i:02}"));
    }
    let list_size = list.content_size();
    let list_id = tree.insert(list);
    tree.attach(left, list_id).expect("fresh tree");
    tree.set_frame(list_id, Rect::new(0, 0, list_size.w, list_size.h));

    // Right pane: tabs exercising the other widgets.
    let tabs_id = tree.insert(TabView::new());

    let controls_page = tree.insert(ClipView);
    let button = tree.insert(
        Button::new("Open dialog").on_press(move |cx| {
            cx.push_panel(
                Panel::new(dialog_root)
                    .placement(Placement::Centered(Size::new(38, 7)))
                    .modal(true)
                    .bordered(true)
                    .title("dialog")
                    .dismiss_on_esc(true),
            );
        }),
    );
    let toggle = tree.insert(Button::new("Toggle me").kind(ButtonKind::Toggle));
    let slider = tree.insert(Slider::new(10));
    let stepper = tree.insert(Stepper::new().minimum(0).maximum(100).step(5));
    let field = tree.insert(TextField::with_text("edit me"));
    for (i, id) in [button, toggle, slider, stepper, field].into_iter().enumerate() {
        tree.attach(controls_page, id).expect("fresh tree");
        tree.set_frame(id, Rect::new(2, 1 + 2 * i as i32, 20, 1));
    }

    let text_page = tree.insert(ScrollView::new());
    let text = TextView::new(LONG_TEXT);
    let text_size = text.content_size();
    let text_id = tree.insert(text);
    tree.attach(text_page, text_id).expect("fresh tree");
    tree.set_frame(text_id, Rect::new(0, 0, text_size.w, text_size.h));

    let sections_page = tree.insert({
        let mut acc = AccordionView::new();
        acc.add_section("stars");
        acc.add_section("dots");
        acc
    });
    for ch in ['*', '.'] {
        let fill = tree.insert(FillView::new(ch));
        tree.attach(sections_page, fill).expect("fresh tree");
        tree.set_frame(fill, Rect::new(0, 0, 0, 4));
    }

    let tabs = tree.widget_mut::<TabView>(tabs_id).expect("just inserted");
    tabs.add_tab("controls");
    tabs.add_tab("text");
    tabs.add_tab("sections");
    for page in [controls_page, text_page, sections_page] {
        tree.attach(tabs_id, page).expect("fresh tree");
    }

    tree.attach(root, left).expect("fresh tree");
    tree.attach(root, tabs_id).expect("fresh tree");

    app.push_panel(Panel::new(root).title("tixelkit gallery"));
    app.focus_next();
}

fn blit(report: &StepReport, sink: &mut impl CellWriter) -> io::Result<()> {
    for patch in &report.patches {
        for (i, cell) in patch.cells.iter().enumerate() {
            sink.write_cell(patch.x + i as u16, patch.y, cell)?;
        }
    }
    sink.flush()
}

fn main() -> io::Result<()> {
    let _logging = tixelkit::logging::init(std::env::temp_dir().join("tixelkit").join("logs"));

    let size = terminal_size()?;
    let mut app = App::new(size);
    build_ui(&mut app);

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    tixelkit::tui::terminal_guard::install_termination_signals(guard.restorer())?;

    let mut events = CrosstermEvents;
    let mut screen = CrosstermScreen::stdout();

    // First frame before any input arrives.
    let report = app.step(Event::Resize(size));
    blit(&report, &mut screen)?;

    app.run(&mut events, &mut screen)?;
    drop(guard);
    Ok(())
}
