//! Focus traversal policy: the focusable views of a panel in pre-order
//! (parent before children, children in child-list order), with wrapping
//! next/previous moves over that sequence.

use super::tree::{ViewId, ViewTree};

/// Focusable views under `root` in traversal order. Hidden subtrees (an
/// unselected tab page, a collapsed accordion section) are skipped: a view
/// that is not drawn cannot take the keyboard.
pub fn focusables(tree: &ViewTree, root: ViewId) -> Vec<ViewId> {
    let mut out = Vec::new();
    collect(tree, root, &mut out);
    out
}

fn collect(tree: &ViewTree, id: ViewId, out: &mut Vec<ViewId>) {
    if tree.hidden(id) {
        return;
    }
    if tree.widget_dyn(id).is_some_and(|w| w.focusable()) {
        out.push(id);
    }
    for &child in tree.children(id) {
        collect(tree, child, out);
    }
}

/// The focusable view after `current`, wrapping past the end. With no
/// current focus (or a focus that left the sequence) this is the first
/// focusable view; `None` only when nothing under `root` is focusable.
pub fn next(tree: &ViewTree, root: ViewId, current: Option<ViewId>) -> Option<ViewId> {
    let order = focusables(tree, root);
    if order.is_empty() {
        return None;
    }
    let Some(cur) = current else {
        return order.first().copied();
    };
    match order.iter().position(|&id| id == cur) {
        Some(i) => Some(order[(i + 1) % order.len()]),
        None => order.first().copied(),
    }
}

/// The focusable view before `current`, wrapping past the start.
pub fn previous(tree: &ViewTree, root: ViewId, current: Option<ViewId>) -> Option<ViewId> {
    let order = focusables(tree, root);
    if order.is_empty() {
        return None;
    }
    let Some(cur) = current else {
        return order.last().copied();
    };
    match order.iter().position(|&id| id == cur) {
        Some(i) => Some(order[(i + order.len() - 1) % order.len()]),
        None => order.last().copied(),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/focus.rs"]
mod tests;
