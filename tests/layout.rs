//! Layout state machine tests
//!
//! Mode switching, focus memory, tabs and preview placement.

mod common;

use common::{run, test_model_with_layout};
use livepad::commands::Cmd;
use livepad::messages::{LayoutMsg, Msg};
use livepad::model::{Bounds, LayoutKind, LayoutMode, Pane};

fn set_layout(kind: LayoutKind) -> Msg {
    Msg::Layout(LayoutMsg::SetLayout(kind))
}

fn slot() -> Bounds {
    Bounds {
        x: 900.0,
        y: 60.0,
        width: 300.0,
        height: 600.0,
    }
}

#[test]
fn test_focus_without_prior_focus_defaults_to_markup() {
    let mut model = test_model_with_layout(LayoutKind::SplitHorizontal);
    run(&mut model, set_layout(LayoutKind::SingleFocus));
    assert_eq!(
        model.settings.layout.mode(),
        LayoutMode::SingleFocus(Pane::Markup)
    );
}

#[test]
fn test_starting_in_focus_mode_focuses_markup() {
    let model = test_model_with_layout(LayoutKind::SingleFocus);
    assert_eq!(model.settings.layout.focused_pane(), Some(Pane::Markup));
}

#[test]
fn test_maximize_enters_focus_on_that_pane() {
    let mut model = test_model_with_layout(LayoutKind::SplitVertical);
    run(&mut model, Msg::Layout(LayoutMsg::Maximize(Pane::Script)));
    assert_eq!(model.settings.layout.kind(), LayoutKind::SingleFocus);
    assert_eq!(model.settings.layout.focused_pane(), Some(Pane::Script));
}

#[test]
fn test_focus_remembered_across_modes() {
    let mut model = test_model_with_layout(LayoutKind::SplitHorizontal);
    run(&mut model, Msg::Layout(LayoutMsg::Maximize(Pane::Style)));
    run(&mut model, set_layout(LayoutKind::Tabbed));
    run(&mut model, set_layout(LayoutKind::SingleFocus));
    assert_eq!(model.settings.layout.focused_pane(), Some(Pane::Style));
}

#[test]
fn test_focused_pane_present_iff_single_focus() {
    let mut model = test_model_with_layout(LayoutKind::SplitHorizontal);
    let steps = [
        set_layout(LayoutKind::SplitVertical),
        Msg::Layout(LayoutMsg::Maximize(Pane::Preview)),
        set_layout(LayoutKind::Tabbed),
        Msg::Layout(LayoutMsg::SelectTab(Pane::Script)),
        set_layout(LayoutKind::SingleFocus),
        set_layout(LayoutKind::SplitHorizontal),
    ];
    for msg in steps {
        run(&mut model, msg);
        let layout = &model.settings.layout;
        assert_eq!(
            layout.focused_pane().is_some(),
            layout.kind() == LayoutKind::SingleFocus,
            "invariant broken in {:?}",
            layout.mode()
        );
    }
}

#[test]
fn test_select_tab_records_active_tab() {
    let mut model = test_model_with_layout(LayoutKind::Tabbed);
    assert_eq!(model.settings.layout.active_tab(), Pane::Markup);

    let cmds = run(&mut model, Msg::Layout(LayoutMsg::SelectTab(Pane::Preview)));
    assert!(cmds.contains(&Cmd::Redraw));
    assert_eq!(model.settings.layout.active_tab(), Pane::Preview);
    assert!(model.settings.layout.preview_visible());

    // Reselecting the same tab is a no-op
    assert!(run(&mut model, Msg::Layout(LayoutMsg::SelectTab(Pane::Preview))).is_empty());
}

#[test]
fn test_hiding_preview_hides_webview() {
    let mut model = test_model_with_layout(LayoutKind::SplitHorizontal);
    let cmds = run(&mut model, Msg::Layout(LayoutMsg::Maximize(Pane::Markup)));
    assert!(cmds.contains(&Cmd::PlacePreview(None)));

    let cmds = run(&mut model, set_layout(LayoutKind::SplitVertical));
    assert_eq!(cmds, vec![Cmd::Redraw]);
}

#[test]
fn test_preview_bounds_place_webview() {
    let mut model = test_model_with_layout(LayoutKind::SplitHorizontal);
    let cmds = run(&mut model, Msg::Layout(LayoutMsg::PreviewBounds(Some(slot()))));
    assert_eq!(cmds, vec![Cmd::PlacePreview(Some(slot()))]);
    assert_eq!(model.preview.bounds, Some(slot()));
}

#[test]
fn test_empty_or_missing_bounds_hide_webview() {
    let mut model = test_model_with_layout(LayoutKind::SplitHorizontal);
    let empty = Bounds {
        width: 0.0,
        ..slot()
    };
    let cmds = run(&mut model, Msg::Layout(LayoutMsg::PreviewBounds(Some(empty))));
    assert_eq!(cmds, vec![Cmd::PlacePreview(None)]);

    let cmds = run(&mut model, Msg::Layout(LayoutMsg::PreviewBounds(None)));
    assert_eq!(cmds, vec![Cmd::PlacePreview(None)]);
    assert_eq!(model.preview.bounds, None);
}

#[test]
fn test_bounds_ignored_while_preview_off_screen() {
    let mut model = test_model_with_layout(LayoutKind::Tabbed);
    let cmds = run(&mut model, Msg::Layout(LayoutMsg::PreviewBounds(Some(slot()))));
    assert_eq!(cmds, vec![Cmd::PlacePreview(None)]);
}
