//! Render settings - font size, theme, and the layout/focus state machine

use serde::{Deserialize, Serialize};

use super::sources::BufferKind;

/// Smallest selectable editor font size
pub const MIN_FONT_SIZE: u8 = 10;
/// Largest selectable editor font size
pub const MAX_FONT_SIZE: u8 = 24;
/// Font size used when nothing else is configured
pub const DEFAULT_FONT_SIZE: u8 = 14;

/// A pane that can be focused, maximized or selected as a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    Markup,
    Style,
    Script,
    Preview,
}

impl Pane {
    pub fn buffer(self) -> Option<BufferKind> {
        match self {
            Pane::Markup => Some(BufferKind::Markup),
            Pane::Style => Some(BufferKind::Style),
            Pane::Script => Some(BufferKind::Script),
            Pane::Preview => None,
        }
    }
}

impl From<BufferKind> for Pane {
    fn from(kind: BufferKind) -> Self {
        match kind {
            BufferKind::Markup => Pane::Markup,
            BufferKind::Style => Pane::Style,
            BufferKind::Script => Pane::Script,
        }
    }
}

/// Layout selection as offered in the menu (no focus target attached)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutKind {
    #[default]
    #[serde(rename = "horizontal")]
    SplitHorizontal,
    #[serde(rename = "vertical")]
    SplitVertical,
    #[serde(rename = "tabs")]
    Tabbed,
    #[serde(rename = "focus")]
    SingleFocus,
}

impl LayoutKind {
    pub fn label(self) -> &'static str {
        match self {
            LayoutKind::SplitHorizontal => "Horizontal Split",
            LayoutKind::SplitVertical => "Vertical Split",
            LayoutKind::Tabbed => "Tab View",
            LayoutKind::SingleFocus => "Focus Mode",
        }
    }
}

impl std::str::FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(LayoutKind::SplitHorizontal),
            "vertical" => Ok(LayoutKind::SplitVertical),
            "tabs" => Ok(LayoutKind::Tabbed),
            "focus" => Ok(LayoutKind::SingleFocus),
            other => Err(format!(
                "unknown layout '{}' (expected horizontal, vertical, tabs or focus)",
                other
            )),
        }
    }
}

/// The active layout. Only single-focus carries a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    SplitHorizontal,
    SplitVertical,
    Tabbed,
    SingleFocus(Pane),
}

impl LayoutMode {
    pub fn kind(self) -> LayoutKind {
        match self {
            LayoutMode::SplitHorizontal => LayoutKind::SplitHorizontal,
            LayoutMode::SplitVertical => LayoutKind::SplitVertical,
            LayoutMode::Tabbed => LayoutKind::Tabbed,
            LayoutMode::SingleFocus(_) => LayoutKind::SingleFocus,
        }
    }
}

/// Layout state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    mode: LayoutMode,
    /// Last pane shown in single-focus mode, restored when re-entering it
    last_focus: Option<Pane>,
    /// Selected tab in tabbed mode
    active_tab: Pane,
}

impl LayoutState {
    pub fn new(kind: LayoutKind) -> Self {
        let mut state = Self {
            mode: LayoutMode::SplitHorizontal,
            last_focus: None,
            active_tab: Pane::Markup,
        };
        state.set_kind(kind);
        state
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn kind(&self) -> LayoutKind {
        self.mode.kind()
    }

    pub fn active_tab(&self) -> Pane {
        self.active_tab
    }

    /// The focused pane, present iff the mode is single-focus
    pub fn focused_pane(&self) -> Option<Pane> {
        match self.mode {
            LayoutMode::SingleFocus(pane) => Some(pane),
            _ => None,
        }
    }

    /// Menu selection. Single-focus restores the last focused pane, else markup.
    pub fn set_kind(&mut self, kind: LayoutKind) {
        self.mode = match kind {
            LayoutKind::SplitHorizontal => LayoutMode::SplitHorizontal,
            LayoutKind::SplitVertical => LayoutMode::SplitVertical,
            LayoutKind::Tabbed => LayoutMode::Tabbed,
            LayoutKind::SingleFocus => {
                let pane = self
                    .focused_pane()
                    .or(self.last_focus)
                    .unwrap_or(Pane::Markup);
                self.last_focus = Some(pane);
                LayoutMode::SingleFocus(pane)
            }
        };
    }

    /// Per-pane "maximize" action
    pub fn maximize(&mut self, pane: Pane) {
        self.last_focus = Some(pane);
        self.mode = LayoutMode::SingleFocus(pane);
    }

    /// Tab selection; only meaningful in tabbed mode but always recorded
    pub fn select_tab(&mut self, pane: Pane) {
        self.active_tab = pane;
    }

    /// Whether the preview pane is on screen in the current layout
    pub fn preview_visible(&self) -> bool {
        match self.mode {
            LayoutMode::SplitHorizontal | LayoutMode::SplitVertical => true,
            LayoutMode::Tabbed => self.active_tab == Pane::Preview,
            LayoutMode::SingleFocus(pane) => pane == Pane::Preview,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(LayoutKind::default())
    }
}

/// Process-lifetime display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    font_size: u8,
    pub dark_mode: bool,
    pub layout: LayoutState,
}

impl RenderSettings {
    pub fn new(font_size: u8, dark_mode: bool, layout: LayoutKind) -> Self {
        Self {
            font_size: clamp_font_size(font_size as i32),
            dark_mode,
            layout: LayoutState::new(layout),
        }
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    /// Adjust the font size by `delta`, clamped to the supported range.
    ///
    /// Returns true if the size changed.
    pub fn adjust_font_size(&mut self, delta: i32) -> bool {
        let next = clamp_font_size((self.font_size as i32).saturating_add(delta));
        let changed = next != self.font_size;
        self.font_size = next;
        changed
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE, false, LayoutKind::default())
    }
}

fn clamp_font_size(size: i32) -> u8 {
    size.clamp(MIN_FONT_SIZE as i32, MAX_FONT_SIZE as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_without_history_defaults_to_markup() {
        let mut layout = LayoutState::default();
        layout.set_kind(LayoutKind::SingleFocus);
        assert_eq!(layout.mode(), LayoutMode::SingleFocus(Pane::Markup));
    }

    #[test]
    fn focus_restores_last_maximized_pane() {
        let mut layout = LayoutState::default();
        layout.maximize(Pane::Script);
        layout.set_kind(LayoutKind::Tabbed);
        assert_eq!(layout.focused_pane(), None);

        layout.set_kind(LayoutKind::SingleFocus);
        assert_eq!(layout.focused_pane(), Some(Pane::Script));
    }

    #[test]
    fn focused_pane_only_in_single_focus() {
        let mut layout = LayoutState::default();
        for kind in [
            LayoutKind::SplitHorizontal,
            LayoutKind::SplitVertical,
            LayoutKind::Tabbed,
            LayoutKind::SingleFocus,
        ] {
            layout.set_kind(kind);
            assert_eq!(
                layout.focused_pane().is_some(),
                kind == LayoutKind::SingleFocus
            );
        }
    }

    #[test]
    fn preview_visibility_follows_layout() {
        let mut layout = LayoutState::new(LayoutKind::Tabbed);
        assert!(!layout.preview_visible());
        layout.select_tab(Pane::Preview);
        assert!(layout.preview_visible());

        layout.maximize(Pane::Style);
        assert!(!layout.preview_visible());
        layout.maximize(Pane::Preview);
        assert!(layout.preview_visible());

        layout.set_kind(LayoutKind::SplitVertical);
        assert!(layout.preview_visible());
    }

    #[test]
    fn font_size_is_clamped() {
        let mut settings = RenderSettings::default();
        assert!(settings.adjust_font_size(-100));
        assert_eq!(settings.font_size(), MIN_FONT_SIZE);
        assert!(!settings.adjust_font_size(-1));
        settings.adjust_font_size(100);
        assert_eq!(settings.font_size(), MAX_FONT_SIZE);
        assert!(!settings.adjust_font_size(1));
        assert_eq!(settings.font_size(), MAX_FONT_SIZE);
    }

    #[test]
    fn extreme_font_deltas_stay_at_nearest_bound() {
        let mut settings = RenderSettings::default();
        assert!(settings.adjust_font_size(i32::MAX));
        assert_eq!(settings.font_size(), MAX_FONT_SIZE);
        assert!(!settings.adjust_font_size(i32::MAX));
        assert_eq!(settings.font_size(), MAX_FONT_SIZE);

        assert!(settings.adjust_font_size(i32::MIN));
        assert_eq!(settings.font_size(), MIN_FONT_SIZE);
        assert!(!settings.adjust_font_size(i32::MIN));
        assert_eq!(settings.font_size(), MIN_FONT_SIZE);
    }

    #[test]
    fn layout_kind_parses_cli_names() {
        assert_eq!("tabs".parse::<LayoutKind>(), Ok(LayoutKind::Tabbed));
        assert!("grid".parse::<LayoutKind>().is_err());
    }
}
