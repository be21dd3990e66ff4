// src/config/state.rs
use super::options::AppOptions;
use crate::tooltip::TooltipStyle;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Tooltip detail level, passed into every format call
    pub tooltip_style: TooltipStyle,

    pub window_w: f32,
    pub window_h: f32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Plots page -> only show plots in this section (None = all)
    pub section_filter: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            tooltip_style: TooltipStyle::default(),
            window_w: 1100.0,
            window_h: 700.0,
            current_page_index: 0,
            section_filter: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            tooltip_style: options.tooltip.style,
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
