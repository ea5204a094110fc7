use crate::app::theme::Theme;
use crate::app::view::Element;

/// 頁面上所有可變的狀態，由 [`crate::core::engine::LookupEngine`] 持有
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// 輸入框目前的值
    pub input: String,
    pub trigger_disabled: bool,
    pub loading_visible: bool,
    /// 有值時顯示錯誤面板
    pub error: Option<String>,
    /// 有值時顯示結果區塊
    pub result: Option<Element>,
    pub theme: Theme,
}

/// Idle → Loading → (Success | Error) → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading_visible {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }

    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }

    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }
}
