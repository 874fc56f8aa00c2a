//! 提示词建议选择状态

use qr_studio_core::suggestions;

/// 当前选中的提示词建议
#[derive(Debug, Clone, Default)]
pub struct SuggestionsState {
    pub selected: usize,
}

impl SuggestionsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self) {
        let count = suggestions::count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = suggestions::count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// 当前选中的文本
    pub fn current(&self) -> Option<&'static str> {
        suggestions::get(self.selected)
    }
}
