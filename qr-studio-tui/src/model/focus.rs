//! 焦点状态定义

/// 表单内可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// URL 输入框
    #[default]
    Url,
    /// 提示词输入框
    Prompt,
    /// 提示词建议
    Suggestions,
    /// 生成按钮
    Generate,
}

impl FormFocus {
    /// 下一个控件
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormFocus::Url => FormFocus::Prompt,
            FormFocus::Prompt => FormFocus::Suggestions,
            FormFocus::Suggestions => FormFocus::Generate,
            FormFocus::Generate => FormFocus::Url,
        }
    }

    /// 上一个控件
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FormFocus::Url => FormFocus::Generate,
            FormFocus::Prompt => FormFocus::Url,
            FormFocus::Suggestions => FormFocus::Prompt,
            FormFocus::Generate => FormFocus::Suggestions,
        }
    }

    /// 是否是文本输入框
    pub fn is_text_input(self) -> bool {
        matches!(self, FormFocus::Url | FormFocus::Prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_in_both_directions() {
        let mut focus = FormFocus::Url;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Url);
        assert_eq!(FormFocus::Url.prev(), FormFocus::Generate);
        assert_eq!(FormFocus::Generate.next().prev(), FormFocus::Generate);
    }
}
