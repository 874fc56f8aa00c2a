//! 单行文本输入框状态

use unicode_width::UnicodeWidthStr;

/// 带光标的单行输入
///
/// 光标以字符（而不是字节）为单位。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// 替换全部内容，光标移到末尾
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// 在光标处插入字符
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// 删除光标前的字符，返回是否有变化
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// 删除光标后的字符，返回是否有变化
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// 光标前文本的显示宽度（CJK 字符占两列）
    pub fn cursor_offset(&self) -> usize {
        self.value[..self.byte_index(self.cursor)].width()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_delete_at_cursor() {
        let mut input = TextInput::new();
        for ch in "hllo".chars() {
            input.insert(ch);
        }
        input.move_home();
        input.move_right();
        input.insert('e');
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor, 2);

        assert!(input.backspace());
        assert_eq!(input.value(), "hllo");
        assert!(input.delete());
        assert_eq!(input.value(), "hlo");

        input.move_end();
        assert!(!input.delete());
        input.move_home();
        assert!(!input.backspace());
    }

    #[test]
    fn multibyte_characters() {
        let mut input = TextInput::new();
        input.set_value("雪山湖");
        assert_eq!(input.cursor, 3);
        assert_eq!(input.cursor_offset(), 6);

        input.move_left();
        assert!(input.backspace());
        assert_eq!(input.value(), "雪湖");
        assert_eq!(input.cursor_offset(), 2);
    }
}
