//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crossterm::event::KeyCode;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    FocusInput,
    MoveSelectionUp,
    MoveSelectionDown,

    Submit,           // 按钮 Enter / Space / 点击
    Input(char),      // 输入字符
    DeleteChar,       // Backspace
    FieldKey(KeyCode), // 输入框上的其它按键，交给 on_key_up
}
