//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和提交处理

use crossterm::event::KeyCode;
use tracing::{debug, info};

use super::actions::Action;
use super::state::{App, Focus};
use crate::models::Entry;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::FocusInput => self.focus = Focus::Input,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::Submit => {
                self.submit();
            }
            Action::FieldKey(code) => self.on_key_up(code),

            Action::Input(c) => {
                if self.focus == Focus::Input {
                    self.field.push(c);
                }
            }
            Action::DeleteChar => {
                if self.focus == Focus::Input {
                    self.field.pop();
                }
            }
        }
        false
    }

    /// 读取输入框并追加条目
    ///
    /// 去掉首尾空白后为空则什么都不做：不加条目、不清空输入框、不移动焦点。
    /// 否则按原文（不解析任何标记）追加到列表末尾，清空输入框并把焦点还给它。
    /// 返回是否追加了条目。
    pub fn submit(&mut self) -> bool {
        let Some(text) = self.field.trimmed() else {
            debug!("ignored empty submission");
            return false;
        };

        self.list.append(Entry::new(text));
        self.field.clear();
        self.focus = Focus::Input;
        self.selected_index = self.list.len() - 1;

        info!(count = self.list.len(), "entry added");
        self.message = Some(format!("已添加，共 {} 条", self.list.len()));
        true
    }

    /// 输入框上的按键监听，只有 Enter 会提交
    pub fn on_key_up(&mut self, key: KeyCode) {
        if key == KeyCode::Enter {
            self.submit();
        }
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.list.len() {
            self.selected_index += 1;
        }
    }
}
