//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::Rect;

use crate::config::Config;
use crate::models::{EntryList, InputField};

/// 应用状态
pub struct App {
    pub field: InputField,
    pub list: EntryList,
    pub focus: Focus,
    pub selected_index: usize,
    pub message: Option<String>,
    pub labels: Labels,
    /// 上一帧的输入框与按钮位置，用于鼠标命中
    pub input_area: Rect,
    pub button_area: Rect,
}

/// 当前接收按键的组件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Button,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::List,
            Focus::List => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::Button => Focus::Input,
            Focus::List => Focus::Button,
        }
    }
}

/// 界面文字
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub title: String,
    pub input: String,
    pub list: String,
}

impl From<&Config> for Labels {
    fn from(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            input: config.input_label.clone(),
            list: config.list_label.clone(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl App {
    /// 创建新的应用实例，输入框和列表由调用方注入
    pub fn new(field: InputField, list: EntryList, labels: Labels) -> Self {
        Self {
            field,
            list,
            focus: Focus::Input,
            selected_index: 0,
            message: None,
            labels,
            input_area: Rect::default(),
            button_area: Rect::default(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(InputField::new(), EntryList::new(), Labels::default())
    }
}
