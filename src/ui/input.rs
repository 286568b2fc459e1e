//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将终端事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Char(_)
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                None
            }
            KeyCode::Char(c) => Some(Action::Input(c)),
            KeyCode::Backspace => Some(Action::DeleteChar),
            code => Some(Action::FieldKey(code)),
        },
        Focus::Button => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Submit),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            _ => None,
        },
    }
}

/// 鼠标左键点击：按钮即提交，输入框即聚焦
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let pos = Position::new(mouse.column, mouse.row);
    if app.button_area.contains(pos) {
        Some(Action::Submit)
    } else if app.input_area.contains(pos) {
        Some(Action::FocusInput)
    } else {
        None
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.focus, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> bool {
    match get_mouse_action(app, mouse) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_input_focus_mapping() {
        assert_eq!(get_action(Focus::Input, key(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(get_action(Focus::Input, key(KeyCode::Backspace)), Some(Action::DeleteChar));
        assert_eq!(
            get_action(Focus::Input, key(KeyCode::Enter)),
            Some(Action::FieldKey(KeyCode::Enter))
        );
        assert_eq!(
            get_action(Focus::Input, key(KeyCode::Left)),
            Some(Action::FieldKey(KeyCode::Left))
        );
    }

    #[test]
    fn test_modified_chars_not_typed() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(get_action(Focus::Input, ctrl_a), None);
        assert_eq!(get_action(Focus::Input, alt_x), None);
        assert_eq!(get_action(Focus::Input, shift_a), Some(Action::Input('A')));

        let mut app = App::default();
        handle_key_event(&mut app, ctrl_a);
        handle_key_event(&mut app, alt_x);
        assert!(app.field.value.is_empty());
    }

    #[test]
    fn test_global_keys() {
        for focus in [Focus::Input, Focus::Button, Focus::List] {
            assert_eq!(get_action(focus, key(KeyCode::Esc)), Some(Action::Quit));
            assert_eq!(get_action(focus, key(KeyCode::Tab)), Some(Action::FocusNext));
            assert_eq!(get_action(focus, key(KeyCode::BackTab)), Some(Action::FocusPrev));
            assert_eq!(
                get_action(focus, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn test_button_and_list_mapping() {
        assert_eq!(get_action(Focus::Button, key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(get_action(Focus::Button, key(KeyCode::Char(' '))), Some(Action::Submit));
        assert_eq!(get_action(Focus::Button, key(KeyCode::Char('x'))), None);
        assert_eq!(get_action(Focus::List, key(KeyCode::Char('j'))), Some(Action::MoveSelectionDown));
        assert_eq!(get_action(Focus::List, key(KeyCode::Up)), Some(Action::MoveSelectionUp));
        assert_eq!(get_action(Focus::List, key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_typing_then_enter_appends() {
        let mut app = App::default();
        for c in "  buy milk ".chars() {
            assert!(!handle_key_event(&mut app, key(KeyCode::Char(c))));
        }
        handle_key_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.list.texts(), vec!["buy milk"]);
        assert!(app.field.value.is_empty());
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_non_enter_keys_never_append() {
        let mut app = App::default();
        app.field.value = "content".to_string();
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Home, KeyCode::F(5), KeyCode::Delete] {
            handle_key_event(&mut app, key(code));
        }
        assert!(app.list.is_empty());
        assert_eq!(app.field.value, "content");
    }

    #[test]
    fn test_mouse_click_button_submits() {
        let mut app = App::default();
        app.input_area = Rect::new(0, 3, 30, 3);
        app.button_area = Rect::new(30, 3, 10, 3);
        app.field.value = "from mouse".to_string();
        app.focus = Focus::List;

        assert!(!handle_mouse_event(&mut app, click(34, 4)));
        assert_eq!(app.list.texts(), vec!["from mouse"]);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_mouse_click_input_focuses() {
        let mut app = App::default();
        app.input_area = Rect::new(0, 3, 30, 3);
        app.button_area = Rect::new(30, 3, 10, 3);
        app.focus = Focus::Button;

        handle_mouse_event(&mut app, click(5, 4));
        assert_eq!(app.focus, Focus::Input);

        app.focus = Focus::List;
        handle_mouse_event(&mut app, click(50, 20));
        assert_eq!(app.focus, Focus::List);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click(34, 4)
        };
        assert_eq!(get_mouse_action(&app, release), None);
    }
}
