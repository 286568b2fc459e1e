/// 列表条目
///
/// 只有显示文本，没有其它身份，位置即身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 文本输入框
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// 去掉首尾空白后的值，为空时返回 None
    pub fn trimmed(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// 条目容器，按提交顺序保存
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加到末尾
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// 按顺序取出所有条目文本
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        assert_eq!(InputField::with_value("  milk \t").trimmed(), Some("milk"));
        assert_eq!(InputField::with_value(" \n\t ").trimmed(), None);
        assert_eq!(InputField::new().trimmed(), None);
        assert_eq!(InputField::with_value(" a b ").trimmed(), Some("a b"));
    }

    #[test]
    fn test_field_editing() {
        let mut field = InputField::new();
        field.push('h');
        field.push('i');
        field.push('!');
        field.pop();
        assert_eq!(field.value, "hi");

        field.clear();
        assert!(field.value.is_empty());
        field.pop(); // 空时不应 panic
        assert!(field.value.is_empty());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut list = EntryList::new();
        assert!(list.is_empty());
        list.append(Entry::new("a"));
        list.append(Entry::new("b"));
        list.append(Entry::new("a"));

        assert_eq!(list.len(), 3);
        assert_eq!(list.texts(), vec!["a", "b", "a"]);
    }
}
