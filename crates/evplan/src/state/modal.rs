//! Modal types for the record form, confirmations and messages.

use evplan_core::RecordId;

/// What a confirmed modal should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    AddRecord,
    DeleteRecord,
}

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    Message(MessageModal),
    Form(FormModal),
    Confirm(ConfirmModal),
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

// ========== FormModal ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    /// `.`-grouped amount, digits and separators only
    Amount,
    /// Plain decimal, sign allowed
    Probability,
}

impl FieldType {
    /// Whether `c` may be typed into a field of this type
    pub fn accepts(&self, c: char) -> bool {
        match self {
            FieldType::Text => true,
            FieldType::Amount => c.is_ascii_digit() || c == '.' || c == '-',
            FieldType::Probability => c.is_ascii_digit() || c == '.' || c == '-',
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub field_type: FieldType,
    pub value: String,
    pub cursor_pos: usize,
}

impl FormField {
    pub fn new(label: &str, field_type: FieldType) -> Self {
        Self {
            label: label.to_string(),
            field_type,
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.value[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.value[..self.cursor_pos].chars().next_back() {
            self.cursor_pos -= prev.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(next) = self.value[self.cursor_pos..].chars().next() {
            self.cursor_pos += next.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.value.len();
    }
}

#[derive(Debug)]
pub struct FormModal {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused_field: usize,
    pub action: ModalAction,
    /// Why the last submission was rejected
    pub error: Option<String>,
}

impl FormModal {
    pub fn new(title: &str, fields: Vec<FormField>, action: ModalAction) -> Self {
        Self {
            title: title.to_string(),
            fields,
            focused_field: 0,
            action,
            error: None,
        }
    }

    /// The five-field form a record is entered with
    pub fn add_record() -> Self {
        Self::new(
            "Add Record",
            vec![
                FormField::new("Decision", FieldType::Text),
                FormField::new("Market Condition", FieldType::Text),
                FormField::new("Probability", FieldType::Probability),
                FormField::new("Cost (Rp)", FieldType::Amount),
                FormField::new("Revenue (Rp)", FieldType::Amount),
            ],
            ModalAction::AddRecord,
        )
    }

    pub fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused_field)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused_field = (self.focused_field + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused_field = self
                .focused_field
                .checked_sub(1)
                .unwrap_or(self.fields.len() - 1);
        }
    }

    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }
}

// ========== ConfirmModal ==========

#[derive(Debug)]
pub struct ConfirmModal {
    pub title: String,
    pub message: String,
    pub action: ModalAction,
    /// Record the confirmation applies to
    pub record: Option<RecordId>,
}

impl ConfirmModal {
    pub fn new(title: &str, message: &str, action: ModalAction) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action,
            record: None,
        }
    }

    pub fn with_record(mut self, id: RecordId) -> Self {
        self.record = Some(id);
        self
    }
}
