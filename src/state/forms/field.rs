//! Form field value objects

/// Kind of input element a field represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Checkbox,
    Radio,
}

/// Visual validation state reflected in the field border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Never validated
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// A single `<option>` of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Represents a single form element with its constraints and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    /// Only meaningful for checkbox and radio elements
    pub checked: bool,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: Vec<SelectOption>,
    pub status: FieldStatus,
}

impl FormField {
    fn new(id: &str, name: &str, kind: FieldKind, value: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            value: value.to_string(),
            checked: false,
            required: false,
            min: None,
            max: None,
            options: Vec::new(),
            status: FieldStatus::Neutral,
        }
    }

    /// Create a free text field whose id doubles as its name
    pub fn text(id: &str) -> Self {
        Self::new(id, id, FieldKind::Text, "")
    }

    /// Create a numeric field bounded by `min` and `max`
    pub fn number(id: &str, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::new(id, id, FieldKind::Number, "")
        }
    }

    /// Create a select field; a leading placeholder option with an empty value is added
    pub fn select(id: &str, options: &[&str]) -> Self {
        let mut placeholder = vec![SelectOption::new("", "Select...")];
        placeholder.extend(options.iter().map(|o| SelectOption::new(o, o)));
        Self {
            options: placeholder,
            ..Self::new(id, id, FieldKind::Select, "")
        }
    }

    /// Create one checkbox of a group sharing `name`
    pub fn checkbox(name: &str, value: &str) -> Self {
        Self::new(&format!("{name}-{value}"), name, FieldKind::Checkbox, value)
    }

    /// Create one radio button of a group sharing `name`
    pub fn radio(name: &str, value: &str) -> Self {
        Self::new(&format!("{name}-{value}"), name, FieldKind::Radio, value)
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Checkbox and radio elements carry a fixed value and a checked flag
    pub fn is_checkable(&self) -> bool {
        matches!(self.kind, FieldKind::Checkbox | FieldKind::Radio)
    }

    /// True when the value is blank after trimming
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Numeric reading of the value; `NaN` when it does not start with a number
    pub fn numeric_value(&self) -> f64 {
        parse_float(&self.value)
    }

    /// The option after (or before) the current one, wrapping around
    pub fn cycle_option(&self, forward: bool) -> Option<&SelectOption> {
        if self.options.is_empty() {
            return None;
        }
        let count = self.options.len();
        let current = self
            .options
            .iter()
            .position(|o| o.value == self.value)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else if current == 0 {
            count - 1
        } else {
            current - 1
        };
        self.options.get(next)
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Select => self
                .options
                .iter()
                .find(|o| o.value == self.value)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| self.value.clone()),
            FieldKind::Checkbox => {
                let mark = if self.checked { "x" } else { " " };
                format!("[{mark}] {}", self.value)
            }
            FieldKind::Radio => {
                let mark = if self.checked { "*" } else { " " };
                format!("({mark}) {}", self.value)
            }
            FieldKind::Text | FieldKind::Number => self.value.clone(),
        }
    }
}

/// Parse the longest numeric prefix of `input`, returning `NaN` if there is none
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let candidate: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Render a number the way an input element shows it (`50`, not `50.0`)
pub fn format_number(value: f64) -> String {
    format!("{value}")
}
