//! Host button bar entries

/// Buttons the question registers with the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Retry,
    ShowSolution,
}

impl ButtonId {
    /// Identifier used by the host button bar
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retry => "retry-button",
            Self::ShowSolution => "show-solution",
        }
    }

    /// Parse a host button identifier
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "retry-button" | "retry" => Some(Self::Retry),
            "show-solution" | "solution" => Some(Self::ShowSolution),
            _ => None,
        }
    }
}

/// A button in the host's button bar
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Unique identifier
    id: ButtonId,
    /// Button label
    label: String,
    /// Accessible label read by screen readers
    aria_label: Option<String>,
    /// Whether button is visible
    visible: bool,
}

impl Button {
    /// Create a new, hidden button
    pub fn new(id: ButtonId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            aria_label: None,
            visible: false,
        }
    }

    /// Set the accessible label
    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
