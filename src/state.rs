/// Widget state threaded through [`update`](crate::update).
///
/// Holds only what the widget itself owns: the text being typed but not
/// yet committed, and the stable identifier of the element the focus
/// effect should target. The committed item list belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Uncommitted text currently in the entry field.
    pub pending_text: String,

    /// Externally supplied identifier of the focus target.
    pub element_id: String,
}

impl State {
    /// Create the initial state for a widget instance.
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            pending_text: String::new(),
            element_id: element_id.into(),
        }
    }
}
