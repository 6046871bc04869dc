use std::collections::BTreeMap;
use std::rc::Rc;

pub type TextCallback = Rc<dyn Fn(String)>;

/// Keyboard variant requested from the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Keyboard {
    #[default]
    Text,
    Number,
    Email,
    Phone,
}

/// Behavior props owned by the platform text field. Widgets that wrap a
/// field hand the whole set over unmodified; nothing in here is styling.
#[derive(Clone)]
pub struct FieldProps {
    /// Controlled text value; `None` leaves the platform in charge.
    pub value: Option<String>,
    /// Placeholder shown while the field is empty.
    pub hint: String,
    /// Fires with the platform's text payload, unchanged.
    pub on_change: Option<TextCallback>,
    /// Fires on submit (enter / IME action), with the current text.
    pub on_submit: Option<TextCallback>,
    pub keyboard: Keyboard,
    /// Secure entry (masked display).
    pub secure: bool,
    /// Maximum length in grapheme clusters, enforced by the field state.
    pub max_length: Option<usize>,
    pub editable: bool,
    /// Opaque platform capabilities, forwarded verbatim and never inspected.
    pub extras: BTreeMap<String, String>,
}

impl Default for FieldProps {
    fn default() -> Self {
        Self {
            value: None,
            hint: String::new(),
            on_change: None,
            on_submit: None,
            keyboard: Keyboard::default(),
            secure: false,
            max_length: None,
            editable: true,
            extras: BTreeMap::new(),
        }
    }
}

impl FieldProps {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn value(mut self, v: impl Into<String>) -> Self {
        self.value = Some(v.into());
        self
    }
    pub fn hint(mut self, h: impl Into<String>) -> Self {
        self.hint = h.into();
        self
    }
    pub fn on_change(mut self, f: impl Fn(String) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }
    pub fn on_submit(mut self, f: impl Fn(String) + 'static) -> Self {
        self.on_submit = Some(Rc::new(f));
        self
    }
    pub fn keyboard(mut self, k: Keyboard) -> Self {
        self.keyboard = k;
        self
    }
    pub fn secure(mut self, v: bool) -> Self {
        self.secure = v;
        self
    }
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }
    pub fn editable(mut self, v: bool) -> Self {
        self.editable = v;
        self
    }
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

impl std::fmt::Debug for FieldProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldProps")
            .field("value", &self.value)
            .field("hint", &self.hint)
            .field("on_change", &self.on_change.as_ref().map(|_| "..."))
            .field("on_submit", &self.on_submit.as_ref().map(|_| "..."))
            .field("keyboard", &self.keyboard)
            .field("secure", &self.secure)
            .field("max_length", &self.max_length)
            .field("editable", &self.editable)
            .field("extras", &self.extras)
            .finish()
    }
}
