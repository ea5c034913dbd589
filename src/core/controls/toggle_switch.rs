/// A latched boolean that remembers whether it flipped on the latest update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleSwitch {
    value: bool,
    toggled: bool,
}

impl ToggleSwitch {
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self {
            value,
            toggled: false,
        }
    }

    /// Flips on `edge`; `toggled()` reports whether this call flipped it.
    pub fn update(&mut self, edge: bool) -> bool {
        self.toggled = edge;
        if edge {
            self.value = !self.value;
        }
        self.value
    }

    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    #[must_use]
    pub fn toggled(&self) -> bool {
        self.toggled
    }
}
