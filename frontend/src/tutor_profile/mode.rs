#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    View,
    Editing,
}

/// View/Editing toggle plus the in-flight save flag.
///
/// Every transition returns the next controller; an illegal transition
/// returns `None` so the caller can keep the current state untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditModeController {
    mode: EditMode,
    saving: bool,
}

impl EditModeController {
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Field mutations are accepted only while editing and not mid-save.
    pub fn accepts_edits(&self) -> bool {
        self.is_editing() && !self.saving
    }

    /// View -> Editing ("Edit Profile").
    pub fn begin_edit(&self) -> Option<Self> {
        match self.mode {
            EditMode::View => Some(Self { mode: EditMode::Editing, saving: false }),
            EditMode::Editing => None,
        }
    }

    /// Marks the commit as in flight. Only one save may run at a time.
    pub fn begin_save(&self) -> Option<Self> {
        if self.accepts_edits() {
            Some(Self { saving: true, ..*self })
        } else {
            None
        }
    }

    /// Editing -> View once the commit attempt has completed, whatever its
    /// outcome.
    pub fn finish_save(&self) -> Self {
        Self { mode: EditMode::View, saving: false }
    }
}
