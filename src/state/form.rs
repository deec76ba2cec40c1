//! Submission lifecycle shared by the login and register forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// `Idle -> Submitting -> {Succeeded | Failed}`, back to `Idle` on edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }

    /// Enter `Submitting`; `false` if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn finish(&mut self, ok: bool) {
        *self = if ok { Self::Succeeded } else { Self::Failed };
    }

    /// A field edit settles a finished submission back to `Idle`.
    pub fn on_edit(&mut self) {
        if !self.is_submitting() {
            *self = Self::Idle;
        }
    }
}
