//! Encode/decode mode tracking for an interactive caller.
//!
//! Selecting a one-way algorithm forces encode mode and disables the decode
//! option until a reversible algorithm is selected again.

use crate::core::catalog::{AlgorithmCatalog, AlgorithmDescriptor};
use crate::dispatch::{Mode, TransformRequest};
use crate::encoders::algorithms::AlgorithmNotFoundError;

/// Input events for [`ModeSafeguard::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeguardEvent<'a> {
    SelectAlgorithm(&'a str),
    ToggleMode,
}

#[derive(Debug, Clone)]
pub struct ModeSafeguard<'c> {
    catalog: &'c AlgorithmCatalog,
    active: Option<&'static AlgorithmDescriptor>,
    mode: Mode,
}

impl<'c> ModeSafeguard<'c> {
    /// Starts in encode mode with nothing selected.
    pub fn new(catalog: &'c AlgorithmCatalog) -> Self {
        Self {
            catalog,
            active: None,
            mode: Mode::Encode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active(&self) -> Option<&'static AlgorithmDescriptor> {
        self.active
    }

    pub fn decode_available(&self) -> bool {
        self.active.is_some_and(|descriptor| descriptor.reversible)
    }

    /// Selects an algorithm. An unknown id leaves the state untouched.
    pub fn select(&mut self, id: &str) -> Result<Mode, AlgorithmNotFoundError> {
        let descriptor = self.catalog.get(id)?;
        self.active = Some(descriptor);
        if !descriptor.reversible {
            self.mode = Mode::Encode;
        }
        Ok(self.mode)
    }

    /// Flips the mode; a no-op unless the active algorithm is reversible.
    pub fn toggle(&mut self) -> Mode {
        if self.decode_available() {
            self.mode = match self.mode {
                Mode::Encode => Mode::Decode,
                Mode::Decode => Mode::Encode,
            };
        }
        self.mode
    }

    /// Requests a specific mode, toggling only if it differs.
    pub fn set_mode(&mut self, mode: Mode) -> Mode {
        if self.mode != mode {
            self.toggle();
        }
        self.mode
    }

    pub fn apply(&mut self, event: SafeguardEvent<'_>) -> Result<Mode, AlgorithmNotFoundError> {
        match event {
            SafeguardEvent::SelectAlgorithm(id) => self.select(id),
            SafeguardEvent::ToggleMode => Ok(self.toggle()),
        }
    }

    /// Builds a request for the current selection and mode.
    pub fn request(&self, input_text: impl Into<String>) -> Option<TransformRequest> {
        self.active
            .map(|descriptor| TransformRequest::new(descriptor.id, self.mode, input_text))
    }
}
