use crate::catalog::{Catalogs, CommandDescriptor};
use crate::error::{CoreError, CoreErrorCode};
use crate::render;
use crate::resolver::{self, ParameterSlot, SlotKind, SlotValue};

/// Binding layer between a presentation surface and the resolver/renderer.
/// Selecting a command resolves a fresh slot set seeded with defaults; edits
/// are validated against the slot's kind and constraints before they stick.
#[derive(Debug, Clone, Default)]
pub struct CommandSession {
    descriptor: Option<CommandDescriptor>,
    slots: Vec<ParameterSlot>,
    values: Vec<SlotValue>,
}

impl CommandSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the active command. The previous slot set is discarded
    /// entirely; `None` clears the selection.
    pub fn select(&mut self, descriptor: Option<&CommandDescriptor>, catalogs: &Catalogs) {
        match descriptor {
            Some(descriptor) => {
                let slots = resolver::resolve_parameters(descriptor, catalogs);
                self.values = resolver::default_values(&slots);
                self.slots = slots;
                self.descriptor = Some(descriptor.clone());
            }
            None => {
                self.descriptor = None;
                self.slots.clear();
                self.values.clear();
            }
        }
    }

    pub fn descriptor(&self) -> Option<&CommandDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn slots(&self) -> &[ParameterSlot] {
        &self.slots
    }

    pub fn values(&self) -> &[SlotValue] {
        &self.values
    }

    /// Apply one edit. Rejected outright (no clamping) when the slot is not
    /// editable, the value kind does not match, an integer leaves the slot's
    /// range, or a choice index points past the option list.
    pub fn set_value(&mut self, index: usize, value: SlotValue) -> Result<(), CoreError> {
        let Some(slot) = self.slots.get(index) else {
            return Err(CoreError::new(
                CoreErrorCode::UnsupportedOperation,
                format!("no parameter slot at index {index}"),
            ));
        };

        if !slot.editable {
            return Err(CoreError::new(
                CoreErrorCode::UnsupportedOperation,
                format!("parameter '{}' is fixed and cannot be edited", slot.label),
            ));
        }

        match (&value, slot.kind) {
            (SlotValue::Integer(v), SlotKind::Integer) => {
                if let Some((lo, hi)) = slot.range
                    && !(lo..=hi).contains(v)
                {
                    return Err(CoreError::new(
                        CoreErrorCode::UnsupportedOperation,
                        format!("value {v} for '{}' is outside {lo}..={hi}", slot.label),
                    ));
                }
            }
            (SlotValue::Boolean(_), SlotKind::Boolean) => {}
            (SlotValue::Text(_), SlotKind::Text) => {}
            (SlotValue::Choice(selected), SlotKind::Choice) => {
                if let Some(choice) = selected
                    && *choice >= slot.choices.len()
                {
                    return Err(CoreError::new(
                        CoreErrorCode::UnsupportedOperation,
                        format!(
                            "choice index {choice} for '{}' is outside the option list",
                            slot.label
                        ),
                    ));
                }
            }
            _ => {
                return Err(CoreError::new(
                    CoreErrorCode::UnsupportedOperation,
                    format!("value kind does not match parameter '{}'", slot.label),
                ));
            }
        }

        self.values[index] = value;
        Ok(())
    }

    /// Render the current state; empty string when nothing is selected or a
    /// choice slot has no selection.
    pub fn render(&self) -> String {
        render::render(self.descriptor.as_ref(), &self.slots, &self.values)
    }
}
