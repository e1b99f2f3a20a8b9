// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Typed value slots
//!
//! Registering an arg or a flag hands back a [`Slot`]. The set that created it
//! keeps a second handle and writes the parsed value through it; the runner
//! reads the value through its own clone. Slots are `!Send`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::convert::Convert;
use crate::error::ConvertError;

/// Shared handle to one parsed value.
pub struct Slot<T> {
    cell: Rc<RefCell<Option<T>>>,
}

impl<T> Slot<T> {
    pub(crate) fn empty() -> Self {
        Self {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    pub(crate) fn with_value(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Some(value))),
        }
    }

    pub(crate) fn set(&self, value: T) {
        *self.cell.borrow_mut() = Some(value);
    }

    /// Whether a value has been written (or a default was given).
    pub fn is_set(&self) -> bool {
        self.cell.borrow().is_some()
    }
}

impl<T: Clone> Slot<T> {
    /// Current value, if any.
    pub fn get(&self) -> Option<T> {
        self.cell.borrow().clone()
    }
}

impl<T: Clone + Default> Slot<T> {
    pub fn get_or_default(&self) -> T {
        self.get().unwrap_or_default()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&*self.cell.borrow()).finish()
    }
}

/// Type-erased write side of a slot, so sets can hold mixed kinds.
pub(crate) trait SlotWriter {
    fn write(&self, token: &str) -> Result<(), ConvertError>;
}

impl<T: Convert> SlotWriter for Slot<T> {
    fn write(&self, token: &str) -> Result<(), ConvertError> {
        let value = T::convert(token)?;
        self.set(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot: Slot<String> = Slot::empty();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
        assert_eq!(slot.get_or_default(), "");
    }

    #[test]
    fn test_clones_share_the_cell() {
        let slot: Slot<u64> = Slot::empty();
        let reader = slot.clone();
        slot.set(7);
        assert_eq!(reader.get(), Some(7));
    }

    #[test]
    fn test_writer_converts_then_stores() {
        let slot: Slot<i64> = Slot::with_value(1);
        let writer: &dyn SlotWriter = &slot;
        writer.write("42").unwrap();
        assert_eq!(slot.get(), Some(42));
    }

    #[test]
    fn test_failed_write_leaves_value() {
        let slot: Slot<bool> = Slot::with_value(true);
        let writer: &dyn SlotWriter = &slot;
        assert!(writer.write("maybe").is_err());
        assert_eq!(slot.get(), Some(true));
    }

    #[test]
    fn test_debug_shows_value() {
        let slot = Slot::with_value(3usize);
        assert_eq!(format!("{:?}", slot), "Slot(Some(3))");
    }
}
