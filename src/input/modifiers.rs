//! Modifier Discovery and Folding
//!
//! At startup the compiled layout is asked which of the four modifiers the UI
//! model understands it actually defines; the result is the immutable
//! [`ModifierRegistry`]. At translation time the registry folds the layout
//! state's per-bit answers into the abstract flag set carried on key events.

use crate::input::layout::{CompiledLayout, LayoutState};
use enumflags2::{bitflags, BitFlags};
use tracing::debug;

/// One UI-facing modifier bit.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierFlag {
    /// Alt (either side).
    Alt = 0b0001,
    /// Control (either side).
    Control = 0b0010,
    /// Shift (either side).
    Shift = 0b0100,
    /// Meta / Super / the OS key.
    Meta = 0b1000,
}

/// The set of modifiers active on a key event.
pub type Modifiers = BitFlags<ModifierFlag>;

/// Canonical layout names for the recognized modifiers, in discovery order.
const CANONICAL_MODIFIERS: [(&str, ModifierFlag); 4] = [
    ("Alt", ModifierFlag::Alt),
    ("Control", ModifierFlag::Control),
    ("Shift", ModifierFlag::Shift),
    ("Meta", ModifierFlag::Meta),
];

/// A modifier as the active layout defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    /// Bit index the layout assigned to this modifier at compile time.
    ///
    /// Stable for the keymap's lifetime, meaningless for any other keymap.
    pub index: u32,
    /// Canonical name the index was resolved from.
    pub name: &'static str,
    /// Flag this bit folds into on composite events.
    pub flag: ModifierFlag,
}

/// Ordered set of the recognized modifiers the active layout defines.
///
/// Derived once per layout load and immutable thereafter; reloading the layout
/// means re-deriving the registry against the new keymap. Indices are valid
/// only for layout state created from the same compiled layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierRegistry {
    modifiers: Vec<Modifier>,
}

impl ModifierRegistry {
    /// Ask the compiled layout for each canonical modifier, by name.
    ///
    /// Names the layout does not define are silently omitted; their flags are
    /// then simply never set. Lookup is by name rather than by a presumed
    /// fixed index, since index assignment varies between keymaps.
    pub fn discover(layout: &impl CompiledLayout) -> Self {
        let modifiers: Vec<Modifier> = CANONICAL_MODIFIERS
            .iter()
            .copied()
            .filter_map(|(name, flag)| {
                layout
                    .modifier_index(name)
                    .map(|index| Modifier { index, name, flag })
            })
            .collect();

        debug!(count = modifiers.len(), "discovered layout modifiers");
        Self { modifiers }
    }

    /// Fold the state's per-modifier answers into the abstract flag set.
    pub fn fold<S: LayoutState>(&self, state: &S) -> Modifiers {
        let mut flags = Modifiers::empty();
        for modifier in &self.modifiers {
            if state.modifier_active(modifier.index) {
                flags |= modifier.flag;
            }
        }
        flags
    }

    /// The registered modifiers, in canonical order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Number of modifiers the layout defined.
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Whether the layout defined none of the recognized modifiers.
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}
