//! libxkbcommon Layout Engine
//!
//! Production implementation of the layout capability traits on top of
//! libxkbcommon. Absent configuration names are passed through empty, which
//! makes the library fall back to `$XKB_DEFAULT_RULES` / `$XKB_DEFAULT_MODEL`
//! / `$XKB_DEFAULT_LAYOUT` / `$XKB_DEFAULT_VARIANT` / `$XKB_DEFAULT_OPTIONS`
//! and then to system configuration, so the compiled keymap matches the
//! user's actual keyboard setup.

use crate::input::error::{InputError, Result};
use crate::input::layout::{CompiledLayout, KeyDirection, LayoutEngine, LayoutNames, LayoutState};
use tracing::{debug, trace};
use xkbcommon::xkb;

/// Layout engine backed by libxkbcommon.
pub struct XkbEngine {
    context: xkb::Context,
}

impl XkbEngine {
    /// Create the engine with a fresh xkb context.
    pub fn new() -> Self {
        Self {
            context: xkb::Context::new(xkb::CONTEXT_NO_FLAGS),
        }
    }
}

impl Default for XkbEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for XkbEngine {
    type Layout = XkbLayout;

    fn compile(&self, names: &LayoutNames) -> Result<XkbLayout> {
        let keymap = xkb::Keymap::new_from_names(
            &self.context,
            names.rules.as_deref().unwrap_or(""),
            names.model.as_deref().unwrap_or(""),
            names.layout.as_deref().unwrap_or(""),
            names.variant.as_deref().unwrap_or(""),
            names.options.clone(),
            xkb::KEYMAP_COMPILE_NO_FLAGS,
        )
        .ok_or_else(|| InputError::KeymapCompile {
            names: names.to_string(),
        })?;

        debug!(%names, mods = keymap.num_mods(), "compiled xkb keymap");
        Ok(XkbLayout { keymap })
    }
}

/// A compiled xkb keymap.
pub struct XkbLayout {
    keymap: xkb::Keymap,
}

impl CompiledLayout for XkbLayout {
    type State = XkbState;

    fn create_state(&self) -> XkbState {
        XkbState {
            state: xkb::State::new(&self.keymap),
        }
    }

    fn modifier_index(&self, name: &str) -> Option<u32> {
        // mod_get_index misses these names on some keymaps where
        // mod_get_name finds them; resolve by scanning names instead.
        (0..self.keymap.num_mods()).find(|index| self.keymap.mod_get_name(*index) == name)
    }
}

/// Live xkb state for one compiled keymap.
///
/// Not thread-safe by construction: the underlying xkb state is owned and
/// mutated on the input-processing thread only.
pub struct XkbState {
    state: xkb::State,
}

impl LayoutState for XkbState {
    fn apply(&mut self, keycode: u32, direction: KeyDirection) {
        let direction = match direction {
            KeyDirection::Down => xkb::KeyDirection::Down,
            KeyDirection::Up => xkb::KeyDirection::Up,
        };
        self.state.update_key(xkb::Keycode::new(keycode), direction);
    }

    fn text(&self, keycode: u32) -> String {
        self.state.key_get_utf8(xkb::Keycode::new(keycode))
    }

    fn keysym(&self, keycode: u32) -> u32 {
        let sym = self.state.key_get_one_sym(xkb::Keycode::new(keycode));
        trace!(
            keycode,
            keysym = sym.raw(),
            name = %xkb::keysym_get_name(sym),
            "resolved keysym"
        );
        sym.raw()
    }

    fn modifier_active(&self, index: u32) -> bool {
        self.state
            .mod_index_is_active(index, xkb::STATE_MODS_EFFECTIVE)
    }
}
