//! Layout Capability Interface and State Driver
//!
//! The keymap compiler is an external capability hidden behind three small
//! traits, so any conforming engine (libxkbcommon in production, a fake in
//! tests) can compile layouts and track live key state. [`LayoutDriver`] owns
//! one compiled layout together with its live state and modifier registry and
//! is the only way the rest of the crate touches them.

use crate::input::error::Result;
use crate::input::modifiers::{ModifierRegistry, Modifiers};
use std::fmt;
use tracing::debug;

/// Offset between kernel scan codes and the layout engine's keycode space.
///
/// The engine numbers keys in the historical X keycode space, which sits 8
/// above the kernel's scan codes. Every transition and query shifts by exactly
/// this amount; the mapping tables take raw, unshifted scan codes.
pub const KEYCODE_OFFSET: u32 = 8;

/// Upper bound, in bytes, on the text a single key event may produce.
///
/// Longer symbol text is truncated rather than allocated for; this is a
/// fixed-capacity contract on a high-frequency path.
pub const TEXT_CAPACITY: usize = 64;

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    /// Key went down.
    Down,
    /// Key came up.
    Up,
}

/// The rules/model/layout/variant/options tuple selecting a keymap.
///
/// Absent fields defer to the engine's defaults; for the xkb engine that is
/// `$XKB_DEFAULT_*` and the system XKB configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutNames {
    /// Rule set (usually "evdev").
    pub rules: Option<String>,
    /// Keyboard model (usually "pc105").
    pub model: Option<String>,
    /// Layout name ("us", "de", ...).
    pub layout: Option<String>,
    /// Layout variant ("dvorak", "nodeadkeys", ...).
    pub variant: Option<String>,
    /// Comma-separated option list.
    pub options: Option<String>,
}

impl fmt::Display for LayoutNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rules={:?} model={:?} layout={:?} variant={:?} options={:?}",
            self.rules, self.model, self.layout, self.variant, self.options
        )
    }
}

/// Compiles keymaps from configuration names.
///
/// This is the seam behind which any layout engine can stand; compilation is
/// the only fallible operation in the crate, and a failure here is fatal to
/// setup.
pub trait LayoutEngine {
    /// The compiled keymap this engine produces.
    type Layout: CompiledLayout;

    /// Compile a keymap for `names`.
    fn compile(&self, names: &LayoutNames) -> Result<Self::Layout>;
}

/// A compiled, immutable keymap.
pub trait CompiledLayout {
    /// Live key state bound to this layout.
    type State: LayoutState;

    /// Create a fresh live state with no keys held.
    fn create_state(&self) -> Self::State;

    /// Resolve a modifier bit index by canonical name.
    ///
    /// Lookup is by name, never by presumed position: keymaps assign indices
    /// freely and only the name is stable across them. `None` when the layout
    /// does not define the modifier.
    fn modifier_index(&self, name: &str) -> Option<u32>;
}

/// Mutable state tracking which keys are held and what they produce.
pub trait LayoutState {
    /// Record one key transition.
    ///
    /// Keycodes unknown to the layout are no-ops, not errors.
    fn apply(&mut self, keycode: u32, direction: KeyDirection);

    /// Text the key currently produces (unbounded; the driver caps it).
    fn text(&self, keycode: u32) -> String;

    /// The single keysym the key currently produces.
    fn keysym(&self, keycode: u32) -> u32;

    /// Whether the modifier bit at `index` is effectively active.
    fn modifier_active(&self, index: u32) -> bool;
}

/// What a key produces, captured immediately after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySnapshot {
    /// Produced text; possibly empty, at most [`TEXT_CAPACITY`] bytes.
    pub text: String,
    /// Layout-resolved keysym.
    pub keysym: u32,
    /// Modifier flags active at capture time.
    pub modifiers: Modifiers,
}

/// Owns a compiled layout, its live state, and the modifier registry derived
/// from it.
///
/// The three are constructed together and torn down together; registry indices
/// are meaningless against state from any other layout. The state must see
/// every key transition, in hardware order — skipping or reordering events
/// desynchronizes it from physical reality, with no recovery short of
/// replaying the full subsequent history. It is never reset mid-session.
pub struct LayoutDriver<L: CompiledLayout> {
    layout: L,
    state: L::State,
    registry: ModifierRegistry,
}

impl<L: CompiledLayout> std::fmt::Debug for LayoutDriver<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutDriver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<L: CompiledLayout> LayoutDriver<L> {
    /// Compile `names` on `engine` and assemble the driver.
    pub fn new<E>(engine: &E, names: &LayoutNames) -> Result<Self>
    where
        E: LayoutEngine<Layout = L>,
    {
        let layout = engine.compile(names)?;
        let registry = ModifierRegistry::discover(&layout);
        let state = layout.create_state();
        debug!(modifiers = registry.len(), %names, "layout compiled");

        Ok(Self {
            layout,
            state,
            registry,
        })
    }

    /// Feed one key transition into the live state.
    ///
    /// Must be called for every transition, in hardware order; no batching,
    /// no reordering. Infallible.
    pub fn apply_transition(&mut self, keycode: u32, direction: KeyDirection) {
        self.state.apply(keycode, direction);
    }

    /// What `keycode` currently produces, with the active modifier flags.
    ///
    /// Meaningful only after the most recent transition has been applied;
    /// querying has no effect on state.
    pub fn query(&self, keycode: u32) -> KeySnapshot {
        KeySnapshot {
            text: bound_text(self.state.text(keycode)),
            keysym: self.state.keysym(keycode),
            modifiers: self.registry.fold(&self.state),
        }
    }

    /// Modifier flags active right now.
    pub fn active_modifiers(&self) -> Modifiers {
        self.registry.fold(&self.state)
    }

    /// The modifiers this layout defines, in canonical order.
    pub fn registry(&self) -> &ModifierRegistry {
        &self.registry
    }

    /// The compiled layout the driver runs on.
    pub fn layout(&self) -> &L {
        &self.layout
    }
}

/// Cap produced text at [`TEXT_CAPACITY`] bytes without splitting a character.
fn bound_text(mut text: String) -> String {
    if text.len() > TEXT_CAPACITY {
        let mut end = TEXT_CAPACITY;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeEngine, FakeState};
    use super::*;
    use crate::input::modifiers::ModifierFlag;

    #[test]
    fn test_driver_setup() {
        let engine = FakeEngine::default();
        let driver = LayoutDriver::new(&engine, &LayoutNames::default()).unwrap();

        assert_eq!(driver.registry().len(), 4);
        assert_eq!(driver.active_modifiers(), Modifiers::empty());
    }

    #[test]
    fn test_compile_failure_is_fatal() {
        let engine = FakeEngine {
            fail_compile: true,
        };
        let names = LayoutNames {
            layout: Some("xx".to_string()),
            ..LayoutNames::default()
        };
        let err = LayoutDriver::new(&engine, &names).unwrap_err();
        assert!(err.to_string().contains("\"xx\""));
    }

    #[test]
    fn test_query_after_down_reflects_the_down() {
        let engine = FakeEngine::default();
        let mut driver = LayoutDriver::new(&engine, &LayoutNames::default()).unwrap();

        // A pressed alone: state after the down reflects the down itself.
        driver.apply_transition(FakeState::KC_A, KeyDirection::Down);
        let snapshot = driver.query(FakeState::KC_A);
        assert_eq!(snapshot.text, "a");
        assert_eq!(snapshot.keysym, 0x61);
        assert_eq!(snapshot.modifiers, Modifiers::empty());

        driver.apply_transition(FakeState::KC_A, KeyDirection::Up);
        assert_eq!(driver.active_modifiers(), Modifiers::empty());
    }

    #[test]
    fn test_shift_changes_produced_symbol() {
        let engine = FakeEngine::default();
        let mut driver = LayoutDriver::new(&engine, &LayoutNames::default()).unwrap();

        driver.apply_transition(FakeState::KC_SHIFT_LEFT, KeyDirection::Down);
        driver.apply_transition(FakeState::KC_A, KeyDirection::Down);

        let snapshot = driver.query(FakeState::KC_A);
        assert_eq!(snapshot.text, "A");
        assert_eq!(snapshot.keysym, 0x41);
        assert_eq!(snapshot.modifiers, ModifierFlag::Shift);
    }

    #[test]
    fn test_query_has_no_side_effects() {
        let engine = FakeEngine::default();
        let mut driver = LayoutDriver::new(&engine, &LayoutNames::default()).unwrap();

        driver.apply_transition(FakeState::KC_A, KeyDirection::Down);
        let first = driver.query(FakeState::KC_A);
        let second = driver.query(FakeState::KC_A);
        assert_eq!(first, second);

        let applied = driver.layout().applied.borrow().len();
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_unknown_keycode_is_a_noop_query() {
        let engine = FakeEngine::default();
        let mut driver = LayoutDriver::new(&engine, &LayoutNames::default()).unwrap();

        driver.apply_transition(9999, KeyDirection::Down);
        let snapshot = driver.query(9999);
        assert_eq!(snapshot.text, "");
        assert_eq!(snapshot.keysym, 0);
    }

    #[test]
    fn test_bound_text_caps_at_capacity() {
        let long = "x".repeat(200);
        let bounded = bound_text(long);
        assert_eq!(bounded.len(), TEXT_CAPACITY);

        let short = bound_text("ab".to_string());
        assert_eq!(short, "ab");
    }

    #[test]
    fn test_bound_text_respects_char_boundaries() {
        // 'é' is two bytes; with the one-byte prefix the cap falls inside a
        // character, so the cut steps back to byte 63.
        let text = format!("x{}", "é".repeat(32));
        assert_eq!(text.len(), 65);
        let bounded = bound_text(text);
        assert_eq!(bounded.len(), 63);
        assert!(bounded.is_char_boundary(bounded.len()));
    }

    #[test]
    fn test_layout_names_display() {
        let names = LayoutNames {
            layout: Some("de".to_string()),
            variant: Some("nodeadkeys".to_string()),
            ..LayoutNames::default()
        };
        let shown = names.to_string();
        assert!(shown.contains("layout=Some(\"de\")"));
        assert!(shown.contains("rules=None"));
    }
}
