//! Keyboard Event Translator
//!
//! Top-level coordinator: takes raw keyboard transitions from the input
//! subsystem, advances the live layout state, resolves the physical and
//! logical key identities, and hands composite events to the UI's dispatch
//! sink.

use crate::input::error::Result;
use crate::input::keys::{Key, PhysicalKey};
use crate::input::layout::{
    CompiledLayout, KeyDirection, LayoutDriver, LayoutEngine, LayoutNames, KEYCODE_OFFSET,
};
use crate::input::mapper::{keysym_to_key, ScanCodeMap};
use crate::input::modifiers::Modifiers;
use tracing::trace;

/// Key transition state as reported by the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Key released
    Released,
    /// Key pressed
    Pressed,
}

impl From<bool> for KeyState {
    fn from(pressed: bool) -> Self {
        if pressed {
            KeyState::Pressed
        } else {
            KeyState::Released
        }
    }
}

/// Raw event from the input subsystem.
///
/// Only the keyboard variant is translated here; the other type tags exist so
/// the translator can recognize and ignore everything else on the event
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// Keyboard key transition.
    Keyboard(RawKeyboardEvent),
    /// Pointer activity; not handled by this translator.
    Pointer {
        /// Event timestamp, microseconds.
        time_usec: u64,
    },
    /// Touch activity; not handled by this translator.
    Touch {
        /// Event timestamp, microseconds.
        time_usec: u64,
    },
}

/// One keyboard key transition as delivered by the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyboardEvent {
    /// Kernel scan code, unshifted.
    pub scan_code: u32,
    /// Press or release.
    pub state: KeyState,
    /// Timestamp, microseconds since the input subsystem's epoch.
    pub time_usec: u64,
}

/// Transition kind on a composite key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key pressed
    KeyDown,
    /// Key released
    KeyUp,
}

/// Composite, layout-resolved key event for the UI pipeline.
///
/// Immutable once constructed; ownership passes to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Hardware timestamp, microseconds.
    pub time_usec: u64,
    /// Down or up.
    pub event_type: KeyEventType,
    /// Logical key under the active layout.
    pub key: Key,
    /// Modifier flags active at event time.
    pub modifiers: Modifiers,
    /// Physical key position.
    pub physical_key: PhysicalKey,
    /// Text the transition produced; possibly empty.
    pub text: String,
}

/// The dispatch collaborator on the UI side.
pub trait EventSink {
    /// Whether an input root is attached to receive events right now.
    fn input_root_attached(&self) -> bool;

    /// Take ownership of a translated event and enqueue it.
    ///
    /// Called in hardware arrival order.
    fn dispatch(&mut self, event: KeyEvent);
}

/// Translates raw keyboard events into composite key events.
///
/// Owns the layout driver (compiled layout, live state, modifier registry)
/// and the scan-code map for the lifetime of the input-handling session.
pub struct KeyboardTranslator<L: CompiledLayout> {
    driver: LayoutDriver<L>,
    scan_codes: ScanCodeMap,
    events_processed: u64,
}

impl<L: CompiledLayout> KeyboardTranslator<L> {
    /// Compile the layout on `engine` and set up translation state.
    ///
    /// Fails only if the keymap cannot be compiled; the translator must not
    /// operate without one.
    pub fn new<E>(engine: &E, names: &LayoutNames) -> Result<Self>
    where
        E: LayoutEngine<Layout = L>,
    {
        Ok(Self {
            driver: LayoutDriver::new(engine, names)?,
            scan_codes: ScanCodeMap::new(),
            events_processed: 0,
        })
    }

    /// Translate one raw event and hand the result to `sink`.
    ///
    /// Non-keyboard events are ignored without touching any state. For
    /// keyboard events the layout state is advanced unconditionally; only
    /// dispatch is gated on the input root. Gating the state update as well
    /// would desynchronize it from the hardware history whenever the root is
    /// briefly absent.
    pub fn handle<S: EventSink>(&mut self, event: &RawEvent, sink: &mut S) {
        let key_event = match event {
            RawEvent::Keyboard(key_event) => key_event,
            _ => return,
        };
        self.events_processed += 1;

        let keycode = key_event.scan_code + KEYCODE_OFFSET;
        let direction = match key_event.state {
            KeyState::Pressed => KeyDirection::Down,
            KeyState::Released => KeyDirection::Up,
        };

        // The state must observe the transition before the key is queried;
        // querying first would report the pre-event chord.
        self.driver.apply_transition(keycode, direction);
        let snapshot = self.driver.query(keycode);

        let physical_key = self.scan_codes.physical_key(key_event.scan_code);
        let key = keysym_to_key(snapshot.keysym);

        trace!(
            scan_code = key_event.scan_code,
            keycode,
            keysym = snapshot.keysym,
            text = %snapshot.text,
            ?direction,
            "translated key transition"
        );

        if !sink.input_root_attached() {
            // Nowhere to deliver; the state update above stands regardless.
            return;
        }

        sink.dispatch(KeyEvent {
            time_usec: key_event.time_usec,
            event_type: match key_event.state {
                KeyState::Pressed => KeyEventType::KeyDown,
                KeyState::Released => KeyEventType::KeyUp,
            },
            key,
            modifiers: snapshot.modifiers,
            physical_key,
            text: snapshot.text,
        });
    }

    /// Modifier flags active after the most recent handled transition.
    pub fn active_modifiers(&self) -> Modifiers {
        self.driver.active_modifiers()
    }

    /// Keyboard events handled since startup.
    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// The layout driver, for diagnostics.
    pub fn driver(&self) -> &LayoutDriver<L> {
        &self.driver
    }
}
