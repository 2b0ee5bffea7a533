//! Keyboard Input Translation
//!
//! Translates raw keyboard hardware events into composite, layout-resolved
//! key events for a UI event pipeline.
//!
//! # Architecture
//!
//! ```text
//! raw hardware event (scan code, pressed/released, timestamp)
//!       ↓
//! ┌───────────────────────┐
//! │  KeyboardTranslator   │ ← orchestrator
//! └───────────────────────┘
//!       ↓               ↓
//! ┌──────────────┐ ┌─────────────────────┐
//! │ LayoutDriver │ │ ScanCodeMap         │
//! │  keymap      │ │ keysym_to_key       │
//! │  live state  │ │ (static tables)     │
//! │  registry    │ └─────────────────────┘
//! └──────────────┘
//!       ↓
//! KeyEvent { key, physical_key, modifiers, text } → EventSink
//! ```
//!
//! Every keyboard transition is fed to the live layout state in hardware
//! order before the key is queried, so the reported symbol and modifier
//! flags always include the transition itself. Unmapped scan codes and
//! keysyms resolve to `None` sentinels rather than errors; the only fatal
//! condition is a keymap that fails to compile.
//!
//! # Usage
//!
//! ```rust,no_run
//! use keyboard_bridge::config::Config;
//! use keyboard_bridge::input::{
//!     EventSink, KeyEvent, KeyState, KeyboardTranslator, RawEvent, RawKeyboardEvent, XkbEngine,
//! };
//!
//! struct QueueSink {
//!     events: Vec<KeyEvent>,
//! }
//!
//! impl EventSink for QueueSink {
//!     fn input_root_attached(&self) -> bool {
//!         true
//!     }
//!
//!     fn dispatch(&mut self, event: KeyEvent) {
//!         self.events.push(event);
//!     }
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load("/etc/keyboard-bridge.toml")?;
//! let engine = XkbEngine::new();
//! let mut translator = KeyboardTranslator::new(&engine, &config.keyboard.names())?;
//! let mut sink = QueueSink { events: Vec::new() };
//!
//! // One "A"-position press as the input subsystem would deliver it.
//! translator.handle(
//!     &RawEvent::Keyboard(RawKeyboardEvent {
//!         scan_code: 30,
//!         state: KeyState::Pressed,
//!         time_usec: 0,
//!     }),
//!     &mut sink,
//! );
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod error;
pub mod keys;
pub mod layout;
pub mod mapper;
pub mod modifiers;
pub mod translator;
pub mod xkb;

// Re-export main types for convenience
pub use error::{InputError, Result};
pub use keys::{Key, PhysicalKey};
pub use layout::{
    CompiledLayout, KeyDirection, KeySnapshot, LayoutDriver, LayoutEngine, LayoutNames,
    LayoutState, KEYCODE_OFFSET, TEXT_CAPACITY,
};
pub use mapper::{keysym_to_key, ScanCodeMap};
pub use modifiers::{Modifier, ModifierFlag, ModifierRegistry, Modifiers};
pub use translator::{
    EventSink, KeyEvent, KeyEventType, KeyState, KeyboardTranslator, RawEvent, RawKeyboardEvent,
};
pub use xkb::XkbEngine;
