//! # keyboard-bridge
//!
//! Layout-aware keyboard event translation for libinput-based UI backends.
//!
//! This crate turns raw keyboard hardware events (evdev scan codes plus
//! press/release transitions) into composite, modifier-aware key events that a
//! UI event pipeline can consume directly. The keymap itself is compiled and
//! interpreted by libxkbcommon; this crate drives the live XKB state in
//! hardware order and resolves every event against three key-identity spaces:
//! raw scan codes, layout-resolved keysyms, and the abstract logical keys the
//! UI layer understands.
//!
//! # Data Flow
//!
//! ```text
//! hardware event (scan code, pressed/released, timestamp)
//!       ↓
//! ┌──────────────────────┐
//! │  KeyboardTranslator  │ ← orchestrator
//! └──────────────────────┘
//!       ↓            ↓
//! ┌────────────┐ ┌──────────────┐
//! │ LayoutDriver│ │ ScanCodeMap │
//! │ (XKB state) │ │ keysym table│
//! └────────────┘ └──────────────┘
//!       ↓
//! KeyEvent { key, physical_key, modifiers, text } → EventSink
//! ```
//!
//! The layout engine sits behind a small capability trait so that any
//! conforming keymap implementation (including a test fake) can stand in for
//! libxkbcommon.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Keyboard configuration (XKB rules/model/layout/variant/options)
pub mod config;

/// Input event translation
///
/// Scan-code and keysym lookup tables, modifier discovery, the live layout
/// state driver, and the event translator that ties them together.
pub mod input;
