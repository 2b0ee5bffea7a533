//! Scan-Code and Keysym Mapping Tables
//!
//! Two pure lookup tables: evdev scan code → [`PhysicalKey`] position, and
//! layout-resolved keysym → logical [`Key`]. Both are total over `u32` and
//! fall back to the `None` sentinel rather than failing.

use crate::input::keys::{Key, PhysicalKey};
use std::collections::HashMap;

/// Catalogued scan code → physical key pairs, kernel (evdev) numbering.
///
/// Codes paired with `PhysicalKey::None` sit inside the catalogued range but
/// have no position on the reference board (vendor and legacy assignments);
/// they resolve to the sentinel exactly like codes outside the table.
const SCAN_CODE_TABLE: &[(u32, PhysicalKey)] = &[
    // Main block
    (1, PhysicalKey::Escape),
    (2, PhysicalKey::Digit1),
    (3, PhysicalKey::Digit2),
    (4, PhysicalKey::Digit3),
    (5, PhysicalKey::Digit4),
    (6, PhysicalKey::Digit5),
    (7, PhysicalKey::Digit6),
    (8, PhysicalKey::Digit7),
    (9, PhysicalKey::Digit8),
    (10, PhysicalKey::Digit9),
    (11, PhysicalKey::Digit0),
    (12, PhysicalKey::Minus),
    (13, PhysicalKey::Equal),
    (14, PhysicalKey::Backspace),
    (15, PhysicalKey::Tab),
    (16, PhysicalKey::Q),
    (17, PhysicalKey::W),
    (18, PhysicalKey::E),
    (19, PhysicalKey::R),
    (20, PhysicalKey::T),
    (21, PhysicalKey::Y),
    (22, PhysicalKey::U),
    (23, PhysicalKey::I),
    (24, PhysicalKey::O),
    (25, PhysicalKey::P),
    (26, PhysicalKey::BracketLeft),
    (27, PhysicalKey::BracketRight),
    (28, PhysicalKey::Enter),
    (29, PhysicalKey::ControlLeft),
    (30, PhysicalKey::A),
    (31, PhysicalKey::S),
    (32, PhysicalKey::D),
    (33, PhysicalKey::F),
    (34, PhysicalKey::G),
    (35, PhysicalKey::H),
    (36, PhysicalKey::J),
    (37, PhysicalKey::K),
    (38, PhysicalKey::L),
    (39, PhysicalKey::Semicolon),
    (40, PhysicalKey::Quote),
    (41, PhysicalKey::Backquote),
    (42, PhysicalKey::ShiftLeft),
    (43, PhysicalKey::Backslash),
    (44, PhysicalKey::Z),
    (45, PhysicalKey::X),
    (46, PhysicalKey::C),
    (47, PhysicalKey::V),
    (48, PhysicalKey::B),
    (49, PhysicalKey::N),
    (50, PhysicalKey::M),
    (51, PhysicalKey::Comma),
    (52, PhysicalKey::Period),
    (53, PhysicalKey::Slash),
    (54, PhysicalKey::ShiftRight),
    (55, PhysicalKey::NumPadMultiply),
    (56, PhysicalKey::AltLeft),
    (57, PhysicalKey::Space),
    (58, PhysicalKey::CapsLock),
    // Function row
    (59, PhysicalKey::F1),
    (60, PhysicalKey::F2),
    (61, PhysicalKey::F3),
    (62, PhysicalKey::F4),
    (63, PhysicalKey::F5),
    (64, PhysicalKey::F6),
    (65, PhysicalKey::F7),
    (66, PhysicalKey::F8),
    (67, PhysicalKey::F9),
    (68, PhysicalKey::F10),
    (69, PhysicalKey::NumLock),
    (70, PhysicalKey::ScrollLock),
    // Numpad
    (71, PhysicalKey::NumPad7),
    (72, PhysicalKey::NumPad8),
    (73, PhysicalKey::NumPad9),
    (74, PhysicalKey::NumPadSubtract),
    (75, PhysicalKey::NumPad4),
    (76, PhysicalKey::NumPad5),
    (77, PhysicalKey::NumPad6),
    (78, PhysicalKey::NumPadAdd),
    (79, PhysicalKey::NumPad1),
    (80, PhysicalKey::NumPad2),
    (81, PhysicalKey::NumPad3),
    (82, PhysicalKey::NumPad0),
    (83, PhysicalKey::NumPadDecimal),
    (84, PhysicalKey::None),
    (85, PhysicalKey::None),
    (86, PhysicalKey::IntlBackslash),
    (87, PhysicalKey::F11),
    (88, PhysicalKey::F12),
    (89, PhysicalKey::None),
    (90, PhysicalKey::None),
    (91, PhysicalKey::None),
    (92, PhysicalKey::None),
    (93, PhysicalKey::None),
    (94, PhysicalKey::None),
    (95, PhysicalKey::None),
    (96, PhysicalKey::None),
    // Extended block
    (97, PhysicalKey::ControlRight),
    (98, PhysicalKey::NumPadDivide),
    (99, PhysicalKey::PrintScreen),
    (100, PhysicalKey::AltRight),
    (101, PhysicalKey::None),
    (102, PhysicalKey::Home),
    (103, PhysicalKey::ArrowUp),
    (104, PhysicalKey::PageUp),
    (105, PhysicalKey::ArrowLeft),
    (106, PhysicalKey::ArrowRight),
    (107, PhysicalKey::End),
    (108, PhysicalKey::ArrowDown),
    (109, PhysicalKey::PageDown),
    (110, PhysicalKey::Insert),
    (111, PhysicalKey::Delete),
    (112, PhysicalKey::None),
    (113, PhysicalKey::AudioVolumeMute),
    (114, PhysicalKey::AudioVolumeDown),
    (115, PhysicalKey::AudioVolumeUp),
    (116, PhysicalKey::None),
    (117, PhysicalKey::None),
    (118, PhysicalKey::None),
    (119, PhysicalKey::Pause),
    (120, PhysicalKey::None),
    (121, PhysicalKey::None),
    (122, PhysicalKey::None),
    (123, PhysicalKey::None),
    (124, PhysicalKey::None),
    (125, PhysicalKey::MetaLeft),
    (126, PhysicalKey::None),
    (127, PhysicalKey::ContextMenu),
    (128, PhysicalKey::None),
    (129, PhysicalKey::None),
    // Media keys
    (163, PhysicalKey::MediaTrackNext),
    (164, PhysicalKey::MediaPlayPause),
    (165, PhysicalKey::MediaTrackPrevious),
];

/// Scan-code lookup: evdev scan code → physical key position.
pub struct ScanCodeMap {
    map: HashMap<u32, PhysicalKey>,
}

impl ScanCodeMap {
    /// Build the map from the catalogued table.
    pub fn new() -> Self {
        Self {
            map: SCAN_CODE_TABLE.iter().copied().collect(),
        }
    }

    /// Resolve a raw (unshifted) scan code to its physical key.
    ///
    /// Total over `u32`; unmapped codes yield [`PhysicalKey::None`].
    pub fn physical_key(&self, scan_code: u32) -> PhysicalKey {
        self.map
            .get(&scan_code)
            .copied()
            .unwrap_or(PhysicalKey::None)
    }
}

impl Default for ScanCodeMap {
    fn default() -> Self {
        Self::new()
    }
}

const KEYSYM_UPPER_A: u32 = 0x0041;
const KEYSYM_UPPER_Z: u32 = 0x005a;
const KEYSYM_LOWER_A: u32 = 0x0061;
const KEYSYM_LOWER_Z: u32 = 0x007a;

/// Logical keys for the Latin letter keysym ranges, in alphabet order.
const LETTER_KEYS: [Key; 26] = [
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
];

/// Resolve a layout-produced keysym to its logical key.
///
/// Uppercase and lowercase forms of a letter collapse to the same [`Key`];
/// shift state is carried by the event's modifier flags instead. Total over
/// `u32`; anything outside the letter ranges yields [`Key::None`].
pub fn keysym_to_key(keysym: u32) -> Key {
    match keysym {
        KEYSYM_UPPER_A..=KEYSYM_UPPER_Z => LETTER_KEYS[(keysym - KEYSYM_UPPER_A) as usize],
        KEYSYM_LOWER_A..=KEYSYM_LOWER_Z => LETTER_KEYS[(keysym - KEYSYM_LOWER_A) as usize],
        _ => Key::None,
    }
}
