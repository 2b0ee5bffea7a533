//! Physical and Logical Key Identities
//!
//! Two abstract key enumerations: where a key sits on the board, and what it
//! conventionally means to the UI layer. Both carry a `None` sentinel so that
//! every lookup is total; unmapped hardware never produces an error.

/// A key identified by its physical position on a reference US-ANSI layout,
/// independent of the active keymap.
///
/// `None` is the sentinel for scan codes with no catalogued position. Values
/// are stable for the lifetime of the process.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalKey {
    None,

    // Alphanumeric block
    Backquote,
    Backslash,
    BracketLeft,
    BracketRight,
    Comma,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Equal,
    IntlBackslash,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Minus,
    Period,
    Quote,
    Semicolon,
    Slash,

    // Whitespace and editing
    Backspace,
    Enter,
    Space,
    Tab,

    // Modifier positions
    AltLeft,
    AltRight,
    CapsLock,
    ContextMenu,
    ControlLeft,
    ControlRight,
    MetaLeft,
    ShiftLeft,
    ShiftRight,

    // Control pad
    Delete,
    End,
    Home,
    Insert,
    PageDown,
    PageUp,

    // Arrow pad
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    // Numpad
    NumLock,
    NumPad0,
    NumPad1,
    NumPad2,
    NumPad3,
    NumPad4,
    NumPad5,
    NumPad6,
    NumPad7,
    NumPad8,
    NumPad9,
    NumPadAdd,
    NumPadDecimal,
    NumPadDivide,
    NumPadMultiply,
    NumPadSubtract,

    // Function row
    Escape,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    ScrollLock,
    Pause,

    // Media keys
    AudioVolumeDown,
    AudioVolumeMute,
    AudioVolumeUp,
    MediaPlayPause,
    MediaTrackNext,
    MediaTrackPrevious,
}

/// A key identified by the character it conventionally represents under the
/// active layout.
///
/// The covered subset is the Latin letters; everything else resolves to the
/// `None` sentinel. Case never appears here: both cases of a letter map to the
/// same logical key, and shift state travels in the event's modifier flags.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    None,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}
