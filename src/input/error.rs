//! Input Translation Error Types

use thiserror::Error;

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors fatal to input-translation setup.
///
/// Translation itself carries no error taxonomy: unmapped scan codes, unmapped
/// keysyms, modifier names absent from the layout, non-keyboard events, and a
/// detached input root are all defined sentinel/no-op fallbacks. The one real
/// failure mode is upstream — a keymap that fails to compile leaves the
/// translator with nothing to run on, and setup must not proceed.
#[derive(Error, Debug)]
pub enum InputError {
    /// The layout engine rejected the requested keymap names.
    #[error("failed to compile keymap ({names})")]
    KeymapCompile {
        /// The rules/model/layout/variant/options the engine was given.
        names: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_compile_display() {
        let err = InputError::KeymapCompile {
            names: "layout=\"xx\"".to_string(),
        };
        assert!(err.to_string().contains("layout=\"xx\""));
    }
}
