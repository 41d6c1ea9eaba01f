//! Blocking yes/no prompt for destructive gestures.

/// Ask the user to confirm `prompt`. Outside the browser nothing can answer,
/// so the answer is always no.
pub fn ask(prompt: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prompt;
        false
    }
}
