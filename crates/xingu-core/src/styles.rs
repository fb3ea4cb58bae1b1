//! Inline styles injected by the page script.

/// Stylesheet appended to `<head>` once at mount: keyframes used by the
/// notices plus the success modal typography.
pub const DYNAMIC_STYLES: &str = "
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes slideUp {
    from { transform: translateY(30px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

@keyframes slideDown {
    from { transform: translateY(-20px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

.success-modal .modal-icon {
    font-size: 3rem;
    margin-bottom: 1rem;
}

.success-modal h3 {
    color: #519d3c;
    margin-bottom: 1rem;
}

.success-modal p {
    color: #666;
    margin-bottom: 0.5rem;
}
";

/// Full-screen overlay of the success modal.
pub const SUCCESS_MODAL: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
background: rgba(0,0,0,0.8); display: flex; align-items: center; justify-content: center; \
z-index: 10000; animation: fadeIn 0.3s ease;";

/// Card inside the success modal.
pub const SUCCESS_MODAL_CONTENT: &str = "background: white; padding: 2rem; border-radius: 15px; \
text-align: center; max-width: 400px; margin: 0 20px; animation: slideUp 0.3s ease;";

/// Validation error banner shown above the form.
pub const ERROR_BANNER: &str = "background: #ff4444; color: white; padding: 1rem; \
border-radius: 10px; margin-bottom: 1rem; text-align: center; animation: slideDown 0.3s ease;";

/// Class of the validation error banner; at most one exists at a time.
pub const ERROR_BANNER_CLASS: &str = "error-message";
/// Class of the success modal overlay.
pub const SUCCESS_MODAL_CLASS: &str = "success-modal";

/// `transform` value for a track offset.
#[must_use]
pub fn translate_x(offset_px: f32) -> String {
    format!("translateX({offset_px}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_formats_pixels() {
        assert_eq!(translate_x(-344.0), "translateX(-344px)");
        assert_eq!(translate_x(-12.5), "translateX(-12.5px)");
    }

    #[test]
    fn keyframes_are_declared() {
        for name in ["fadeIn", "slideUp", "slideDown"] {
            assert!(DYNAMIC_STYLES.contains(&format!("@keyframes {name}")));
            let users = [SUCCESS_MODAL, SUCCESS_MODAL_CONTENT, ERROR_BANNER];
            assert!(users.iter().any(|s| s.contains(name)));
        }
    }
}
