use super::StyleSurface;
use crate::error::WebError;
use atelier_core::MotionConfig;
use web_sys::Window;

/// Disable transitions site-wide when the visitor asks for reduced motion.
///
/// Returns whether the preference was active.
///
/// # Errors
/// Returns an error if the media query is rejected or the root style cannot be written.
pub fn apply_reduced_motion(
    window: &Window,
    root: &StyleSurface,
    config: &MotionConfig,
) -> Result<bool, WebError> {
    let prefers_reduced = window
        .match_media(&config.reduced_motion_query)?
        .is_some_and(|query| query.matches());
    if prefers_reduced {
        root.set(&config.transition_property, "none")?;
    }
    Ok(prefers_reduced)
}
