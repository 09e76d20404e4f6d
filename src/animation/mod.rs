//! Keyframes, easing and transitions.

/// Keyframe animation core and the `Lerp` trait.
pub mod anim;
/// Easing curves.
pub mod ease;
/// Animation combinators (delay, loop, stagger).
pub mod ops;
/// Renderable element state.
pub mod state;
/// Tweens and springs for reveal steps.
pub mod transition;
