//! Click and activation routing.

use super::{HitTarget, InputEvent, ACTIVATE_BUTTON};
use tracing::debug;
use vrhome_common::{Action, ViewId};

/// Maximum pointer drift, per axis, between press and release of a click.
pub const CLICK_TOLERANCE: f32 = 0.025;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingPress {
    view: ViewId,
    x: f32,
    y: f32,
}

/// Turns raw input plus the current hit-test target into actions.
///
/// Gamepad button 0 and taps fire immediately. A pointer click fires only
/// if press and release land on the same view and the pointer moved no
/// more than [`CLICK_TOLERANCE`] on either axis.
#[derive(Debug, Default)]
pub struct InputRouter {
    pending: Option<PendingPress>,
}

fn within(anchor: f32, current: f32, tolerance: f32) -> bool {
    (current - anchor).abs() <= tolerance
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pointer press is waiting for its release.
    pub fn has_pending_press(&self) -> bool {
        self.pending.is_some()
    }

    /// Route one event against the view currently under the gaze or pointer.
    ///
    /// Returns the action to dispatch, if the event completes one.
    pub fn route(&mut self, event: &InputEvent, target: Option<HitTarget<'_>>) -> Option<Action> {
        let target = target.filter(|t| t.interactable);

        match *event {
            InputEvent::GamepadButton { button_id } => {
                if button_id != ACTIVATE_BUTTON {
                    return None;
                }
                target.and_then(|t| t.action.cloned())
            }
            InputEvent::Tap => target.and_then(|t| t.action.cloned()),
            InputEvent::PointerDown { x, y } => {
                if let Some(t) = target.filter(|t| t.action.is_some()) {
                    self.pending = Some(PendingPress { view: t.view, x, y });
                }
                None
            }
            InputEvent::PointerUp { x, y } => {
                let pending = self.pending.take()?;
                let t = target?;
                if t.view != pending.view {
                    debug!("click released on {} after pressing {}", t.view, pending.view);
                    return None;
                }
                if within(pending.x, x, CLICK_TOLERANCE) && within(pending.y, y, CLICK_TOLERANCE) {
                    t.action.cloned()
                } else {
                    debug!("pointer drifted too far on {}, ignoring click", t.view);
                    None
                }
            }
        }
    }
}
