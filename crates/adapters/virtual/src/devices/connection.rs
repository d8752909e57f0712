//! Connection drift — applies to every device regardless of kind.

use mockhub_domain::device::Device;

use crate::dice::Dice;

/// A draw above this value triggers a transition.
const TRANSITION_THRESHOLD: u32 = 65;

/// Move to one of the two other connection states, roughly one tick in three.
pub(super) fn update(device: &mut Device, dice: &mut impl Dice) -> bool {
    if dice.roll(0, 100) <= TRANSITION_THRESHOLD {
        return false;
    }
    let [first, second] = device.connection_state().others();
    let next = if dice.roll(0, 2) == 0 { first } else { second };
    device.set_connection_state(next);
    true
}
