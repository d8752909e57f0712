//! Outlet rule — occasional power toggles.

use mockhub_domain::device::Outlet;

use crate::dice::Dice;

const TOGGLE_THRESHOLD: u32 = 70;

pub(super) fn update(outlet: &mut Outlet, dice: &mut impl Dice) -> bool {
    if dice.roll(0, 100) > TOGGLE_THRESHOLD {
        outlet.toggle();
        true
    } else {
        false
    }
}
