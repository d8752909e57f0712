//! Bulb rule — power toggles, brightness jumps and colour changes.

use mockhub_domain::device::{Brightness, Bulb, Color};

use crate::dice::Dice;

const TOGGLE_THRESHOLD: u32 = 85;
const BRIGHTNESS_THRESHOLD: u32 = 40;
const COLOR_THRESHOLD: u32 = 60;

/// Three independent draws: toggle, brightness, colour.
///
/// Only the toggle and brightness draws count as a change. A new colour is
/// applied silently and reaches clients with the next change that does
/// get broadcast.
pub(super) fn update(bulb: &mut Bulb, dice: &mut impl Dice) -> bool {
    let mut changed = false;

    if dice.roll(0, 100) > TOGGLE_THRESHOLD {
        bulb.is_turned_on = !bulb.is_turned_on;
        changed = true;
    }

    if dice.roll(0, 100) > BRIGHTNESS_THRESHOLD {
        bulb.brightness = Brightness::clamped(dice.roll(1, 101));
        changed = true;
    }

    if dice.roll(0, 100) > COLOR_THRESHOLD {
        bulb.color = Color::from_rgb(dice.roll(0, 0x0100_0000));
    }

    changed
}
