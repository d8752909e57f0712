//! Temperature sensor rule — a half-degree walk pulled back toward 18–22 °C.

use mockhub_domain::device::TemperatureSensor;

use crate::dice::Dice;

const STEP: f64 = 0.5;
const LOW: f64 = 18.0;
const HIGH: f64 = 22.0;

/// Always moves the reading, so always reports a change.
pub(super) fn update(sensor: &mut TemperatureSensor, dice: &mut impl Dice) -> bool {
    if sensor.temperature > HIGH {
        sensor.temperature -= STEP;
    } else if sensor.temperature < LOW {
        sensor.temperature += STEP;
    } else if dice.roll(0, 2) > 0 {
        sensor.temperature -= STEP;
    } else {
        sensor.temperature += STEP;
    }
    true
}
