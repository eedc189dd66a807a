//! Board LED status indicator

use embassy_rp::gpio::Output;

use crate::ports::StatusIndicator;

/// GPIO-driven LED (GP25 on the Pico)
pub struct BoardLed<'d> {
    pin: Output<'d>,
}

impl<'d> BoardLed<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> StatusIndicator for BoardLed<'d> {
    fn set_on(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
