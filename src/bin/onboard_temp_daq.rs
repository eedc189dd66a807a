//! Onboard Temperature DAQ firmware (RP2040)
//!
//! Samples the onboard temperature sensor as fast as the loop allows and
//! writes one line per sample to UART0 (GP0 TX, 115200 8N1):
//!
//! ```text
//! <timestamp_us> <temperature>
//! ```
//!
//! Diagnostics go over defmt-RTT, never onto the data UART.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --target thumbv6m-none-eabi --features rp2040 --bin onboard_temp_daq
//!
//! # Fahrenheit, with the board LED lit once the ADC is configured
//! cargo run --release --target thumbv6m-none-eabi --features rp2040,fahrenheit,status-led \
//!     --bin onboard_temp_daq
//! ```
//!
//! Then record the stream on the host:
//!
//! ```bash
//! cargo run --features std --bin temp_logger -- 1000
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_rp::uart::{self, UartTx};
use {defmt_rtt as _, panic_probe as _};

use daq::adapters::{EmbassyClock, Rp2040TempSensor, UartOutput};
use daq::app::Acquisition;
use daq::config::{TEMPERATURE_UNIT, UART_BAUD_RATE};

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("=== Onboard Temperature DAQ ===");
    info!("Unit: {}", TEMPERATURE_UNIT.symbol());

    let p = embassy_rp::init(Default::default());

    // ========================================================================
    // Create Adapters
    // ========================================================================

    // Output: UART0 TX on GP0
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = UART_BAUD_RATE;
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
    let output = UartOutput::new(tx);
    info!("UART0 ready at {} baud", UART_BAUD_RATE);

    // Sensor: ADC input 4
    let sensor = Rp2040TempSensor::new(p.ADC, p.ADC_TEMP_SENSOR);

    // Timestamps: 64-bit TIMER through embassy-time
    let clock = EmbassyClock;

    // ========================================================================
    // Configure once, then sample forever
    // ========================================================================

    #[cfg(feature = "status-led")]
    let acquisition = {
        use daq::adapters::BoardLed;
        use embassy_rp::gpio::{Level, Output};

        let led = BoardLed::new(Output::new(p.PIN_25, Level::Low));
        unwrap!(Acquisition::configure_with_indicator(sensor, clock, output, led))
    };

    #[cfg(not(feature = "status-led"))]
    let acquisition = unwrap!(Acquisition::configure(sensor, clock, output));

    acquisition.run()
}
