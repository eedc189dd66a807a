//! Serial port discovery and opening

use std::time::Duration;

use serialport::{SerialPort, SerialPortInfo, SerialPortType};

use super::error::{LoggerError, Result};
use crate::config::RASPBERRY_PI_VID;

/// Print every serial port the OS knows about, flagging the ones
/// auto-detection would pick
pub fn list_ports() -> Result<()> {
    let ports = serialport::available_ports()?;
    if ports.is_empty() {
        println!("No serial ports found");
        return Ok(());
    }

    for port in &ports {
        println!("{}", describe_port(port));
    }
    match ports.iter().find(|port| is_pico(port)) {
        Some(port) => println!("\nDefault port: {}", port.port_name),
        None => println!("\nNo Raspberry Pi device found; pass --port"),
    }
    Ok(())
}

/// True when the port is a USB device with the Raspberry Pi vendor ID
pub fn is_pico(port: &SerialPortInfo) -> bool {
    matches!(&port.port_type, SerialPortType::UsbPort(usb) if usb.vid == RASPBERRY_PI_VID)
}

/// One-line summary: name, bus, `vid:pid` and product for USB devices
pub fn describe_port(port: &SerialPortInfo) -> String {
    let detail = match &port.port_type {
        SerialPortType::UsbPort(usb) => {
            let mut detail = format!("USB {:04x}:{:04x}", usb.vid, usb.pid);
            let label = usb.product.as_deref().or(usb.manufacturer.as_deref());
            if let Some(label) = label {
                detail.push_str(&format!(" {}", label));
            }
            if let Some(serial) = &usb.serial_number {
                detail.push_str(&format!(" (serial {})", serial));
            }
            detail
        }
        SerialPortType::BluetoothPort => "Bluetooth".to_string(),
        SerialPortType::PciPort => "PCI".to_string(),
        SerialPortType::Unknown => "unknown".to_string(),
    };
    let marker = if is_pico(port) { "  [pico]" } else { "" };
    format!("  {:<16} {}{}", port.port_name, detail, marker)
}

/// First USB serial port with the Raspberry Pi vendor ID
pub fn find_pico_port() -> Option<String> {
    serialport::available_ports()
        .ok()?
        .into_iter()
        .find(is_pico)
        .map(|port| port.port_name)
}

/// Open `port_name`, or the auto-detected board when `None`
pub fn open(port_name: Option<String>, baud: u32, timeout: Duration) -> Result<Box<dyn SerialPort>> {
    let port_name = match port_name {
        Some(name) => name,
        None => find_pico_port().ok_or(LoggerError::NoDevice)?,
    };

    // On Windows, COM ports >= 10 need the \\.\COMxx format
    #[cfg(target_os = "windows")]
    let port_name = if port_name.starts_with("COM") && !port_name.starts_with(r"\\") {
        format!(r"\\.\{}", port_name)
    } else {
        port_name
    };

    log::info!("Opening {} at {} baud", port_name, baud);
    let mut port = serialport::new(&port_name, baud)
        .timeout(timeout)
        .flow_control(serialport::FlowControl::None)
        .open()?;

    // USB CDC bridges hold their output until the host raises DTR
    port.write_data_terminal_ready(true)?;
    log::debug!("DTR set");

    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::UsbPortInfo;

    fn usb(name: &str, vid: u16, product: Option<&str>) -> SerialPortInfo {
        SerialPortInfo {
            port_name: name.to_string(),
            port_type: SerialPortType::UsbPort(UsbPortInfo {
                vid,
                pid: 0x000a,
                serial_number: Some("E6614C311B".to_string()),
                manufacturer: Some("Raspberry Pi".to_string()),
                product: product.map(str::to_string),
            }),
        }
    }

    #[test]
    fn test_pico_detected_by_vid() {
        assert!(is_pico(&usb("/dev/ttyACM0", RASPBERRY_PI_VID, Some("Pico"))));
        assert!(!is_pico(&usb("/dev/ttyUSB0", 0x0403, Some("FT232R"))));
        let pci = SerialPortInfo {
            port_name: "/dev/ttyS0".to_string(),
            port_type: SerialPortType::PciPort,
        };
        assert!(!is_pico(&pci));
    }

    #[test]
    fn test_describe_usb_port() {
        let line = describe_port(&usb("/dev/ttyACM0", RASPBERRY_PI_VID, Some("Pico")));
        assert_eq!(
            line,
            "  /dev/ttyACM0     USB 2e8a:000a Pico (serial E6614C311B)  [pico]"
        );
    }

    #[test]
    fn test_describe_falls_back_to_manufacturer() {
        let line = describe_port(&usb("COM3", 0x0403, None));
        assert_eq!(line, "  COM3             USB 0403:000a Raspberry Pi (serial E6614C311B)");
    }

    #[test]
    fn test_describe_bluetooth_port() {
        let port = SerialPortInfo {
            port_name: "/dev/rfcomm0".to_string(),
            port_type: SerialPortType::BluetoothPort,
        };
        assert_eq!(describe_port(&port), "  /dev/rfcomm0     Bluetooth");
    }
}
