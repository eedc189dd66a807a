//! Status indicator port - optional board LED

/// Port for a single on/off indicator
///
/// Boards without an indicator simply pass `None` where one is accepted.
pub trait StatusIndicator {
    /// Drive the indicator
    fn set_on(&mut self, on: bool);
}
