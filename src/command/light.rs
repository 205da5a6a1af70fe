// Light - the receiver commands act on

/// Result of a switch call: did the call change anything?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchReport {
    /// The light changed state
    Toggled,
    /// The light was already in the requested state
    Unchanged,
}

/// Errors reported by the device itself
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("light '{device}' is unreachable")]
    Unreachable { device: String },
}

/// A smart-home light with an inspectable on/off state
///
/// The light outlives every command that touches it; commands receive it
/// by mutable reference at call time and never own it.
pub struct Light {
    name: String,
    is_on: bool,
    reachable: bool,
}

impl Light {
    /// Create a light, initially off and reachable
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_on: false,
            reachable: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Simulate the device dropping off (or rejoining) the network
    pub fn set_reachable(&mut self, reachable: bool) {
        self.reachable = reachable;
    }

    /// Turn the light on. A redundant call is benign and reported as such.
    pub fn switch_on(&mut self) -> Result<SwitchReport, DeviceError> {
        self.set_on(true)
    }

    /// Turn the light off. A redundant call is benign and reported as such.
    pub fn switch_off(&mut self) -> Result<SwitchReport, DeviceError> {
        self.set_on(false)
    }

    /// Drive the light to an explicit state. Used by undo to restore the
    /// exact state a command observed before running.
    pub fn set_on(&mut self, on: bool) -> Result<SwitchReport, DeviceError> {
        if !self.reachable {
            return Err(DeviceError::Unreachable {
                device: self.name.clone(),
            });
        }

        if self.is_on == on {
            return Ok(SwitchReport::Unchanged);
        }

        self.is_on = on;
        Ok(SwitchReport::Toggled)
    }
}
