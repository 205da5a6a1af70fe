// Computer product and its step-by-step builder

use serde::{Deserialize, Serialize};

/// A configured computer
///
/// Parts that were never set stay None and show up as gaps in the
/// summary. Serializable so a finished configuration can be shipped
/// around as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    pub hdd: Option<String>,
    pub ram: Option<String>,
}

impl Computer {
    pub fn summary(&self) -> String {
        format!(
            "Computer with {} HDD and {} RAM",
            self.hdd.as_deref().unwrap_or("no"),
            self.ram.as_deref().unwrap_or("no"),
        )
    }
}

/// Assembles a Computer one part at a time
#[derive(Debug, Default)]
pub struct ComputerBuilder {
    hdd: Option<String>,
    ram: Option<String>,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hdd(mut self, hdd: impl Into<String>) -> Self {
        self.hdd = Some(hdd.into());
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.ram = Some(ram.into());
        self
    }

    pub fn build(self) -> Computer {
        Computer {
            hdd: self.hdd,
            ram: self.ram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_assembles_all_parts() {
        let computer = ComputerBuilder::new().hdd("1TB").ram("16GB").build();

        assert_eq!(computer.summary(), "Computer with 1TB HDD and 16GB RAM");
    }

    #[test]
    fn test_unset_parts_render_as_gaps() {
        let bare = ComputerBuilder::new().build();
        assert_eq!(bare.summary(), "Computer with no HDD and no RAM");

        let half = ComputerBuilder::new().ram("8GB").build();
        assert_eq!(half.summary(), "Computer with no HDD and 8GB RAM");
    }

    #[test]
    fn test_computer_round_trips_as_json() {
        let computer = ComputerBuilder::new().hdd("500GB").ram("8GB").build();

        let json = serde_json::to_string(&computer).unwrap();
        let decoded: Computer = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, computer);
    }
}
