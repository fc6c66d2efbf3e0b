// GPU data is information that is queried on every polling cycle

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockDomain {
    Graphics,
    Memory,
}

impl ClockDomain {
    pub const ALL: [ClockDomain; 2] = [ClockDomain::Graphics, ClockDomain::Memory];

    pub fn label(self) -> &'static str {
        match self {
            ClockDomain::Graphics => "Graphics clock speed",
            ClockDomain::Memory => "Memory clock speed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockVariant {
    Base,
    Boost,
    Current,
}

// Frequency of a single clock domain, in kilohertz
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub is_present: bool,
    pub frequency_khz: u32,
}

impl ClockReading {
    pub fn present(frequency_khz: u32) -> Self {
        Self {
            is_present: true,
            frequency_khz,
        }
    }
}

// Result of one clock query, one reading per domain
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockFrequencies {
    pub graphics: ClockReading,
    pub memory: ClockReading,
}

impl ClockFrequencies {
    pub fn domain(&self, domain: ClockDomain) -> ClockReading {
        match domain {
            ClockDomain::Graphics => self.graphics,
            ClockDomain::Memory => self.memory,
        }
    }

    pub fn set_domain(&mut self, domain: ClockDomain, reading: ClockReading) {
        match domain {
            ClockDomain::Graphics => self.graphics = reading,
            ClockDomain::Memory => self.memory = reading,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThermalReading {
    pub sensor_count: u32,
    // Temperature of the first sensor, degrees Celsius
    pub current_temp: i32,
}

impl ThermalReading {
    pub fn temperature(&self) -> Option<i32> {
        (self.sensor_count > 0).then_some(self.current_temp)
    }
}

// Dedicated memory as reported by one memory query, all values in KiB
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub dedicated_kib: u64,
    pub available_dedicated_kib: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used_kib: u64,
    pub total_kib: u64,
}

impl From<MemoryInfo> for MemoryUsage {
    fn from(info: MemoryInfo) -> Self {
        Self {
            used_kib: info.dedicated_kib.saturating_sub(info.available_dedicated_kib),
            total_kib: info.dedicated_kib,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sensors_means_no_temperature() {
        let reading = ThermalReading {
            sensor_count: 0,
            current_temp: 55,
        };

        assert_eq!(reading.temperature(), None);
    }

    #[test]
    fn usage_is_total_minus_available() {
        let usage = MemoryUsage::from(MemoryInfo {
            dedicated_kib: 8_388_608,
            available_dedicated_kib: 6_291_456,
        });

        assert_eq!(usage.used_kib, 2_097_152);
        assert_eq!(usage.total_kib, 8_388_608);
    }

    #[test]
    fn usage_saturates_when_available_exceeds_total() {
        let usage = MemoryUsage::from(MemoryInfo {
            dedicated_kib: 1024,
            available_dedicated_kib: 2048,
        });

        assert_eq!(usage.used_kib, 0);
    }
}
