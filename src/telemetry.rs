use tracing::debug;

use crate::{
    errors::ApiResult,
    gpu_data::{ClockFrequencies, ClockVariant, MemoryUsage, ThermalReading},
    gpu_info::AdapterRecord,
    vendor::GpuApi,
};

pub fn read_clocks(
    api: &impl GpuApi,
    adapter: &AdapterRecord,
    variant: ClockVariant,
) -> ApiResult<ClockFrequencies> {
    api.all_clock_frequencies(adapter.handle, variant)
}

// Boost clocks are optional, a failure only means the adapter has none
pub fn read_boost_clocks(api: &impl GpuApi, adapter: &AdapterRecord) -> Option<ClockFrequencies> {
    match read_clocks(api, adapter, ClockVariant::Boost) {
        Ok(frequencies) => Some(frequencies),
        Err(e) => {
            debug!("No boost clocks for \"{}\": {e}", adapter.name);
            None
        }
    }
}

pub fn read_thermal(api: &impl GpuApi, adapter: &AdapterRecord) -> ApiResult<ThermalReading> {
    let reading = api.thermal_settings(adapter.handle)?;

    if reading.sensor_count == 0 {
        debug!("\"{}\" reports no thermal sensor", adapter.name);
    }

    Ok(reading)
}

// Fan speed in RPM, some adapters have no fan so failures read as 0
pub fn read_fan_speed(api: &impl GpuApi, adapter: &AdapterRecord) -> u32 {
    api.tach_reading(adapter.handle).unwrap_or_else(|e| {
        debug!("Fan speed unavailable for \"{}\": {e}", adapter.name);
        0
    })
}

pub fn read_memory_usage(api: &impl GpuApi, adapter: &AdapterRecord) -> ApiResult<MemoryUsage> {
    api.memory_info(adapter.handle).map(MemoryUsage::from)
}
