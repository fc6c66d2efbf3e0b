use crate::gpu_data::ClockReading;

pub const NOT_PRESENT: &str = "<not present>";

const KIB_PER_MIB: u64 = 1024;
const KIB_PER_GIB: u64 = 1024 * 1024;

// kHz to "X.XX MHz"
pub fn format_frequency(reading: ClockReading) -> String {
    if !reading.is_present {
        return NOT_PRESENT.to_string();
    }

    format!("{:.2} MHz", f64::from(reading.frequency_khz) / 1000.0)
}

/// Scale a size in KiB to the largest unit it strictly exceeds.
///
/// A value exactly on a threshold stays in the smaller unit, so 1024 KiB
/// prints as `1024 KiB` and 1048576 KiB as `1024.00 MiB`.
pub fn format_size_kib(size_kib: u64) -> String {
    if size_kib > KIB_PER_GIB {
        format!("{:.2} GiB", size_kib as f64 / KIB_PER_GIB as f64)
    } else if size_kib > KIB_PER_MIB {
        format!("{:.2} MiB", size_kib as f64 / KIB_PER_MIB as f64)
    } else {
        format!("{size_kib} KiB")
    }
}

pub fn format_clock_line(label: &str, base: ClockReading, boost: Option<ClockReading>) -> String {
    let mut line = format!("{label}: {}", format_frequency(base));

    if let Some(boost) = boost {
        line.push_str(&format!(" (boost {})", format_frequency(boost)));
    }

    line
}
