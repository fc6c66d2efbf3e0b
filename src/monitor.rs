use std::{io::Write, time::Duration};

use tokio::{
    select, signal,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::{
    errors::{MonitorError, report_error},
    format::{format_clock_line, format_frequency, format_size_kib},
    gpu_data::{ClockDomain, ClockVariant},
    gpu_info::{AdapterRecord, enumerate},
    telemetry::{read_boost_clocks, read_clocks, read_fan_speed, read_memory_usage, read_thermal},
    vendor::GpuApi,
};

const SEPARATOR: &str = "-------------------------------";

/// Owns the vendor session and the adapters found at startup.
///
/// Dropping the monitor releases the session, whichever way the program
/// leaves.
pub struct Monitor<A: GpuApi, O: Write, E: Write> {
    api: A,
    adapters: Vec<AdapterRecord>,

    out: O,
    err: E,
}

impl<A: GpuApi, O: Write, E: Write> Monitor<A, O, E> {
    /// Enumerate the adapters and print the startup block of each one.
    ///
    /// Fails with [`MonitorError::NoAdapters`] when nothing was found, in
    /// which case the session is released before returning.
    pub fn start(api: A, mut out: O, mut err: E) -> Result<Self, MonitorError> {
        let adapters = enumerate(&api, &mut err)?;

        if adapters.is_empty() {
            writeln!(err, "{}", MonitorError::NoAdapters)?;
            return Err(MonitorError::NoAdapters);
        }

        info!("Monitoring {} GPU(s)", adapters.len());

        for adapter in &adapters {
            print_gpu_info(&api, adapter, &mut out, &mut err)?;
        }
        out.flush()?;

        Ok(Self {
            api,
            adapters,
            out,
            err,
        })
    }

    pub fn adapters(&self) -> &[AdapterRecord] {
        &self.adapters
    }

    // Print one status block per adapter
    pub fn poll(&mut self) -> Result<(), MonitorError> {
        for adapter in &self.adapters {
            print_gpu_status(&self.api, adapter, &mut self.out, &mut self.err)?;
        }
        self.out.flush()?;

        Ok(())
    }

    /// Poll every `interval` until interrupted or `cycles` cycles were
    /// printed. With no cycle limit only an interrupt ends the loop.
    pub async fn run(mut self, interval: Duration, cycles: Option<u64>) -> Result<(), MonitorError> {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = signal::ctrl_c();
        tokio::pin!(shutdown);
        let mut listening = true;

        let mut done: u64 = 0;

        loop {
            select! {
                res = &mut shutdown, if listening => {
                    match res {
                        Ok(()) => {
                            info!("Interrupted, stopping");
                            break;
                        }
                        Err(e) => {
                            warn!("Failed to listen for Ctrl-C: {e}");
                            listening = false;
                        }
                    }
                },
                _ = ticker.tick() => {
                    self.poll()?;
                    done += 1;

                    if cycles.is_some_and(|limit| done >= limit) {
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

fn print_gpu_info(
    api: &impl GpuApi,
    adapter: &AdapterRecord,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), MonitorError> {
    writeln!(out, "GPU: {}", adapter.name)?;
    writeln!(out, "{SEPARATOR}")?;

    let base = match read_clocks(api, adapter, ClockVariant::Base) {
        Ok(base) => base,
        Err(e) => {
            report_error(err, &e)?;
            return Ok(());
        }
    };
    let boost = read_boost_clocks(api, adapter);

    for domain in ClockDomain::ALL {
        let line = format_clock_line(
            domain.label(),
            base.domain(domain),
            boost.map(|boost| boost.domain(domain)),
        );
        writeln!(out, "{line}")?;
    }

    Ok(())
}

fn print_gpu_status(
    api: &impl GpuApi,
    adapter: &AdapterRecord,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), MonitorError> {
    writeln!(out, "GPU: {}", adapter.name)?;
    writeln!(out, "{SEPARATOR}")?;

    match read_clocks(api, adapter, ClockVariant::Current) {
        Ok(current) => {
            for domain in ClockDomain::ALL {
                write!(out, "{}: {}\t", domain.label(), format_frequency(current.domain(domain)))?;
            }
        }
        Err(e) => report_error(err, &e)?,
    }
    writeln!(out)?;

    match read_thermal(api, adapter) {
        Ok(thermal) => {
            if let Some(temp) = thermal.temperature() {
                write!(out, "Temperature: {temp}C\t")?;
            }
        }
        Err(e) => report_error(err, &e)?,
    }
    write!(out, "Fan speed: {} RPM\t", read_fan_speed(api, adapter))?;
    writeln!(out)?;

    match read_memory_usage(api, adapter) {
        Ok(usage) => write!(
            out,
            "Memory usage: {} / {}\t",
            format_size_kib(usage.used_kib),
            format_size_kib(usage.total_kib)
        )?,
        Err(e) => report_error(err, &e)?,
    }
    writeln!(out)?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;

    Ok(())
}
