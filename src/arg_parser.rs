use std::time::Duration;

use argparse::{ArgumentParser, Print, Store};

pub const DEFAULT_INTERVAL_MS: u64 = 1000;

pub struct ArgsOptions {
    // Delay between two polling cycles, in milliseconds
    pub interval_ms: u64,
    // Number of polling cycles to run, 0 means forever
    pub cycles: u64,
}

impl ArgsOptions {
    pub fn parse() -> Self {
        let mut options = ArgsOptions::default();

        {
            let mut parser = ArgumentParser::new();
            parser.set_description(
                "Print GPU clocks, temperature, fan speed and memory usage",
            );

            // Polling interval
            parser.refer(&mut options.interval_ms).add_option(
                &["-i", "--interval"],
                Store,
                "Polling interval in milliseconds (default 1000)",
            );

            // Polling cycles
            parser.refer(&mut options.cycles).add_option(
                &["-n", "--cycles"],
                Store,
                "Stop after this many polling cycles (default 0, forever)",
            );

            // Show program version
            parser.add_option(
                &["-V", "--version"],
                Print(env!("CARGO_PKG_VERSION").to_string()),
                "Show the program version",
            );

            parser.parse_args_or_exit();
        }

        options
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn cycle_limit(&self) -> Option<u64> {
        (self.cycles > 0).then_some(self.cycles)
    }
}

impl Default for ArgsOptions {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            cycles: 0,
        }
    }
}
