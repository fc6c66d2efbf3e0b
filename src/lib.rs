pub mod arg_parser;
pub mod errors;
pub mod format;
pub mod gpu_data;
pub mod gpu_info;
pub mod logger;
pub mod monitor;
pub mod telemetry;
pub mod vendor;
