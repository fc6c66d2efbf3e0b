// GPU info are static information that are queried only once

use std::io;

use tracing::{debug, warn};

use crate::{
    errors::report_error,
    vendor::{GpuApi, MAX_PHYSICAL_GPUS},
};

// Opaque reference to a physical adapter owned by the vendor runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdapterHandle(u32);

impl AdapterHandle {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRecord {
    pub handle: AdapterHandle,
    pub name: String,

    // Total dedicated memory in KiB
    pub total_memory_kib: u64,
}

/// Enumerate the physical adapters and resolve their static information.
///
/// Adapters whose name or framebuffer size cannot be read are reported on
/// `err` and skipped. An empty result is not an error here, the caller
/// decides what to do with it.
pub fn enumerate(api: &impl GpuApi, err: &mut impl io::Write) -> io::Result<Vec<AdapterRecord>> {
    let handles = match api.enum_physical_gpus() {
        Ok(handles) => handles,
        Err(e) => {
            report_error(err, &e)?;
            return Ok(Vec::new());
        }
    };

    if handles.len() > MAX_PHYSICAL_GPUS {
        warn!("{} adapters reported, keeping the first {MAX_PHYSICAL_GPUS}", handles.len());
    }

    let mut adapters = Vec::with_capacity(handles.len().min(MAX_PHYSICAL_GPUS));

    for handle in handles.into_iter().take(MAX_PHYSICAL_GPUS) {
        let name = match api.full_name(handle) {
            Ok(name) => name,
            Err(e) => {
                report_error(err, &e)?;
                continue;
            }
        };

        let total_memory_kib = match api.physical_frame_buffer_size(handle) {
            Ok(size) => size,
            Err(e) => {
                report_error(err, &e)?;
                continue;
            }
        };

        debug!("Found GPU {}: \"{name}\"", handle.index());

        adapters.push(AdapterRecord {
            handle,
            name,
            total_memory_kib,
        });
    }

    Ok(adapters)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        errors::{ApiError, Status},
        vendor::{CALL_ENUM_PHYSICAL_GPUS, CALL_GET_FULL_NAME, MockGpuApi},
    };

    fn handles(count: u32) -> Vec<AdapterHandle> {
        (0..count).map(AdapterHandle::new).collect()
    }

    #[test]
    fn adapters_keep_enumeration_order() {
        let mut api = MockGpuApi::new();
        api.expect_enum_physical_gpus().returning(|| Ok(handles(2)));
        api.expect_full_name()
            .returning(|gpu| Ok(format!("GPU {}", gpu.index())));
        api.expect_physical_frame_buffer_size()
            .returning(|gpu| Ok(1024 * (gpu.index() as u64 + 1)));

        let mut err = Vec::new();
        let adapters = enumerate(&api, &mut err).unwrap();

        assert_eq!(adapters.len(), 2);
        assert_eq!(adapters[0].name, "GPU 0");
        assert_eq!(adapters[1].name, "GPU 1");
        assert_eq!(adapters[1].total_memory_kib, 2048);
        assert!(err.is_empty());
    }

    #[test]
    fn failing_name_skips_only_that_adapter() {
        let mut api = MockGpuApi::new();
        api.expect_enum_physical_gpus().returning(|| Ok(handles(2)));
        api.expect_full_name()
            .with(eq(AdapterHandle::new(0)))
            .returning(|_| Err(ApiError::new(CALL_GET_FULL_NAME, Status(6))));
        api.expect_full_name()
            .with(eq(AdapterHandle::new(1)))
            .returning(|_| Ok("Second".to_string()));
        api.expect_physical_frame_buffer_size()
            .with(eq(AdapterHandle::new(1)))
            .returning(|_| Ok(4096));

        let mut err = Vec::new();
        let adapters = enumerate(&api, &mut err).unwrap();

        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].handle, AdapterHandle::new(1));
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "GetFullName failed: Error 0x00000006\n"
        );
    }

    #[test]
    fn failing_enumeration_is_empty() {
        let mut api = MockGpuApi::new();
        api.expect_enum_physical_gpus()
            .returning(|| Err(ApiError::new(CALL_ENUM_PHYSICAL_GPUS, Status(9))));

        let mut err = Vec::new();
        let adapters = enumerate(&api, &mut err).unwrap();

        assert!(adapters.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("EnumPhysicalGPUs failed"));
    }

    #[test]
    fn enumeration_is_bounded() {
        let mut api = MockGpuApi::new();
        api.expect_enum_physical_gpus()
            .returning(|| Ok(handles(MAX_PHYSICAL_GPUS as u32 + 4)));
        api.expect_full_name().returning(|_| Ok("GPU".to_string()));
        api.expect_physical_frame_buffer_size().returning(|_| Ok(0));

        let adapters = enumerate(&api, &mut Vec::new()).unwrap();

        assert_eq!(adapters.len(), MAX_PHYSICAL_GPUS);
    }
}
