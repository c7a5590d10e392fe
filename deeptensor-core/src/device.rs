use std::fmt;

/// Where a model asks its layers to run.
///
/// Only the CPU path exists. `Gpu` is accepted everywhere a device is threaded
/// through the layer/model surface, and results are identical to `Cpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageDevice {
    #[default]
    Cpu,
    Gpu,
}

impl StorageDevice {
    /// Builds the device from the legacy `using_gpu` boolean flag.
    pub fn from_flag(using_gpu: bool) -> Self {
        if using_gpu {
            StorageDevice::Gpu
        } else {
            StorageDevice::Cpu
        }
    }

    pub fn is_accelerated(&self) -> bool {
        matches!(self, StorageDevice::Gpu)
    }
}

impl fmt::Display for StorageDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageDevice::Cpu => write!(f, "cpu"),
            StorageDevice::Gpu => write!(f, "gpu"),
        }
    }
}
