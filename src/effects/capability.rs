/// Device capability snapshot gating the ambient effects layer.
///
/// The gate is a hard policy: on a device judged low-end the particle layer
/// mounts nothing and runs no loop. Hardware signals (core count, device
/// memory) decide first; the user-agent check is an isolated fallback for
/// hosts that expose neither.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
    pub cpu_cores: usize,
    /// Device memory in gigabytes, when the host exposes it.
    pub device_memory_gb: Option<f64>,
    /// User-agent string, when the host has one. Fallback signal only.
    pub user_agent: Option<String>,
}

impl DeviceProfile {
    /// Probe what the local process can see. Embedders with richer signals
    /// (browser `deviceMemory`, UA string) fill the optional fields.
    pub fn detect() -> Self {
        let cpu_cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            cpu_cores,
            device_memory_gb: None,
            user_agent: None,
        }
    }

    pub fn with_device_memory(mut self, gb: f64) -> Self {
        self.device_memory_gb = Some(gb);
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Whether ambient effects should decline to run here.
    pub fn is_low_end(&self) -> bool {
        if self.cpu_cores <= 2 {
            return true;
        }
        if let Some(gb) = self.device_memory_gb {
            return gb < 2.0;
        }
        // No hardware signal beyond cores: fall back to the UA sniff.
        self.user_agent
            .as_deref()
            .is_some_and(mobile_user_agent)
    }
}

/// Best-effort mobile detection from a user-agent string. Kept separate so
/// it can be swapped for feature detection without touching the gate.
fn mobile_user_agent(ua: &str) -> bool {
    let ua = ua.to_ascii_lowercase();
    ["android", "iphone", "ipad", "ipod", "mobile", "silk"]
        .iter()
        .any(|sig| ua.contains(sig))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> DeviceProfile {
        DeviceProfile {
            cpu_cores: 8,
            device_memory_gb: None,
            user_agent: None,
        }
    }

    #[test]
    fn few_cores_is_low_end() {
        let mut p = desktop();
        p.cpu_cores = 2;
        assert!(p.is_low_end());
    }

    #[test]
    fn memory_signal_wins_over_user_agent() {
        let p = desktop()
            .with_device_memory(8.0)
            .with_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)");
        assert!(!p.is_low_end());

        let p = desktop().with_device_memory(1.0);
        assert!(p.is_low_end());
    }

    #[test]
    fn user_agent_is_only_a_fallback() {
        let p = desktop().with_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)");
        assert!(p.is_low_end());

        let p = desktop().with_user_agent("Mozilla/5.0 (X11; Linux x86_64)");
        assert!(!p.is_low_end());
    }

    #[test]
    fn detect_reports_at_least_one_core() {
        assert!(DeviceProfile::detect().cpu_cores >= 1);
    }
}
