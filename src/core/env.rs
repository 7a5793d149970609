//! Host detection for the "Run on this CPU" line in reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,

    pub os: String,
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        EnvironmentInfo {
            cpu_model: None,
            cpu_cores: None,
            os: std::env::consts::OS.to_string(),
        }
    }
}

impl EnvironmentInfo {
    /// Detect CPU and OS of the current host
    pub fn detect() -> Self {
        use sysinfo::System;

        let mut sys = System::new();
        sys.refresh_cpu();

        let cpu_model = sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|s| !s.is_empty());
        let cpu_cores = sys.physical_core_count().map(|c| c as u32);
        let os = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());

        EnvironmentInfo {
            cpu_model,
            cpu_cores,
            os,
        }
    }

    /// One-line host summary, e.g. `AMD EPYC 7B13 (8 cores, Linux)`.
    pub fn summary(&self) -> String {
        let cpu = self.cpu_model.as_deref().unwrap_or("unknown CPU");
        match self.cpu_cores {
            Some(cores) => format!("{cpu} ({cores} cores, {})", self.os),
            None => format!("{cpu} ({})", self.os),
        }
    }
}
