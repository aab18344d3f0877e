use crate::collectors::{HostIdentity, MemoryReading};
use std::thread;
use std::time::Duration;
use sysinfo::{CpuExt, System, SystemExt};
use thiserror::Error;
use tracing::debug;

/// Окно выборки загрузки CPU; намеренная блокирующая пауза (см. модель ресурсов).
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
#[error("подсистема памяти недоступна: {0}")]
pub struct MemoryProbeError(pub String);

pub fn collect_identity(system: &mut System) -> HostIdentity {
    let hostname = system
        .host_name()
        .unwrap_or_else(|| "unknown".to_string());
    let os = system.name().unwrap_or_else(|| "unknown".to_string());
    let uptime_minutes = system.uptime() / 60;

    HostIdentity {
        hostname,
        os,
        uptime_minutes,
    }
}

pub fn collect_memory(system: &mut System) -> Result<MemoryReading, MemoryProbeError> {
    system.refresh_memory();
    let total_bytes = system.total_memory();
    let used_bytes = system.used_memory();

    if total_bytes == 0 {
        return Err(MemoryProbeError(
            "ОС сообщила нулевой объём физической памяти".to_string(),
        ));
    }

    Ok(MemoryReading {
        used_bytes,
        total_bytes,
    })
}

/// Мгновенная загрузка CPU в процентах, усреднённая по логическим ядрам.
/// Блокируется на `CPU_SAMPLE_WINDOW` между двумя чтениями счётчиков.
pub fn collect_cpu_usage(system: &mut System) -> f64 {
    system.refresh_cpu();
    thread::sleep(CPU_SAMPLE_WINDOW);
    system.refresh_cpu();

    let raw = if system.cpus().is_empty() {
        0.0
    } else {
        let sum: f32 = system.cpus().iter().map(|c| c.cpu_usage()).sum();
        (sum / system.cpus().len() as f32) as f64
    };

    clamp_percent(raw)
}

pub fn clamp_percent(raw: f64) -> f64 {
    if !(0.0..=100.0).contains(&raw) {
        debug!(raw, "значение загрузки CPU вне диапазона, зажато в [0, 100]");
    }
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_caps_transient_overshoot() {
        assert_eq!(clamp_percent(101.3), 100.0);
        assert_eq!(clamp_percent(100.0), 100.0);
    }

    #[test]
    fn clamp_floors_negative_samples() {
        assert_eq!(clamp_percent(-0.5), 0.0);
        assert_eq!(clamp_percent(0.0), 0.0);
    }

    #[test]
    fn clamp_passes_in_range_values_through() {
        assert_eq!(clamp_percent(42.5), 42.5);
    }
}
