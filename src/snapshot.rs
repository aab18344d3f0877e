use crate::collectors::network::{select_active_interface, LOOPBACK_INTERFACE};
use crate::collectors::system::MemoryProbeError;
use crate::platform::HostProbes;
use chrono::Local;
use serde::Serialize;
use thiserror::Error;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Полный снимок состояния хоста. Форма записи фиксирована: отсутствующее
/// значение сериализуется как null, ключи не выпадают.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub hostname: String,
    pub os: String,
    pub battery_level: Option<f64>,
    pub is_charging: Option<bool>,
    #[serde(rename = "memoryUsedGiB")]
    pub memory_used_gib: f64,
    #[serde(rename = "memoryTotalGiB")]
    pub memory_total_gib: f64,
    pub cpu_usage_percent: f64,
    pub uptime_minutes: u64,
    pub active_network_interface: Option<String>,
    pub ip_address: Option<String>,
    pub wifi_connected: Option<bool>,
    #[serde(rename = "wifiSSID")]
    pub wifi_ssid: Option<String>,
    pub peripheral_devices: Vec<String>,
    pub captured_at: String,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("не удалось собрать снимок: {0}")]
    Memory(#[from] MemoryProbeError),
}

/// Собирает снимок, опрашивая каждую пробу ровно один раз. Единственный
/// фатальный исход — отказ пробы памяти; остальные пробы деградируют до
/// значений-заглушек на уровне своих полей.
pub fn assemble(probes: &mut dyn HostProbes) -> Result<Snapshot, SnapshotError> {
    let identity = probes.identity();
    let battery = probes.battery();
    let memory = probes.memory()?;
    let cpu_usage_percent = probes.cpu_usage_percent();
    let interfaces = probes.interfaces();
    let active_network_interface =
        select_active_interface(&interfaces, LOOPBACK_INTERFACE).map(str::to_string);
    let connectivity = probes.connectivity();
    let peripheral_devices = probes.peripheral_devices();

    // Raw used/total pass through even if the OS momentarily reports
    // used > total; consistency is the consumer's assertion to make.
    Ok(Snapshot {
        hostname: identity.hostname,
        os: identity.os,
        battery_level: battery.level_percent.map(round1),
        is_charging: battery.charging,
        memory_used_gib: round_gib(memory.used_bytes),
        memory_total_gib: round_gib(memory.total_bytes),
        cpu_usage_percent: round1(cpu_usage_percent),
        uptime_minutes: identity.uptime_minutes,
        active_network_interface,
        ip_address: connectivity.ip_address,
        wifi_connected: connectivity.wifi_connected,
        wifi_ssid: connectivity.wifi_ssid,
        peripheral_devices,
        captured_at: captured_at_now(),
    })
}

/// Байты в GiB с округлением до двух знаков; половина округляется вверх
/// (от нуля), принятая в проекте конвенция.
pub fn round_gib(bytes: u64) -> f64 {
    (bytes as f64 / GIB * 100.0).round() / 100.0
}

/// Округление до одного знака, та же конвенция.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn captured_at_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
