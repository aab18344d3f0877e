pub mod battery;
pub mod bluetooth;
pub mod network;
pub mod system;

#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub hostname: String,
    pub os: String,
    pub uptime_minutes: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct MemoryReading {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatteryReading {
    pub level_percent: Option<f64>,
    pub charging: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct Connectivity {
    pub ip_address: Option<String>,
    pub wifi_connected: Option<bool>,
    pub wifi_ssid: Option<String>,
}
