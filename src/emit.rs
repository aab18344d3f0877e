use crate::snapshot::Snapshot;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("не удалось сериализовать снимок: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("не удалось записать снимок в вывод: {0}")]
    Io(#[from] std::io::Error),
}

/// Приёмник снимков. Сборщик ничего не знает о форме вывода.
pub trait Emitter {
    fn emit(&mut self, snapshot: &Snapshot) -> Result<(), EmitError>;
}

/// Пишет снимок одной JSON-строкой. Строка сериализуется целиком до записи,
/// поэтому наполовину записанный объект в выводе невозможен.
pub struct JsonLineEmitter<W: Write> {
    out: W,
}

impl<W: Write> JsonLineEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Emitter for JsonLineEmitter<W> {
    fn emit(&mut self, snapshot: &Snapshot) -> Result<(), EmitError> {
        let line = serde_json::to_string(snapshot)?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            hostname: "testhost".to_string(),
            os: "Linux".to_string(),
            battery_level: None,
            is_charging: None,
            memory_used_gib: 3.0,
            memory_total_gib: 8.0,
            cpu_usage_percent: 12.5,
            uptime_minutes: 90,
            active_network_interface: Some("wlan0".to_string()),
            ip_address: None,
            wifi_connected: Some(true),
            wifi_ssid: Some("HomeNet".to_string()),
            peripheral_devices: vec!["WH-1000XM4".to_string()],
            captured_at: "2026-08-29 12:00:00".to_string(),
        }
    }

    #[test]
    fn emits_exactly_one_parseable_json_line() {
        let mut buf = Vec::new();
        let mut emitter = JsonLineEmitter::new(&mut buf);
        emitter
            .emit(&sample_snapshot())
            .expect("запись в буфер не должна падать");

        let text = String::from_utf8(buf).expect("вывод должен быть валидным UTF-8");
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));

        let value: serde_json::Value =
            serde_json::from_str(text.trim_end()).expect("строка должна разбираться как JSON");
        assert_eq!(value["hostname"], "testhost");
        assert!(value["batteryLevel"].is_null());
        assert_eq!(value["wifiSSID"], "HomeNet");
    }
}
