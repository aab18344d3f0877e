use crate::collectors::Connectivity;
use std::net::UdpSocket;
use std::process::Command;
use tracing::debug;

/// Целевой адрес для определения исходящего маршрута. Пакеты не отправляются,
/// достижимость цели не требуется.
pub const OUTBOUND_PROBE_TARGET: &str = "8.8.8.8:80";

#[cfg(target_os = "linux")]
pub const LOOPBACK_INTERFACE: &str = "lo";
#[cfg(not(target_os = "linux"))]
pub const LOOPBACK_INTERFACE: &str = "lo0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterface {
    pub name: String,
    pub is_up: bool,
}

/// Полный список интерфейсов в порядке, сообщённом хостом. Фильтрация
/// происходит только в селекторе.
pub fn list_interfaces() -> Vec<NetInterface> {
    let native = list_interfaces_sysfs();
    if !native.is_empty() {
        return native;
    }

    list_interfaces_addrs()
}

#[cfg(target_os = "linux")]
fn list_interfaces_sysfs() -> Vec<NetInterface> {
    let Ok(entries) = std::fs::read_dir("/sys/class/net") else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for entry in entries.flatten() {
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let operstate = std::fs::read_to_string(entry.path().join("operstate"))
            .unwrap_or_default();
        out.push(NetInterface {
            name,
            is_up: operstate.trim() == "up",
        });
    }

    out
}

#[cfg(not(target_os = "linux"))]
fn list_interfaces_sysfs() -> Vec<NetInterface> {
    Vec::new()
}

// Fallback: an interface that carries an address is treated as up.
fn list_interfaces_addrs() -> Vec<NetInterface> {
    let mut out: Vec<NetInterface> = Vec::new();
    for iface in if_addrs::get_if_addrs().unwrap_or_default() {
        if out.iter().any(|known| known.name == iface.name) {
            continue;
        }
        out.push(NetInterface {
            name: iface.name,
            is_up: true,
        });
    }

    out
}

/// Первый поднятый интерфейс, не являющийся loopback. Порядок перечисления —
/// единственный критерий выбора, приоритетов по типу интерфейса нет.
pub fn select_active_interface<'a>(
    interfaces: &'a [NetInterface],
    loopback: &str,
) -> Option<&'a str> {
    interfaces
        .iter()
        .find(|iface| iface.is_up && iface.name != loopback)
        .map(|iface| iface.name.as_str())
}

pub fn outbound_connectivity() -> Connectivity {
    Connectivity {
        ip_address: outbound_ip(),
        wifi_connected: None,
        wifi_ssid: None,
    }
}

/// Локальный адрес, который ОС выбрала бы для внешнего трафика. Любая ошибка
/// (нет маршрута, нет сети) превращается в отсутствие значения.
pub fn outbound_ip() -> Option<String> {
    let socket = match UdpSocket::bind(("0.0.0.0", 0)) {
        Ok(s) => s,
        Err(err) => {
            debug!(error = %err, "не удалось открыть UDP-сокет");
            return None;
        }
    };
    if let Err(err) = socket.connect(OUTBOUND_PROBE_TARGET) {
        debug!(error = %err, "исходящий маршрут не выбран");
        return None;
    }

    match socket.local_addr() {
        Ok(addr) => Some(addr.ip().to_string()),
        Err(err) => {
            debug!(error = %err, "локальный адрес сокета недоступен");
            None
        }
    }
}

pub fn wifi_connectivity() -> Connectivity {
    let (connected, ssid) = wifi_status();
    Connectivity {
        ip_address: None,
        wifi_connected: Some(connected),
        wifi_ssid: ssid,
    }
}

pub fn wifi_status() -> (bool, Option<String>) {
    let output = match Command::new("iwgetid").arg("-r").output() {
        Ok(o) => o,
        Err(err) => {
            debug!(error = %err, "утилита iwgetid недоступна");
            return (false, None);
        }
    };
    if !output.status.success() {
        return (false, None);
    }

    match ssid_from_output(&String::from_utf8_lossy(&output.stdout)) {
        Some(ssid) => (true, Some(ssid)),
        None => (false, None),
    }
}

fn ssid_from_output(stdout: &str) -> Option<String> {
    let ssid = stdout.trim();
    if ssid.is_empty() {
        return None;
    }
    Some(ssid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iface(name: &str, is_up: bool) -> NetInterface {
        NetInterface {
            name: name.to_string(),
            is_up,
        }
    }

    #[test]
    fn selector_skips_loopback_and_down_interfaces() {
        let interfaces = vec![iface("lo", true), iface("eth0", false), iface("wlan0", true)];
        assert_eq!(select_active_interface(&interfaces, "lo"), Some("wlan0"));
    }

    #[test]
    fn selector_returns_none_when_only_loopback_is_up() {
        let interfaces = vec![iface("lo", true)];
        assert_eq!(select_active_interface(&interfaces, "lo"), None);
    }

    #[test]
    fn selector_takes_first_up_interface_without_type_priority() {
        let interfaces = vec![iface("eth0", true), iface("wlan0", true)];
        assert_eq!(select_active_interface(&interfaces, "lo"), Some("eth0"));
    }

    #[test]
    fn selector_handles_empty_list() {
        assert_eq!(select_active_interface(&[], "lo"), None);
    }

    #[test]
    fn ssid_parsing_trims_and_rejects_empty_output() {
        assert_eq!(ssid_from_output("HomeNet\n"), Some("HomeNet".to_string()));
        assert_eq!(ssid_from_output("\n"), None);
        assert_eq!(ssid_from_output(""), None);
    }
}
