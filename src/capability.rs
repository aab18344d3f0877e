use std::process::Command;
use tracing::debug;

/// Вариант пробы связности, выбранный при старте процесса.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityVariant {
    /// UDP-сокет в сторону внешнего адреса, локальный адрес из таблицы маршрутизации.
    OutboundIp,
    /// Опрос текущей Wi-Fi-ассоциации через iwgetid.
    WifiStatus,
}

/// Вариант обнаружения периферийных устройств.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeripheralVariant {
    /// Активное inquiry-сканирование через hcitool.
    ActiveScan,
    /// Имена уже сопряжённых/подключённых устройств через bluetoothctl.
    PairedInfo,
    /// На хосте нет ни одной утилиты управления шиной.
    Unavailable,
}

/// Доступность платформенных возможностей, определяемая один раз при старте.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub connectivity: ConnectivityVariant,
    pub peripherals: PeripheralVariant,
}

pub fn detect() -> Capabilities {
    let has_iwgetid = tool_available("iwgetid");
    let has_bluetoothctl = tool_available("bluetoothctl");
    let has_hcitool = tool_available("hcitool");
    debug!(
        iwgetid = has_iwgetid,
        bluetoothctl = has_bluetoothctl,
        hcitool = has_hcitool,
        "результат поиска платформенных утилит"
    );

    choose_variants(has_iwgetid, has_bluetoothctl, has_hcitool)
}

fn choose_variants(
    has_iwgetid: bool,
    has_bluetoothctl: bool,
    has_hcitool: bool,
) -> Capabilities {
    let connectivity = if has_iwgetid {
        ConnectivityVariant::WifiStatus
    } else {
        ConnectivityVariant::OutboundIp
    };

    let peripherals = if has_bluetoothctl {
        PeripheralVariant::PairedInfo
    } else if has_hcitool {
        PeripheralVariant::ActiveScan
    } else {
        PeripheralVariant::Unavailable
    };

    Capabilities {
        connectivity,
        peripherals,
    }
}

// Spawn success is the only signal that matters; the utility's exit code
// for `--help` varies between tools.
fn tool_available(name: &str) -> bool {
    Command::new(name).arg("--help").output().is_ok()
}
