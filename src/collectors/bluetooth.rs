use std::process::Command;
use tracing::debug;

// hcitool measures inquiry length in 1.28 s units; 3 units ≈ 4 s window.
const SCAN_INQUIRY_LENGTH: &str = "--length=3";

/// Активное inquiry-сканирование шины. Отсутствие адаптера или утилиты —
/// штатный исход, возвращается пустой список.
pub fn discover_devices() -> Vec<String> {
    let output = match Command::new("hcitool")
        .args(["scan", "--flush", SCAN_INQUIRY_LENGTH])
        .output()
    {
        Ok(o) => o,
        Err(err) => {
            debug!(error = %err, "утилита hcitool недоступна");
            return Vec::new();
        }
    };
    if !output.status.success() {
        debug!(code = ?output.status.code(), "hcitool scan завершился с ошибкой");
        return Vec::new();
    }

    parse_inquiry_output(&String::from_utf8_lossy(&output.stdout))
}

/// Имена известных (сопряжённых/подключённых) устройств из bluetoothctl.
pub fn paired_device_names() -> Vec<String> {
    let output = match Command::new("bluetoothctl").arg("info").output() {
        Ok(o) => o,
        Err(err) => {
            debug!(error = %err, "утилита bluetoothctl недоступна");
            return Vec::new();
        }
    };
    if !output.status.success() {
        return Vec::new();
    }

    parse_info_output(&String::from_utf8_lossy(&output.stdout))
}

// Lines look like "\tAA:BB:CC:DD:EE:FF\tDevice Name"; the header and
// progress lines carry no tab-separated address.
fn parse_inquiry_output(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let mut parts = line.trim().splitn(2, '\t');
            let addr = parts.next()?;
            let name = parts.next()?.trim();
            if !addr.contains(':') || name.is_empty() {
                return None;
            }
            Some(name.to_string())
        })
        .collect()
}

fn parse_info_output(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix("Name:")?;
            let name = rest.trim();
            if name.is_empty() {
                return None;
            }
            Some(name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_output_yields_device_names() {
        let text = "Scanning ...\n\
                    \t58:2D:34:60:10:2A\tKeyboard K380\n\
                    \tAC:BF:71:0B:11:52\tWH-1000XM4\n";
        assert_eq!(
            parse_inquiry_output(text),
            vec!["Keyboard K380".to_string(), "WH-1000XM4".to_string()]
        );
    }

    #[test]
    fn inquiry_output_without_devices_is_empty() {
        assert!(parse_inquiry_output("Scanning ...\n").is_empty());
        assert!(parse_inquiry_output("").is_empty());
    }

    #[test]
    fn info_output_collects_name_fields() {
        let text = "Device AC:BF:71:0B:11:52 (public)\n\
                    \tName: WH-1000XM4\n\
                    \tAlias: WH-1000XM4\n\
                    \tPaired: yes\n\
                    Device 58:2D:34:60:10:2A (public)\n\
                    \tName: Keyboard K380\n\
                    \tConnected: yes\n";
        assert_eq!(
            parse_info_output(text),
            vec!["WH-1000XM4".to_string(), "Keyboard K380".to_string()]
        );
    }

    #[test]
    fn malformed_info_output_is_tolerated() {
        assert!(parse_info_output("Missing device\n").is_empty());
        assert!(parse_info_output("\tName:\n").is_empty());
    }
}
