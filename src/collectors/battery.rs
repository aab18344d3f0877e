use crate::collectors::BatteryReading;
use tracing::debug;

/// Уровень заряда и признак зарядки. Отсутствие батареи на хосте — штатный
/// исход, проба никогда не возвращает ошибку.
pub fn collect_battery() -> BatteryReading {
    let manager = match battery::Manager::new() {
        Ok(m) => m,
        Err(err) => {
            debug!(error = %err, "подсистема питания недоступна");
            return BatteryReading::default();
        }
    };

    let mut batteries = match manager.batteries() {
        Ok(b) => b,
        Err(err) => {
            debug!(error = %err, "не удалось перечислить батареи");
            return BatteryReading::default();
        }
    };

    let battery = match batteries.next() {
        Some(Ok(b)) => b,
        Some(Err(err)) => {
            debug!(error = %err, "чтение состояния батареи не удалось");
            return BatteryReading::default();
        }
        None => return BatteryReading::default(),
    };

    let level = f64::from(battery.state_of_charge().value) * 100.0;
    let charging = matches!(battery.state(), battery::State::Charging);

    BatteryReading {
        level_percent: Some(level),
        charging: Some(charging),
    }
}
