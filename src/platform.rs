use crate::capability::{Capabilities, ConnectivityVariant, PeripheralVariant};
use crate::collectors::network::NetInterface;
use crate::collectors::system::MemoryProbeError;
use crate::collectors::{battery, bluetooth, network, system};
use crate::collectors::{BatteryReading, Connectivity, HostIdentity, MemoryReading};
use sysinfo::{System, SystemExt};

/// Интерфейс возможностей хоста, над которым полиморфен сборщик снимка.
/// Каждый метод — независимая проба; деградация описана на уровне полей.
pub trait HostProbes {
    fn identity(&mut self) -> HostIdentity;
    fn battery(&mut self) -> BatteryReading;
    fn memory(&mut self) -> Result<MemoryReading, MemoryProbeError>;
    fn cpu_usage_percent(&mut self) -> f64;
    fn interfaces(&mut self) -> Vec<NetInterface>;
    fn connectivity(&mut self) -> Connectivity;
    fn peripheral_devices(&mut self) -> Vec<String>;
}

pub struct HostPlatform {
    system: System,
    caps: Capabilities,
}

impl HostPlatform {
    pub fn new(caps: Capabilities) -> Self {
        Self {
            system: System::new(),
            caps,
        }
    }
}

impl HostProbes for HostPlatform {
    fn identity(&mut self) -> HostIdentity {
        system::collect_identity(&mut self.system)
    }

    fn battery(&mut self) -> BatteryReading {
        battery::collect_battery()
    }

    fn memory(&mut self) -> Result<MemoryReading, MemoryProbeError> {
        system::collect_memory(&mut self.system)
    }

    fn cpu_usage_percent(&mut self) -> f64 {
        system::collect_cpu_usage(&mut self.system)
    }

    fn interfaces(&mut self) -> Vec<NetInterface> {
        network::list_interfaces()
    }

    fn connectivity(&mut self) -> Connectivity {
        match self.caps.connectivity {
            ConnectivityVariant::OutboundIp => network::outbound_connectivity(),
            ConnectivityVariant::WifiStatus => network::wifi_connectivity(),
        }
    }

    fn peripheral_devices(&mut self) -> Vec<String> {
        match self.caps.peripherals {
            PeripheralVariant::ActiveScan => bluetooth::discover_devices(),
            PeripheralVariant::PairedInfo => bluetooth::paired_device_names(),
            PeripheralVariant::Unavailable => Vec::new(),
        }
    }
}
