//! Built-in Bluetooth SIG assigned-numbers names.
//!
//! A subset of the published assigned UUID lists (protocol identifiers,
//! service classes, GATT services, declarations, descriptors, and common
//! characteristics). This table is authoritative for well-known 16-bit
//! UUIDs: the resolution entry point consults it before the custom
//! registry, and a registry entry never shadows it.

/// Sorted by UUID so lookups can binary search.
const ASSIGNED_UUIDS: &[(u16, &str)] = &[
    // Protocol identifiers
    (0x0001, "SDP"),
    (0x0002, "UDP"),
    (0x0003, "RFCOMM"),
    (0x0004, "TCP"),
    (0x0005, "TCS-BIN"),
    (0x0006, "TCS-AT"),
    (0x0007, "ATT"),
    (0x0008, "OBEX"),
    (0x0009, "IP"),
    (0x000A, "FTP"),
    (0x000C, "HTTP"),
    (0x000E, "WSP"),
    (0x000F, "BNEP"),
    (0x0010, "UPNP"),
    (0x0011, "HID Protocol"),
    (0x0012, "Hardcopy Control Channel"),
    (0x0014, "Hardcopy Data Channel"),
    (0x0016, "Hardcopy Notification Channel"),
    (0x0017, "AVCTP"),
    (0x0019, "AVDTP"),
    (0x001B, "CMTP"),
    (0x001D, "UDI C-Plane"),
    (0x001E, "MCAP Control Channel"),
    (0x001F, "MCAP Data Channel"),
    (0x0100, "L2CAP"),
    // Service classes
    (0x1000, "Service Discovery Server Service Class ID"),
    (0x1001, "Browse Group Descriptor Service Class ID"),
    (0x1002, "Public Browse Group"),
    (0x1101, "Serial Port"),
    (0x1102, "LAN Access Using PPP"),
    (0x1103, "Dial-Up Networking"),
    (0x1104, "IrMC Sync"),
    (0x1105, "OBEX Object Push"),
    (0x1106, "OBEX File Transfer"),
    (0x1107, "IrMC Sync Command"),
    (0x1108, "Headset"),
    (0x1109, "Cordless Telephony"),
    (0x110A, "Audio Source"),
    (0x110B, "Audio Sink"),
    (0x110C, "A/V Remote Control Target"),
    (0x110D, "Advanced Audio Distribution"),
    (0x110E, "A/V Remote Control"),
    (0x110F, "A/V Remote Control Controller"),
    (0x1110, "Intercom"),
    (0x1111, "Fax"),
    (0x1112, "Headset Audio Gateway"),
    (0x1115, "PANU"),
    (0x1116, "NAP"),
    (0x1117, "GN"),
    (0x111E, "Hands-Free"),
    (0x111F, "AG Hands-Free"),
    (0x1124, "HID"),
    (0x112D, "SIM Access"),
    (0x112E, "Phonebook Access Client"),
    (0x112F, "Phonebook Access Server"),
    (0x1130, "Phonebook Access Profile"),
    (0x1132, "Message Access Server"),
    (0x1133, "Message Notification Server"),
    (0x1134, "Message Access Profile"),
    (0x1200, "PnP Information"),
    (0x1203, "Generic Audio"),
    (0x1400, "HDP"),
    (0x1401, "HDP Source"),
    (0x1402, "HDP Sink"),
    // GATT services
    (0x1800, "GAP"),
    (0x1801, "GATT"),
    (0x1802, "Immediate Alert"),
    (0x1803, "Link Loss"),
    (0x1804, "Tx Power"),
    (0x1805, "Current Time"),
    (0x1806, "Reference Time Update"),
    (0x1807, "Next DST Change"),
    (0x1808, "Glucose"),
    (0x1809, "Health Thermometer"),
    (0x180A, "Device Information"),
    (0x180D, "Heart Rate"),
    (0x180E, "Phone Alert Status"),
    (0x180F, "Battery"),
    (0x1810, "Blood Pressure"),
    (0x1811, "Alert Notification"),
    (0x1812, "Human Interface Device"),
    (0x1813, "Scan Parameters"),
    (0x1814, "Running Speed and Cadence"),
    (0x1815, "Automation IO"),
    (0x1816, "Cycling Speed and Cadence"),
    (0x1818, "Cycling Power"),
    (0x1819, "Location and Navigation"),
    (0x181A, "Environmental Sensing"),
    (0x181B, "Body Composition"),
    (0x181C, "User Data"),
    (0x181D, "Weight Scale"),
    (0x181E, "Bond Management"),
    (0x181F, "Continuous Glucose Monitoring"),
    (0x1820, "Internet Protocol Support"),
    (0x1821, "Indoor Positioning"),
    (0x1822, "Pulse Oximeter"),
    (0x1823, "HTTP Proxy"),
    (0x1824, "Transport Discovery"),
    (0x1825, "Object Transfer"),
    (0x1826, "Fitness Machine"),
    (0x1827, "Mesh Provisioning"),
    (0x1828, "Mesh Proxy"),
    (0x1829, "Reconnection Configuration"),
    (0x1843, "Audio Input Control"),
    (0x1844, "Volume Control"),
    (0x1845, "Volume Offset Control"),
    (0x1846, "Coordinated Set Identification"),
    (0x1848, "Media Control"),
    (0x1849, "Generic Media Control"),
    (0x184B, "Telephone Bearer"),
    (0x184C, "Generic Telephone Bearer"),
    (0x184D, "Microphone Control"),
    (0x184E, "Audio Stream Control"),
    (0x184F, "Broadcast Audio Scan"),
    (0x1850, "Published Audio Capabilities"),
    (0x1851, "Basic Audio Announcement"),
    (0x1852, "Broadcast Audio Announcement"),
    (0x1853, "Common Audio"),
    (0x1854, "Hearing Access"),
    // Declarations
    (0x2800, "Primary Service"),
    (0x2801, "Secondary Service"),
    (0x2802, "Include"),
    (0x2803, "Characteristic"),
    // Descriptors
    (0x2900, "Characteristic Extended Properties"),
    (0x2901, "Characteristic User Description"),
    (0x2902, "Client Characteristic Configuration"),
    (0x2903, "Server Characteristic Configuration"),
    (0x2904, "Characteristic Presentation Format"),
    (0x2905, "Characteristic Aggregate Format"),
    (0x2906, "Valid Range"),
    (0x2907, "External Report Reference"),
    (0x2908, "Report Reference"),
    (0x2909, "Number of Digitals"),
    (0x290A, "Value Trigger Setting"),
    (0x290B, "Environmental Sensing Configuration"),
    (0x290C, "Environmental Sensing Measurement"),
    (0x290D, "Environmental Sensing Trigger Setting"),
    (0x290E, "Time Trigger Setting"),
    // Characteristics
    (0x2A00, "Device Name"),
    (0x2A01, "Appearance"),
    (0x2A02, "Peripheral Privacy Flag"),
    (0x2A03, "Reconnection Address"),
    (0x2A04, "Peripheral Preferred Connection Parameters"),
    (0x2A05, "Service Changed"),
    (0x2A06, "Alert Level"),
    (0x2A07, "Tx Power Level"),
    (0x2A08, "Date Time"),
    (0x2A09, "Day of Week"),
    (0x2A0D, "DST Offset"),
    (0x2A0E, "Time Zone"),
    (0x2A0F, "Local Time Information"),
    (0x2A11, "Time with DST"),
    (0x2A12, "Time Accuracy"),
    (0x2A13, "Time Source"),
    (0x2A14, "Reference Time Information"),
    (0x2A16, "Time Update Control Point"),
    (0x2A17, "Time Update State"),
    (0x2A18, "Glucose Measurement"),
    (0x2A19, "Battery Level"),
    (0x2A1C, "Temperature Measurement"),
    (0x2A1D, "Temperature Type"),
    (0x2A1E, "Intermediate Temperature"),
    (0x2A21, "Measurement Interval"),
    (0x2A22, "Boot Keyboard Input Report"),
    (0x2A23, "System ID"),
    (0x2A24, "Model Number String"),
    (0x2A25, "Serial Number String"),
    (0x2A26, "Firmware Revision String"),
    (0x2A27, "Hardware Revision String"),
    (0x2A28, "Software Revision String"),
    (0x2A29, "Manufacturer Name String"),
    (0x2A2B, "Current Time"),
    (0x2A31, "Scan Refresh"),
    (0x2A32, "Boot Keyboard Output Report"),
    (0x2A33, "Boot Mouse Input Report"),
    (0x2A34, "Glucose Measurement Context"),
    (0x2A35, "Blood Pressure Measurement"),
    (0x2A36, "Intermediate Cuff Pressure"),
    (0x2A37, "Heart Rate Measurement"),
    (0x2A38, "Body Sensor Location"),
    (0x2A39, "Heart Rate Control Point"),
];

/// Name for a well-known 16-bit UUID, if assigned.
///
/// # Example
///
/// ```
/// use btuuid::assigned;
///
/// assert_eq!(assigned::lookup(0x2800), Some("Primary Service"));
/// assert_eq!(assigned::lookup(0x180f), Some("Battery"));
/// assert_eq!(assigned::lookup(0xa1b2), None);
/// ```
pub fn lookup(short: u16) -> Option<&'static str> {
    ASSIGNED_UUIDS
        .binary_search_by_key(&short, |&(uuid, _)| uuid)
        .ok()
        .map(|idx| ASSIGNED_UUIDS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for window in ASSIGNED_UUIDS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "table out of order near {:#06x}",
                window[1].0
            );
        }
    }

    #[test]
    fn test_lookup_known() {
        assert_eq!(lookup(0x0003), Some("RFCOMM"));
        assert_eq!(lookup(0x1101), Some("Serial Port"));
        assert_eq!(lookup(0x2902), Some("Client Characteristic Configuration"));
        assert_eq!(lookup(0x2A37), Some("Heart Rate Measurement"));
    }

    #[test]
    fn test_lookup_unassigned() {
        assert_eq!(lookup(0x0000), None);
        assert_eq!(lookup(0x000B), None);
        assert_eq!(lookup(0xFFFF), None);
    }
}
