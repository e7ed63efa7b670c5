//! Push payload types and their wire representation.
//!
//! Every optional field carries `skip_serializing_if`, so the serialized
//! payload contains only what the caller explicitly set — unset fields are
//! absent, never `null` or empty.

use serde::{Serialize, Serializer};

/// A push request body.
///
/// The audience says *who* receives the push, the notification says *what*
/// they see; the two are independent. No validation happens locally —
/// a payload the service considers malformed comes back as a
/// [`Remote`](crate::AirshipError::Remote) rejection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PushPayload {
    /// Audience selector. Conventionally unset for broadcasts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Audience>,
    /// Message content and per-platform overrides.
    pub notification: Notification,
    /// Platform selector, e.g. `"all"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_types: Option<String>,
}

impl PushPayload {
    /// Create a payload carrying the given notification.
    pub fn new(notification: Notification) -> Self {
        Self {
            audience: None,
            notification,
            device_types: None,
        }
    }

    /// Set the audience.
    pub fn audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    /// Set the device-types selector.
    pub fn device_types(mut self, selector: impl Into<String>) -> Self {
        self.device_types = Some(selector.into());
        self
    }
}

/// Audience selector: specific devices, or every registered device.
#[derive(Debug, Clone)]
pub enum Audience {
    /// Target specific devices by platform identifier.
    Target(DeviceIds),
    /// All registered devices. Serializes as the string `"all"`.
    All,
}

impl Audience {
    /// Target a single iOS device token.
    pub fn ios(token: impl Into<String>) -> Self {
        Self::Target(DeviceIds::default().ios(token))
    }

    /// Target a single Android APID.
    pub fn android(apid: impl Into<String>) -> Self {
        Self::Target(DeviceIds::default().android(apid))
    }

    /// Target a single Windows Phone identifier.
    pub fn windows_phone(id: impl Into<String>) -> Self {
        Self::Target(DeviceIds::default().windows_phone(id))
    }

    /// Target a single Windows identifier.
    pub fn windows(id: impl Into<String>) -> Self {
        Self::Target(DeviceIds::default().windows(id))
    }

    /// Target a single Blackberry device PIN.
    pub fn blackberry(pin: impl Into<String>) -> Self {
        Self::Target(DeviceIds::default().blackberry(pin))
    }
}

impl Serialize for Audience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Target(ids) => ids.serialize(serializer),
            Self::All => serializer.serialize_str("all"),
        }
    }
}

/// Per-platform device identifiers.
///
/// Each identifier addresses one installed application instance on that
/// platform. Only the identifiers that are set appear on the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeviceIds {
    /// iOS device token.
    #[serde(rename = "device_token", skip_serializing_if = "Option::is_none")]
    pub ios: Option<String>,
    /// Android APID.
    #[serde(rename = "apid", skip_serializing_if = "Option::is_none")]
    pub android: Option<String>,
    /// Windows Phone (MPNS) identifier.
    #[serde(rename = "mpns", skip_serializing_if = "Option::is_none")]
    pub windows_phone: Option<String>,
    /// Windows (WNS) identifier.
    #[serde(rename = "wns", skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
    /// Blackberry device PIN.
    #[serde(rename = "device_pin", skip_serializing_if = "Option::is_none")]
    pub blackberry: Option<String>,
}

impl DeviceIds {
    /// Set the iOS device token.
    pub fn ios(mut self, token: impl Into<String>) -> Self {
        self.ios = Some(token.into());
        self
    }

    /// Set the Android APID.
    pub fn android(mut self, apid: impl Into<String>) -> Self {
        self.android = Some(apid.into());
        self
    }

    /// Set the Windows Phone identifier.
    pub fn windows_phone(mut self, id: impl Into<String>) -> Self {
        self.windows_phone = Some(id.into());
        self
    }

    /// Set the Windows identifier.
    pub fn windows(mut self, id: impl Into<String>) -> Self {
        self.windows = Some(id.into());
        self
    }

    /// Set the Blackberry device PIN.
    pub fn blackberry(mut self, pin: impl Into<String>) -> Self {
        self.blackberry = Some(pin.into());
        self
    }
}

/// Notification content: a default alert plus optional per-platform
/// presentation overrides.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Notification {
    /// Default alert text for platforms without an override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    /// iOS override: alert, sound, badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosOverride>,
    /// Android alert override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<AlertOverride>,
    /// Amazon alert override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon: Option<AlertOverride>,
    /// Blackberry alert override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blackberry: Option<AlertOverride>,
    /// Windows Phone (MPNS) alert override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpns: Option<AlertOverride>,
    /// Windows (WNS) alert override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wns: Option<AlertOverride>,
}

impl Notification {
    /// Create a notification with a default alert.
    pub fn new(alert: impl Into<String>) -> Self {
        Self {
            alert: Some(alert.into()),
            ..Default::default()
        }
    }

    /// Set the iOS override block.
    pub fn ios(mut self, ios: IosOverride) -> Self {
        self.ios = Some(ios);
        self
    }

    /// Set the Android alert override.
    pub fn android(mut self, alert: impl Into<String>) -> Self {
        self.android = Some(AlertOverride::new(alert));
        self
    }

    /// Set the Amazon alert override.
    pub fn amazon(mut self, alert: impl Into<String>) -> Self {
        self.amazon = Some(AlertOverride::new(alert));
        self
    }

    /// Set the Blackberry alert override.
    pub fn blackberry(mut self, alert: impl Into<String>) -> Self {
        self.blackberry = Some(AlertOverride::new(alert));
        self
    }

    /// Set the Windows Phone alert override.
    pub fn mpns(mut self, alert: impl Into<String>) -> Self {
        self.mpns = Some(AlertOverride::new(alert));
        self
    }

    /// Set the Windows alert override.
    pub fn wns(mut self, alert: impl Into<String>) -> Self {
        self.wns = Some(AlertOverride::new(alert));
        self
    }
}

/// iOS-specific presentation override.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IosOverride {
    /// Alert text replacing the default alert on iOS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    /// Sound to play.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    /// Badge value; accepts auto-increment forms like `"+1"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl IosOverride {
    /// Set the alert text.
    pub fn alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    /// Set the sound.
    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Set the badge value.
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Alert-text-only override used by the non-iOS platforms.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertOverride {
    /// Alert text replacing the default alert on this platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl AlertOverride {
    /// Create an override with the given alert text.
    pub fn new(alert: impl Into<String>) -> Self {
        Self {
            alert: Some(alert.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payload_omits_optional_keys() {
        let payload = PushPayload::default();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value, json!({ "notification": {} }));
    }

    #[test]
    fn test_ios_only_audience_serializes_single_key() {
        let audience = Audience::ios("abcdef");
        let value = serde_json::to_value(&audience).unwrap();

        assert_eq!(value, json!({ "device_token": "abcdef" }));
    }

    #[test]
    fn test_broadcast_audience_serializes_as_all() {
        let value = serde_json::to_value(&Audience::All).unwrap();
        assert_eq!(value, json!("all"));
    }

    #[test]
    fn test_device_ids_wire_names() {
        let ids = DeviceIds::default()
            .ios("t")
            .android("a")
            .windows_phone("m")
            .windows("w")
            .blackberry("p");
        let value = serde_json::to_value(&ids).unwrap();

        assert_eq!(
            value,
            json!({
                "device_token": "t",
                "apid": "a",
                "mpns": "m",
                "wns": "w",
                "device_pin": "p",
            })
        );
    }

    #[test]
    fn test_notification_overrides() {
        let notification = Notification::new("hello")
            .ios(IosOverride::default().sound("ping").badge("+1"))
            .android("hello android");
        let value = serde_json::to_value(&notification).unwrap();

        assert_eq!(
            value,
            json!({
                "alert": "hello",
                "ios": { "sound": "ping", "badge": "+1" },
                "android": { "alert": "hello android" },
            })
        );
    }

    #[test]
    fn test_full_payload_wire_shape() {
        let payload = PushPayload::new(
            Notification::new("Yo man !").ios(IosOverride::default().alert("Yo man !").badge("+1")),
        )
        .audience(Audience::ios("YOUR_DEVICE_TOKEN"))
        .device_types("all");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "audience": { "device_token": "YOUR_DEVICE_TOKEN" },
                "notification": {
                    "alert": "Yo man !",
                    "ios": { "alert": "Yo man !", "badge": "+1" },
                },
                "device_types": "all",
            })
        );
    }
}
