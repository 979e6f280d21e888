//! Core data types for the CARIF document model.
//!
//! These are passive values filled in by [`crate::parser::Parser`]. Absent
//! or ambiguous source values are represented as `None`; the only derived
//! data is the action classification in [`PoiAction::action_type`].

use serde::{Deserialize, Serialize};

/// Kinds of actions a client can offer for a POI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Open the webpage at the action uri.
    OpenWebpage,

    /// Play the audio at the action uri.
    PlayAudio,

    /// Play the video at the action uri in full-screen.
    PlayVideo,

    /// Send an SMS to the number in the action uri.
    SendSms,

    /// Send an email to the address in the action uri.
    SendEmail,

    /// Call the number in the action uri.
    Call,

    /// Show the route to the coordinates in the action uri.
    RouteTo,
}

impl ActionType {
    /// All action types, ordered by code.
    pub const ALL: [Self; 7] = [
        Self::OpenWebpage,
        Self::PlayAudio,
        Self::PlayVideo,
        Self::SendSms,
        Self::SendEmail,
        Self::Call,
        Self::RouteTo,
    ];

    /// Classify a mime type.
    ///
    /// Exact matches for the CARIF application types, prefix matches for
    /// `audio/` and `video/`. Comparison is case-sensitive; anything else is
    /// unclassified.
    ///
    /// # Examples
    /// ```
    /// use carif_parser::types::ActionType;
    ///
    /// assert_eq!(ActionType::from_mime_type("text/html"), Some(ActionType::OpenWebpage));
    /// assert_eq!(ActionType::from_mime_type("video/mp4"), Some(ActionType::PlayVideo));
    /// assert_eq!(ActionType::from_mime_type("Text/HTML"), None);
    /// ```
    #[must_use]
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        match mime_type {
            "text/html" => Some(Self::OpenWebpage),
            "application/send-sms" => Some(Self::SendSms),
            "application/send-email" => Some(Self::SendEmail),
            "application/call" => Some(Self::Call),
            "application/route-to" => Some(Self::RouteTo),
            m if m.starts_with("audio/") => Some(Self::PlayAudio),
            m if m.starts_with("video/") => Some(Self::PlayVideo),
            _ => None,
        }
    }

    /// Numeric code used by CARIF clients.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Self::OpenWebpage => 1,
            Self::PlayAudio => 2,
            Self::PlayVideo => 3,
            Self::SendSms => 4,
            Self::SendEmail => 5,
            Self::Call => 6,
            Self::RouteTo => 7,
        }
    }

    /// Look up an action type by its numeric code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Get the string value used in exported output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenWebpage => "OPEN_WEBPAGE",
            Self::PlayAudio => "PLAY_AUDIO",
            Self::PlayVideo => "PLAY_VIDEO",
            Self::SendSms => "SEND_SMS",
            Self::SendEmail => "SEND_EMAIL",
            Self::Call => "CALL",
            Self::RouteTo => "ROUTE_TO",
        }
    }
}

/// Geographic position in WGS84 degrees.
///
/// Source `pos` text is `longitude latitude [altitude]`; the fields here are
/// named, so callers never deal with that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Altitude (optional, third `pos` token).
    pub altitude: Option<f64>,
}

impl Location {
    /// Create a location, arguments in source order.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64, altitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

/// An action associated with a POI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiAction {
    /// Mime type deciding how the client handles the action.
    pub mime_type: Option<String>,

    /// Button label.
    pub label: Option<String>,

    /// Action target.
    pub uri: Option<String>,
}

impl PoiAction {
    /// Create a new action.
    #[must_use]
    pub fn new(
        mime_type: Option<impl Into<String>>,
        label: Option<impl Into<String>>,
        uri: Option<impl Into<String>>,
    ) -> Self {
        Self {
            mime_type: mime_type.map(Into::into),
            label: label.map(Into::into),
            uri: uri.map(Into::into),
        }
    }

    /// Classify this action by its mime type.
    ///
    /// Computed on every call, so it always reflects the current `mime_type`.
    /// Returns `None` when the mime type is unset, empty, or unrecognized.
    ///
    /// # Examples
    /// ```
    /// use carif_parser::types::{ActionType, PoiAction};
    ///
    /// let action = PoiAction::new(Some("audio/mpeg"), None::<String>, Some("http://example.com/a.mp3"));
    /// assert_eq!(action.action_type(), Some(ActionType::PlayAudio));
    /// ```
    #[must_use]
    pub fn action_type(&self) -> Option<ActionType> {
        self.mime_type
            .as_deref()
            .filter(|m| !m.is_empty())
            .and_then(ActionType::from_mime_type)
    }
}

/// A point of interest, built from one `Feature` element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Poi {
    /// Feature `id` attribute.
    pub id: Option<String>,

    /// POI name (`None` if missing or given more than once).
    pub name: Option<String>,

    /// POI description (`None` if missing or given more than once).
    pub description: Option<String>,

    /// Image URL.
    pub image: Option<String>,

    /// Position from the Feature's first `Point`.
    pub location: Option<Location>,

    /// Actions in document order; empty when the Feature has no metadata.
    #[serde(default)]
    pub actions: Vec<PoiAction>,
}

/// Parsed CARIF document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// POIs in document order of their `Feature` elements.
    pub pois: Vec<Poi>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of POIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(mime_type: &str) -> PoiAction {
        PoiAction::new(Some(mime_type), None::<String>, None::<String>)
    }

    #[test]
    fn test_action_type_exact_matches() {
        assert_eq!(action("text/html").action_type(), Some(ActionType::OpenWebpage));
        assert_eq!(
            action("application/send-sms").action_type(),
            Some(ActionType::SendSms)
        );
        assert_eq!(
            action("application/send-email").action_type(),
            Some(ActionType::SendEmail)
        );
        assert_eq!(action("application/call").action_type(), Some(ActionType::Call));
        assert_eq!(
            action("application/route-to").action_type(),
            Some(ActionType::RouteTo)
        );
    }

    #[test]
    fn test_action_type_prefix_matches() {
        assert_eq!(action("audio/mpeg").action_type(), Some(ActionType::PlayAudio));
        assert_eq!(action("audio/").action_type(), Some(ActionType::PlayAudio));
        assert_eq!(action("video/mp4").action_type(), Some(ActionType::PlayVideo));
    }

    #[test]
    fn test_action_type_unclassified() {
        assert_eq!(action("application/unknown-thing").action_type(), None);
        assert_eq!(action("TEXT/HTML").action_type(), None);
        assert_eq!(action("text/html; charset=utf-8").action_type(), None);
        assert_eq!(action("audio").action_type(), None);
        assert_eq!(action("").action_type(), None);
        assert_eq!(PoiAction::default().action_type(), None);
    }

    #[test]
    fn test_action_type_follows_mime_type() {
        let mut poi_action = action("text/html");
        assert_eq!(poi_action.action_type(), Some(ActionType::OpenWebpage));

        poi_action.mime_type = Some("video/webm".to_string());
        assert_eq!(poi_action.action_type(), Some(ActionType::PlayVideo));
    }

    #[test]
    fn test_action_type_codes() {
        assert_eq!(ActionType::OpenWebpage.code(), 1);
        assert_eq!(ActionType::RouteTo.code(), 7);
        for action_type in ActionType::ALL {
            assert_eq!(ActionType::from_code(action_type.code()), Some(action_type));
        }
        assert_eq!(ActionType::from_code(0), None);
        assert_eq!(ActionType::from_code(8), None);
    }

    #[test]
    fn test_action_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ActionType::OpenWebpage).unwrap(),
            "\"OPEN_WEBPAGE\""
        );
        assert_eq!(
            serde_json::to_string(&ActionType::SendSms).unwrap(),
            "\"SEND_SMS\""
        );
        for action_type in ActionType::ALL {
            assert_eq!(
                serde_json::to_string(&action_type).unwrap(),
                format!("\"{}\"", action_type.as_str())
            );
        }
    }

    #[test]
    fn test_location_new_source_order() {
        let location = Location::new(10.5, 20.25, None);
        assert_eq!(location.longitude, 10.5);
        assert_eq!(location.latitude, 20.25);
        assert_eq!(location.altitude, None);
    }

    #[test]
    fn test_poi_default_has_empty_actions() {
        let poi = Poi::default();
        assert!(poi.id.is_none());
        assert!(poi.location.is_none());
        assert!(poi.actions.is_empty());
    }

    #[test]
    fn test_poi_action_serializes_camel_case() {
        let poi_action = PoiAction::new(Some("text/html"), Some("Web"), Some("http://example.com"));
        let json = serde_json::to_string(&poi_action).unwrap();
        assert!(json.contains("\"mimeType\":\"text/html\""));
    }

    #[test]
    fn test_document_len() {
        let mut doc = Document::new();
        assert!(doc.is_empty());
        doc.pois.push(Poi::default());
        assert_eq!(doc.len(), 1);
    }
}
