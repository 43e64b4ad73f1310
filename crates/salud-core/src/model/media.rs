use serde::{Deserialize, Serialize};

/// A pointer to an external asset. The corpus stores references only, never
/// embedded data; resolution against an asset store is a consumer concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub filename: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    Image,
    Diagram,
    Video,
    Animation,
    #[serde(rename = "3d-model")]
    ThreeDModel,
}

impl MediaType {
    pub const ALLOWED: &'static [&'static str] =
        &["image", "diagram", "video", "animation", "3d-model"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_ref_wire_values() {
        let media = MediaRef {
            id: "ent-emergencies-algorithm".into(),
            media_type: MediaType::Diagram,
            filename: "ent-airway-emergency-algorithm.svg".into(),
            title: "ENT Airway Emergency Algorithm".into(),
            description: Some("Decision tree for managing acute airway obstruction".into()),
        };
        let json = serde_json::to_value(&media).unwrap();
        assert_eq!(json["type"], "diagram");

        let model: MediaType = serde_json::from_value(serde_json::json!("3d-model")).unwrap();
        assert_eq!(model, MediaType::ThreeDModel);
    }
}
