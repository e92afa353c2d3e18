use base64::{engine::general_purpose, Engine as _};
use chrono::NaiveDate;
use qrcode::render::svg;
use qrcode::QrCode;
use serde::Serialize;

use crate::models::{EmergencyContact, HealthProfile};

/// Payload version embedded in share links so a scanner can detect format
/// changes.
const SHARE_PAYLOAD_VERSION: u8 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SharePayload {
    v: u8,
    full_name: String,
    date_of_birth: Option<NaiveDate>,
    blood_type: String,
    allergies: Vec<String>,
    conditions: Vec<String>,
    medications: Vec<String>,
    emergency_contact: Option<EmergencyContact>,
}

/// Builds the `deepcure://profile` deep link carrying the profile as a
/// base64 JSON payload. Equal profiles always produce the same link.
pub fn build_share_link(profile: &HealthProfile) -> Result<String, String> {
    let full_name = profile.full_name.trim();
    if full_name.is_empty() {
        return Err("Add your name to the profile before sharing".to_string());
    }

    let payload = SharePayload {
        v: SHARE_PAYLOAD_VERSION,
        full_name: full_name.to_string(),
        date_of_birth: profile.date_of_birth,
        blood_type: profile.blood_type.trim().to_string(),
        allergies: profile.allergies.clone(),
        conditions: profile.conditions.clone(),
        medications: profile.medications.clone(),
        emergency_contact: profile.emergency_contact.clone(),
    };

    let json = serde_json::to_string(&payload)
        .map_err(|e| format!("Failed to serialize profile: {}", e))?;
    let encoded = general_purpose::STANDARD.encode(json);

    Ok(format!(
        "deepcure://profile?v={}&d={}",
        SHARE_PAYLOAD_VERSION,
        urlencoding::encode(&encoded)
    ))
}

/// Renders a string as an SVG QR code, sized for a phone screen.
pub fn render_qr_svg(data: &str) -> Result<String, String> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| format!("Failed to build QR code: {}", e))?;

    let image = code
        .render()
        .min_dimensions(240, 240)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> HealthProfile {
        HealthProfile {
            full_name: "Avery Quinn".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 7, 21),
            blood_type: "O+".to_string(),
            allergies: vec!["penicillin".to_string()],
            conditions: vec!["asthma".to_string()],
            medications: vec!["albuterol".to_string()],
            emergency_contact: Some(EmergencyContact {
                name: "Jordan Quinn".to_string(),
                phone: "+1 555 0100".to_string(),
            }),
        }
    }

    #[test]
    fn share_link_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(
            build_share_link(&profile).unwrap(),
            build_share_link(&profile).unwrap()
        );
    }

    #[test]
    fn share_link_round_trips_through_its_payload() {
        let link = build_share_link(&sample_profile()).unwrap();
        assert!(link.starts_with("deepcure://profile?v=1&d="));

        let (_, data) = link.split_once("&d=").unwrap();
        let decoded = urlencoding::decode(data).unwrap();
        let json = general_purpose::STANDARD.decode(decoded.as_bytes()).unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&json).unwrap();

        assert_eq!(payload["v"], 1);
        assert_eq!(payload["fullName"], "Avery Quinn");
        assert_eq!(payload["bloodType"], "O+");
        assert_eq!(payload["emergencyContact"]["name"], "Jordan Quinn");
    }

    #[test]
    fn unnamed_profile_is_refused() {
        let profile = HealthProfile {
            full_name: "   ".to_string(),
            ..HealthProfile::default()
        };
        assert!(build_share_link(&profile).is_err());
    }

    #[test]
    fn qr_render_produces_svg_markup() {
        let link = build_share_link(&sample_profile()).unwrap();
        let image = render_qr_svg(&link).unwrap();
        assert!(image.contains("<svg"));
        assert!(image.contains("</svg>"));
    }
}
