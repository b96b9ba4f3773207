use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use serde_test::{assert_tokens, Token};
use uuid::Uuid;

use slotbook_core::errors::SchedulingError;
use slotbook_core::models::appointment::{Appointment, AppointmentDraft};
use slotbook_core::models::collaborator::{Collaborator, CollaboratorDraft};
use slotbook_core::models::establishment::{
    BusinessLine, EstablishmentProfile, ThemePreference,
};

fn sample_draft() -> AppointmentDraft {
    AppointmentDraft {
        client_name: "Ana".to_string(),
        client_contact: "111".to_string(),
        date: "10/05/2024".to_string(),
        time: "09:00".to_string(),
        service: "Oil Change".to_string(),
        service_description: None,
        collaborator: "Bea".to_string(),
        favorite: false,
        done: false,
    }
}

#[test]
fn test_appointment_serialization() {
    let appointment = Appointment::from_draft(sample_draft());

    let json = to_string(&appointment).expect("Failed to serialize appointment");
    let deserialized: Appointment = from_str(&json).expect("Failed to deserialize appointment");

    assert_eq!(deserialized, appointment);
}

#[test]
fn test_appointment_flags_default_to_false() {
    // Records written before the favorite/done flags existed carry
    // neither field.
    let json = format!(
        r#"{{"id":"{}","client_name":"Ana","client_contact":"111","date":"10/05/2024","time":"09:00","service":"Oil Change","service_description":null,"collaborator":"Bea","created_at":"{}"}}"#,
        Uuid::new_v4(),
        Utc::now().to_rfc3339(),
    );

    let appointment: Appointment = from_str(&json).expect("Failed to deserialize appointment");
    assert!(!appointment.favorite);
    assert!(!appointment.done);
}

#[test]
fn test_from_draft_assigns_distinct_ids() {
    let a = Appointment::from_draft(sample_draft());
    let b = Appointment::from_draft(sample_draft());
    assert_ne!(a.id, b.id);
}

#[test]
fn test_apply_draft_preserves_identity() {
    let mut appointment = Appointment::from_draft(sample_draft());
    let id = appointment.id;
    let created_at = appointment.created_at;

    let mut draft = sample_draft();
    draft.client_name = "Ana Maria".to_string();
    draft.time = "10:30".to_string();
    appointment.apply_draft(draft);

    assert_eq!(appointment.id, id);
    assert_eq!(appointment.created_at, created_at);
    assert_eq!(appointment.client_name, "Ana Maria");
    assert_eq!(appointment.time, "10:30");
}

#[rstest]
#[case(AppointmentDraft { client_name: "".to_string(), ..sample_draft() })]
#[case(AppointmentDraft { client_contact: "  ".to_string(), ..sample_draft() })]
#[case(AppointmentDraft { date: "".to_string(), ..sample_draft() })]
#[case(AppointmentDraft { time: "".to_string(), ..sample_draft() })]
#[case(AppointmentDraft { collaborator: "".to_string(), ..sample_draft() })]
fn test_draft_validation_rejects_missing_required_field(#[case] draft: AppointmentDraft) {
    assert!(matches!(
        draft.validate(),
        Err(SchedulingError::Validation(_))
    ));
}

#[test]
fn test_draft_validation_accepts_complete_draft() {
    assert!(sample_draft().validate().is_ok());
}

#[test]
fn test_summary_includes_description_only_when_present() {
    let mut appointment = Appointment::from_draft(sample_draft());

    let without = appointment.summary();
    assert_eq!(
        without,
        "Client: Ana\nContact: 111\nDate: 10/05/2024\nTime: 09:00\nService: Oil Change\nCollaborator: Bea"
    );

    appointment.service_description = Some("Synthetic oil".to_string());
    let with = appointment.summary();
    assert!(with.contains("Description: Synthetic oil"));
    assert!(with.ends_with("Collaborator: Bea"));
}

#[test]
fn test_same_slot_ignores_collaborator() {
    let appointment = Appointment::from_draft(sample_draft());
    assert!(appointment.same_slot("10/05/2024", "09:00"));
    assert!(!appointment.same_slot("10/05/2024", "09:01"));
    // Exact string equality only.
    assert!(!appointment.same_slot("10/5/2024", "09:00"));
}

#[test]
fn test_collaborator_serialization() {
    let collaborator = Collaborator::from_draft(CollaboratorDraft {
        name: "Bea".to_string(),
        tax_id: Some("123".to_string()),
    });

    let json = to_string(&collaborator).expect("Failed to serialize collaborator");
    let deserialized: Collaborator = from_str(&json).expect("Failed to deserialize collaborator");

    assert_eq!(deserialized, collaborator);
}

#[test]
fn test_collaborator_draft_requires_name() {
    let draft = CollaboratorDraft {
        name: " ".to_string(),
        tax_id: None,
    };
    assert!(matches!(
        draft.validate(),
        Err(SchedulingError::Validation(_))
    ));
}

#[test]
fn test_business_line_serde_form() {
    assert_tokens(
        &BusinessLine::AutoShop,
        &[Token::UnitVariant {
            name: "BusinessLine",
            variant: "auto_shop",
        }],
    );
}

#[rstest]
#[case(BusinessLine::AutoShop, &["Oil Change", "Tire Change", "Inspection", "Balancing"])]
#[case(BusinessLine::Accounting, &["Bookkeeping", "Financial Consulting"])]
#[case(BusinessLine::Legal, &["Legal Consulting", "Legal Advisory"])]
#[case(BusinessLine::Beauty, &["Haircut", "Manicure", "Pedicure"])]
fn test_business_line_service_table(
    #[case] line: BusinessLine,
    #[case] expected: &[&'static str],
) {
    assert_eq!(line.services(), expected);
}

#[test]
fn test_business_line_round_trips_through_str() {
    for line in BusinessLine::ALL {
        let parsed: BusinessLine = line.as_str().parse().expect("Failed to parse line");
        assert_eq!(parsed, line);
    }
}

#[test]
fn test_unknown_business_line_is_rejected() {
    let result = "barbershop".parse::<BusinessLine>();
    assert!(matches!(result, Err(SchedulingError::Validation(_))));
}

#[test]
fn test_theme_preference_str_forms() {
    assert_eq!(ThemePreference::Light.as_str(), "light");
    assert_eq!(ThemePreference::Dark.as_str(), "dark");
    assert_eq!(
        "dark".parse::<ThemePreference>().expect("Failed to parse theme"),
        ThemePreference::Dark
    );
    assert!("solarized".parse::<ThemePreference>().is_err());
}

#[test]
fn test_profile_requires_name() {
    let profile = EstablishmentProfile {
        name: "".to_string(),
        tax_id: None,
        business_line: BusinessLine::Beauty,
        logo_ref: None,
    };
    assert!(matches!(
        profile.validate(),
        Err(SchedulingError::Validation(_))
    ));
}
