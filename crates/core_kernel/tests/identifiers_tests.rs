//! Unit tests for submission identifiers
//!
//! Tests cover creation, parsing, conversion, and display formatting.

use core_kernel::SubmissionId;
use std::collections::HashSet;
use uuid::Uuid;

mod creation {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let ids: HashSet<SubmissionId> = (0..100).map(|_| SubmissionId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_new_uses_time_ordered_uuids() {
        let id = SubmissionId::new();
        assert_eq!(id.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn test_from_uuid_keeps_value() {
        let uuid = Uuid::now_v7();
        let id = SubmissionId::from(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_display_has_prefix() {
        let uuid = Uuid::nil();
        let id = SubmissionId::from(uuid);
        assert_eq!(id.to_string(), format!("SUB-{uuid}"));
        assert_eq!(SubmissionId::prefix(), "SUB");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid = Uuid::now_v7();
        let prefixed: SubmissionId = format!("SUB-{uuid}").parse().unwrap();
        let bare: SubmissionId = uuid.to_string().parse().unwrap();
        assert_eq!(prefixed, bare);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("SUB-not-a-uuid".parse::<SubmissionId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::now_v7();
        let json = serde_json::to_string(&SubmissionId::from(uuid)).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }
}
