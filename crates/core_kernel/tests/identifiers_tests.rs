//! Comprehensive unit tests for the Identifiers module
//!
//! Tests cover all identifier types, their creation, parsing,
//! conversion, and display formatting.

use core_kernel::{
    UserId, PaymentId, LedgerEntryId, TransactionId,
    CharityId, DonationId, InvestmentId, GoalId, ContributionId,
};
use uuid::Uuid;

mod user_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = UserId::new();
        let id2 = UserId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = UserId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = UserId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(UserId::prefix(), "USR");
    }

    #[test]
    fn test_display_format() {
        let id = UserId::new();
        let display = id.to_string();
        assert!(display.starts_with("USR-"));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = UserId::new();
        let string = original.to_string();
        let parsed: UserId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: UserId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_json_serialization() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_json_is_transparent_uuid() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}

mod payment_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = PaymentId::new();
        let id2 = PaymentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(PaymentId::prefix(), "PAY");
    }

    #[test]
    fn test_display_format() {
        let id = PaymentId::new();
        assert!(id.to_string().starts_with("PAY-"));
    }

    #[test]
    fn test_round_trip_parse() {
        let original = PaymentId::new();
        let parsed: PaymentId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}

mod ledger_entry_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(LedgerEntryId::prefix(), "TXN");
    }

    #[test]
    fn test_transaction_id_prefix_differs() {
        assert_eq!(TransactionId::prefix(), "TRF");
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id: LedgerEntryId = uuid.into();
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }
}

mod goal_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(GoalId::prefix(), "GOL");
    }

    #[test]
    fn test_contribution_id_prefix() {
        assert_eq!(ContributionId::prefix(), "CTB");
    }

    #[test]
    fn test_round_trip_parse() {
        let original = GoalId::new();
        let parsed: GoalId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}

mod catalog_id_tests {
    use super::*;

    #[test]
    fn test_charity_prefix() {
        assert_eq!(CharityId::prefix(), "CHR");
    }

    #[test]
    fn test_donation_prefix() {
        assert_eq!(DonationId::prefix(), "DON");
    }

    #[test]
    fn test_investment_prefix() {
        assert_eq!(InvestmentId::prefix(), "INV");
    }

    #[test]
    fn test_invalid_string_rejected() {
        let result: Result<CharityId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }
}
