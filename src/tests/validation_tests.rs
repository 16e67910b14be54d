mod tests {
    use crate::{
        constants::NO_CONTACT_SELECTED,
        errors::ValidationError,
        form::{
            draft::{Mode, Snapshot, TeamDraft},
            validation::ValidationPipeline,
        },
        providers::{
            email::{EmailFormatChecker, RegexEmailChecker},
            oracle::{InMemoryUniquenessOracle, UniquenessOracle},
        },
        shapes::team::TeamEntry,
    };

    struct StubOracle(bool);

    impl UniquenessOracle for StubOracle {
        fn is_name_unique(&self, _: &str) -> bool {
            self.0
        }
    }

    fn valid_draft() -> TeamDraft {
        TeamDraft {
            name: "Eagles".to_string(),
            logo: Some("content://logos/eagles.png".to_string()),
            email: "a@b.com".to_string(),
            contact_number: "555-1234".to_string(),
            roster: vec!["Amy".to_string(), "Bo".to_string()],
        }
    }

    fn validate(draft: &TeamDraft, mode: Mode, snapshot: &Snapshot, unique: bool) -> Result<(), ValidationError> {
        let oracle = StubOracle(unique);
        let checker = RegexEmailChecker;
        ValidationPipeline::new(&oracle, &checker)
            .validate(draft, mode, snapshot)
            .map(|_| ())
    }

    fn empty_snapshot() -> Snapshot {
        Snapshot::of(&TeamDraft::empty())
    }

    #[test]
    fn empty_name_wins_over_later_violations() {
        let draft = TeamDraft {
            name: String::new(),
            logo: None,
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn taken_name_is_rejected_in_create_mode() {
        assert_eq!(
            validate(&valid_draft(), Mode::Create, &empty_snapshot(), false),
            Err(ValidationError::NameNotUnique)
        );
    }

    #[test]
    fn unchanged_name_skips_the_uniqueness_check_in_edit_mode() {
        let draft = valid_draft();
        let snapshot = Snapshot::of(&draft);
        assert_eq!(validate(&draft, Mode::Edit, &snapshot, false), Ok(()));
    }

    #[test]
    fn changed_name_is_checked_for_uniqueness_in_edit_mode() {
        let snapshot = Snapshot::of(&valid_draft());
        let draft = TeamDraft {
            name: "Hawks".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Edit, &snapshot, false),
            Err(ValidationError::NameNotUnique)
        );
    }

    #[test]
    fn lowercase_latin_name_must_be_capitalized() {
        let draft = TeamDraft {
            name: "alice".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::NameMustBeCapitalized)
        );
    }

    #[test]
    fn non_latin_name_skips_the_capitalization_rule() {
        let draft = TeamDraft {
            name: "李".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft, Mode::Create, &empty_snapshot(), true), Ok(()));
    }

    #[test]
    fn non_latin_name_still_hits_the_rules_after_capitalization() {
        let draft = TeamDraft {
            name: "李".to_string(),
            logo: None,
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::LogoRequired)
        );
    }

    #[test]
    fn sixteen_character_name_is_too_long() {
        let draft = TeamDraft {
            name: "ABCDEFGHIJKLMNOP".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::NameTooLong)
        );
    }

    #[test]
    fn fifteen_character_name_is_accepted() {
        let draft = TeamDraft {
            name: "ABCDEFGHIJKLMNO".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft, Mode::Create, &empty_snapshot(), true), Ok(()));
    }

    #[test]
    fn missing_logo_is_rejected() {
        let draft = TeamDraft {
            logo: None,
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::LogoRequired)
        );
    }

    #[test]
    fn empty_roster_is_rejected() {
        let draft = TeamDraft {
            roster: Vec::new(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::RosterEmpty)
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let draft = TeamDraft {
            email: "not-an-email".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn unset_contact_is_rejected_last() {
        let draft = TeamDraft {
            contact_number: NO_CONTACT_SELECTED.to_string(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, Mode::Create, &empty_snapshot(), true),
            Err(ValidationError::ContactRequired)
        );
    }

    #[test]
    fn valid_draft_yields_a_finalized_record() {
        let oracle = StubOracle(true);
        let checker = RegexEmailChecker;
        let team = ValidationPipeline::new(&oracle, &checker)
            .validate(&valid_draft(), Mode::Create, &empty_snapshot())
            .unwrap();
        assert_eq!(team.name, "Eagles");
        assert_eq!(team.logo, "content://logos/eagles.png");
        assert_eq!(team.email, "a@b.com");
        assert_eq!(team.contact_number, "555-1234");
        assert_eq!(team.players, vec!["Amy".to_string(), "Bo".to_string()]);
    }

    #[test]
    fn email_checker_accepts_common_addresses() {
        let checker = RegexEmailChecker;
        assert!(checker.is_valid_format("a@b.com"));
        assert!(checker.is_valid_format("user.name+tag@example.co.uk"));
        assert!(!checker.is_valid_format("a@b"));
        assert!(!checker.is_valid_format("no-at-sign.example.com"));
        assert!(!checker.is_valid_format(""));
    }

    #[test]
    fn oracle_over_loaded_teams() {
        let teams = vec![TeamEntry {
            name: "Eagles".to_string(),
            ..TeamEntry::default()
        }];
        let oracle = InMemoryUniquenessOracle::new(&teams);
        assert!(!oracle.is_name_unique("Eagles"));
        assert!(oracle.is_name_unique("Hawks"));
    }
}
