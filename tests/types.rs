// ABOUTME: Integration tests for identifiers and validated domain types.
// ABOUTME: Tests ref and repository parsing, deployment states, and id handling.

use gh_deployment::types::*;
use proptest::prelude::*;

mod git_ref_tests {
    use super::*;

    #[test]
    fn branch_ref_yields_branch_name() {
        let git_ref = GitRef::parse("refs/heads/master").unwrap();
        assert_eq!(git_ref.short_name(), "master");
    }

    #[test]
    fn tag_ref_yields_tag_name() {
        let git_ref = GitRef::parse("refs/tags/v1.0.0").unwrap();
        assert_eq!(git_ref.short_name(), "v1.0.0");
    }

    #[test]
    fn short_ref_is_rejected() {
        assert_eq!(
            GitRef::parse("refs/x").unwrap_err(),
            GitRefError::SegmentCount(2)
        );
    }

    #[test]
    fn branch_with_slash_is_rejected() {
        assert_eq!(
            GitRef::parse("refs/heads/feature/login").unwrap_err(),
            GitRefError::SegmentCount(4)
        );
    }

    proptest! {
        #[test]
        fn wrong_segment_count_is_rejected(segments in prop::collection::vec("[a-z0-9.]{0,8}", 1..8usize)) {
            prop_assume!(segments.len() != 3);
            let input = segments.join("/");
            prop_assert_eq!(GitRef::parse(&input), Err(GitRefError::SegmentCount(segments.len())));
        }

        #[test]
        fn three_segments_yield_last(kind in "[a-z]{1,8}", name in "[a-zA-Z0-9._-]{1,16}") {
            let input = format!("refs/{kind}/{name}");
            let git_ref = GitRef::parse(&input).unwrap();
            prop_assert_eq!(git_ref.short_name(), name.as_str());
        }
    }
}

mod repository_tests {
    use super::*;

    #[test]
    fn owner_and_name_are_split() {
        let repo = Repository::parse("org/repo").unwrap();
        assert_eq!(repo.owner(), "org");
        assert_eq!(repo.name(), "repo");
        assert_eq!(repo.to_string(), "org/repo");
    }

    #[test]
    fn extra_segment_is_rejected() {
        assert_eq!(
            Repository::parse("org/repo/x").unwrap_err(),
            RepositoryError::SegmentCount(3)
        );
    }

    #[test]
    fn missing_owner_is_rejected() {
        assert_eq!(
            Repository::parse("repo").unwrap_err(),
            RepositoryError::SegmentCount(1)
        );
    }

    proptest! {
        #[test]
        fn wrong_segment_count_is_rejected(segments in prop::collection::vec("[a-z0-9-]{0,8}", 1..6usize)) {
            prop_assume!(segments.len() != 2);
            let input = segments.join("/");
            prop_assert!(Repository::parse(&input).is_err());
        }
    }
}

mod state_tests {
    use super::*;

    #[test]
    fn every_listed_state_is_valid() {
        for state in DeploymentState::ALL {
            assert!(is_state_valid(state.as_str()), "{state} should be valid");
        }
    }

    #[test]
    fn unknown_state_is_invalid() {
        assert!(!is_state_valid("not_supported_state"));
        assert!(!is_state_valid(""));
        assert!(!is_state_valid("SUCCESS"));
    }

    #[test]
    fn states_round_trip_through_strings() {
        assert_eq!(
            "in_progress".parse::<DeploymentState>().unwrap(),
            DeploymentState::InProgress
        );
        assert_eq!(DeploymentState::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn allowed_lists_states_in_order() {
        assert_eq!(
            DeploymentState::allowed(),
            "[error failure inactive in_progress queued pending success]"
        );
    }

    #[test]
    fn states_serialize_as_snake_case() {
        let json = serde_json::to_string(&DeploymentState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}

mod id_tests {
    use super::*;

    #[test]
    fn deployment_id_parses_from_string() {
        let id: DeploymentId = "123456789".parse().unwrap();
        assert_eq!(id.get(), 123456789);
        assert_eq!(id.to_string(), "123456789");
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!("abc".parse::<DeploymentId>().is_err());
        assert!("-1".parse::<DeploymentId>().is_err());
    }

    #[test]
    fn ids_deserialize_from_json_numbers() {
        let id: StatusId = serde_json::from_str("42").unwrap();
        assert_eq!(id, StatusId::new(42));
    }
}
