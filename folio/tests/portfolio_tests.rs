use folio::config::ContactConfig;
use folio::error::FolioError;
use folio::models::{CategoryFilter, ContactSubmission, ProjectCategory, SkillCategory};
use folio::portfolio::{Catalog, ContactDesk};

#[test]
fn test_every_project_category_is_populated() {
    let all = Catalog.projects(CategoryFilter::All);
    let total: usize = ProjectCategory::ALL
        .iter()
        .map(|c| Catalog.projects(CategoryFilter::Only(*c)).len())
        .sum();

    assert_eq!(total, all.len());
    for category in ProjectCategory::ALL {
        assert!(!Catalog.projects(CategoryFilter::Only(category)).is_empty());
    }
}

#[test]
fn test_skill_filter_parsed_from_query_value() {
    let filter: CategoryFilter<SkillCategory> = "cloud".parse().expect("known category");
    let labels: Vec<&str> = Catalog.skills(filter).iter().map(|s| s.label).collect();

    assert_eq!(labels, vec!["AWS", "SageMaker", "Firebase"]);
}

#[test]
fn test_project_lookup_by_id() {
    let first = Catalog.projects(CategoryFilter::All)[0];
    assert_eq!(Catalog.project(first.id).map(|p| p.title), Some(first.title));
    assert!(Catalog.project("does-not-exist").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_contact_desk_acknowledges_valid_message() {
    let desk = ContactDesk::new(&ContactConfig { ack_delay_ms: 2000 });
    let submission = ContactSubmission {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        message: "Let's talk".to_string(),
    };

    let receipt = desk.submit(&submission).await.expect("accepted");
    assert_eq!(receipt.id.get_version_num(), 4);
}

#[tokio::test]
async fn test_contact_desk_rejects_empty_fields() {
    let desk = ContactDesk::new(&ContactConfig { ack_delay_ms: 0 });
    let submission = ContactSubmission {
        name: String::new(),
        email: "not-an-email".to_string(),
        message: String::new(),
    };

    match desk.submit(&submission).await {
        Err(FolioError::Validation(message)) => {
            assert_eq!(message, "Invalid fields: email, message, name");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
