mod support;

use dp_studio::application::commands::dp_configurations::{
    CreateDpConfigurationCommand, DpConfigurationCommandService,
};
use dp_studio::application::error::ApplicationError;
use dp_studio::application::queries::dp_configurations::{
    GetDpConfigurationBySlugQuery, ListDpConfigurationsQuery,
};
use dp_studio::domain::dp_configuration::{
    Radius,
    services::{MAX_CANDIDATE_LENGTH, SlugResolver},
};
use dp_studio::domain::errors::DomainError;
use std::sync::Arc;
use support::mocks::security::{admin_user, member_user, other_member_user};
use support::{
    DpConfigurationBuilder, FixedClock, InMemoryDpRepository, RacingWriteRepo,
    SequenceIdGenerator, TestContext, create_command, fixed_now,
};

#[tokio::test]
async fn create_applies_defaults() {
    let ctx = TestContext::new();

    let created = ctx
        .services
        .dp_commands
        .create_configuration(&member_user(), create_command())
        .await
        .unwrap();

    assert_eq!(created.slug, "k3x9m2q7ab");
    assert!(created.is_public);
    assert_eq!(created.radius, Radius::Pixels(0));
    assert_eq!(created.owner_id, 1);
    assert_eq!(created.created_at, fixed_now());
    assert_eq!(created.template_name, None);
}

#[tokio::test]
async fn create_uses_sanitized_custom_slug_and_suffixes() {
    let ctx = TestContext::with_repo(InMemoryDpRepository::with_slugs(["graduation-2024"]));
    let command = CreateDpConfigurationCommand::builder()
        .main_image_id("dp/main_photo")
        .logo_image_id("dp/logos/frame")
        .size(120, 120)
        .radius(Radius::Full)
        .template_name("  Graduation ")
        .custom_slug("Graduation 2024")
        .public(false)
        .build()
        .unwrap();

    let created = ctx
        .services
        .dp_commands
        .create_configuration(&member_user(), command)
        .await
        .unwrap();

    assert_eq!(created.slug, "graduation-2024-1");
    assert!(!created.is_public);
    assert_eq!(created.radius, Radius::Full);
    assert_eq!(created.template_name.as_deref(), Some("Graduation"));
    assert_eq!(ctx.ids.calls(), 0);
}

#[tokio::test]
async fn missing_logo_falls_back_to_default() {
    let ctx = TestContext::new();
    let mut command = create_command();
    command.logo_image_id = Some("   ".into());

    let created = ctx
        .services
        .dp_commands
        .create_configuration(&member_user(), command)
        .await
        .unwrap();

    assert_eq!(created.logo_image_id, support::DEFAULT_LOGO);
}

#[tokio::test]
async fn missing_logo_without_default_is_rejected() {
    let ctx = TestContext::build(
        Arc::new(InMemoryDpRepository::default()),
        Arc::new(SequenceIdGenerator::repeating("k3x9m2q7ab")),
        None,
    );
    let mut command = create_command();
    command.logo_image_id = None;

    let err = ctx
        .services
        .dp_commands
        .create_configuration(&member_user(), command)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(msg) if msg.contains("logoImageId")));
    assert_eq!(ctx.dp_repo.len(), 0);
}

#[tokio::test]
async fn invalid_fields_are_rejected_before_slug_resolution() {
    let ctx = TestContext::new();
    let mut command = create_command();
    command.width = 10;

    let err = ctx
        .services
        .dp_commands
        .create_configuration(&member_user(), command)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
    assert_eq!(ctx.dp_repo.lookups(), 0);
}

#[tokio::test]
async fn lost_insert_race_surfaces_duplicate_slug() {
    let read = Arc::new(InMemoryDpRepository::default());
    let ids = Arc::new(SequenceIdGenerator::new(Vec::<String>::new()));
    let service = DpConfigurationCommandService::new(
        Arc::new(RacingWriteRepo),
        Arc::new(SlugResolver::new(read, ids)),
        Arc::new(FixedClock),
        None,
    );
    let mut command = create_command();
    command.custom_slug = Some("Hot Name".into());

    let err = service
        .create_configuration(&member_user(), command)
        .await
        .unwrap_err();

    assert!(err.is_slug_collision());
    assert!(matches!(err, ApplicationError::Domain(DomainError::DuplicateSlug(slug)) if slug == "hot-name"));
}

#[tokio::test]
async fn private_configuration_visibility() {
    let ctx = TestContext::with_repo(InMemoryDpRepository::with_rows([
        DpConfigurationBuilder::new().slug("secret").owner(1).private().build(),
    ]));
    let query = || GetDpConfigurationBySlugQuery {
        slug: "secret".into(),
    };

    let anonymous = ctx.services.dp_queries.get_by_slug(None, query()).await;
    assert!(matches!(anonymous, Err(ApplicationError::NotFound(_))));

    let stranger = other_member_user();
    let other = ctx.services.dp_queries.get_by_slug(Some(&stranger), query()).await;
    assert!(matches!(other, Err(ApplicationError::NotFound(_))));

    let owner = member_user();
    assert!(ctx.services.dp_queries.get_by_slug(Some(&owner), query()).await.is_ok());

    let admin = admin_user();
    assert!(ctx.services.dp_queries.get_by_slug(Some(&admin), query()).await.is_ok());
}

#[tokio::test]
async fn listings_page_newest_first() {
    let rows = (1..=5).map(|i| {
        DpConfigurationBuilder::new()
            .id(i)
            .slug(format!("dp-{i}"))
            .minutes_ago(10 - i)
            .build()
    });
    let mut all: Vec<_> = rows.collect();
    all.push(
        DpConfigurationBuilder::new()
            .id(6)
            .slug("hidden")
            .owner(2)
            .private()
            .build(),
    );
    let ctx = TestContext::with_repo(InMemoryDpRepository::with_rows(all));

    let first = ctx
        .services
        .dp_queries
        .list_public(ListDpConfigurationsQuery {
            limit: 2,
            cursor: None,
        })
        .await
        .unwrap();
    let slugs: Vec<_> = first.items.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, ["dp-5", "dp-4"]);
    assert!(first.has_more);

    let mut seen = slugs.len();
    let mut cursor = first.next_cursor;
    while let Some(token) = cursor {
        let page = ctx
            .services
            .dp_queries
            .list_public(ListDpConfigurationsQuery {
                limit: 2,
                cursor: Some(token),
            })
            .await
            .unwrap();
        assert!(page.items.iter().all(|c| c.slug != "hidden"));
        seen += page.items.len();
        cursor = page.next_cursor;
    }
    assert_eq!(seen, 5);

    let mine = ctx
        .services
        .dp_queries
        .list_mine(
            &other_member_user(),
            ListDpConfigurationsQuery {
                limit: 0,
                cursor: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(mine.items.len(), 1);
    assert_eq!(mine.items[0].slug, "hidden");
}

#[tokio::test]
async fn malformed_cursor_is_a_validation_error() {
    let ctx = TestContext::new();
    let err = ctx
        .services
        .dp_queries
        .list_public(ListDpConfigurationsQuery {
            limit: 10,
            cursor: Some("%%%".into()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn oversized_custom_slug_is_a_validation_error() {
    let ctx = TestContext::new();
    let mut command = create_command();
    command.custom_slug = Some(format!("{} Campus", "x".repeat(MAX_CANDIDATE_LENGTH)));

    let err = ctx
        .services
        .dp_commands
        .create_configuration(&member_user(), command)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(msg) if msg.contains("customSlug")));
    assert_eq!(ctx.dp_repo.lookups(), 0);
    assert_eq!(ctx.dp_repo.len(), 0);
}
