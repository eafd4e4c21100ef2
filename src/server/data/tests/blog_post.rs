use crate::server::data::blog::post::BlogPostRepository;

use super::*;

/// Expect newest posts first with the total page count
#[tokio::test]
async fn gets_first_page_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_blog_post("Oldest", published(1))
        .with_blog_post("Newest", published(3))
        .with_blog_post("Middle", published(2))
        .build()
        .await?;

    let (posts, total_pages) = BlogPostRepository::new(&test.db).get_page(0, 2).await?;

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle"]);
    assert_eq!(total_pages, 2);

    Ok(())
}

/// Expect an empty page past the end
#[tokio::test]
async fn gets_empty_page_past_the_end() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_blog_post("Only", published(1))
        .build()
        .await?;

    let (posts, total_pages) = BlogPostRepository::new(&test.db).get_page(4, 5).await?;

    assert!(posts.is_empty());
    assert_eq!(total_pages, 1);

    Ok(())
}

/// Expect an empty page instead of an offset overflow for the largest page index
#[tokio::test]
async fn gets_empty_page_for_largest_page_index() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_blog_post("Only", published(1))
        .build()
        .await?;

    let (posts, total_pages) = BlogPostRepository::new(&test.db)
        .get_page(u64::MAX - 1, 5)
        .await?;

    assert!(posts.is_empty());
    assert_eq!(total_pages, 1);

    Ok(())
}

/// Expect the created post to be found by ID
#[tokio::test]
async fn creates_and_gets_post() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let repo = BlogPostRepository::new(&test.db);
    let created = repo
        .create("Hello world", "Welcome", "First post", published(10))
        .await?;

    let found = repo.get_by_id(created.id).await?;

    assert_eq!(found.map(|p| p.title), Some("Hello world".to_string()));

    Ok(())
}
