use bloglist_core::domain::Blog;
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository};
use std::sync::Arc;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::blog;
use crate::database::postgres_repo::PostgresBlogRepository;

fn model(title: &str, likes: i64) -> blog::Model {
    blog::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        author: Some("author".to_owned()),
        url: format!("http://localhost/{title}"),
        likes,
        created_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_blog_by_id() {
    let row = model("Test Blog", 3);
    let id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let result: Option<Blog> = repo.find_by_id(id).await.unwrap();

    let blog = result.unwrap();
    assert_eq!(blog.id, id);
    assert_eq!(blog.title, "Test Blog");
    assert_eq!(blog.likes, 3);
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let rows = vec![model("first", 0), model("second", 5)];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![rows])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let blogs = repo.find_all().await.unwrap();

    let titles: Vec<_> = blogs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["first", "second"]);
}

#[tokio::test]
async fn test_negative_likes_row_is_corrupt() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model("bad", -1)]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let err = repo.find_all().await.unwrap_err();
    assert!(matches!(err, RepoError::Corrupt(_)));
}

#[tokio::test]
async fn test_insert_returns_stored_blog() {
    let fresh = Blog::new(
        "title".to_owned(),
        None,
        "http://localhost/".to_owned(),
        0,
    );
    let stored = blog::Model {
        id: fresh.id,
        title: fresh.title.clone(),
        author: None,
        url: fresh.url.clone(),
        likes: 0,
        created_at: fresh.created_at.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let saved = repo.insert(fresh.clone()).await.unwrap();
    assert_eq!(saved.id, fresh.id);
    assert_eq!(saved.likes, 0);
}

#[tokio::test]
async fn test_delete_reports_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let id = uuid::Uuid::new_v4();

    BaseRepository::<Blog, _>::delete(&repo, id).await.unwrap();
    let second = BaseRepository::<Blog, _>::delete(&repo, id).await;
    assert!(matches!(second, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_repositories_share_one_connection() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("first", 1)], vec![model("second", 2)]])
            .into_connection(),
    );

    let a = PostgresBlogRepository::from_shared(Arc::clone(&db));
    let b = PostgresBlogRepository::from_shared(Arc::clone(&db));

    assert_eq!(a.find_all().await.unwrap()[0].title, "first");
    assert_eq!(b.find_all().await.unwrap()[0].title, "second");
    assert_eq!(Arc::strong_count(&db), 3);
}
