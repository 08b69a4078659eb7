//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use bloglist_core::domain::Blog;
use bloglist_core::error::RepoError;
use bloglist_core::ports::BlogRepository;

use super::entity::blog::{self, Entity as BlogEntity};
use super::postgres_base::{PostgresBaseRepository, repo_err};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let rows = BlogEntity::find()
            .order_by_asc(blog::Column::CreatedAt)
            .order_by_asc(blog::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        tracing::debug!(count = rows.len(), "Listed blogs");
        rows.into_iter().map(Blog::try_from).collect()
    }
}
