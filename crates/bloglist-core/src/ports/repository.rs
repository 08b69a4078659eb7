use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Blog;
use crate::error::RepoError;

/// Generic repository trait defining the CRUD operations a store offers.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a freshly created entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns [`RepoError::NotFound`] when nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// All blogs in store order (oldest first).
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError>;
}
