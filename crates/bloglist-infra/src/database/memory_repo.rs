//! In-memory blog store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::Blog;
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository};

/// In-memory blog repository backed by a `Vec` behind an async RwLock.
///
/// Insertion order is store order. Data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::with_blogs(Vec::new())
    }

    /// Start with an existing set of blogs, kept in the given order.
    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            store: RwLock::new(blogs),
        }
    }

    /// Number of stored blogs.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|b| b.id == blog.id) {
            return Err(RepoError::Query(format!("duplicate blog id {}", blog.id)));
        }
        store.push(blog.clone());
        tracing::debug!(id = %blog.id, "Blog stored in memory");
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let pos = store
            .iter()
            .position(|b| b.id == id)
            .ok_or(RepoError::NotFound)?;
        store.remove(pos);
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.store.read().await.clone())
    }
}
