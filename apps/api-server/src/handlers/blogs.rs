//! Blog resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::{DomainError, RepoError};
use bloglist_core::domain::{Blog, BlogDraft};
use bloglist_core::ports::BaseRepository;
use bloglist_shared::dto::{BlogResponse, CreateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Public view of a blog: `id` as a string, no storage metadata.
fn to_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_string(),
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("malformatted id".to_string()))
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;
    let body: Vec<BlogResponse> = blogs.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let blog = BlogDraft {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    }
    .validate()?;

    let saved = state.blogs.insert(blog).await?;
    tracing::info!(blog_id = %saved.id, "Blog created");

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// GET /api/blogs/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Blog",
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(blog)))
}

/// DELETE /api/blogs/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.blogs.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => AppError::from(DomainError::NotFound {
            entity_type: "Blog",
            id,
        }),
        other => other.into(),
    })?;
    tracing::info!(blog_id = %id, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}
