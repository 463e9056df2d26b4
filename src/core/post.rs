use crate::core::{resolve, VideoReference};
use crate::utils::{slugify, split_tags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_TAGS_LEN: usize = 500;
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title is too long ({0} characters, max 200)")]
    TitleTooLong(usize),
    #[error("invalid video URL: {0}")]
    InvalidVideoUrl(String),
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("tags field is too long ({0} characters, max 500)")]
    TagsTooLong(usize),
    #[error("post must belong to a category")]
    MissingCategory,
    #[error("category name must not be empty")]
    EmptyCategoryName,
    #[error("category name is too long ({0} characters, max 100)")]
    CategoryNameTooLong(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        id: u64,
        name: &str,
        description: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self, PostError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PostError::EmptyCategoryName);
        }
        let len = name.chars().count();
        if len > MAX_CATEGORY_NAME_LEN {
            return Err(PostError::CategoryNameTooLong(len));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            slug: slugify(name),
            description: description.map(str::to_string).filter(|d| !d.is_empty()),
            created_at: now,
        })
    }
}

pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.name.cmp(&b.name));
}

/// The user-editable fields of a post, as submitted by a create or edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub video_url: String,
    pub description: String,
    /// Slug of the owning category.
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub published_date: DateTime<Utc>,
}

impl PostDraft {
    pub fn validate(&self) -> Result<(), PostError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PostError::EmptyTitle);
        }
        let title_len = title.chars().count();
        if title_len > MAX_TITLE_LEN {
            return Err(PostError::TitleTooLong(title_len));
        }

        validate_video_url(&self.video_url)?;

        if self.description.trim().is_empty() {
            return Err(PostError::EmptyDescription);
        }

        let tags_len = self.tags.chars().count();
        if tags_len > MAX_TAGS_LEN {
            return Err(PostError::TagsTooLong(tags_len));
        }

        if self.category.trim().is_empty() {
            return Err(PostError::MissingCategory);
        }

        Ok(())
    }
}

fn validate_video_url(video_url: &str) -> Result<(), PostError> {
    let parsed = Url::parse(video_url.trim())
        .map_err(|e| PostError::InvalidVideoUrl(format!("{}: {}", video_url, e)))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        scheme => Err(PostError::InvalidVideoUrl(format!(
            "{}: unsupported scheme {:?}",
            video_url, scheme
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishStatus {
    Scheduled,
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub video_url: String,
    pub description: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub category: String,
    pub tags: String,
    pub thumbnail: Option<String>,
    pub views_count: u64,
    pub created_at: DateTime<Utc>,
}

impl VlogPost {
    pub fn create(
        id: u64,
        draft: PostDraft,
        author: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, PostError> {
        draft.validate()?;

        let mut slug = slugify(&draft.title);
        if slug.is_empty() {
            slug = format!("vlog-{}", id);
        }

        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            slug,
            video_url: draft.video_url.trim().to_string(),
            description: draft.description,
            author: author.to_string(),
            published_date: draft.published_date,
            updated_date: now,
            category: draft.category,
            tags: draft.tags,
            thumbnail: draft.thumbnail,
            views_count: 0,
            created_at: now,
        })
    }

    /// Replaces the editable fields. The slug and view count are kept.
    pub fn apply_update(&mut self, draft: PostDraft, now: DateTime<Utc>) -> Result<(), PostError> {
        draft.validate()?;

        self.title = draft.title.trim().to_string();
        self.video_url = draft.video_url.trim().to_string();
        self.description = draft.description;
        self.category = draft.category;
        self.tags = draft.tags;
        self.thumbnail = draft.thumbnail;
        self.published_date = draft.published_date;
        self.updated_date = now;
        Ok(())
    }

    pub fn tags_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }

    pub fn increment_views(&mut self) {
        self.views_count = self.views_count.saturating_add(1);
    }

    pub fn status(&self, now: DateTime<Utc>) -> PublishStatus {
        if self.published_date > now {
            PublishStatus::Scheduled
        } else {
            PublishStatus::Published
        }
    }

    pub fn absolute_path(&self) -> String {
        format!("/vlog/{}/{}/", self.id, self.slug)
    }

    pub fn video_reference(&self) -> VideoReference {
        resolve::resolve(&self.video_url)
    }

    pub fn embed_url(&self) -> Option<String> {
        resolve::get_embed_url(&self.video_url)
    }

    /// Case-insensitive match against title, description and tags. The
    /// query is used as given, so surrounding whitespace must match too.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        [&self.title, &self.description, &self.tags]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn in_category(&self, category_slug: &str) -> bool {
        category_slug.is_empty() || self.category == category_slug
    }
}

fn newest_first(posts: &mut [&VlogPost]) {
    posts.sort_by(|a, b| b.published_date.cmp(&a.published_date));
}

/// Posts in the given category matching the search query, newest first.
/// `None` or empty filters match everything.
pub fn filter_posts<'a>(
    posts: &'a [VlogPost],
    category: Option<&str>,
    query: Option<&str>,
) -> Vec<&'a VlogPost> {
    let category = category.unwrap_or_default();
    let query = query.unwrap_or_default();

    let mut matched: Vec<&VlogPost> = posts
        .iter()
        .filter(|post| post.in_category(category) && post.matches_search(query))
        .collect();
    newest_first(&mut matched);
    matched
}

/// Up to `limit` other posts from the same category, newest first.
pub fn related_posts<'a>(posts: &'a [VlogPost], post: &VlogPost, limit: usize) -> Vec<&'a VlogPost> {
    let mut related: Vec<&VlogPost> = posts
        .iter()
        .filter(|other| other.category == post.category && other.id != post.id)
        .collect();
    newest_first(&mut related);
    related.truncate(limit);
    related
}

pub fn count_in_category(posts: &[VlogPost], category_slug: &str) -> usize {
    posts.iter().filter(|post| post.category == category_slug).count()
}
