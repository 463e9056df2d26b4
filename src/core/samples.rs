use crate::core::post::sort_categories;
use crate::core::{Category, PostDraft, PostError, VlogPost};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SampleCatalog {
    pub categories: Vec<Category>,
    pub posts: Vec<VlogPost>,
}

const CATEGORIES: [(&str, &str); 4] = [
    ("Django Tutorials", "Learn Django web development"),
    ("Python Basics", "Python programming fundamentals"),
    ("Web Development", "Web development tips and tricks"),
    ("Technology News", "Latest tech news and updates"),
];

struct SamplePost {
    title: &'static str,
    description: &'static str,
    video_url: &'static str,
    category: &'static str,
    author: &'static str,
    tags: &'static str,
    days_ago: i64,
}

const POSTS: [SamplePost; 4] = [
    SamplePost {
        title: "Getting Started with Django",
        description: "Learn the basics of Django framework including models, views, and templates.",
        video_url: "https://www.youtube.com/watch?v=rHux0gMZ3Eg",
        category: "django-tutorials",
        author: "admin",
        tags: "django, python, tutorial, beginner",
        days_ago: 5,
    },
    SamplePost {
        title: "Python List Comprehensions Explained",
        description: "Master Python list comprehensions with practical examples and use cases.",
        video_url: "https://www.youtube.com/watch?v=DxCJBeF2MqE",
        category: "python-basics",
        author: "creator",
        tags: "python, list comprehension, tutorial",
        days_ago: 3,
    },
    SamplePost {
        title: "Responsive Web Design with Bootstrap",
        description: "Create beautiful responsive websites using Bootstrap CSS framework.",
        video_url: "https://www.youtube.com/watch?v=ZxoDjaCHiBo",
        category: "web-development",
        author: "admin",
        tags: "bootstrap, css, responsive, web design",
        days_ago: 2,
    },
    SamplePost {
        title: "Latest AI Technology Trends 2024",
        description: "Discover the latest trends in artificial intelligence and machine learning.",
        video_url: "https://www.youtube.com/watch?v=kCc8FmEb1nY",
        category: "technology-news",
        author: "creator",
        tags: "ai, machine learning, technology, news",
        days_ago: 1,
    },
];

/// Demo categories and posts, published relative to `now`.
pub fn sample_catalog(now: DateTime<Utc>) -> Result<SampleCatalog, PostError> {
    let mut categories = CATEGORIES
        .iter()
        .zip(1..)
        .map(|((name, description), id)| Category::new(id, name, Some(*description), now))
        .collect::<Result<Vec<_>, _>>()?;
    sort_categories(&mut categories);

    let posts = POSTS
        .iter()
        .zip(1..)
        .map(|(sample, id)| {
            let draft = PostDraft {
                title: sample.title.to_string(),
                video_url: sample.video_url.to_string(),
                description: sample.description.to_string(),
                category: sample.category.to_string(),
                tags: sample.tags.to_string(),
                thumbnail: None,
                published_date: now - Duration::days(sample.days_ago),
            };
            VlogPost::create(id, draft, sample.author, now)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SampleCatalog { categories, posts })
}
