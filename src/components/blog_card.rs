//! Post summary card used by the home and my-blogs lists.

use leptos::prelude::*;

use crate::net::types::Blog;
use crate::util::format::{excerpt, format_date};

/// A post title, excerpt, and dates.
///
/// With `on_delete` set the card also offers Edit and Delete, for lists of
/// the viewer's own posts.
#[component]
pub fn BlogCard(
    blog: Blog,
    excerpt_chars: usize,
    #[prop(optional)] on_delete: Option<Callback<Blog>>,
) -> impl IntoView {
    let href = format!("/blog/{}", blog.id);
    let title = blog.title.clone();
    let summary = excerpt(&blog.content, excerpt_chars);
    let author = blog.author.clone();
    let created = format_date(&blog.created_at);
    let updated = blog.was_updated().then(|| format_date(&blog.updated_at));
    let actions = on_delete.map(|on_delete| {
        let edit_href = format!("/edit/{}", blog.id);
        view! {
            <div class="blog-card__actions">
                <a class="blog-card__edit" href=edit_href>"Edit"</a>
                <button class="blog-card__delete" on:click=move |_| on_delete.run(blog.clone())>
                    "Delete"
                </button>
            </div>
        }
    });

    view! {
        <article class="blog-card">
            <h3 class="blog-card__title">
                <a href=href>{title}</a>
            </h3>
            <p class="blog-card__excerpt">{summary}</p>
            <div class="blog-card__meta">
                {author.map(|name| view! { <span class="blog-card__author">{name}</span> })}
                <span class="blog-card__date">{created}</span>
                {updated.map(|date| view! { <span class="blog-card__updated">{format!("Updated {date}")}</span> })}
            </div>
            {actions}
        </article>
    }
}
