//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared chrome (navigation, route protection, post
//! cards, pagination) while reading the session from Leptos context.

pub mod blog_card;
pub mod blog_form;
pub mod layout;
pub mod pager;
pub mod protected_route;
pub mod redirect;
