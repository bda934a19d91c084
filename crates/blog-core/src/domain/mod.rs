//! Domain entities - the core business objects.

mod category;
mod post;

pub use category::Category;
pub use post::{Post, PostView};
