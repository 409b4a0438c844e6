mod context;

pub mod browse;
pub mod cart_export;
pub mod facets;
pub mod locales;
pub mod recipes;
pub mod show;

pub use context::HandlerContext;
