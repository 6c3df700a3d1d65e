//! Rust code generation modules.

pub mod binder;
pub mod handlers;
pub mod types;

pub use binder::BinderGenerator;
pub use handlers::HandlerGenerator;
pub use types::TypeGenerator;
