mod command;
mod query;

pub use self::command::{ProductCommandRepositoryTrait, DynProductCommandRepository};
pub use self::query::{ProductQueryRepositoryTrait, DynProductQueryRepository};
