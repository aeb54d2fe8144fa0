mod errors;
mod memory;
mod store;
mod types;

pub use errors::UserError;
pub use memory::MemoryUserStore;
pub use store::UserStore;
pub use types::User;
