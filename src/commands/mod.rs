//! Tool operations shared by the HTTP and MCP surfaces

pub mod health;
pub mod list;
pub mod paths;
pub mod read;
pub mod save;

pub use health::*;
pub use list::*;
pub use paths::*;
pub use read::*;
pub use save::*;
