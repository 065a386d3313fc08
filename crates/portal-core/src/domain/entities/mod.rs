//! Portal entities.

mod access_list;
mod checkpoint;
mod menu;
mod password_history;

pub use access_list::*;
pub use checkpoint::*;
pub use menu::*;
pub use password_history::*;
