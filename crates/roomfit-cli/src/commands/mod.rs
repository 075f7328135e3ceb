//! Command implementations shared by the shell and the one-shot subcommands.

pub mod add;
pub mod archive;
pub mod fit;
pub mod list;
pub mod save;

pub use self::add::execute_add;
pub use self::archive::execute_archive;
pub use self::fit::execute_fit;
pub use self::list::{execute_list, execute_list_archived};
pub use self::save::{execute_save, goodbye_message, save_or_fail};
