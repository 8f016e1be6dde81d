mod commands;
mod handlers;

pub use commands::{AddCommand, AddEntity, Cli, Commands, PartnerArgs};
pub use handlers::{
    handle_add_account, handle_add_item, handle_add_partner, handle_apply, handle_clear,
    handle_delete, handle_export, handle_generate, handle_init, handle_list, handle_stats,
    handle_templates, handle_validate,
};
