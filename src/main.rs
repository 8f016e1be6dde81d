use clap::Parser;
use erpstage::cli::{
    handle_add_account, handle_add_item, handle_add_partner, handle_apply, handle_clear,
    handle_delete, handle_export, handle_generate, handle_init, handle_list, handle_stats,
    handle_templates, handle_validate, AddEntity, Cli, Commands,
};
use erpstage::entity::PartnerKind;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Add(add) => match add.entity {
            AddEntity::Account {
                number,
                name,
                account_type,
                category,
                currency,
                json,
            } => handle_add_account(number, name, account_type, category, currency, json),
            AddEntity::Customer(args) => handle_add_partner(PartnerKind::Customer, args),
            AddEntity::Vendor(args) => handle_add_partner(PartnerKind::Vendor, args),
            AddEntity::Item {
                item_no,
                description,
                item_type,
                category,
                price,
                uom,
                reorder_point,
                stock,
                json,
            } => handle_add_item(
                item_no,
                description,
                item_type,
                category,
                price,
                uom,
                reorder_point,
                stock,
                json,
            ),
        },
        Commands::List { collection, json } => handle_list(collection, json),
        Commands::Delete { collection, id } => handle_delete(collection, id),
        Commands::Stats { json } => handle_stats(json),
        Commands::Templates => handle_templates(),
        Commands::Apply { template, yes } => handle_apply(template, yes),
        Commands::Generate => handle_generate(),
        Commands::Validate { json } => handle_validate(json),
        Commands::Clear { yes } => handle_clear(yes),
        Commands::Export { kind } => handle_export(kind),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
