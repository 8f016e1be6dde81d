use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::entity::{AccountType, Collection, ItemType};
use crate::export::ExportKind;

#[derive(Parser, Debug)]
#[command(name = "erpstage")]
#[command(version, about = "Stage ERP master data before a real rollout")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new erpstage project in the current directory
    Init,

    /// Add a new record
    Add(AddCommand),

    /// List records
    List {
        /// What to list (accounts, customers, vendors, items, issues). Omit for everything.
        #[arg(value_name = "COLLECTION")]
        collection: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a record by id or unique id prefix
    Delete {
        /// Collection holding the record (accounts, customers, vendors, items)
        collection: Collection,

        /// Record id or a unique prefix of it
        id: String,
    },

    /// Show record counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in templates
    Templates,

    /// Replace all data with a built-in template
    Apply {
        /// Template name (retail, manufacturing, services)
        template: String,

        /// Confirm replacing existing data
        #[arg(long)]
        yes: bool,
    },

    /// Top up sparse collections with test data
    Generate,

    /// Run all validation rules
    Validate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove all data
    Clear {
        /// Confirm removing all data
        #[arg(long)]
        yes: bool,
    },

    /// Export data (spreadsheet, docs, report, template)
    Export {
        /// Export kind
        kind: ExportKind,
    },
}

#[derive(Args, Debug)]
pub struct AddCommand {
    #[command(subcommand)]
    pub entity: AddEntity,
}

#[derive(Args, Debug)]
pub struct PartnerArgs {
    /// Partner ID, unique per customer or vendor list
    pub partner_id: String,

    /// Partner name
    pub name: String,

    /// Contact person
    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Payment terms (defaults to the configured terms)
    #[arg(long)]
    pub terms: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum AddEntity {
    /// Add a general ledger account
    Account {
        /// Account number, unique across the chart of accounts
        number: String,

        /// Account name
        name: String,

        /// Account type (asset, liability, equity, revenue, expense)
        #[arg(long = "type")]
        account_type: AccountType,

        #[arg(long)]
        category: Option<String>,

        /// Currency code (defaults to the configured currency)
        #[arg(long)]
        currency: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a customer
    Customer(PartnerArgs),

    /// Add a vendor
    Vendor(PartnerArgs),

    /// Add an item
    Item {
        /// Item number, unique across all items
        item_no: String,

        /// Item description
        description: String,

        /// Item type (inventory, service, non-inventory)
        #[arg(long = "type")]
        item_type: ItemType,

        #[arg(long)]
        category: Option<String>,

        /// Unit price
        #[arg(long)]
        price: Option<Decimal>,

        /// Unit of measure (defaults to the configured unit)
        #[arg(long)]
        uom: Option<String>,

        #[arg(long)]
        reorder_point: Option<u32>,

        #[arg(long)]
        stock: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
