use std::env;
use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::entity::{
    Account, AccountDraft, AccountType, Collection, Item, ItemDraft, ItemType, Partner,
    PartnerDraft, PartnerKind,
};
use crate::error::{ErpStageError, Result};
use crate::export::{short_uuid, ExportKind};
use crate::seed::catalog;
use crate::storage::PROJECT_DIR;
use crate::validation::{format_issue, IssueCounts};
use crate::workspace::Workspace;

use super::commands::PartnerArgs;

/// Find the project root by looking for .erpstage/ or .git/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(PROJECT_DIR).exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_workspace() -> Result<Workspace> {
    Workspace::open(&find_project_root())
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;
    Workspace::init(&root)?;
    println!("Initialized erpstage project in {}", root.display());
    Ok(())
}

pub fn handle_add_account(
    number: String,
    name: String,
    account_type: AccountType,
    category: Option<String>,
    currency: Option<String>,
    json: bool,
) -> Result<()> {
    let mut ws = open_workspace()?;
    let account = ws.add_account(AccountDraft {
        number,
        name,
        account_type: Some(account_type),
        category,
        currency,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&account)?);
    } else {
        println!(
            "Created account ({}) {} - {}",
            short_uuid(&account.base.id),
            account.number,
            account.name
        );
    }
    Ok(())
}

pub fn handle_add_partner(kind: PartnerKind, args: PartnerArgs) -> Result<()> {
    let mut ws = open_workspace()?;
    let json = args.json;
    let partner = ws.add_partner(
        kind,
        PartnerDraft {
            partner_id: args.partner_id,
            name: args.name,
            contact: args.contact,
            email: args.email,
            phone: args.phone,
            payment_terms: args.terms,
            address: args.address,
        },
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&partner)?);
    } else {
        println!(
            "Created {} ({}) {} - {}",
            kind,
            short_uuid(&partner.base.id),
            partner.partner_id,
            partner.name
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_add_item(
    item_no: String,
    description: String,
    item_type: ItemType,
    category: Option<String>,
    price: Option<Decimal>,
    uom: Option<String>,
    reorder_point: Option<u32>,
    stock: Option<u32>,
    json: bool,
) -> Result<()> {
    let mut ws = open_workspace()?;
    let item = ws.add_item(ItemDraft {
        item_no,
        description,
        item_type: Some(item_type),
        category,
        unit_price: price,
        uom,
        reorder_point,
        stock,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!(
            "Created item ({}) {} - {} [{}]",
            short_uuid(&item.base.id),
            item.item_no,
            item.description,
            item.status
        );
    }
    Ok(())
}

fn print_accounts(accounts: &[Account]) {
    if accounts.is_empty() {
        println!("No accounts found.");
        return;
    }
    println!("Accounts:\n");
    for a in accounts {
        let type_str = a
            .account_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "  ({}) {} [{}|{}] {}",
            short_uuid(&a.base.id),
            a.number,
            type_str,
            a.currency,
            a.name
        );
    }
}

fn print_partners(kind: PartnerKind, partners: &[Partner]) {
    if partners.is_empty() {
        println!("No {}s found.", kind);
        return;
    }
    match kind {
        PartnerKind::Customer => println!("Customers:\n"),
        PartnerKind::Vendor => println!("Vendors:\n"),
    }
    for p in partners {
        let email = if p.has_email() { p.email.as_str() } else { "no email" };
        println!(
            "  ({}) {} [{}] {} <{}>",
            short_uuid(&p.base.id),
            p.partner_id,
            p.payment_terms,
            p.name,
            email
        );
    }
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }
    println!("Items:\n");
    for i in items {
        println!(
            "  ({}) {} [{}|{}] {} {} stock:{} reorder:{}",
            short_uuid(&i.base.id),
            i.item_no,
            i.item_type,
            i.status,
            i.description,
            i.unit_price,
            i.stock,
            i.reorder_point
        );
    }
}

pub fn handle_list(collection: Option<String>, json: bool) -> Result<()> {
    let ws = open_workspace()?;
    let store = ws.store();

    let Some(collection) = collection else {
        if json {
            println!("{}", serde_json::to_string_pretty(&store.export_state())?);
        } else {
            print_accounts(store.accounts());
            println!();
            print_partners(PartnerKind::Customer, store.customers());
            println!();
            print_partners(PartnerKind::Vendor, store.vendors());
            println!();
            print_items(store.items());
        }
        return Ok(());
    };

    match collection.to_lowercase().as_str() {
        "account" | "accounts" => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.accounts())?);
            } else {
                print_accounts(store.accounts());
            }
        }
        "customer" | "customers" => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.customers())?);
            } else {
                print_partners(PartnerKind::Customer, store.customers());
            }
        }
        "vendor" | "vendors" => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.vendors())?);
            } else {
                print_partners(PartnerKind::Vendor, store.vendors());
            }
        }
        "item" | "items" => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.items())?);
            } else {
                print_items(store.items());
            }
        }
        "issue" | "issues" => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.issues())?);
            } else if store.issues().is_empty() {
                println!("No validation issues recorded.");
            } else {
                for issue in store.issues() {
                    println!("  {}", format_issue(issue));
                }
            }
        }
        other => {
            eprintln!(
                "Unknown collection '{}'. Valid collections: {}",
                other, "accounts, customers, vendors, items, issues"
            );
        }
    }

    Ok(())
}

pub fn handle_delete(collection: Collection, id: String) -> Result<()> {
    let mut ws = open_workspace()?;

    match ws.delete(collection, &id)? {
        Some(deleted) => println!("Deleted {} ({})", collection.singular().to_lowercase(), deleted),
        None => eprintln!("Warning: {}", ErpStageError::RecordNotFound(id)),
    }
    Ok(())
}

pub fn handle_stats(json: bool) -> Result<()> {
    let ws = open_workspace()?;
    let stats = ws.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Accounts:  {}", stats.accounts);
        println!("Partners:  {}", stats.partners);
        println!("Items:     {}", stats.items);
        println!("Issues:    {}", stats.issues);
    }
    Ok(())
}

pub fn handle_templates() -> Result<()> {
    println!("Templates:\n");
    for t in catalog::templates() {
        println!("  {:<14} {}", t.key, t.name);
        println!("  {:<14} {}", "", t.description);
        println!(
            "  {:<14} {} accounts, {} customers, {} vendors, {} items",
            "",
            t.accounts.len(),
            t.customers.len(),
            t.vendors.len(),
            t.items.len()
        );
    }
    Ok(())
}

pub fn handle_apply(template: String, yes: bool) -> Result<()> {
    let mut ws = open_workspace()?;
    let applied = ws.apply_template(&template, yes)?;
    println!("{} template applied successfully!", applied.name);
    Ok(())
}

pub fn handle_generate() -> Result<()> {
    let mut ws = open_workspace()?;
    let outcome = ws.generate_test_data()?;

    if outcome.is_noop() {
        println!("Nothing to generate. Collections already have enough records.");
    } else {
        println!(
            "Generated {} test records ({} accounts, {} customers, {} items)",
            outcome.total(),
            outcome.accounts,
            outcome.customers,
            outcome.items
        );
    }
    Ok(())
}

pub fn handle_validate(json: bool) -> Result<()> {
    let mut ws = open_workspace()?;
    let issues = ws.validate_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    let counts = IssueCounts::of(&issues);
    if issues.is_empty() {
        println!("Validation complete. No issues found.");
    } else {
        println!("Validation complete. Found {} issues ({})\n", counts.total(), counts);
        for issue in &issues {
            println!("  {}", format_issue(issue));
        }
    }
    Ok(())
}

pub fn handle_clear(yes: bool) -> Result<()> {
    Workspace::clear_slot(&find_project_root(), yes)?;
    println!("All data cleared.");
    Ok(())
}

pub fn handle_export(kind: ExportKind) -> Result<()> {
    let ws = open_workspace()?;
    let outcome = ws.export(kind)?;

    println!("Exported {} to {}", outcome.kind, outcome.path.display());
    if outcome.files.len() > 1 {
        for file in &outcome.files {
            println!("  {}", file.relative_path);
        }
    }
    Ok(())
}
