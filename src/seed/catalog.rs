//! Built-in seed data: the three business templates and the test-data bundle.

use rust_decimal::Decimal;

use crate::entity::{AccountType, ItemType, NewAccount, NewItem, NewPartner};

const SEED_CURRENCY: &str = "SZL";
const TEST_ADDRESS: &str = "123 Test Street, Test City";

/// A named bundle of seed records that replaces the whole store when applied.
#[derive(Debug, Clone)]
pub struct Template {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub accounts: Vec<NewAccount>,
    pub customers: Vec<NewPartner>,
    pub vendors: Vec<NewPartner>,
    pub items: Vec<NewItem>,
}

/// Seed records used to top up a sparse store.
#[derive(Debug, Clone)]
pub struct TestDataSeed {
    pub accounts: Vec<NewAccount>,
    pub customers: Vec<NewPartner>,
    pub items: Vec<NewItem>,
}

pub const TEMPLATE_KEYS: [&str; 3] = ["retail", "manufacturing", "services"];

/// Look up a template by key, ignoring case and surrounding whitespace.
pub fn template(key: &str) -> Option<Template> {
    match key.trim().to_lowercase().as_str() {
        "retail" => Some(retail()),
        "manufacturing" => Some(manufacturing()),
        "services" => Some(services()),
        _ => None,
    }
}

pub fn templates() -> Vec<Template> {
    vec![retail(), manufacturing(), services()]
}

fn account(number: &str, name: &str, account_type: AccountType, category: &str) -> NewAccount {
    NewAccount {
        number: number.to_string(),
        name: name.to_string(),
        account_type: Some(account_type),
        category: category.to_string(),
        currency: SEED_CURRENCY.to_string(),
    }
}

fn partner(partner_id: &str, name: &str, contact: &str, email: &str, terms: &str) -> NewPartner {
    NewPartner {
        partner_id: partner_id.to_string(),
        name: name.to_string(),
        contact: contact.to_string(),
        email: email.to_string(),
        phone: String::new(),
        payment_terms: terms.to_string(),
        address: String::new(),
    }
}

fn item(
    item_no: &str,
    description: &str,
    item_type: ItemType,
    category: &str,
    unit_price: Decimal,
    uom: &str,
    reorder_point: u32,
    stock: u32,
) -> NewItem {
    NewItem {
        item_no: item_no.to_string(),
        description: description.to_string(),
        item_type,
        category: category.to_string(),
        unit_price,
        uom: uom.to_string(),
        reorder_point,
        stock,
    }
}

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn retail() -> Template {
    use AccountType::*;
    Template {
        key: "retail",
        name: "Retail Business",
        description: "Pre-configured setup for retail operations",
        accounts: vec![
            account("1000", "Cash", Asset, "Current Assets"),
            account("1100", "Accounts Receivable", Asset, "Current Assets"),
            account("1200", "Inventory", Asset, "Current Assets"),
            account("1500", "Equipment", Asset, "Fixed Assets"),
            account("2000", "Accounts Payable", Liability, "Current Liabilities"),
            account("3000", "Owner Equity", Equity, "Equity"),
            account("4000", "Sales Revenue", Revenue, "Operating Revenue"),
            account("5000", "Cost of Goods Sold", Expense, "Operating Expenses"),
            account("6000", "Rent Expense", Expense, "Operating Expenses"),
            account("6100", "Utilities Expense", Expense, "Operating Expenses"),
        ],
        customers: vec![
            partner("CUST001", "ABC Retailers", "John Smith", "sdingokunene@gmail.com", "Net 30"),
            partner("CUST002", "XYZ Store", "Sarah Jones", "Phiwokuuhle@xyz.com", "Net 30"),
        ],
        vendors: vec![],
        items: vec![
            item(
                "PROD001",
                "Widget A",
                ItemType::Inventory,
                "Electronics",
                price(2500),
                "PCS",
                10,
                50,
            ),
            item(
                "PROD002",
                "Widget B",
                ItemType::Inventory,
                "Electronics",
                price(4500),
                "PCS",
                5,
                30,
            ),
        ],
    }
}

fn manufacturing() -> Template {
    use AccountType::*;
    Template {
        key: "manufacturing",
        name: "Manufacturing Business",
        description: "Pre-configured setup for manufacturing operations",
        accounts: vec![
            account("1000", "Cash", Asset, "Current Assets"),
            account("1200", "Raw Materials", Asset, "Current Assets"),
            account("1210", "Work in Progress", Asset, "Current Assets"),
            account("1220", "Finished Goods", Asset, "Current Assets"),
            account("1500", "Machinery", Asset, "Fixed Assets"),
            account("2000", "Accounts Payable", Liability, "Current Liabilities"),
            account("3000", "Owner Equity", Equity, "Equity"),
            account("4000", "Sales Revenue", Revenue, "Operating Revenue"),
            account("5000", "Direct Labor", Expense, "Operating Expenses"),
            account("5100", "Manufacturing Overhead", Expense, "Operating Expenses"),
        ],
        customers: vec![partner(
            "CUST001",
            "Industrial Supply Co",
            "Mike Chen",
            "mike@industrial.com",
            "Net 60",
        )],
        vendors: vec![partner(
            "VEND001",
            "Raw Materials Supplier",
            "Lisa Wang",
            "lisa@supplier.com",
            "Net 30",
        )],
        items: vec![
            item(
                "RM001",
                "Steel Sheet",
                ItemType::Inventory,
                "Raw Materials",
                price(15000),
                "KG",
                100,
                500,
            ),
            item(
                "FG001",
                "Finished Product A",
                ItemType::Inventory,
                "Finished Goods",
                price(50000),
                "PCS",
                10,
                25,
            ),
        ],
    }
}

fn services() -> Template {
    use AccountType::*;
    Template {
        key: "services",
        name: "Service Business",
        description: "Pre-configured setup for service-based operations",
        accounts: vec![
            account("1000", "Cash", Asset, "Current Assets"),
            account("1100", "Accounts Receivable", Asset, "Current Assets"),
            account("1500", "Office Equipment", Asset, "Fixed Assets"),
            account("2000", "Accounts Payable", Liability, "Current Liabilities"),
            account("3000", "Owner Equity", Equity, "Equity"),
            account("4000", "Service Revenue", Revenue, "Operating Revenue"),
            account("5000", "Consulting Fees", Expense, "Operating Expenses"),
            account("6000", "Office Rent", Expense, "Operating Expenses"),
        ],
        customers: vec![
            partner(
                "CUST001",
                "Tech Startup Inc",
                "Emily Davis",
                "emily@techstartup.com",
                "Net 30",
            ),
            partner(
                "CUST002",
                "Global Consulting",
                "David Brown",
                "david@global.com",
                "Due on Receipt",
            ),
        ],
        vendors: vec![],
        items: vec![
            item(
                "SRV001",
                "Consulting Hour",
                ItemType::Service,
                "Services",
                price(15000),
                "HR",
                0,
                0,
            ),
            item(
                "SRV002",
                "Training Session",
                ItemType::Service,
                "Services",
                price(50000),
                "HR",
                0,
                0,
            ),
        ],
    }
}

fn test_customer(
    partner_id: &str,
    name: &str,
    contact: &str,
    email: &str,
    phone: &str,
    terms: &str,
) -> NewPartner {
    NewPartner {
        phone: phone.to_string(),
        address: TEST_ADDRESS.to_string(),
        ..partner(partner_id, name, contact, email, terms)
    }
}

pub fn test_data() -> TestDataSeed {
    use AccountType::*;
    TestDataSeed {
        accounts: vec![
            account("1010", "Petty Cash", Asset, "Current Assets"),
            account("1300", "Prepaid Expenses", Asset, "Current Assets"),
            account("2100", "Sales Tax Payable", Liability, "Current Liabilities"),
            account("4100", "Service Income", Revenue, "Operating Revenue"),
            account("6200", "Marketing Expense", Expense, "Operating Expenses"),
        ],
        customers: vec![
            test_customer(
                "TEST001",
                "Test Customer A",
                "Alice Johnson",
                "alice@testcust.com",
                "+1234567890",
                "Net 30",
            ),
            test_customer(
                "TEST002",
                "Test Customer B",
                "Bob Smith",
                "bob@testcust.com",
                "+1234567891",
                "Net 60",
            ),
            test_customer(
                "TEST003",
                "Test Customer C",
                "Carol White",
                "carol@testcust.com",
                "+1234567892",
                "Due on Receipt",
            ),
        ],
        items: vec![
            item(
                "TEST001",
                "Test Product A",
                ItemType::Inventory,
                "Electronics",
                price(9999),
                "PCS",
                10,
                50,
            ),
            item(
                "TEST002",
                "Test Product B",
                ItemType::Inventory,
                "Furniture",
                price(29999),
                "PCS",
                5,
                20,
            ),
            item(
                "TESTSRV01",
                "Test Service",
                ItemType::Service,
                "Services",
                price(15000),
                "HR",
                0,
                0,
            ),
        ],
    }
}
