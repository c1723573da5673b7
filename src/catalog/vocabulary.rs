//! Fixed vocabularies
//!
//! Name pools and metadata value lists drawn from by the synthesizers.
//! Repeated entries weight the draw.

/// Business names per customer type, 15 each. Slugs are unique across all pools.
const RETAIL_NAMES: &[&str] = &[
    "Brightcart Goods", "Corner Market Co", "Urban Threads", "Daily Basket", "Maple Street Books",
    "Sunny Side Cafe", "Pixel Gadget Shop", "Green Leaf Grocers", "Harbor Home Goods",
    "Fresh Press Juicery", "Little Lantern Toys", "Northside Hardware", "Velvet Petal Florist",
    "Copper Kettle Bakery", "Trailhead Outfitters",
];

const BUSINESS_NAMES: &[&str] = &[
    "Innovation Labs", "Strategic Partners", "Blue Ridge Consulting", "Keystone Accounting",
    "Summit Design Studio", "Clearpath Logistics", "Bright Ledger Advisors", "Fieldstone Marketing",
    "Riverbend Legal", "Nimbus Software", "Oakline Staffing", "Granite Engineering",
    "Lighthouse Media", "Evergreen Dental", "Crescent Analytics",
];

const ENTERPRISE_NAMES: &[&str] = &[
    "Global Enterprises", "International Systems Corp", "Titan Manufacturing", "Atlas Freight Group",
    "Vanguard Energy", "Orion Telecom", "Pioneer Aerospace", "Sterling Pharmaceuticals",
    "Continental Foods", "Apex Data Centers", "Ironclad Security", "Polaris Shipping",
    "Redwood Timber Holdings", "Quantum Semiconductors", "Cobalt Mining Enterprises",
];

const CORPORATE_NAMES: &[&str] = &[
    "Corporate Holdings", "Strategic Corp", "Beacon Capital Corp", "Northwind Industries",
    "Silverline Corporate", "Highgate Holdings", "Cornerstone Group", "Pinecrest Corporation",
    "Westbrook Ventures", "Falcon Ridge Corp", "Bayview Holdings", "Ashford Industries",
    "Kingsbridge Group", "Stonegate Corporate", "Blackwater Partners Corp",
];

const COMMERCIAL_NAMES: &[&str] = &[
    "Commercial Solutions", "Harbor Commercial", "Metro Wholesale", "Prime Distribution",
    "Riverside Commercial Realty", "Central Supply Co", "Landmark Properties",
    "Gateway Fleet Services", "Union Commercial Printing", "Midtown Equipment Rental",
    "Crossroads Trade Center", "Portside Warehousing", "Citywide Janitorial",
    "Lakeshore Contractors", "Parkway Commercial Leasing",
];

const INSTITUTIONAL_NAMES: &[&str] = &[
    "Institutional Partners", "State Teachers Pension Fund", "Riverside University",
    "Mercy General Hospital", "County Water Authority", "Heritage Endowment",
    "Municipal Transit Board", "Community Credit Union", "Public Library Trust",
    "Veterans Memorial Foundation", "Regional School District", "Civic Arts Council",
    "Metropolitan Museum Trust", "Hillcrest College", "Harborview Medical Center",
];

/// Name pool for a customer type; unknown types use the business pool.
pub fn business_names(customer_type: &str) -> &'static [&'static str] {
    match customer_type {
        "retail" => RETAIL_NAMES,
        "enterprise" => ENTERPRISE_NAMES,
        "corporate" => CORPORATE_NAMES,
        "commercial" => COMMERCIAL_NAMES,
        "institutional" => INSTITUTIONAL_NAMES,
        _ => BUSINESS_NAMES,
    }
}

/// Address-safe business name for the `index`-th account of a customer type.
/// Wraps around the pool when `index` exceeds its length.
pub fn business_slug(customer_type: &str, index: usize) -> String {
    let names = business_names(customer_type);
    slugify(names[index % names.len()])
}

/// Lowercase and keep only `[a-z0-9]`.
pub fn slugify(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

// Account metadata
pub const ACCOUNT_STATUSES: &[&str] = &["active", "active", "active", "suspended", "pending"];
pub const KYC_STATUSES: &[&str] = &["verified", "pending", "verified", "verified"];
pub const RISK_LEVELS: &[&str] = &["low", "medium", "high", "low", "medium"];
pub const ACCOUNT_TYPES: &[&str] = &["checking", "savings", "business", "corporate"];
pub const TRANSACTION_FREQUENCIES: &[&str] = &["low", "medium", "high"];
pub const COMPLIANCE_STATUSES: &[&str] = &["compliant", "pending_review", "compliant", "compliant"];

/// Shared by account `business_industry` and transaction `business_category`.
pub const INDUSTRIES: &[&str] = &[
    "Technology", "Healthcare", "Finance", "Retail", "Manufacturing",
    "Education", "Real Estate", "Transportation", "Energy", "Entertainment",
];

// Transaction metadata
pub const TRANSACTION_TYPES: &[&str] = &["incoming", "outgoing", "transfer"];
pub const TRANSACTION_PURPOSES: &[&str] = &[
    "Payment for Services", "Product Purchase", "Subscription Payment", "Salary Payment",
    "Vendor Payment", "Client Payment", "Refund", "Investment Transfer", "Loan Payment",
    "Insurance Premium",
];
pub const FAILURE_REASONS: &[&str] = &[
    "insufficient_funds",
    "account_not_found",
    "routing_error",
    "account_closed",
    "fraud_alert",
];

// Rail-specific transaction metadata
pub const ACH_TYPES: &[&str] = &["credit", "debit"];
pub const ACH_ACCOUNT_TYPES: &[&str] = &["checking", "savings"];
pub const RTP_SETTLEMENT_TYPES: &[&str] = &["instant", "scheduled"];
pub const WIRE_TYPES: &[&str] = &["domestic", "international"];
pub const WIRE_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD"];
pub const FEDNOW_SERVICE_TYPES: &[&str] = &["credit", "debit", "request"];
