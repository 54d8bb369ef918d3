//! Serde types mirroring the backend API payloads.
//!
//! Field names follow the server's camelCase JSON; Mongo-style `_id` fields
//! are aliased where the server uses them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server-authoritative user record.
///
/// `onboarding_complete` only ever comes from the server (verify, login,
/// register, or profile update responses); the client never infers it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Income>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_limits: Option<BTreeMap<Category, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Profile {
    /// Avatar initials, e.g. "JD" for John Doe.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Income block of the profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    #[serde(default)]
    pub monthly: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
}

/// Fixed transaction category taxonomy used across the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Shopping,
    Groceries,
    GasAndFuel,
    Subscriptions,
    HealthInsurance,
    CarInsurance,
    Bills,
    Food,
    Movies,
    Savings,
    Income,
    Transfer,
    #[default]
    Others,
}

impl Category {
    /// Categories a user can assign a budget to (everything except income
    /// and transfers).
    pub const BUDGETABLE: [Category; 11] = [
        Category::Shopping,
        Category::Groceries,
        Category::GasAndFuel,
        Category::Subscriptions,
        Category::HealthInsurance,
        Category::CarInsurance,
        Category::Bills,
        Category::Food,
        Category::Movies,
        Category::Savings,
        Category::Others,
    ];

    /// Wire name, as the backend expects it in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Shopping => "shopping",
            Category::Groceries => "groceries",
            Category::GasAndFuel => "gasAndFuel",
            Category::Subscriptions => "subscriptions",
            Category::HealthInsurance => "healthInsurance",
            Category::CarInsurance => "carInsurance",
            Category::Bills => "bills",
            Category::Food => "food",
            Category::Movies => "movies",
            Category::Savings => "savings",
            Category::Income => "income",
            Category::Transfer => "transfer",
            Category::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Shopping => "Shopping",
            Category::Groceries => "Groceries",
            Category::GasAndFuel => "Gas & Fuel",
            Category::Subscriptions => "Subscriptions",
            Category::HealthInsurance => "Health Insurance",
            Category::CarInsurance => "Car Insurance",
            Category::Bills => "Bills & Utilities",
            Category::Food => "Food & Dining",
            Category::Movies => "Movies & Entertainment",
            Category::Savings => "Savings & Investments",
            Category::Income => "Income",
            Category::Transfer => "Transfer",
            Category::Others => "Others",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Shopping => "🛍️",
            Category::Groceries => "🛒",
            Category::GasAndFuel => "⛽",
            Category::Subscriptions => "📺",
            Category::HealthInsurance => "⚕️",
            Category::CarInsurance => "🚗",
            Category::Bills => "🏠",
            Category::Food => "🍔",
            Category::Movies => "🎟️",
            Category::Savings => "🏦",
            Category::Income => "💰",
            Category::Transfer => "🔄",
            Category::Others => "📦",
        }
    }

    /// Chart color for the spending breakdown.
    pub fn color(self) -> &'static str {
        match self {
            Category::Shopping | Category::Movies => "#8b5cf6",
            Category::Groceries => "#22c55e",
            Category::GasAndFuel => "#f59e0b",
            Category::Subscriptions => "#ec4899",
            Category::HealthInsurance | Category::Income => "#10b981",
            Category::CarInsurance => "#3b82f6",
            Category::Bills => "#0ea5e9",
            Category::Food => "#f97316",
            Category::Savings => "#fbbf24",
            Category::Transfer => "#94a3b8",
            Category::Others => "#64748b",
        }
    }
}

/// Direction of a transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    #[default]
    Expense,
}

impl TxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

/// A single categorized transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: TxKind,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for creating or editing a transaction.
///
/// Expense amounts are sent negative, income positive — the server keys off
/// the sign as well as the `type` field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Paged transaction listing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total: u64,
}

/// Per-category spend total in the monthly summary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "_id", alias = "category")]
    pub category: Category,
    pub total: f64,
}

/// One month of the income/expense trend series.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
}

/// Monthly spending summary computed server-side.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub category_breakdown: Vec<CategoryTotal>,
    #[serde(default)]
    pub monthly_trend: Vec<TrendPoint>,
}

/// Kinds of AI-generated insight cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Positive,
    Warning,
    SavingTip,
    UnusualExpense,
    Investment,
    #[serde(other)]
    Other,
}

impl InsightKind {
    pub fn icon(self) -> &'static str {
        match self {
            InsightKind::Positive => "🏆",
            InsightKind::Warning => "⚠️",
            InsightKind::SavingTip => "🎯",
            InsightKind::UnusualExpense => "📈",
            InsightKind::Investment => "💹",
            InsightKind::Other => "💡",
        }
    }
}

/// One AI-generated insight card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

/// Financial health score block.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreData {
    #[serde(default)]
    pub financial_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending_health: Option<String>,
}

/// Full AI insight bundle for a month.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub score_data: Option<ScoreData>,
    #[serde(default)]
    pub investment_suggestions: Vec<String>,
}

/// Processing state of an uploaded statement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementStatus {
    #[default]
    Pending,
    Processing,
    Processed,
    Failed,
}

impl StatementStatus {
    pub fn label(self) -> &'static str {
        match self {
            StatementStatus::Pending => "Pending",
            StatementStatus::Processing => "Processing",
            StatementStatus::Processed => "Processed",
            StatementStatus::Failed => "Failed",
        }
    }
}

/// An uploaded bank statement and its processing state.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "originalName")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub status: StatementStatus,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub transaction_count: Option<u32>,
}

// Response envelopes.

/// `{token, user}` returned by login and register.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Profile,
}

/// `{user}` returned by verify and profile update.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserResponse {
    pub user: Profile,
}

/// `{transaction}` returned by transaction create/update.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

/// `{insight}` returned by the insights endpoints. `insight` is null until
/// the first statement has been analyzed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InsightResponse {
    #[serde(default)]
    pub insight: Option<InsightBundle>,
}

/// `{statements}` returned by the statements listing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatementsResponse {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// Optional field-level validation messages, keyed by field name.
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}
