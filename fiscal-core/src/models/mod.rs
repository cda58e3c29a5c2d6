mod de;
mod declaration;
mod expense;
mod income;
mod period;
mod tax_type;
mod user;

pub use declaration::{Declaration, DeclarationStatus, NewDeclaration};
pub use expense::{Expense, ExpenseCategory, NewExpense};
pub use income::{Income, NewIncome, ValidationError};
pub use period::{Period, PeriodError};
pub use tax_type::{NewTaxType, TaxType, rate_for};
pub use user::{DocumentType, NewUser, User, UserRole};
