//! # Employee Roster Records
//!
//! One record type for every employee, with the role carried as a tag.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Employee { id, name, phone, base_salary, role }                        │
//! │                                                                         │
//! │  role = Manager { bonus }         total = base + bonus                  │
//! │       | Cashier { transactions }  total = base + transactions × $0.50   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::EmployeeId;
use crate::validation::{validate_employee_name, validate_pay_amount, validate_phone};

/// Commission a cashier earns per completed sale.
pub const CASHIER_COMMISSION_PER_SALE: Money = Money::from_cents(50);

/// Role-specific payroll data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "position", rename_all = "snake_case")]
pub enum Role {
    Manager { bonus: Money },
    Cashier { transactions: u32 },
}

impl Role {
    /// Display name of the position, as written to the employee file.
    pub fn position(&self) -> &'static str {
        match self {
            Role::Manager { .. } => "Manager",
            Role::Cashier { .. } => "Cashier",
        }
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    phone: String,
    base_salary: Money,
    role: Role,
}

impl Employee {
    /// Creates a manager. Salary and bonus must not be negative.
    pub fn manager(
        id: EmployeeId,
        name: &str,
        phone: &str,
        base_salary: Money,
        bonus: Money,
    ) -> CoreResult<Self> {
        validate_pay_amount("bonus", bonus)?;
        Self::new(id, name, phone, base_salary, Role::Manager { bonus })
    }

    /// Creates a cashier with no completed sales.
    pub fn cashier(
        id: EmployeeId,
        name: &str,
        phone: &str,
        base_salary: Money,
    ) -> CoreResult<Self> {
        Self::new(id, name, phone, base_salary, Role::Cashier { transactions: 0 })
    }

    fn new(
        id: EmployeeId,
        name: &str,
        phone: &str,
        base_salary: Money,
        role: Role,
    ) -> CoreResult<Self> {
        validate_employee_name(name)?;
        validate_phone(phone)?;
        validate_pay_amount("salary", base_salary)?;

        Ok(Employee {
            id,
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            base_salary,
            role,
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn base_salary(&self) -> Money {
        self.base_salary
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn position(&self) -> &'static str {
        self.role.position()
    }

    /// Pay for the period: base salary plus the role-specific component.
    pub fn total_salary(&self) -> Money {
        match self.role {
            Role::Manager { bonus } => self.base_salary + bonus,
            Role::Cashier { transactions } => {
                self.base_salary + CASHIER_COMMISSION_PER_SALE * i64::from(transactions)
            }
        }
    }

    /// Credits one completed sale to a cashier.
    ///
    /// Returns `false` (and changes nothing) for any other role.
    pub fn record_transaction(&mut self) -> bool {
        match &mut self.role {
            Role::Cashier { transactions } => {
                *transactions = transactions.saturating_add(1);
                true
            }
            Role::Manager { .. } => false,
        }
    }

    /// Multi-line human readable summary.
    pub fn render_summary(&self) -> String {
        let mut out = format!(
            "ID: {}, Name: {}, Phone: {}\nPosition: {}, Salary: {}\n",
            self.id,
            self.name,
            self.phone,
            self.position(),
            self.base_salary
        );
        match self.role {
            Role::Manager { bonus } => out.push_str(&format!(
                "Bonus: {}, Total: {}",
                bonus,
                self.total_salary()
            )),
            Role::Cashier { transactions } => out.push_str(&format!(
                "Transactions: {}, Total Salary: {}",
                transactions,
                self.total_salary()
            )),
        }
        out
    }
}
