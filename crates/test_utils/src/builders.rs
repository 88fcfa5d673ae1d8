//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use rust_decimal::Decimal;

use core_kernel::{Currency, Money, UserId};
use domain_allocation::SplitPercentages;
use domain_goals::SavingsGoal;
use domain_wallet::{Recipient, WalletBalances};

use crate::fixtures::{MoneyFixtures, StringFixtures};

/// Builder for constructing test account data
pub struct TestAccountBuilder {
    full_name: String,
    email: String,
    upi_id: String,
    spendable_balance: Money,
    balances: WalletBalances,
    split: SplitPercentages,
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAccountBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            full_name: StringFixtures::full_name().to_string(),
            email: StringFixtures::email().to_string(),
            upi_id: StringFixtures::upi_id().to_string(),
            spendable_balance: MoneyFixtures::inr_opening_balance(),
            balances: WalletBalances::new(
                MoneyFixtures::inr_zero(),
                MoneyFixtures::inr_zero(),
                MoneyFixtures::inr_zero(),
            ),
            split: SplitPercentages::default(),
        }
    }

    /// Sets the display name
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the UPI handle
    pub fn with_upi_id(mut self, upi_id: impl Into<String>) -> Self {
        self.upi_id = upi_id.into();
        self
    }

    /// Sets the spendable balance
    pub fn with_spendable_balance(mut self, balance: Money) -> Self {
        self.spendable_balance = balance;
        self
    }

    /// Sets all three wallet balances at once
    pub fn with_wallets(mut self, donation: Decimal, investment: Decimal, savings: Decimal) -> Self {
        self.balances = WalletBalances::new(
            Money::new(donation, Currency::INR),
            Money::new(investment, Currency::INR),
            Money::new(savings, Currency::INR),
        );
        self
    }

    /// Sets the allocation split
    pub fn with_split(mut self, split: SplitPercentages) -> Self {
        self.split = split;
        self
    }

    /// Builds the test account data
    pub fn build(self) -> TestAccountData {
        TestAccountData {
            full_name: self.full_name,
            email: self.email,
            upi_id: self.upi_id,
            spendable_balance: self.spendable_balance,
            balances: self.balances,
            split: self.split,
        }
    }
}

/// Test account data structure
#[derive(Debug, Clone)]
pub struct TestAccountData {
    pub full_name: String,
    pub email: String,
    pub upi_id: String,
    pub spendable_balance: Money,
    pub balances: WalletBalances,
    pub split: SplitPercentages,
}

/// Builder for constructing test savings goals
pub struct TestGoalBuilder {
    user_id: UserId,
    title: String,
    target: Money,
    category: Option<String>,
    priority: Option<String>,
}

impl Default for TestGoalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGoalBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            user_id: UserId::new(),
            title: StringFixtures::goal_title().to_string(),
            target: MoneyFixtures::inr_goal_target(),
            category: None,
            priority: None,
        }
    }

    /// Sets the owning user
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the target amount
    pub fn with_target(mut self, target: Money) -> Self {
        self.target = target;
        self
    }

    /// Sets the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the priority label
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Builds the goal
    ///
    /// # Panics
    ///
    /// Panics if the configured title or target is invalid; test data
    /// should be valid by construction.
    pub fn build(self) -> SavingsGoal {
        let mut goal = SavingsGoal::new(self.user_id, self.title, self.target)
            .expect("test goal must be valid");
        if let Some(category) = self.category {
            goal = goal.with_category(category);
        }
        if let Some(priority) = self.priority {
            goal = goal.with_priority(priority);
        }
        goal
    }
}

/// Builder for payment recipients
pub struct TestRecipientBuilder {
    upi: Option<String>,
    phone: Option<String>,
    name: Option<String>,
}

impl Default for TestRecipientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRecipientBuilder {
    /// Creates a builder defaulting to a UPI recipient
    pub fn new() -> Self {
        Self {
            upi: Some("merchant@upi".to_string()),
            phone: None,
            name: None,
        }
    }

    /// Sets the UPI handle
    pub fn with_upi(mut self, upi: impl Into<String>) -> Self {
        self.upi = Some(upi.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds the recipient
    ///
    /// # Panics
    ///
    /// Panics if all three references were cleared; test data should be
    /// valid by construction.
    pub fn build(self) -> Recipient {
        Recipient::new(self.upi, self.phone, self.name).expect("test recipient must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_builder_defaults() {
        let account = TestAccountBuilder::new().build();
        assert_eq!(account.full_name, "Asha Rao");
        assert!(account.balances.donation.is_zero());
        assert_eq!(account.split, SplitPercentages::default());
    }

    #[test]
    fn test_account_builder_overrides() {
        let account = TestAccountBuilder::new()
            .with_wallets(dec!(500), dec!(600), dec!(200))
            .with_split(SplitPercentages::new(50, 30, 20).unwrap())
            .build();

        assert_eq!(account.balances.donation.amount(), dec!(500.00));
        assert_eq!(account.split.donation, 50);
    }

    #[test]
    fn test_goal_builder() {
        let goal = TestGoalBuilder::new()
            .with_title("Goa trip")
            .with_category("travel")
            .build();

        assert_eq!(goal.title, "Goa trip");
        assert_eq!(goal.category.as_deref(), Some("travel"));
        assert!(goal.current_amount.is_zero());
    }

    #[test]
    fn test_recipient_builder() {
        let recipient = TestRecipientBuilder::new().with_name("Alice").build();
        assert_eq!(recipient.label(), Some("Alice"));
    }
}
