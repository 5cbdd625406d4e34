//! 票价与购票上限
//!
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ticket::TicketType;
use crate::value_object::ValueObject;

pub const DEFAULT_ADULT_PRICE: u32 = 20;
pub const DEFAULT_CHILD_PRICE: u32 = 10;
pub const DEFAULT_MAX_TICKETS: u32 = 20;

/// 购票策略
///
/// 成人与儿童票价、单次购票总张数上限均可配置；婴儿票恒为 0，不可配置。
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketPolicy {
    #[builder(default = DEFAULT_ADULT_PRICE)]
    adult_price: u32,
    #[builder(default = DEFAULT_CHILD_PRICE)]
    child_price: u32,
    #[builder(default = DEFAULT_MAX_TICKETS)]
    max_tickets: u32,
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            adult_price: DEFAULT_ADULT_PRICE,
            child_price: DEFAULT_CHILD_PRICE,
            max_tickets: DEFAULT_MAX_TICKETS,
        }
    }
}

impl TicketPolicy {
    pub const fn price(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => 0,
        }
    }

    pub const fn max_tickets(&self) -> u32 {
        self.max_tickets
    }

    /// 覆盖购票上限，返回新的策略
    pub fn with_max_tickets(mut self, max_tickets: u32) -> Self {
        self.max_tickets = max_tickets;
        self
    }
}

impl ValueObject for TicketPolicy {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.max_tickets == 0 {
            return Err(DomainError::InvalidValue {
                reason: "max_tickets must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_price_table() {
        let policy = TicketPolicy::default();
        assert_eq!(policy.price(TicketType::Adult), 20);
        assert_eq!(policy.price(TicketType::Child), 10);
        assert_eq!(policy.price(TicketType::Infant), 0);
        assert_eq!(policy.max_tickets(), 20);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(TicketPolicy::builder().build(), TicketPolicy::default());

        let policy = TicketPolicy::builder().adult_price(25).build();
        assert_eq!(policy.price(TicketType::Adult), 25);
        assert_eq!(policy.price(TicketType::Child), DEFAULT_CHILD_PRICE);
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        let policy = TicketPolicy::default().with_max_tickets(0);
        assert!(matches!(
            policy.validate(),
            Err(DomainError::InvalidValue { .. })
        ));
        assert!(TicketPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_falls_back_to_defaults() {
        let policy: TicketPolicy = serde_json::from_str(r#"{"max_tickets": 8}"#).unwrap();
        assert_eq!(policy.max_tickets(), 8);
        assert_eq!(policy.price(TicketType::Adult), DEFAULT_ADULT_PRICE);
    }
}
