//! 按票种汇总
//!
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::DomainResult;
use crate::policy::TicketPolicy;
use crate::ticket::{TicketType, TicketTypeRequest};

/// 一次购票中各票种的汇总数量
///
/// 数量为精确值（`u128`），业务规则比较的是真实的成人数与婴儿数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketTally {
    adults: u128,
    children: u128,
    infants: u128,
}

impl TicketTally {
    pub const fn new(adults: u128, children: u128, infants: u128) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// 按票种分组，组内数量相加
    ///
    /// 分组保证只会合并同一票种，`combine` 的不变式错误在此不会出现。
    pub fn from_requests<'a, I>(requests: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = &'a TicketTypeRequest>,
    {
        let mut grouped: BTreeMap<TicketType, TicketTypeRequest> = BTreeMap::new();
        for request in requests {
            let merged = match grouped.remove(&request.ticket_type()) {
                Some(existing) => existing.combine(*request)?,
                None => *request,
            };
            grouped.insert(merged.ticket_type(), merged);
        }

        let count_of = |ticket_type: TicketType| {
            grouped
                .get(&ticket_type)
                .map_or(0, TicketTypeRequest::count)
        };
        Ok(Self::new(
            count_of(TicketType::Adult),
            count_of(TicketType::Child),
            count_of(TicketType::Infant),
        ))
    }

    pub const fn count(&self, ticket_type: TicketType) -> u128 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    pub const fn adults(&self) -> u128 {
        self.adults
    }

    pub const fn children(&self) -> u128 {
        self.children
    }

    pub const fn infants(&self) -> u128 {
        self.infants
    }

    /// 全部票数（含婴儿）
    ///
    /// 只有在 `u128` 溢出时才饱和，此时总数早已超出任何购票上限。
    pub fn total(&self) -> u128 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// 需要预订的座位数（婴儿不占座）
    pub fn seat_count(&self) -> u128 {
        self.adults.saturating_add(self.children)
    }

    pub fn total_price(&self, policy: &TicketPolicy) -> u128 {
        [TicketType::Adult, TicketType::Child, TicketType::Infant]
            .into_iter()
            .map(|t| self.count(t).saturating_mul(u128::from(policy.price(t))))
            .fold(0, u128::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(ticket_type: TicketType, count: u64) -> TicketTypeRequest {
        TicketTypeRequest::new(ticket_type, count)
    }

    #[test]
    fn test_same_type_requests_are_summed() {
        let split =
            TicketTally::from_requests(&[req(TicketType::Adult, 2), req(TicketType::Adult, 3)])
                .unwrap();
        let single = TicketTally::from_requests(&[req(TicketType::Adult, 5)]).unwrap();
        assert_eq!(split, single);
        assert_eq!(split.adults(), 5);
    }

    #[test]
    fn test_missing_types_count_as_zero() {
        let tally = TicketTally::from_requests(&[req(TicketType::Child, 1)]).unwrap();
        assert_eq!(tally, TicketTally::new(0, 1, 0));
    }

    #[test]
    fn test_interleaved_types() {
        let tally = TicketTally::from_requests(&[
            req(TicketType::Infant, 1),
            req(TicketType::Adult, 2),
            req(TicketType::Infant, 1),
            req(TicketType::Child, 4),
            req(TicketType::Adult, 0),
        ])
        .unwrap();
        assert_eq!(tally, TicketTally::new(2, 4, 2));
        assert_eq!(tally.total(), 8);
        assert_eq!(tally.seat_count(), 6);
    }

    #[test]
    fn test_total_price_uses_infant_count_at_zero() {
        let tally = TicketTally::new(3, 3, 3);
        assert_eq!(tally.total_price(&TicketPolicy::default()), 90);
    }

    #[test]
    fn test_counts_beyond_u32_are_exact() {
        let max = u64::from(u32::MAX);
        let tally = TicketTally::from_requests(&[
            req(TicketType::Adult, max),
            req(TicketType::Infant, max),
            req(TicketType::Infant, 1),
        ])
        .unwrap();
        assert_eq!(tally.adults(), u128::from(max));
        assert_eq!(tally.infants(), u128::from(max) + 1);
        assert_eq!(tally.total(), 2 * u128::from(max) + 1);
    }

    #[test]
    fn test_totals_do_not_overflow() {
        let max = u128::from(u64::MAX);
        let tally = TicketTally::new(max, max, max);
        assert_eq!(tally.total(), 3 * max);
        assert_eq!(tally.total_price(&TicketPolicy::default()), 30 * max);
    }
}
