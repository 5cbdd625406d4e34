//! 跨票种业务规则
//!
//! 规则按固定顺序求值，第一条不满足的规则决定拒绝原因：
//! 1. 有儿童票时必须有成人票（`ChildWithoutAdult`）
//! 2. 婴儿数不超过成人数（`TooManyInfants`）
//! 3. 至少一张成人票（`NoAdults`）
//! 4. 总票数不超过上限（`TicketLimitExceeded`）
//!
use crate::error::{DomainResult, RejectionReason};
use crate::policy::TicketPolicy;
use crate::specification::{
    HasAdults, HasChildren, InfantsWithinLaps, Specification, WithinTicketLimit,
};
use crate::tally::TicketTally;

/// 一条购票规则：不满足规约时以 `reason` 拒绝
pub struct PurchaseRule {
    reason: RejectionReason,
    spec: Box<dyn Specification<TicketTally>>,
}

impl PurchaseRule {
    pub fn new<S>(reason: RejectionReason, spec: S) -> Self
    where
        S: Specification<TicketTally> + 'static,
    {
        Self {
            reason,
            spec: Box::new(spec),
        }
    }

    pub fn reason(&self) -> RejectionReason {
        self.reason
    }

    pub fn is_satisfied_by(&self, tally: &TicketTally) -> bool {
        self.spec.is_satisfied_by(tally)
    }
}

/// 按求值顺序排列的规则集
pub fn purchase_rules(policy: &TicketPolicy) -> Vec<PurchaseRule> {
    vec![
        PurchaseRule::new(
            RejectionReason::ChildWithoutAdult,
            HasChildren.not().or(HasAdults),
        ),
        PurchaseRule::new(RejectionReason::TooManyInfants, InfantsWithinLaps),
        PurchaseRule::new(RejectionReason::NoAdults, HasAdults),
        PurchaseRule::new(
            RejectionReason::TicketLimitExceeded,
            WithinTicketLimit::new(policy.max_tickets()),
        ),
    ]
}

/// 依序检查全部规则，返回第一条违规
pub fn check_purchase_rules(tally: &TicketTally, policy: &TicketPolicy) -> DomainResult<()> {
    match purchase_rules(policy)
        .into_iter()
        .find(|rule| !rule.is_satisfied_by(tally))
    {
        Some(rule) => Err(rule.reason().into()),
        None => Ok(()),
    }
}
