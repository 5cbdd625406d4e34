//! 规约（Specification）
//!
//! 购票业务规则以规约表达：每条规则只回答“候选对象是否满足”，
//! 规则之间可通过 OR / NOT 组合。
//!
use crate::tally::TicketTally;

/// 规约模式的核心 trait
pub trait Specification<T> {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 OR 组合
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        OrSpecification::new(Box::new(self), Box::new(other))
    }

    /// 对规约进行 NOT 操作
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification::new(Box::new(self))
    }
}

impl<T> Specification<T> for Box<dyn Specification<T>> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.as_ref().is_satisfied_by(candidate)
    }
}

/// OR 组合规约
pub struct OrSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> OrSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for OrSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

/// NOT 规约
pub struct NotSpecification<T> {
    inner: Box<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    pub fn new(inner: Box<dyn Specification<T>>) -> Self {
        Self { inner }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

// -------- 购票汇总上的基础规约 --------

/// 至少一张成人票
pub struct HasAdults;

impl Specification<TicketTally> for HasAdults {
    fn is_satisfied_by(&self, tally: &TicketTally) -> bool {
        tally.adults() > 0
    }
}

/// 至少一张儿童票
pub struct HasChildren;

impl Specification<TicketTally> for HasChildren {
    fn is_satisfied_by(&self, tally: &TicketTally) -> bool {
        tally.children() > 0
    }
}

/// 婴儿数不超过成人数（每个婴儿需要一位成人的腿）
pub struct InfantsWithinLaps;

impl Specification<TicketTally> for InfantsWithinLaps {
    fn is_satisfied_by(&self, tally: &TicketTally) -> bool {
        tally.infants() <= tally.adults()
    }
}

/// 总票数不超过上限
pub struct WithinTicketLimit {
    max_tickets: u32,
}

impl WithinTicketLimit {
    pub const fn new(max_tickets: u32) -> Self {
        Self { max_tickets }
    }
}

impl Specification<TicketTally> for WithinTicketLimit {
    fn is_satisfied_by(&self, tally: &TicketTally) -> bool {
        tally.total() <= u128::from(self.max_tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysTrueSpec;
    impl Specification<i32> for AlwaysTrueSpec {
        fn is_satisfied_by(&self, _: &i32) -> bool {
            true
        }
    }

    struct AlwaysFalseSpec;
    impl Specification<i32> for AlwaysFalseSpec {
        fn is_satisfied_by(&self, _: &i32) -> bool {
            false
        }
    }

    #[test]
    fn test_or_specification() {
        assert!(AlwaysTrueSpec.or(AlwaysFalseSpec).is_satisfied_by(&42));
        assert!(!AlwaysFalseSpec.or(AlwaysFalseSpec).is_satisfied_by(&42));
    }

    #[test]
    fn test_not_specification() {
        assert!(!AlwaysTrueSpec.not().is_satisfied_by(&42));
        assert!(AlwaysFalseSpec.not().is_satisfied_by(&42));
    }

    #[test]
    fn test_children_need_adults() {
        let accompanied = HasChildren.not().or(HasAdults);
        assert!(accompanied.is_satisfied_by(&TicketTally::new(0, 0, 0)));
        assert!(accompanied.is_satisfied_by(&TicketTally::new(1, 4, 0)));
        assert!(!accompanied.is_satisfied_by(&TicketTally::new(0, 2, 0)));
    }

    #[test]
    fn test_infants_within_laps() {
        assert!(InfantsWithinLaps.is_satisfied_by(&TicketTally::new(2, 0, 2)));
        assert!(!InfantsWithinLaps.is_satisfied_by(&TicketTally::new(2, 0, 3)));
    }

    #[test]
    fn test_ticket_limit_counts_infants() {
        let limit = WithinTicketLimit::new(20);
        assert!(limit.is_satisfied_by(&TicketTally::new(10, 5, 5)));
        assert!(!limit.is_satisfied_by(&TicketTally::new(15, 2, 5)));
        assert!(!limit.is_satisfied_by(&TicketTally::new(u128::MAX, 1, 0)));
    }
}
