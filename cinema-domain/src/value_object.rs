//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::fmt;

use serde::Serialize;

use crate::error::{DomainError, DomainResult, RejectionReason};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 购票账户标识
///
/// 只能通过校验构造，保证取值不小于 1。
///
/// # 示例
///
/// ```
/// use cinema_domain::value_object::AccountId;
///
/// let id = AccountId::new(7).unwrap();
/// assert_eq!(id.value(), 7);
///
/// assert!(AccountId::new(0).is_err());
/// assert!(AccountId::parse(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(value: i64) -> DomainResult<Self> {
        let id = Self(value);
        id.validate()?;
        Ok(id)
    }

    /// 从可能缺失的原始值解析；缺失与非法取值同样视为 `InvalidAccount`
    pub fn parse(value: Option<i64>) -> DomainResult<Self> {
        value
            .ok_or_else(|| RejectionReason::InvalidAccount.into())
            .and_then(Self::new)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl ValueObject for AccountId {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0 < 1 {
            return Err(RejectionReason::InvalidAccount.into());
        }
        Ok(())
    }
}

impl TryFrom<i64> for AccountId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.value()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // 测试合法账户
    #[test]
    fn test_account_id_valid() {
        let id = AccountId::new(1).unwrap();
        assert_eq!(id.value(), 1);
        assert_eq!(id.to_string(), "1");
        assert_eq!(i64::from(id), 1);
    }

    // 测试缺失账户
    #[test]
    fn test_account_id_absent() {
        let err = AccountId::parse(None).unwrap_err();
        assert_eq!(err.rejection_reason(), Some(RejectionReason::InvalidAccount));
        assert!(err.to_string().contains("Account id Invalid"));
    }

    // 测试 TryFrom
    #[test]
    fn test_account_id_try_from() {
        assert!(AccountId::try_from(42).is_ok());
        assert!(AccountId::try_from(0).is_err());
    }

    // 测试序列化为裸数字
    #[test]
    fn test_account_id_serde() {
        let id = AccountId::new(99).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "99");
    }

    proptest! {
        #[test]
        fn prop_non_positive_ids_are_rejected(raw in i64::MIN..1) {
            let err = AccountId::parse(Some(raw)).unwrap_err();
            prop_assert_eq!(err.rejection_reason(), Some(RejectionReason::InvalidAccount));
        }

        #[test]
        fn prop_positive_ids_are_accepted(raw in 1..=i64::MAX) {
            prop_assert_eq!(AccountId::parse(Some(raw)).unwrap().value(), raw);
        }
    }
}
