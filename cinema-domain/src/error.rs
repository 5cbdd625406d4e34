//! 领域层统一错误定义
//!
//! 购票校验失败统一归入 `InvalidPurchase`，携带原因码与可读消息；
//! 外部协作方（座位预订、支付）的失败由其实现直接构造，核心逻辑原样向上传播。
//!
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

/// 购票被拒绝的原因码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidAccount,
    EmptyRequest,
    InvalidTicketType,
    NegativeCount,
    ChildWithoutAdult,
    TooManyInfants,
    NoAdults,
    TicketLimitExceeded,
}

impl RejectionReason {
    /// 原因码对应的默认提示信息
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidAccount => "Account id Invalid",
            Self::EmptyRequest => "Ticket request cannot be null or empty",
            Self::InvalidTicketType => "Invalid ticket type: must be one of [ADULT, CHILD, INFANT]",
            Self::NegativeCount => "Invalid number of tickets: cannot be less than 0",
            Self::ChildWithoutAdult => "Child tickets cannot be purchased without adult ticket",
            Self::TooManyInfants => "Number of adults less than infants",
            Self::NoAdults => "No adult tickets purchased",
            Self::TicketLimitExceeded => "Exceeded limit on number of tickets",
        }
    }
}

/// 单条违规：原因码 + 消息，可选地指向具体字段（如 `requests[2].count`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    reason: RejectionReason,
    message: String,
    field: Option<String>,
}

impl Violation {
    pub fn new(reason: RejectionReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            field: None,
        }
    }

    /// 标注违规所在字段
    pub fn at(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn reason(&self) -> RejectionReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl From<RejectionReason> for Violation {
    fn from(reason: RejectionReason) -> Self {
        Self::new(reason, reason.message())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// 一次购票的拒绝结果
///
/// 至少包含一条违规；字段级校验会把整批请求中的所有违规收集在一起，
/// 业务规则校验则只报告第一条不满足的规则。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    first: Violation,
    rest: Vec<Violation>,
}

impl Rejection {
    pub fn new(violation: Violation) -> Self {
        Self {
            first: violation,
            rest: Vec::new(),
        }
    }

    /// 由违规列表构造；列表为空时返回 `None`
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        let mut iter = violations.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// 首条违规的原因码
    pub fn reason(&self) -> RejectionReason {
        self.first.reason
    }

    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn has_reason(&self, reason: RejectionReason) -> bool {
        self.violations().any(|v| v.reason == reason)
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<RejectionReason> for Rejection {
    fn from(reason: RejectionReason) -> Self {
        Self::new(reason.into())
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 购票校验 ---
    #[error("invalid purchase: {0}")]
    InvalidPurchase(Rejection),

    // --- 内部不变式（编程错误，而非业务拒绝） ---
    #[error("invariant violated: {reason}")]
    Invariant { reason: String },

    // --- 外部协作方 ---
    #[error("seat reservation failed: {reason}")]
    SeatReservation { reason: String },
    #[error("payment failed: {reason}")]
    Payment { reason: String },

    // --- 通用 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

impl DomainError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::InvalidPurchase(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// 若为购票拒绝，返回首条原因码
    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        self.rejection().map(Rejection::reason)
    }
}

impl From<Rejection> for DomainError {
    fn from(rejection: Rejection) -> Self {
        Self::InvalidPurchase(rejection)
    }
}

impl From<RejectionReason> for DomainError {
    fn from(reason: RejectionReason) -> Self {
        Self::InvalidPurchase(reason.into())
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
