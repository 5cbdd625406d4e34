//! 票种与票种请求
//!
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{DomainError, DomainResult};

/// 票种
///
/// 线上名称为大写（`ADULT` / `CHILD` / `INFANT`），解析时忽略大小写。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// 婴儿坐在成人腿上，不占座
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }

    /// 形如 `[ADULT, CHILD, INFANT]` 的合法票种列表
    pub fn allowed_names() -> String {
        let names: Vec<&'static str> = Self::iter().map(Into::into).collect();
        format!("[{}]", names.join(", "))
    }
}

/// 已校验的票种请求（不可变）
///
/// 单条请求的数量为 `u64`，负数在进入领域层之前就已被拒绝。
/// 合并后的数量以 `u128` 精确保存，任意多条 `u64` 请求相加也不会丢失信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u128,
}

impl TicketTypeRequest {
    pub const fn new(ticket_type: TicketType, count: u64) -> Self {
        Self {
            ticket_type,
            count: count as u128,
        }
    }

    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub const fn count(&self) -> u128 {
        self.count
    }

    /// 合并同一票种的两个请求，数量精确相加
    ///
    /// 不同票种相加属于编程错误，返回 `DomainError::Invariant`；
    /// `u128` 溢出同样视为不变式被破坏。
    pub fn combine(self, other: Self) -> DomainResult<Self> {
        if self.ticket_type != other.ticket_type {
            return Err(DomainError::Invariant {
                reason: format!(
                    "Cannot add different type of tickets: {} + {}",
                    self.ticket_type, other.ticket_type
                ),
            });
        }
        let count = self
            .count
            .checked_add(other.count)
            .ok_or_else(|| DomainError::Invariant {
                reason: format!("{} ticket count overflow", self.ticket_type),
            })?;
        Ok(Self {
            ticket_type: self.ticket_type,
            count,
        })
    }
}
