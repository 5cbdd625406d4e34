//! 入站字段校验
//!
//! 依次校验账户、请求列表是否为空、逐条请求的票种与数量。
//! 逐条校验不会在第一条违规处短路，整批请求的违规一次性报告。
//!
use std::str::FromStr;

use cinema_domain::domain_service::TicketOrder;
use cinema_domain::error::{DomainResult, Rejection, RejectionReason, Violation};
use cinema_domain::ticket::{TicketType, TicketTypeRequest};
use cinema_domain::value_object::AccountId;

use crate::dto::TicketRequestDto;

pub fn validate_account(account_id: Option<i64>) -> DomainResult<AccountId> {
    AccountId::parse(account_id)
}

/// 校验单条请求，返回该条请求上的全部违规
pub fn validate_request(
    index: usize,
    dto: &TicketRequestDto,
) -> Result<TicketTypeRequest, Vec<Violation>> {
    let mut violations = Vec::new();

    let ticket_type = dto
        .ticket_type
        .as_deref()
        .and_then(|name| TicketType::from_str(name.trim()).ok());
    if ticket_type.is_none() {
        violations.push(
            Violation::from(RejectionReason::InvalidTicketType)
                .at(format!("requests[{index}].ticket_type")),
        );
    }

    if dto.count < 0 {
        violations.push(
            Violation::from(RejectionReason::NegativeCount).at(format!("requests[{index}].count")),
        );
    }

    match ticket_type {
        Some(ticket_type) if violations.is_empty() => Ok(TicketTypeRequest::new(
            ticket_type,
            dto.count.unsigned_abs(),
        )),
        _ => Err(violations),
    }
}

/// 校验请求列表：缺失或为空时报告 `EmptyRequest`，否则收集所有逐条违规
pub fn validate_requests(
    requests: Option<&[TicketRequestDto]>,
) -> DomainResult<Vec<TicketTypeRequest>> {
    let requests = match requests {
        Some(requests) if !requests.is_empty() => requests,
        _ => return Err(RejectionReason::EmptyRequest.into()),
    };

    let mut valid = Vec::with_capacity(requests.len());
    let mut violations = Vec::new();
    for (index, dto) in requests.iter().enumerate() {
        match validate_request(index, dto) {
            Ok(request) => valid.push(request),
            Err(found) => violations.extend(found),
        }
    }

    match Rejection::from_violations(violations) {
        Some(rejection) => Err(rejection.into()),
        None => Ok(valid),
    }
}

/// 完整的字段校验：账户优先，其次请求列表
pub fn validate_order(
    account_id: Option<i64>,
    requests: Option<&[TicketRequestDto]>,
) -> DomainResult<TicketOrder> {
    let account_id = validate_account(account_id)?;
    let requests = validate_requests(requests)?;
    TicketOrder::new(account_id, requests)
}
