//! 影院购票领域层（cinema-domain）
//!
//! 提供购票校验与结算所需的领域构件：
//! - 值对象（`value_object`）：账户标识及校验抽象
//! - 票种与票种请求（`ticket`）、按票种汇总（`tally`）
//! - 规约（`specification`）与按固定顺序求值的业务规则（`rules`）
//! - 票价与上限策略（`policy`）
//! - 外部协作方端口（`ports`）：座位预订、支付
//! - 领域服务（`domain_service`）：汇总、校验并依次调用协作方
//!
//! 本 crate 不实现任何预订或支付基础设施，只定义其契约与最小必要的错误类型。
//!
//! 典型用法：
//! 1. 为 `SeatReservationService` / `TicketPaymentService` 提供具体实现；
//! 2. 以 `TicketPurchaseService::new` 注入两者；
//! 3. 构造 `TicketOrder` 并调用 `execute`。
//!
pub mod domain_service;
pub mod error;
pub mod policy;
pub mod ports;
pub mod rules;
pub mod specification;
pub mod tally;
pub mod ticket;
pub mod value_object;
