use cinema_domain::error::{DomainError, RejectionReason};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// 领域错误（含协作方失败）原样透出
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("config: {reason}")]
    Config { reason: String },
}

impl AppError {
    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Domain(err) => err.rejection_reason(),
            Self::Config { .. } => None,
        }
    }
}
