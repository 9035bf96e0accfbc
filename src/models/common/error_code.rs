/// 业务错误码
///
/// 前三位对齐 HTTP 状态码，后两位为业务细分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    ValidationError = 40001,

    Unauthorized = 40100,
    AuthFailed = 40101,
    TokenExpired = 40102,

    Forbidden = 40300,
    PermissionDenied = 40301,

    NotFound = 40400,
    UserNotFound = 40401,
    JobNotFound = 40402,
    TestNotFound = 40403,
    ApplicationNotFound = 40404,
    SubmissionNotFound = 40405,

    Conflict = 40900,
    UserAlreadyExists = 40901,
    AlreadyApplied = 40902,

    InvalidStatusTransition = 42200,
    UnresolvedAnswer = 42201,

    RateLimitExceeded = 42900,

    InternalServerError = 50000,
}
