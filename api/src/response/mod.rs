use serde::Serialize;

/// Response envelope used by every endpoint:
///
/// ```json
/// { "success": true, "data": { ... }, "message": "..." }
/// ```
///
/// Errors carry `success: false` with `T::default()` as data, which is the
/// error-flag-plus-message body clients key off.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
