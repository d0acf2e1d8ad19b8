use crate::error::TasklistError;

pub type TasklistResult<T> = Result<T, TasklistError>;
