mod create;
mod delete;
mod get;
mod update;

pub use create::CreateRecordUseCase;
pub use delete::DeleteRecordUseCase;
pub use get::GetRecordsUseCase;
pub use update::UpdateRecordUseCase;
