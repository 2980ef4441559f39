//! Domain models for VPA generation.
//!
//! This module contains the core types: phone tokens, handles, templates,
//! identifiers, history records, and API contracts.

pub mod dto;
pub mod handle;
pub mod identifier;
pub mod phone;
pub mod record;
pub mod template;

pub use dto::{
    AddHandleRequest, ApiResponse, BulkHandlesRequest, BulkHandlesResponse, CatalogResponse,
    CategoryResponse, GenerateRequest, HandleListResponse, HistoryQuery, HistoryResponse,
    PhoneInput, ResultsQuery, SessionResponse, TemplatePreviewRequest, ValidateRequest,
    ValidateResponse,
};
pub use handle::{CustomHandles, DEFAULT_HANDLES, HandleCategory, HandleSelection};
pub use identifier::{SortMode, handle_part, number_part, split_identifier};
pub use phone::{PhonePartition, is_valid_phone};
pub use record::{GenerationRecord, HistoryEntry, HistoryLog};
pub use template::{Template, TemplatePreview};
