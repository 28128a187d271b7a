pub mod announcement_service;
pub mod document_service;
pub mod json_announcement_repository;
pub mod json_document_repository;
pub mod paths;
pub mod storage;

pub use crate::announcement_service::AnnouncementService;
pub use crate::document_service::DocumentService;
pub use crate::json_announcement_repository::JsonAnnouncementRepository;
pub use crate::json_document_repository::JsonDocumentRepository;
