//! Field-type inference and value conversion between typed entities and
//! SharePoint list fields.

pub mod config;
pub mod mapper;
