//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls with the payment gateway, media host and mailer
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Change Notifications**: Publishing user and course changes for the stats listener
//!
//! Writes spanning several tables are separate statements; there are no
//! multi-table transactions and no compensation after irreversible upstream calls.

pub mod auth;
pub mod contact;
pub mod course;
pub mod stats;
pub mod subscription;
pub mod user;

#[cfg(test)]
mod test;
