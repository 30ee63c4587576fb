//! Per-entity data access. Every operation is one auto-committing statement
//! against the shared pool; there are no multi-statement transactions.

pub mod accounts;
pub mod customers;
pub mod orders;
pub mod products;
