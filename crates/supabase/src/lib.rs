//! Supabase infrastructure for the dealer backend.
//!
//! Config lookup from the environment, the client handle, and the
//! edge-function backend.

pub mod client;
pub mod config;
pub mod edge_functions;

pub use client::{client, initialize, initialize_with, SupabaseClient, SupabaseError};
pub use config::{is_supabase_configured, SupabaseConfig};
pub use edge_functions::UnimplementedEdgeFunctions;
