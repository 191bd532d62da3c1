/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
/// Token endpoint payloads and the live access token
pub mod auth;
/// Query filters for list and search endpoints
pub mod filters;
/// Authenticated HTTP dispatch with rate limiting
pub mod http;
/// Paged list responses
pub mod pagination;
/// Request payloads for create calls
pub mod requests;
/// Batch and quote responses
pub mod responses;
