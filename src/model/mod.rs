/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// HTTP request helper with bearer auth, redirect and error forwarding
pub mod http;
/// Request payloads
pub mod requests;
/// Response envelopes and field unwrapping
pub mod responses;
