//! Protocol Module
//!
//! Defines the JSON wire contract between clients and the server.
//!
//! ## Requests
//! ```text
//! Save:    {"FileBody": "<base64>", "FileName": "a.txt"}
//! Delete:  {"FileName": "a.txt"}
//! Extract: {"FileName": "a.txt"}
//! ```
//!
//! ## Responses
//! ```text
//! Success:         {"Success": true,  "Message": ""}
//! Extract success: {"FileBody": "<base64>", "Success": true, "Message": ""}
//! Failure:         {"Success": false, "Message": "<reason>"}
//! ```
//!
//! File bodies travel as standard, padded base64 (see [`codec`]).

mod command;
mod response;
pub mod codec;

pub use command::{Command, CommandType, DeleteRequest, ExtractRequest, SaveRequest};
pub use response::OperationResult;
pub use codec::{decode, encode};
