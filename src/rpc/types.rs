// RPC types for JSON-RPC 2.0 protocol
use crate::types::{Account, AccountCreateRequest, AggregateStats, ErrorKind, ServiceError};
use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

// Standard JSON-RPC 2.0 codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// Server-defined range
pub const ACCOUNT_NOT_FOUND: i32 = -32004;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: serde_json::Value,
}

impl RpcResponse {
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn failure(id: serde_json::Value, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for RpcError {
    fn from(err: ServiceError) -> Self {
        let code = match err.kind {
            ErrorKind::NotFound => ACCOUNT_NOT_FOUND,
            ErrorKind::Internal => INTERNAL_ERROR,
        };
        RpcError::new(code, err.message)
    }
}

// Method-specific parameter types
#[derive(Deserialize, Debug)]
pub struct GetAccountByIdParams {
    pub id: String,
}

/// CreateAccount accepts the request fields directly or wrapped in `account`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum CreateAccountParams {
    Wrapped { account: AccountCreateRequest },
    Flat(AccountCreateRequest),
}

impl CreateAccountParams {
    pub fn into_request(self) -> AccountCreateRequest {
        match self {
            CreateAccountParams::Wrapped { account } => account,
            CreateAccountParams::Flat(request) => request,
        }
    }
}

// Method-specific result types
#[derive(Serialize, Deserialize, Debug)]
pub struct ListAccountsResult {
    pub accounts: Vec<Account>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AccountResult {
    pub account: Account,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TotalBalanceResult {
    pub stats: AggregateStats,
}
