use super::types::*;
use crate::core::{AccountService, Operation};
use axum::{body::Bytes, extract::State, Json};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// HTTP entry point: parses the JSON-RPC envelope and dispatches it.
pub async fn handle_rpc_request(
    State(service): State<AccountService>,
    body: Bytes,
) -> Json<RpcResponse> {
    Json(handle_body(&service, &body))
}

/// Decode a raw body and dispatch it.
///
/// Only a body that is not JSON at all is a parse error; valid JSON that is
/// not a request object is an invalid request, answered with its `id` if any.
pub fn handle_body(service: &AccountService, body: &[u8]) -> RpcResponse {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Unparseable RPC body: {}", e);
            return RpcResponse::failure(
                serde_json::Value::Null,
                RpcError::new(PARSE_ERROR, format!("Parse error: {}", e)),
            );
        }
    };

    let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
    match serde_json::from_value::<RpcRequest>(value) {
        Ok(req) => dispatch(service, req),
        Err(e) => {
            debug!("Invalid RPC request: {}", e);
            RpcResponse::failure(
                id,
                RpcError::new(INVALID_REQUEST, format!("Invalid request: {}", e)),
            )
        }
    }
}

/// Route one request to the matching service operation.
pub fn dispatch(service: &AccountService, req: RpcRequest) -> RpcResponse {
    debug!("RPC Request: method={}, id={}", req.method, req.id);

    if req.jsonrpc != JSONRPC_VERSION {
        return RpcResponse::failure(
            req.id,
            RpcError::new(
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", req.jsonrpc),
            ),
        );
    }

    let result = match req.method.parse::<Operation>() {
        Ok(Operation::ListAccounts) => handle_list_accounts(service),
        Ok(Operation::GetAccountById) => handle_get_account_by_id(service, req.params),
        Ok(Operation::GetTotalBalance) => handle_get_total_balance(service),
        Ok(Operation::CreateAccount) => handle_create_account(service, req.params),
        Err(()) => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        )),
    };

    match result {
        Ok(val) => RpcResponse::success(req.id, val),
        Err(err) => RpcResponse::failure(req.id, err),
    }
}

//
// === Helper Functions ===
//

fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, RpcError> {
    serde_json::from_value(params)
        .map_err(|e| RpcError::new(INVALID_PARAMS, format!("Invalid params: {}", e)))
}

/// Serialize a result payload; failures are logged and redacted
fn to_json<T: serde::Serialize>(op: Operation, value: &T) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Serialization error in {}: {}", op, e);
        RpcError::new(INTERNAL_ERROR, op.failure_summary())
    })
}

//
// === Individual Handlers ===
//

/// Handle ListAccounts()
fn handle_list_accounts(service: &AccountService) -> Result<serde_json::Value, RpcError> {
    let accounts = service.list_accounts()?;
    to_json(Operation::ListAccounts, &ListAccountsResult { accounts })
}

/// Handle GetAccountById(id)
fn handle_get_account_by_id(
    service: &AccountService,
    params: serde_json::Value,
) -> Result<serde_json::Value, RpcError> {
    let params: GetAccountByIdParams = parse_params(params)?;
    let account = service.get_account_by_id(&params.id)?;
    to_json(Operation::GetAccountById, &AccountResult { account })
}

/// Handle GetTotalBalance()
fn handle_get_total_balance(service: &AccountService) -> Result<serde_json::Value, RpcError> {
    let stats = service.get_total_balance()?;
    to_json(Operation::GetTotalBalance, &TotalBalanceResult { stats })
}

/// Handle CreateAccount(balance, createdAt, kind)
fn handle_create_account(
    service: &AccountService,
    params: serde_json::Value,
) -> Result<serde_json::Value, RpcError> {
    let params: CreateAccountParams = parse_params(params)?;
    let account = service.create_account(params.into_request())?;
    to_json(Operation::CreateAccount, &AccountResult { account })
}
