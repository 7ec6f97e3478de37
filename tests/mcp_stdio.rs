//! MCP server driven over in-memory buffers

use directory_analyzer::{config::Config, mcp::McpServer, store::SummaryStore, ServiceContext};
use serde_json::{json, Value};
use std::io::Cursor;
use tempfile::TempDir;

async fn run_session(ctx: ServiceContext, messages: &[Value]) -> Vec<Value> {
    let input: String = messages.iter().map(|m| format!("{}\n", m)).collect();
    let mut output = Vec::new();

    McpServer::new(ctx)
        .serve(Cursor::new(input.into_bytes()), &mut output)
        .await
        .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

async fn setup_context() -> (ServiceContext, TempDir) {
    let tmp = TempDir::new().unwrap();
    let store = SummaryStore::open(&tmp.path().join("mcp.db")).await.unwrap();
    (ServiceContext::new(&Config::default(), store), tmp)
}

fn tool_text(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn test_initialize_and_list_tools() {
    let (ctx, _tmp) = setup_context().await;

    let responses = run_session(
        ctx,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        ],
    )
    .await;

    // the notification gets no reply
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], json!(1));
    assert_eq!(responses[0]["result"]["protocolVersion"], json!("2024-11-05"));

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 3);
    assert!(tools.iter().all(|t| t.get("inputSchema").is_some()));
}

#[tokio::test]
async fn test_tools_call_round_trip() {
    let (ctx, tmp) = setup_context().await;
    let docs = tmp.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    std::fs::write(docs.join("hello.txt"), "hello world").unwrap();
    std::fs::write(docs.join("skip.bin"), [0u8, 1, 2]).unwrap();
    let store = ctx.store.clone();

    let responses = run_session(
        ctx,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": {
                "name": "list_directory",
                "arguments": {"path": docs.display().to_string()}
            }}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call", "params": {
                "name": "read_document_chunk",
                "arguments": {"path": docs.join("hello.txt").display().to_string(), "offset": 5, "chunk_size": 4}
            }}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {
                "name": "save_summary_to_db",
                "arguments": {"document_id": "hello", "filename": "hello.txt", "summary": "greets", "status": "completed"}
            }}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 3);
    assert!(responses.iter().all(|r| r["result"]["isError"] == json!(false)));

    let listing = tool_text(&responses[0]);
    assert_eq!(listing["files"].as_array().unwrap().len(), 1);
    assert_eq!(listing["files"][0]["name"], json!("hello.txt"));

    let chunk = tool_text(&responses[1]);
    assert_eq!(chunk["content"], json!(" wor"));
    assert_eq!(chunk["next_offset"], json!(9));

    let saved = tool_text(&responses[2]);
    assert_eq!(saved["saved"], json!(true));
    assert!(store.get_summary("hello").await.unwrap().is_some());
}

#[tokio::test]
async fn test_tool_failure_is_error_result() {
    let (ctx, tmp) = setup_context().await;
    let missing = tmp.path().join("missing.txt").display().to_string();

    let responses = run_session(
        ctx,
        &[json!({"jsonrpc": "2.0", "id": 7, "method": "tools/call", "params": {
            "name": "read_document_chunk",
            "arguments": {"path": missing}
        }})],
    )
    .await;

    assert_eq!(responses[0]["id"], json!(7));
    assert_eq!(responses[0]["result"]["isError"], json!(true));
    let text = responses[0]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("File not found"));
}

#[tokio::test]
async fn test_protocol_errors() {
    let (ctx, _tmp) = setup_context().await;

    let input = "not json\n{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"resources/read\"}\n";
    let mut output = Vec::new();
    McpServer::new(ctx)
        .serve(Cursor::new(input.as_bytes().to_vec()), &mut output)
        .await
        .unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], json!(-32700));
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[1]["error"]["code"], json!(-32601));
    assert_eq!(responses[1]["id"], json!(3));
}

#[tokio::test]
async fn test_client_replies_ignored_and_bad_requests_rejected() {
    let (ctx, _tmp) = setup_context().await;

    let responses = run_session(
        ctx,
        &[
            json!({"jsonrpc": "2.0", "id": 9, "result": {}}),
            json!({"jsonrpc": "2.0", "id": 4, "method": 42}),
            json!({"jsonrpc": "2.0", "id": 5, "method": "ping"}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], json!(4));
    assert_eq!(responses[0]["error"]["code"], json!(-32600));
    assert_eq!(responses[1]["id"], json!(5));
    assert_eq!(responses[1]["result"], json!({}));
}
