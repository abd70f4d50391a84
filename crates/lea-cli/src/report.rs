//! Result reporting.
//!
//! stdout carries exactly one line of JSON per invocation: the decoded
//! result on success, or `{"error": …}` when the send itself fails. The
//! per-transaction status line goes to stderr so it never pollutes the
//! primary output.

use crate::common::GlobalOpts;
use crate::serialize;
use anyhow::{Context, Result};
use lea_sdk::{Connection, Transaction, TxResult};
use std::path::Path;

/// Formats the diagnostic status line for a sent transaction.
pub fn status_line(result: &TxResult) -> String {
    format!(
        "ok={} status={} txId={} exec={} abort={}",
        result.ok,
        result.status,
        result.tx_id.as_deref().unwrap_or("-"),
        opt_i64(result.execution_status),
        opt_i64(result.abort_code),
    )
}

fn opt_i64(v: Option<i64>) -> String {
    v.map_or_else(|| "-".to_string(), |n| n.to_string())
}

/// Writes the payload as one line of JSON to stdout, and to `outfile` when
/// given (plain overwrite).
///
/// The outfile goes first: stdout must carry at most one JSON line per
/// invocation, and a failed write that propagates after printing would add
/// a second `{"error": …}` line.
pub fn emit(payload: &serde_json::Value, outfile: Option<&Path>) -> Result<()> {
    let line = serde_json::to_string(payload)?;
    if let Some(path) = outfile {
        std::fs::write(path, &line)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    println!("{line}");
    Ok(())
}

/// Sends a built transaction and reports the outcome.
///
/// Returns the process exit code: 0 for an accepted transaction, 1 for
/// remote rejection (the decoded body is still printed) or a send failure
/// (reported as `{"error": …}` through the same dual-output path).
pub async fn send_and_report(
    conn: &Connection,
    tx: &Transaction,
    global: &GlobalOpts,
) -> Result<i32> {
    match conn.send(tx).await {
        Ok(result) => {
            if !global.quiet {
                eprintln!("{}", status_line(&result));
            }
            let decoded = result
                .decoded
                .as_ref()
                .map(serialize::to_json)
                .unwrap_or(serde_json::Value::Null);
            emit(&decoded, global.outfile.as_deref())?;
            Ok(if result.rejected() { 1 } else { 0 })
        }
        Err(e) => {
            let payload = serde_json::json!({ "error": e.to_string() });
            emit(&payload, global.outfile.as_deref())?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_full() {
        let result = TxResult {
            ok: true,
            status: 200,
            tx_id: Some("lea_tx_01".to_string()),
            execution_status: Some(0),
            abort_code: Some(0),
            decoded: None,
        };
        assert_eq!(
            status_line(&result),
            "ok=true status=200 txId=lea_tx_01 exec=0 abort=0"
        );
    }

    #[test]
    fn status_line_missing_fields_dash_out() {
        let result = TxResult {
            ok: false,
            status: 400,
            tx_id: None,
            execution_status: None,
            abort_code: None,
            decoded: None,
        };
        assert_eq!(status_line(&result), "ok=false status=400 txId=- exec=- abort=-");
    }

    #[test]
    fn emit_writes_identical_json_to_outfile() {
        let path = std::env::temp_dir().join(format!("lea-report-{}.json", std::process::id()));
        let payload = serde_json::json!({ "balance": "1000000", "frozen": false });

        emit(&payload, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, serde_json::to_string(&payload).unwrap());
        // Single line, no trailing newline in the file copy.
        assert!(!written.contains('\n'));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn emit_overwrites_existing_outfile() {
        let path = std::env::temp_dir().join(format!("lea-report-ow-{}.json", std::process::id()));
        std::fs::write(&path, "stale contents that are much longer than the payload").unwrap();

        emit(&serde_json::json!({ "ok": 1 }), Some(&path)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"ok":1}"#);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn emit_unwritable_path_fails_with_path_in_error() {
        let path = Path::new("/nonexistent-dir/lea-out.json");
        let err = emit(&serde_json::json!({}), Some(path)).unwrap_err();
        assert!(format!("{err}").contains("lea-out.json"));
    }

    // -----------------------------------------------------------------------
    // send_and_report
    // -----------------------------------------------------------------------

    use lea_sdk::SystemProgram;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn global_with_outfile(server: &MockServer, name: &str) -> GlobalOpts {
        GlobalOpts {
            cluster: server.uri(),
            outfile: Some(
                std::env::temp_dir().join(format!("lea-report-{}-{name}", std::process::id())),
            ),
            quiet: true,
        }
    }

    async fn mock_tx_response(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/tx"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn accepted_transaction_exits_zero_with_decoded_output() {
        let server = MockServer::start().await;
        mock_tx_response(
            &server,
            serde_json::json!({
                "ok": true,
                "status": 200,
                "txId": "lea_tx_01",
                "executionStatus": 0,
                "abortCode": 0,
                "decoded": { "supply": "1000000" }
            }),
        )
        .await;

        let global = global_with_outfile(&server, "accepted.json");
        let conn = global.build_connection().unwrap();
        let exit = send_and_report(&conn, &SystemProgram::get_current_supply(), &global)
            .await
            .unwrap();

        assert_eq!(exit, 0);
        let outfile = global.outfile.unwrap();
        assert_eq!(
            std::fs::read_to_string(&outfile).unwrap(),
            r#"{"supply":"1000000"}"#
        );
        std::fs::remove_file(outfile).unwrap();
    }

    #[tokio::test]
    async fn rejected_transaction_exits_one_but_still_reports_decoded() {
        let server = MockServer::start().await;
        mock_tx_response(
            &server,
            serde_json::json!({
                "ok": false,
                "status": 400,
                "txId": "lea_tx_02",
                "decoded": { "reason": "insufficient balance" }
            }),
        )
        .await;

        let global = global_with_outfile(&server, "rejected.json");
        let conn = global.build_connection().unwrap();
        let exit = send_and_report(&conn, &SystemProgram::get_balance("lea1sender"), &global)
            .await
            .unwrap();

        assert_eq!(exit, 1);
        let outfile = global.outfile.unwrap();
        assert_eq!(
            std::fs::read_to_string(&outfile).unwrap(),
            r#"{"reason":"insufficient balance"}"#
        );
        std::fs::remove_file(outfile).unwrap();
    }

    #[tokio::test]
    async fn send_failure_exits_one_with_error_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tx"))
            .respond_with(ResponseTemplate::new(500).set_body_string("node overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let global = global_with_outfile(&server, "failed.json");
        let conn = global.build_connection().unwrap();
        let exit = send_and_report(&conn, &SystemProgram::get_current_supply(), &global)
            .await
            .unwrap();

        assert_eq!(exit, 1);
        let outfile = global.outfile.unwrap();
        let written = std::fs::read_to_string(&outfile).unwrap();
        assert!(written.starts_with(r#"{"error":"#), "got {written}");
        std::fs::remove_file(outfile).unwrap();
    }
}
