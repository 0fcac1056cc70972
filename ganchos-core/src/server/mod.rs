//! Newline-delimited JSON protocol server
//!
//! A single-state request/response loop: read one line from stdin, parse it
//! as JSON, answer on stdout, repeat until end-of-input. Three message
//! types are understood:
//!
//! - `initialize` → `initialized` with server info and the fixed
//!   tool/prompt catalog
//! - `tools/call` → `tools/result` wrapping the named tool's output
//! - anything else (including malformed JSON) → `error`, loop continues
//!
//! The catalog is fixed at startup and serializes with the PT-BR field
//! names of the wire format (`nome`, `descricao`, `parametros`). Diagnostic
//! text belongs on stderr via `tracing`; stdout carries responses only.

mod templates;
mod tools;

pub use templates::render_automation;

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;

/// Server name reported in the `initialized` response.
pub const SERVER_NAME: &str = "automacao-basica";

/// Server version reported in the `initialized` response.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Declared parameter of a catalog tool.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    #[serde(rename = "tipo")]
    pub param_type: &'static str,
    #[serde(rename = "descricao")]
    pub description: &'static str,
    #[serde(rename = "obrigatorio")]
    pub required: bool,
}

/// Catalog entry for one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "nome")]
    pub name: &'static str,
    #[serde(rename = "descricao")]
    pub description: &'static str,
    #[serde(rename = "parametros")]
    pub parameters: BTreeMap<&'static str, ParameterSpec>,
}

/// Catalog entry for one reusable prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptDefinition {
    #[serde(rename = "nome")]
    pub name: &'static str,
    #[serde(rename = "descricao")]
    pub description: &'static str,
    pub template: &'static str,
}

/// The request/response server with its fixed catalog.
pub struct ProtocolServer {
    tools: Vec<ToolDefinition>,
    prompts: Vec<PromptDefinition>,
}

impl Default for ProtocolServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolServer {
    /// Build a server with the built-in tool and prompt catalog.
    pub fn new() -> Self {
        Self {
            tools: tools::catalog(),
            prompts: templates::prompt_catalog(),
        }
    }

    /// Tool catalog as served in the `initialized` response.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Prompt catalog as served in the `initialized` response.
    pub fn prompts(&self) -> &[PromptDefinition] {
        &self.prompts
    }

    /// Handle one raw input line, producing exactly one response value.
    ///
    /// Malformed JSON never escapes as an error: it becomes an
    /// `error`-typed response so the loop can continue.
    pub fn handle_line(&self, line: &str) -> Value {
        match serde_json::from_str::<Value>(line) {
            Ok(message) => self.process_message(&message),
            Err(_) => json!({
                "type": "error",
                "message": "JSON inválido",
            }),
        }
    }

    /// Dispatch one parsed protocol message.
    pub fn process_message(&self, message: &Value) -> Value {
        let message_type = message.get("type").and_then(Value::as_str);

        match message_type {
            Some("initialize") => json!({
                "type": "initialized",
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": SERVER_VERSION,
                },
                "capabilities": {
                    "tools": self.tools,
                    "prompts": self.prompts,
                },
            }),
            Some("tools/call") => {
                let tool = message.get("tool").and_then(Value::as_str).unwrap_or("");
                let empty = json!({});
                let params = message.get("params").unwrap_or(&empty);

                json!({
                    "type": "tools/result",
                    "result": tools::call(tool, params),
                })
            }
            other => json!({
                "type": "error",
                "message": format!("Tipo não suportado: {}", other.unwrap_or("desconhecido")),
            }),
        }
    }

    /// Run the request/response loop until end-of-input.
    ///
    /// Every response is written as one JSON line and flushed immediately,
    /// so a cooperative caller never waits on buffering.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        tracing::info!(
            server = SERVER_NAME,
            version = SERVER_VERSION,
            "protocol server started"
        );

        for line in reader.lines() {
            let line = line?;
            let response = self.handle_line(&line);
            writeln!(writer, "{}", serde_json::to_string(&response)?)?;
            writer.flush()?;
        }

        tracing::info!("protocol server shutting down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_reports_catalog() {
        let server = ProtocolServer::new();
        let response = server.handle_line(r#"{"type":"initialize"}"#);

        assert_eq!(response["type"], "initialized");
        assert_eq!(response["serverInfo"]["name"], SERVER_NAME);

        let tools = response["capabilities"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["nome"], "listar_arquivos");
        assert_eq!(tools[0]["parametros"]["caminho"]["obrigatorio"], true);
        assert_eq!(tools[1]["nome"], "criar_automacao");

        let prompts = response["capabilities"]["prompts"].as_array().unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0]["nome"], "analisar_projeto");
    }

    #[test]
    fn malformed_json_yields_error_and_loop_survives() {
        let server = ProtocolServer::new();

        let response = server.handle_line("{broken");
        assert_eq!(response["type"], "error");
        assert_eq!(response["message"], "JSON inválido");

        // The next message still gets a normal answer
        let response = server.handle_line(r#"{"type":"initialize"}"#);
        assert_eq!(response["type"], "initialized");
    }

    #[test]
    fn unsupported_type_yields_error() {
        let server = ProtocolServer::new();

        let response = server.handle_line(r#"{"type":"shutdown"}"#);
        assert_eq!(response["type"], "error");
        assert_eq!(response["message"], "Tipo não suportado: shutdown");

        let response = server.handle_line(r#"{"no_type":true}"#);
        assert_eq!(response["message"], "Tipo não suportado: desconhecido");
    }

    #[test]
    fn run_answers_every_line_in_order() {
        let server = ProtocolServer::new();
        let input = "{\"type\":\"initialize\"}\nnot json\n";
        let mut output = Vec::new();

        server.run(input.as_bytes(), &mut output).unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "initialized");
        assert_eq!(lines[1]["type"], "error");
    }
}
