//! Built-in tool implementations and their catalog entries.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{json, Value};

use super::templates::render_automation;
use super::{ParameterSpec, ToolDefinition};

/// Catalog of the built-in tools, in declaration order.
pub fn catalog() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "listar_arquivos",
            description: "Lista arquivos em um diretório",
            parameters: BTreeMap::from([(
                "caminho",
                ParameterSpec {
                    param_type: "string",
                    description: "Caminho do diretório",
                    required: true,
                },
            )]),
        },
        ToolDefinition {
            name: "criar_automacao",
            description: "Cria automação para tarefa repetitiva",
            parameters: BTreeMap::from([
                (
                    "padrao",
                    ParameterSpec {
                        param_type: "string",
                        description: "Padrão detectado",
                        required: true,
                    },
                ),
                (
                    "tipo",
                    ParameterSpec {
                        param_type: "string",
                        description: "Tipo de automação (gancho|script|mcp)",
                        required: true,
                    },
                ),
            ]),
        },
    ]
}

/// Dispatch a `tools/call` to the named tool.
///
/// Every failure mode is reported inside the result object as an `erro`
/// field; nothing here terminates the server loop.
pub fn call(name: &str, params: &Value) -> Value {
    match name {
        "listar_arquivos" => list_files(params),
        "criar_automacao" => create_automation(params),
        other => json!({ "erro": format!("Ferramenta não encontrada: {}", other) }),
    }
}

fn required_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, Value> {
    params
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| json!({ "erro": format!("Parâmetro obrigatório ausente: {}", name) }))
}

/// List the immediate children of a directory.
fn list_files(params: &Value) -> Value {
    let raw_path = match required_param(params, "caminho") {
        Ok(path) => path,
        Err(error) => return error,
    };

    let path = Path::new(raw_path);
    if !path.exists() {
        return json!({ "erro": format!("Caminho não existe: {}", path.display()) });
    }

    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            return json!({ "erro": format!("Falha ao ler diretório {}: {}", path.display(), e) })
        }
    };

    let mut files: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path().display().to_string())
        .collect();
    files.sort();

    json!({
        "arquivos": files,
        "total": files.len(),
    })
}

/// Render an automation template for a detected pattern.
fn create_automation(params: &Value) -> Value {
    let pattern = match required_param(params, "padrao") {
        Ok(pattern) => pattern,
        Err(error) => return error,
    };
    let kind = match required_param(params, "tipo") {
        Ok(kind) => kind,
        Err(error) => return error,
    };

    let content = render_automation(pattern, kind);

    json!({
        "sucesso": true,
        "mensagem": format!("Automação {} criada para padrão: {}", kind, pattern),
        "conteudo": content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_files_returns_children_and_total() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();

        let params = json!({ "caminho": tmp.path().display().to_string() });
        let result = call("listar_arquivos", &params);

        assert_eq!(result["total"], 2);
        let files = result["arquivos"].as_array().unwrap();
        assert!(files[0].as_str().unwrap().ends_with("a.txt"));
    }

    #[test]
    fn list_files_reports_missing_path_as_erro() {
        let params = json!({ "caminho": "/definitely/not/here" });
        let result = call("listar_arquivos", &params);

        let erro = result["erro"].as_str().unwrap();
        assert!(erro.contains("Caminho não existe"));
        assert!(erro.contains("/definitely/not/here"));
    }

    #[test]
    fn missing_required_param_is_reported_in_result() {
        let result = call("listar_arquivos", &json!({}));
        assert_eq!(
            result["erro"],
            "Parâmetro obrigatório ausente: caminho"
        );

        let result = call("criar_automacao", &json!({ "padrao": "deploy" }));
        assert_eq!(result["erro"], "Parâmetro obrigatório ausente: tipo");
    }

    #[test]
    fn unknown_tool_is_reported_in_result() {
        let result = call("inexistente", &json!({}));
        assert_eq!(result["erro"], "Ferramenta não encontrada: inexistente");
    }

    #[test]
    fn create_automation_wraps_rendered_template() {
        let params = json!({ "padrao": "build e deploy", "tipo": "gancho" });
        let result = call("criar_automacao", &params);

        assert_eq!(result["sucesso"], true);
        assert_eq!(
            result["mensagem"],
            "Automação gancho criada para padrão: build e deploy"
        );
        assert!(result["conteudo"]
            .as_str()
            .unwrap()
            .contains("build e deploy"));
    }
}
