//! Code templates served by `criar_automacao` and the prompt catalog.

use super::PromptDefinition;

/// Prompt catalog, in declaration order.
pub fn prompt_catalog() -> Vec<PromptDefinition> {
    vec![
        PromptDefinition {
            name: "analisar_projeto",
            description: "Analisa estrutura e padrões do projeto",
            template: "\
Analise o projeto atual e identifique:
1. Estrutura de diretórios
2. Padrões de código utilizados
3. Oportunidades de automação
4. Configurações existentes
",
        },
        PromptDefinition {
            name: "sugerir_evolucao",
            description: "Sugere próximas evoluções para o sistema",
            template: "\
Baseado no uso atual, sugira:
1. Próximos ganchos a implementar
2. Automações que trariam benefícios
3. Métricas importantes a coletar
",
        },
    ]
}

/// Render an automation template for a detected pattern.
///
/// `gancho` renders a hook skeleton, `script` a shell skeleton; any other
/// kind falls back to a one-line comment template. The pattern is
/// substituted into identifiers (spaces become underscores) and comments.
pub fn render_automation(pattern: &str, kind: &str) -> String {
    match kind {
        "gancho" => {
            let identifier = pattern.replace(' ', "_");
            format!(
                "\
# Gancho automático para: {pattern}
import json
import sys

def processar_{identifier}():
    contexto = json.loads(sys.stdin.read())
    # Implementar lógica específica
    print(f\"Processando {pattern}: {{contexto}}\")

if __name__ == \"__main__\":
    processar_{identifier}()
"
            )
        }
        "script" => format!(
            "\
#!/bin/bash
# Script automático para: {pattern}
echo \"Executando automação: {pattern}\"
# Adicionar comandos específicos
"
        ),
        other => format!("# Template para {}: {}", other, pattern),
    }
}
