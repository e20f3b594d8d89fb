use serde_json::json;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "check_file",
        summary: "clangd diagnostics for one file (compiler syntax check fallback).",
    },
    ToolDescriptor {
        name: "find_symbol",
        summary: "Regex search for a symbol across C/C++ sources.",
    },
    ToolDescriptor {
        name: "get_includes",
        summary: "List #include directives (system vs local) with line numbers.",
    },
    ToolDescriptor {
        name: "list_functions",
        summary: "Function declarations/definitions via ctags (regex fallback).",
    },
    ToolDescriptor {
        name: "clang_format",
        summary: "clang-format a file: diff preview (dry run) or in place.",
    },
];

pub(crate) fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = TOOL_CATALOG
        .iter()
        .map(|tool| json!({ "name": tool.name, "summary": tool.summary }))
        .collect();

    json!({
        "binary": "clangd-mcp",
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "clangd-mcp exposes C/C++ code analysis tools backed by clangd, ctags, clang-format and the host compilers.".to_string(),
        "Every tool returns a plain-text report; missing files and missing tools are reported, not raised.".to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_lists_every_tool_once() {
        let payload = tool_inventory_json("1.2.3");
        assert_eq!(payload["version"], "1.2.3");
        assert_eq!(payload["count"], TOOL_CATALOG.len());
        let names: Vec<&str> = payload["tools"]
            .as_array()
            .expect("tools array")
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "check_file",
                "find_symbol",
                "get_includes",
                "list_functions",
                "clang_format"
            ]
        );
    }

    #[test]
    fn instructions_mention_every_tool() {
        let text = tool_instructions();
        for tool in TOOL_CATALOG {
            assert!(text.contains(tool.name), "missing {}", tool.name);
        }
    }
}
