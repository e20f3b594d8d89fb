use super::*;
use rmcp::handler::server::wrapper::Parameters;
use tempfile::tempdir;

fn report_text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .expect("text content")
}

fn offline_service() -> ClangdMcpService {
    ClangdMcpService::new(ToolchainConfig {
        clangd_candidates: vec!["clangd-mcp-missing-clangd".to_string()],
        compilers: vec!["clangd-mcp-missing-cc".to_string()],
        ctags: "clangd-mcp-missing-ctags".to_string(),
        clang_format_candidates: vec!["clangd-mcp-missing-format".to_string()],
        ..ToolchainConfig::default()
    })
}

#[tokio::test]
async fn every_tool_reports_missing_paths_as_not_found() {
    let service = offline_service();
    let missing = "/definitely/not/here.cpp".to_string();

    let results = vec![
        service
            .check_file(Parameters(CheckFileRequest {
                file_path: missing.clone(),
                build_dir: None,
            }))
            .await
            .unwrap(),
        service
            .find_symbol(Parameters(FindSymbolRequest {
                symbol: "main".to_string(),
                directory: Some("/definitely/not/a/dir".to_string()),
                extensions: None,
            }))
            .await
            .unwrap(),
        service
            .get_includes(Parameters(GetIncludesRequest {
                file_path: missing.clone(),
            }))
            .await
            .unwrap(),
        service
            .list_functions(Parameters(ListFunctionsRequest {
                file_path: missing.clone(),
            }))
            .await
            .unwrap(),
        service
            .clang_format(Parameters(ClangFormatRequest {
                file_path: missing.clone(),
                style: None,
                dry_run: Some(false),
            }))
            .await
            .unwrap(),
    ];

    for result in &results {
        assert_ne!(result.is_error, Some(true));
        let text = report_text(result);
        assert!(text.contains("not found"), "unexpected report: {text}");
    }
}

#[tokio::test]
async fn find_symbol_rejects_invalid_and_empty_patterns() {
    let service = offline_service();

    let result = service
        .find_symbol(Parameters(FindSymbolRequest {
            symbol: "foo(".to_string(),
            directory: None,
            extensions: None,
        }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    assert!(report_text(&result).starts_with("error: invalid_request\nInvalid regex 'foo('"));

    let result = service
        .find_symbol(Parameters(FindSymbolRequest {
            symbol: String::new(),
            directory: None,
            extensions: None,
        }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn find_symbol_blank_arguments_fall_back_to_defaults() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path();
    std::fs::write(root.join("a.hpp"), "struct Needle {};\n").unwrap();
    std::fs::write(root.join("a.txt"), "Needle\n").unwrap();

    let service = offline_service();
    let result = service
        .find_symbol(Parameters(FindSymbolRequest {
            symbol: "Needle".to_string(),
            directory: Some(root.to_string_lossy().into_owned()),
            extensions: Some("   ".to_string()),
        }))
        .await
        .unwrap();
    let text = report_text(&result);
    assert!(text.starts_with("Found 1 match(es) for 'Needle':"), "{text}");
    assert!(text.contains("a.hpp:1: struct Needle {};"));
}

#[tokio::test]
async fn get_includes_round_trip_through_service() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("main.cpp");
    std::fs::write(&file, "// x\n\n#include <a.h>\n\n#include \"b.h\"\n").unwrap();
    let file_path = file.to_string_lossy().into_owned();

    let result = offline_service()
        .get_includes(Parameters(GetIncludesRequest {
            file_path: file_path.clone(),
        }))
        .await
        .unwrap();
    assert_eq!(
        report_text(&result),
        format!("Includes in {file_path}:\n  L3: system a.h\n  L5: local  b.h\n")
    );
}

#[tokio::test]
async fn check_file_without_any_toolchain_is_a_report_not_an_error() {
    let _guard = crate::test_support::SPAWN_MUTEX.lock().await;
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("a.cpp");
    std::fs::write(&file, "int main() {}\n").unwrap();

    let result = offline_service()
        .check_file(Parameters(CheckFileRequest {
            file_path: file.to_string_lossy().into_owned(),
            build_dir: Some(String::new()),
        }))
        .await
        .unwrap();
    assert_ne!(result.is_error, Some(true));
    assert!(report_text(&result).starts_with("No compatible C/C++ tool is installed"));
}

#[test]
fn blank_optional_arguments_use_defaults() {
    assert_eq!(arg_or(None, "build"), "build");
    assert_eq!(arg_or(Some("  "), "build"), "build");
    assert_eq!(arg_or(Some(" out "), "build"), "out");
}

#[test]
fn server_info_advertises_tools() {
    let info = offline_service().get_info();
    assert!(info.capabilities.tools.is_some());
    let instructions = info.instructions.expect("instructions");
    assert!(instructions.contains("check_file"));
    assert!(instructions.contains("clang_format"));
}
