// Common test utilities
#![allow(dead_code)]

use refactor_bridge_mcp::config::BridgeConfig;
use refactor_bridge_mcp::types::*;
use std::net::TcpListener;
use std::time::Duration;
use wiremock::MockServer;

/// Config pointing at a running mock bridge, independent of the environment
pub fn config_for(server: &MockServer) -> BridgeConfig {
    BridgeConfig::resolve_with(None, None, None, |_| None).with_base_url(server.uri())
}

/// Config pointing at a local port nobody listens on
pub fn unreachable_config() -> BridgeConfig {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    BridgeConfig::resolve_with(None, None, Some(Duration::from_secs(2)), |_| None)
        .with_base_url(format!("http://127.0.0.1:{port}"))
}

pub fn change(file: &str, line: u32, old_text: &str, new_text: &str) -> FileChange {
    FileChange {
        file: file.to_string(),
        line,
        old_text: old_text.to_string(),
        new_text: new_text.to_string(),
    }
}

pub fn changes(count: usize) -> Vec<FileChange> {
    (1..=count)
        .map(|i| change(&format!("src/mod_{i}.py"), i as u32, "old_name", "new_name"))
        .collect()
}

pub fn usage(file: &str, line: u32, column: u32, text: &str, is_write_access: bool) -> UsageInfo {
    UsageInfo {
        file: file.to_string(),
        line,
        column,
        text: text.to_string(),
        is_write_access,
    }
}

pub fn usages(count: usize) -> Vec<UsageInfo> {
    (1..=count)
        .map(|i| usage("src/app.py", i as u32, 4, "helper()", false))
        .collect()
}

pub fn rename_param(preview: bool) -> RenameSymbolParam {
    RenameSymbolParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        line: 10,
        column: 5,
        new_name: "new_name".to_string(),
        search_in_comments: true,
        search_in_strings: false,
        preview,
    }
}

pub fn move_param(preview: bool) -> MoveElementParam {
    MoveElementParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        line: 3,
        column: 7,
        target_file: "src/util.py".to_string(),
        preview,
    }
}

pub fn extract_method_param(preview: bool) -> ExtractMethodParam {
    ExtractMethodParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        start_line: 4,
        start_column: 5,
        end_line: 8,
        end_column: 20,
        method_name: "compute_total".to_string(),
        preview,
    }
}

pub fn extract_variable_param(preview: bool) -> ExtractVariableParam {
    ExtractVariableParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        start_line: 4,
        start_column: 12,
        end_line: 4,
        end_column: 30,
        variable_name: "total".to_string(),
        replace_all: true,
        preview,
    }
}

pub fn inline_param(preview: bool) -> InlineElementParam {
    InlineElementParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        line: 2,
        column: 1,
        preview,
    }
}

pub fn change_signature_param(preview: bool) -> ChangeSignatureParam {
    ChangeSignatureParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        line: 1,
        column: 5,
        new_name: None,
        parameters: None,
        return_type: None,
        preview,
    }
}

pub fn safe_delete_param() -> SafeDeleteParam {
    SafeDeleteParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        line: 20,
        column: 5,
        search_for_usages: true,
    }
}

pub fn find_usages_param() -> FindUsagesParam {
    FindUsagesParam {
        project_path: "/project".to_string(),
        file_path: "src/main.py".to_string(),
        line: 10,
        column: 5,
    }
}
