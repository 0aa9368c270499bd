use ferrous_resolve_domain::ResolutionResult;
pub fn render(result: &ResolutionResult, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    }
}

/// 0 on success, 1 when the resolution recorded an error.
pub fn exit_status(result: &ResolutionResult) -> u8 {
    if result.is_success() {
        0
    } else {
        1
    }
}
