use ngv_graph::DisplayMode;

/// Parse a `--mode` value.
pub fn parse_display_mode(s: &str) -> Result<DisplayMode, String> {
    s.parse().map_err(|e: ngv_graph::GraphError| e.to_string())
}

/// Parse a `--reducer-depth` value; at least one segment is kept.
pub fn parse_reducer_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a positive number"))?;
    if depth == 0 {
        return Err("reducer depth must be at least 1".to_string());
    }
    Ok(depth)
}
