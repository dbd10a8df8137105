use crate::ui::views::error_line;

/// `texmgr: ERROR: ...` with the whole cause chain
pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let cause = cause.to_string();
        if !message.contains(&cause) {
            message.push_str(": ");
            message.push_str(&cause);
        }
    }
    error_line(&message, color).text
}

pub fn print_error(err: &anyhow::Error, json: bool, color: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(&output);
        return;
    }

    eprintln!("{}", format_error(err, color));
}
