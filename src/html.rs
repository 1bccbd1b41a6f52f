//! Standalone HTML wrapper around the text report, for sharing a
//! comparison outside the terminal.

use chrono::Local;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn render_page(subtitle: &str, report: &str) -> String {
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<!DOCTYPE html>
<html lang="zh">
<head>
    <meta charset="UTF-8">
    <title>JSON 差異比較報告</title>
    <style>
        body {{ font-family: monospace; background: #f7f7f7; padding: 20px; }}
        pre {{ background: white; border: 1px solid #ccc; padding: 10px; white-space: pre-wrap; }}
        h2 {{ color: #333; }}
        footer {{ color: #888; margin-top: 10px; }}
    </style>
</head>
<body>
    <h2>JSON 差異比較報告</h2>
    <p>{subtitle}</p>
    <pre>{report}</pre>
    <footer>generated {generated}</footer>
</body>
</html>
"#,
        subtitle = escape(subtitle),
        report = escape(report),
        generated = generated,
    )
}
