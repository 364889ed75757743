//! HTML pages for the browser side of the flow.

use crate::store::TokenRecord;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn pretty<T: serde::Serialize>(value: &T) -> String {
    escape(&serde_json::to_string_pretty(value).unwrap_or_default())
}

pub fn home_page(start_path: &str, store_label: &str, token: Option<&TokenRecord>) -> String {
    let start_path = escape(start_path);
    let status = match token {
        Some(_) => format!("Saved ({})", escape(store_label)),
        None => "No token saved".to_string(),
    };
    let expiry = match token {
        Some(record) if record.is_expired() => {
            format!("<p>Expired at: {}</p>", record.expires_at.to_rfc3339())
        }
        Some(record) => format!("<p>Expires at: {}</p>", record.expires_at.to_rfc3339()),
        None => String::new(),
    };
    let dump = token.map(pretty).unwrap_or_default();

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>LinkedIn OAuth</title></head>
<body>
  <h1>LinkedIn OAuth Demo</h1>
  <p><a href="{start_path}">Connect with LinkedIn</a></p>
  <p>Token status: {status}</p>
  {expiry}
  <pre>{dump}</pre>
</body>
</html>
"#
    )
}

pub fn connected_page(
    store_label: &str,
    profile: &serde_json::Value,
    email: &serde_json::Value,
) -> String {
    let store_label = escape(store_label);
    let profile = pretty(profile);
    let email = pretty(email);

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>LinkedIn connected</title></head>
<body>
  <h2>LinkedIn connected ✅</h2>
  <p>Your access token is saved locally ({store_label}).</p>
  <h3>Profile (from /v2/me)</h3>
  <pre>{profile}</pre>
  <h3>Email</h3>
  <pre>{email}</pre>
  <p><a href="/">Return home</a></p>
</body>
</html>
"#
    )
}
