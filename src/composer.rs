//! Document composer
//!
//! Turns the three source buffers into one executable HTML document for the
//! preview webview, and into a standalone file for export. Buffer content is
//! inserted verbatim: nothing is escaped or validated here, malformed input
//! only shows up as a runtime failure once the document executes.

use crate::model::SourceBundle;

/// Fixed filename offered by the export dialog
pub const EXPORT_FILE_NAME: &str = "code-editor-export.html";

/// A document ready to be loaded into the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument {
    /// Render generation baked into the interception shim
    pub generation: u64,
    pub html: String,
}

/// Compose the preview document for `generation`.
///
/// Pure: the same bundle and generation always produce the same bytes.
pub fn compose(sources: &SourceBundle, generation: u64) -> ComposedDocument {
    let mut html = String::with_capacity(
        sources.markup.len() + sources.style.len() + sources.script.len() + SHIM_CAPACITY,
    );

    // Shim block comes first and stays separate from the user script
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<script>\n");
    html.push_str(&interception_shim(generation));
    html.push_str("</script>\n<style>\n");
    html.push_str("body { margin: 0; padding: 0; }\n");
    html.push_str(&sources.style);
    html.push_str("\n</style>\n</head>\n<body>\n");
    html.push_str(&sources.markup);
    html.push_str("\n<script>\ntry {\n");
    html.push_str(&sources.script);
    html.push_str("\n} catch (error) {\n");
    html.push_str(CATCH_BODY);
    html.push_str("}\n</script>\n</body>\n</html>\n");

    ComposedDocument { generation, html }
}

/// Serialize the bundle into a self-contained HTML file for download.
///
/// Unlike `compose`, no interception shim is included.
pub fn export_document(sources: &SourceBundle) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Live Code Editor Export</title>
    <style>
{style}
    </style>
</head>
<body>
{markup}
    <script>
{script}
    </script>
</body>
</html>"#,
        style = sources.style,
        markup = sources.markup,
        script = sources.script,
    )
}

/// Rough size of the fixed parts, to avoid regrowing the output buffer
const SHIM_CAPACITY: usize = 1024;

/// Installs the error listener and console interceptor.
///
/// Every payload carries the generation so the host can drop messages from
/// a document it has already replaced.
fn interception_shim(generation: u64) -> String {
    format!(
        r#"(function () {{
  var generation = {generation};
  function send(payload) {{
    payload.generation = generation;
    try {{
      window.ipc.postMessage(JSON.stringify(payload));
    }} catch (_) {{}}
  }}
  window.addEventListener('error', function (e) {{
    send({{ type: 'runtime-error', message: e.message, line: e.lineno, column: e.colno }});
  }});
  var originalLog = console.log;
  console.log = function () {{
    var args = Array.prototype.slice.call(arguments);
    originalLog.apply(console, args);
    send({{ type: 'console-log', message: args.join(' ') }});
  }};
  window.__livepadSend = send;
}})();
"#
    )
}

const CATCH_BODY: &str = r#"  window.__livepadSend({
    type: 'runtime-error',
    message: error && error.message !== undefined ? String(error.message) : String(error)
  });
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> SourceBundle {
        SourceBundle::new("<p id=\"x\">hi</p>", "p { color: red; }", "console.log('a', 'b');")
    }

    #[test]
    fn compose_is_deterministic() {
        let sources = bundle();
        assert_eq!(compose(&sources, 3), compose(&sources, 3));
    }

    #[test]
    fn generation_is_embedded() {
        let doc = compose(&bundle(), 42);
        assert_eq!(doc.generation, 42);
        assert!(doc.html.contains("var generation = 42;"));
        assert_ne!(compose(&bundle(), 1).html, compose(&bundle(), 2).html);
    }

    #[test]
    fn buffers_are_placed_in_their_blocks() {
        let doc = compose(&bundle(), 1).html;
        let style_open = doc.find("<style>").unwrap();
        let style = doc.find("p { color: red; }").unwrap();
        let style_close = doc.find("</style>").unwrap();
        let body = doc.find("<body>").unwrap();
        let markup = doc.find("<p id=\"x\">hi</p>").unwrap();
        let try_open = doc.rfind("try {\n").unwrap();
        let script = doc.find("console.log('a', 'b');").unwrap();
        let catch = doc.find("} catch (error) {").unwrap();

        assert!(style_open < style && style < style_close);
        assert!(style_close < body && body < markup);
        assert!(markup < try_open && try_open < script && script < catch);
    }

    #[test]
    fn shim_installs_listener_and_interceptor_before_user_script() {
        let doc = compose(&bundle(), 1).html;
        let listener = doc.find("addEventListener('error'").unwrap();
        let interceptor = doc.find("console.log = function").unwrap();
        let user = doc.find("console.log('a', 'b');").unwrap();
        assert!(listener < user);
        assert!(interceptor < user);
        assert!(doc.contains("originalLog.apply(console, args);"));
        assert!(doc.contains("args.join(' ')"));
    }

    #[test]
    fn shim_block_closes_before_user_markup_and_script() {
        let doc = compose(&bundle(), 1).html;
        let shim_open = doc.find("<script>").unwrap();
        let shim = doc.find("var generation = 1;").unwrap();
        let shim_close = doc.find("</script>").unwrap();
        let head_close = doc.find("</head>").unwrap();
        let markup = doc.find("<p id=\"x\">hi</p>").unwrap();
        let user_open = doc.rfind("<script>\ntry {").unwrap();

        assert!(shim_open < shim && shim < shim_close);
        assert!(shim_close < head_close);
        assert!(head_close < markup && markup < user_open);
        assert_eq!(doc.matches("<script>").count(), 2);
    }

    #[test]
    fn unparsable_script_is_isolated_in_its_own_block() {
        let doc = compose(&SourceBundle::new("", "", "let = ;"), 1).html;
        let shim_close = doc.find("</script>").unwrap();
        let user = doc.find("let = ;").unwrap();
        assert!(shim_close < user);
        assert!(doc[..shim_close].contains("addEventListener('error'"));
    }

    /// Key/value pairs of every object literal passed to `send` or `__livepadSend`
    fn posted_payloads(js: &str) -> Vec<Vec<(String, String)>> {
        let mut payloads = Vec::new();
        let mut rest = js;
        while let Some(start) = [rest.find("send({"), rest.find("Send({")]
            .into_iter()
            .flatten()
            .min()
        {
            let body = &rest[start + "send({".len()..];
            let end = body.find("})").unwrap();
            let fields = body[..end]
                .split(',')
                .filter(|f| !f.trim().is_empty())
                .map(|f| {
                    let (key, value) = f.split_once(':').unwrap();
                    (key.trim().to_string(), value.trim().to_string())
                })
                .collect();
            payloads.push(fields);
            rest = &body[end..];
        }
        payloads
    }

    #[test]
    fn shim_payloads_match_bridge_schema() {
        use crate::bridge::{decode, PreviewEvent};

        let js = format!("{}{}", interception_shim(9), CATCH_BODY);
        // `send` stamps the generation onto every payload
        assert!(js.contains("payload.generation = generation;"));
        let payloads = posted_payloads(&js);
        assert_eq!(payloads.len(), 3);

        let mut kinds = Vec::new();
        for fields in payloads {
            let mut object = serde_json::Map::new();
            for (key, value) in &fields {
                let sample = match key.as_str() {
                    "type" => serde_json::json!(value.trim_matches('\'')),
                    "message" => serde_json::json!("m"),
                    "line" | "column" => serde_json::json!(3),
                    other => panic!("shim posts a key the bridge does not know: {}", other),
                };
                object.insert(key.clone(), sample);
            }
            object.insert("generation".into(), serde_json::json!(9));

            let envelope = decode(&serde_json::Value::Object(object).to_string()).unwrap();
            assert_eq!(envelope.generation, 9);
            kinds.push(envelope.event);
        }

        assert!(kinds.contains(&PreviewEvent::RuntimeError {
            message: "m".into(),
            line: Some(3),
            column: Some(3),
        }));
        assert!(kinds.contains(&PreviewEvent::RuntimeError {
            message: "m".into(),
            line: None,
            column: None,
        }));
        assert!(kinds.contains(&PreviewEvent::ConsoleLog {
            message: "m".into()
        }));
    }

    #[test]
    fn malformed_input_passes_through_unchanged() {
        let sources = SourceBundle::new("<div><span>", "}}}", "function (");
        let doc = compose(&sources, 1).html;
        assert!(doc.contains("<div><span>"));
        assert!(doc.contains("}}}"));
        assert!(doc.contains("function ("));
    }

    #[test]
    fn export_has_no_shim() {
        let out = export_document(&bundle());
        assert!(!out.contains("ipc.postMessage"));
        assert!(out.contains("<title>Live Code Editor Export</title>"));
    }
}
