//! Report output: human-readable lines or a JSON document.

use tpgen_core::SandboxLink;

/// One line per entry, report order.
pub fn render_human(links: &[SandboxLink]) {
    for link in links {
        match link.question {
            Some(question) => println!("Question {question}: {}", link.url),
            None => println!("Question ?: {} (no question number in title)", link.url),
        }
    }
}

/// The `{"sandboxes": [{url, question}]}` document the report generator
/// consumes.
pub fn render_json(links: &[SandboxLink]) -> anyhow::Result<()> {
    let doc = serde_json::json!({ "sandboxes": links });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
