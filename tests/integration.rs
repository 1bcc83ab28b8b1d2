use dirdoc::output::{self, OutputFormat};
use dirdoc::{DirdocBuilder, DirdocError, FileContent, dirdoc, render_tree};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let proj = dir.path().join("proj");
    let out = dir.path().join("out");
    fs::create_dir_all(proj.join("sub")).unwrap();
    fs::create_dir(&out).unwrap();
    fs::write(proj.join("a.py"), "print(1)").unwrap();
    fs::write(proj.join("sub/b.js"), "console.log(1)\n").unwrap();
    fs::write(proj.join("notes.txt"), "not collected").unwrap();
    let options = DirdocBuilder::new(&proj).output_dir(&out).build();
    let result = dirdoc(&options).unwrap();
    assert_eq!(result.base_name, "proj");
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].language, "python");
    assert_eq!(result.files[1].language, "javascript");
    let document = output::format_result(&result, OutputFormat::Markdown, false).unwrap();
    let path = output::write_document(&document, &result.base_name, OutputFormat::Markdown, &out)
        .unwrap();
    assert_eq!(path, out.join("doc_proj.md"));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, document);
    assert!(written.contains("## File structure\n```\nproj/\n├── a.py\n├── notes.txt\n└── sub/\n    └── b.js\n```\n"));
    assert!(written.contains("### 📄 a.py\n```python\nprint(1)\n```\n"));
    assert!(written.contains("### 📄 sub/b.js\n```javascript\nconsole.log(1)\n\n```\n"));
    assert!(!written.contains("not collected"));
    assert!(written.find("a.py\n```python").unwrap() < written.find("sub/b.js\n```javascript").unwrap());
}
#[test]
fn integration_overwrites_existing_document() {
    let dir = tempdir().unwrap();
    let first = output::write_document("old", "proj", OutputFormat::Markdown, dir.path()).unwrap();
    let second = output::write_document("new", "proj", OutputFormat::Markdown, dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(second).unwrap(), "new");
}
#[test]
fn integration_write_failure_is_fatal() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no/such/dir");
    let err = output::write_document("x", "proj", OutputFormat::Markdown, &missing).unwrap_err();
    assert!(matches!(err, DirdocError::OutputWrite { .. }));
}
#[test]
fn integration_assemble_embeds_content_verbatim() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let body = "h1 {\n  color: red;\n}\n";
    fs::write(root.join("style.css"), body).unwrap();
    let (lines, collected) = render_tree(root).unwrap();
    let document = output::assemble(root, &lines, &collected);
    assert_eq!(embedded_body(&document, "style.css", "css"), body);
}
fn embedded_body<'a>(document: &'a str, path: &str, language: &str) -> &'a str {
    let open = format!("### 📄 {path}\n```{language}\n");
    let start = document.find(&open).unwrap() + open.len();
    let end = start + document[start..].find("\n```\n").unwrap();
    &document[start..end]
}
#[test]
fn integration_bodies_round_trip_exactly() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.py"), "x").unwrap();
    fs::write(root.join("b.py"), "x\n").unwrap();
    fs::write(root.join("c.py"), "").unwrap();
    let (lines, collected) = render_tree(root).unwrap();
    let document = output::assemble(root, &lines, &collected);
    assert_eq!(embedded_body(&document, "a.py", "python"), "x");
    assert_eq!(embedded_body(&document, "b.py", "python"), "x\n");
    assert_eq!(embedded_body(&document, "c.py", "python"), "");
}
#[cfg(unix)]
#[test]
fn integration_non_utf8_file_name_is_read() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    let dir = tempdir().unwrap();
    let name = OsStr::from_bytes(b"caf\xe9.py");
    if fs::write(dir.path().join(name), "print(1)").is_err() {
        // Some filesystems only accept UTF-8 names.
        return;
    }
    let result = dirdoc(&DirdocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, "caf\u{FFFD}.py");
    assert_eq!(result.files[0].language, "python");
    assert_eq!(result.files[0].content, FileContent::Text("print(1)".to_string()));
}
#[test]
fn integration_missing_file_does_not_abort_assembly() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("z.html"), "<p></p>").unwrap();
    let collected = vec!["z.html".to_string(), "gone.py".to_string()];
    let document = output::assemble(root, &[], &collected);
    let gone = document.find("### 📄 gone.py\n```\n[error: could not read file - ").unwrap();
    let present = document.find("### 📄 z.html\n```html\n<p></p>\n```\n").unwrap();
    assert!(gone < present);
}
#[test]
fn integration_undecodable_file_is_still_included() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("mixed.js"), [b'o', b'k', 0xc3, b'\n']).unwrap();
    let result = dirdoc(&DirdocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.files.len(), 1);
    assert!(matches!(&result.files[0].content, FileContent::Text(t) if t.starts_with("ok")));
}
#[test]
fn integration_json_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "x").unwrap();
    let result = dirdoc(&DirdocBuilder::new(dir.path()).build()).unwrap();
    let json = output::format_result(&result, OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["files"][0]["path"], "a.py");
    assert_eq!(value["files"][0]["content"]["text"], "x");
}
