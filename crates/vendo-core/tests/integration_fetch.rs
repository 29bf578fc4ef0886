//! Integration test: finder downloads against a local HTTP server.
//!
//! Starts a minimal server, declares vendor files pointing at it, and
//! asserts the finder's download behavior (destination path, content,
//! number of requests).

mod common;

use common::http_server;
use tempfile::tempdir;
use vendo_core::finder::{FinderError, RemoteFileFinder};
use vendo_core::registry::{AppManifest, DirRegistry, StaticRegistry};
use vendo_core::static_url::vendor_remote_url;

fn manifest(app: &str, toml_src: &str) -> AppManifest {
    let value: toml::Value = toml::from_str(toml_src).unwrap();
    AppManifest {
        app: app.to_string(),
        files: value.get("files").unwrap().clone(),
    }
}

#[test]
fn find_first_downloads_the_match_once() {
    let body = b"console.log('vendored');".to_vec();
    let server = http_server::start(body.clone());

    let download_dir = tempdir().unwrap();
    let finder = RemoteFileFinder::new(StaticRegistry::new(vec![manifest(
        "my_application",
        &format!(r#"files = [["file", "file.js", "{}file.js"]]"#, server.url),
    )]))
    .with_temp_dir(download_dir.path());

    let path = finder.find_first("file.js").unwrap().expect("match");
    assert_eq!(path, download_dir.path().join("file.js"));
    assert_eq!(std::fs::read(&path).unwrap(), body);
    assert_eq!(server.hits(), 1);
}

#[test]
fn find_first_miss_downloads_nothing() {
    let server = http_server::start(b"unused".to_vec());

    let download_dir = tempdir().unwrap();
    let finder = RemoteFileFinder::new(StaticRegistry::new(vec![manifest(
        "my_application",
        &format!(r#"files = [["file", "file.js", "{}file.js"]]"#, server.url),
    )]))
    .with_temp_dir(download_dir.path());

    assert!(finder.find_first("unknown.js").unwrap().is_none());
    assert_eq!(server.hits(), 0);
}

#[test]
fn find_all_downloads_every_match_including_duplicates() {
    let server = http_server::start(b"body".to_vec());

    let download_dir = tempdir().unwrap();
    let finder = RemoteFileFinder::new(StaticRegistry::new(vec![
        manifest(
            "app_a",
            &format!(r#"files = [["a", "file.js", "{}a.js"]]"#, server.url),
        ),
        manifest(
            "app_b",
            &format!(
                r#"files = [["b", "file.js", "{}b.js"], ["c", "other.js", "{}c.js"]]"#,
                server.url, server.url
            ),
        ),
    ]))
    .with_temp_dir(download_dir.path());

    let paths = finder.find_all("file.js").unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(server.hits(), 2);
    // Both matches share the base name, so they land on the same path.
    assert_eq!(paths[0], paths[1]);
}

#[test]
fn download_destination_is_the_base_name_in_the_temp_dir() {
    let server = http_server::start(b"css".to_vec());

    let download_dir = tempdir().unwrap();
    let finder = RemoteFileFinder::new(StaticRegistry::new(vec![manifest(
        "my_application",
        &format!(
            r#"files = [["bs", "css/theme/bootstrap.min.css", "{}bootstrap.min.css"]]"#,
            server.url
        ),
    )]))
    .with_temp_dir(download_dir.path());

    let path = finder
        .find_first("css/theme/bootstrap.min.css")
        .unwrap()
        .expect("match");
    assert_eq!(path, download_dir.path().join("bootstrap.min.css"));
}

#[test]
fn download_overwrites_an_existing_file() {
    let body = b"fresh".to_vec();
    let server = http_server::start(body.clone());

    let download_dir = tempdir().unwrap();
    std::fs::write(download_dir.path().join("file.js"), b"stale").unwrap();

    let finder = RemoteFileFinder::new(StaticRegistry::new(vec![manifest(
        "my_application",
        &format!(r#"files = [["file", "file.js", "{}file.js"]]"#, server.url),
    )]))
    .with_temp_dir(download_dir.path());

    let path = finder.find_first("file.js").unwrap().expect("match");
    assert_eq!(std::fs::read(&path).unwrap(), body);
}

#[test]
fn http_error_status_fails_the_find() {
    let server = http_server::start_with_status(b"gone".to_vec(), 404);

    let download_dir = tempdir().unwrap();
    let finder = RemoteFileFinder::new(StaticRegistry::new(vec![manifest(
        "my_application",
        &format!(r#"files = [["file", "file.js", "{}file.js"]]"#, server.url),
    )]))
    .with_temp_dir(download_dir.path());

    match finder.find_first("file.js") {
        Err(FinderError::Download { file_name, source }) => {
            assert_eq!(file_name, "file.js");
            assert_eq!(format!("{}", source), "HTTP 404");
        }
        other => panic!("expected download failure, got {:?}", other),
    }
}

#[test]
fn open_returns_a_readable_handle() {
    use std::io::Read;

    let body = b"readable".to_vec();
    let server = http_server::start(body.clone());

    let download_dir = tempdir().unwrap();
    let finder = RemoteFileFinder::new(StaticRegistry::new(vec![manifest(
        "my_application",
        &format!(r#"files = [["file", "file.js", "{}file.js"]]"#, server.url),
    )]))
    .with_temp_dir(download_dir.path());

    let mut file = finder.open("file.js").unwrap().expect("match");
    let mut content = Vec::new();
    file.read_to_end(&mut content).unwrap();
    assert_eq!(content, body);
}

#[test]
fn end_to_end_from_app_directories() {
    let body = b"end to end".to_vec();
    let server = http_server::start(body.clone());

    let project = tempdir().unwrap();
    let app = project.path().join("my_application");
    std::fs::create_dir_all(&app).unwrap();
    std::fs::write(
        app.join("vendor.toml"),
        format!(r#"files = [["file", "file.js", "{}file.js"]]"#, server.url),
    )
    .unwrap();

    let download_dir = tempdir().unwrap();
    let finder =
        RemoteFileFinder::new(DirRegistry::new(vec![app])).with_temp_dir(download_dir.path());

    assert!(finder.check().unwrap().is_empty());
    assert_eq!(
        vendor_remote_url(&finder, "/static/", "file").unwrap(),
        "/static/file.js"
    );

    let listed = finder.list(&[]).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].0, "file.js");

    let path = finder.find_first("file.js").unwrap().expect("match");
    assert_eq!(std::fs::read(&path).unwrap(), body);
    assert_eq!(server.hits(), 1);
}
