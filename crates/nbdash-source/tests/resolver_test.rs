use mockall::mock;
use nbdash_source::fetcher::{FetchError, HttpFetcher, HttpResponse};
use nbdash_source::resolver::{NotebookSource, SourceClient, SourceError};
use std::path::PathBuf;
use tempfile::TempDir;

mock! {
    Fetcher {}

    impl HttpFetcher for Fetcher {
        async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
    }
}

const NOTEBOOK_JSON: &str = r#"{"cells": [{"cell_type": "code", "source": "1 + 1", "metadata": {}}], "metadata": {}}"#;

fn ok_response(body: &str, headers: Vec<(String, String)>) -> HttpResponse {
    HttpResponse {
        status: 200,
        reason: "OK".to_owned(),
        body: body.to_owned(),
        headers,
    }
}

// ── Source selection ──

#[test]
fn from_flags_accepts_exactly_one_origin() {
    let source =
        NotebookSource::from_flags(Some(PathBuf::from("nb.ipynb")), None, None).unwrap();
    assert_eq!(source, NotebookSource::LocalFile(PathBuf::from("nb.ipynb")));

    let source =
        NotebookSource::from_flags(None, Some("https://x.test/nb.ipynb".to_owned()), None).unwrap();
    assert_eq!(
        source,
        NotebookSource::DirectUrl("https://x.test/nb.ipynb".to_owned())
    );
}

#[test]
fn from_flags_rejects_no_origin() {
    let err = NotebookSource::from_flags(None, None, None).unwrap_err();
    assert!(matches!(err, SourceError::NoSource));
}

#[test]
fn from_flags_rejects_multiple_origins() {
    let err = NotebookSource::from_flags(
        Some(PathBuf::from("nb.ipynb")),
        Some("https://x.test/nb.ipynb".to_owned()),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, SourceError::MultipleSources));
}

// ── Local file ──

#[tokio::test]
async fn local_file_resolves_with_basename() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("analysis.ipynb");
    std::fs::write(&path, NOTEBOOK_JSON).unwrap();

    let client = SourceClient::with_fetcher(MockFetcher::new());
    let resolved = client
        .resolve(&NotebookSource::LocalFile(path))
        .await
        .unwrap();

    assert_eq!(resolved.filename, "analysis.ipynb");
    assert_eq!(resolved.notebook.cells.len(), 1);
    assert!(resolved.origin_url.is_none());
}

#[tokio::test]
async fn local_file_missing_is_read_error() {
    let client = SourceClient::with_fetcher(MockFetcher::new());
    let err = client
        .resolve(&NotebookSource::LocalFile(PathBuf::from("/no/such/nb.ipynb")))
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::ReadFile { .. }));
}

// ── Direct URL ──

#[tokio::test]
async fn direct_url_resolves_and_records_origin() {
    let mut mock = MockFetcher::new();
    mock.expect_get()
        .withf(|url| url == "https://example.com/notebooks/report.ipynb")
        .returning(|_| Ok(ok_response(NOTEBOOK_JSON, vec![])));

    let client = SourceClient::with_fetcher(mock);
    let resolved = client
        .resolve(&NotebookSource::DirectUrl(
            "https://example.com/notebooks/report.ipynb".to_owned(),
        ))
        .await
        .unwrap();

    assert_eq!(resolved.filename, "report.ipynb");
    assert_eq!(
        resolved.origin_url.as_deref(),
        Some("https://example.com/notebooks/report.ipynb")
    );
}

#[tokio::test]
async fn direct_url_404_is_fetch_error() {
    let mut mock = MockFetcher::new();
    mock.expect_get().returning(|_| {
        Ok(HttpResponse {
            status: 404,
            reason: "Not Found".to_owned(),
            body: String::new(),
            headers: vec![],
        })
    });

    let client = SourceClient::with_fetcher(mock);
    let err = client
        .resolve(&NotebookSource::DirectUrl(
            "https://example.com/gone.ipynb".to_owned(),
        ))
        .await
        .unwrap_err();

    match err {
        SourceError::Fetch(FetchError::Status { status, reason, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn direct_url_body_must_parse_as_notebook() {
    let mut mock = MockFetcher::new();
    mock.expect_get()
        .returning(|_| Ok(ok_response("<html>not a notebook</html>", vec![])));

    let client = SourceClient::with_fetcher(mock);
    let err = client
        .resolve(&NotebookSource::DirectUrl(
            "https://example.com/nb.ipynb".to_owned(),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Notebook(_)));
}

// ── Gallery URL ──

#[tokio::test]
async fn gallery_fetches_download_url_and_keeps_base_as_origin() {
    let mut mock = MockFetcher::new();
    mock.expect_get()
        .withf(|url| url == "https://gallery.example.com/notebooks/42/download")
        .returning(|_| {
            Ok(ok_response(
                NOTEBOOK_JSON,
                vec![(
                    "Content-Disposition".to_owned(),
                    "attachment; filename=\"Sales Report.ipynb\"".to_owned(),
                )],
            ))
        });

    let client = SourceClient::with_fetcher(mock);
    let resolved = client
        .resolve(&NotebookSource::GalleryUrl(
            "https://gallery.example.com/notebooks/42".to_owned(),
        ))
        .await
        .unwrap();

    // Filename comes from the header, origin stays the gallery page
    assert_eq!(resolved.filename, "Sales Report.ipynb");
    assert_eq!(
        resolved.origin_url.as_deref(),
        Some("https://gallery.example.com/notebooks/42")
    );
}

#[tokio::test]
async fn gallery_without_disposition_falls_back_to_url_name() {
    let mut mock = MockFetcher::new();
    mock.expect_get()
        .returning(|_| Ok(ok_response(NOTEBOOK_JSON, vec![])));

    let client = SourceClient::with_fetcher(mock);
    let resolved = client
        .resolve(&NotebookSource::GalleryUrl(
            "https://gallery.example.com/notebooks/42".to_owned(),
        ))
        .await
        .unwrap();

    assert_eq!(resolved.filename, "download");
}

#[tokio::test]
async fn gallery_404_is_fetch_error_with_download_url() {
    let mut mock = MockFetcher::new();
    mock.expect_get().returning(|_| {
        Ok(HttpResponse {
            status: 404,
            reason: "Not Found".to_owned(),
            body: String::new(),
            headers: vec![],
        })
    });

    let client = SourceClient::with_fetcher(mock);
    let err = client
        .resolve(&NotebookSource::GalleryUrl(
            "https://gallery.example.com/notebooks/42".to_owned(),
        ))
        .await
        .unwrap_err();

    match err {
        SourceError::Fetch(FetchError::Status { url, status, .. }) => {
            assert_eq!(url, "https://gallery.example.com/notebooks/42/download");
            assert_eq!(status, 404);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
