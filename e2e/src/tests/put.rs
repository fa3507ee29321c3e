use httpmock::prelude::*;
use solid_web::StatusCode;

use super::utils::client;

#[tokio::test]
async fn put_defaults_to_turtle() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/notes/todo.ttl")
                .header("content-type", "text/turtle")
                .body("<#t1> <http://purl.org/dc/terms/title> \"x\" .");
            then.status(201);
        })
        .await;

    let url = server.url("/notes/todo.ttl");
    let meta = client()
        .put(&url, "<#t1> <http://purl.org/dc/terms/title> \"x\" .", None)
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(meta.url(), url);
}

#[tokio::test]
async fn replace_with_mime_on_200() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/notes/readme.txt")
                .header("content-type", "text/plain")
                .body("hello");
            then.status(200)
                .header("Allow", "GET, PUT, DELETE");
        })
        .await;

    let meta = client()
        .replace(server.url("/notes/readme.txt"), "hello", Some("text/plain"))
        .await
        .unwrap();
    mock.assert_async().await;
    assert!(meta.exists());
    assert!(meta.can(solid_web::Capability::Put));
}

#[tokio::test]
async fn put_without_data_sends_empty_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/empty.ttl").body("");
            then.status(201);
        })
        .await;

    client()
        .put(server.url("/empty.ttl"), Vec::new(), None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn put_rejects_404_and_500() {
    let server = MockServer::start_async().await;
    for (path, status) in [("/a", 404), ("/b", 500)] {
        server
            .mock_async(|when, then| {
                when.method(PUT).path(path);
                then.status(status);
            })
            .await;

        let err = client()
            .put(server.url(path), "x", None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::from_u16(status).unwrap()));
    }
}
