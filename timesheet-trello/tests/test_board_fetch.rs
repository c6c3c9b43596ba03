//! Client and pipeline against a local stand-in for the Trello API.

use timesheet_trello::{finished_cards, Credentials, TrelloClient, TrelloError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn route(path: &str) -> (&'static str, &'static str) {
    match path {
        "/1/boards/b1" => ("200 OK", r#"{"id":"b1","name":"Team"}"#),
        "/1/boards/b1/lists" => (
            "200 OK",
            r#"[{"id":"L1","name":"Fini"},{"id":"L2","name":"Doing"},{"id":"L3","name":"Fini"}]"#,
        ),
        "/1/lists/L1/cards" => (
            "200 OK",
            r#"[{"id":"c9","name":"Stale","due":"2023-01-01T09:00:00.000Z","labels":[]}]"#,
        ),
        "/1/lists/L3/cards" => (
            "200 OK",
            r#"[
                {"id":"c1","name":"Ship","due":"2024-03-04T10:00:00.000Z",
                 "labels":[{"id":"x","name":"ops","color":"red"}]},
                {"id":"c2","name":"Someday","due":null,"labels":[]}
            ]"#,
        ),
        "/1/boards/denied" => ("401 Unauthorized", "invalid token"),
        _ => ("404 Not Found", "not found"),
    }
}

async fn serve(listener: TcpListener) {
    while let Ok((mut socket, _)) = listener.accept().await {
        tokio::spawn(async move {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }

            let request = String::from_utf8_lossy(&buf);
            let target = request.split_whitespace().nth(1).unwrap_or("/");
            let path = target.split('?').next().unwrap_or("/");
            let (status, body) = route(path);

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
    }
}

async fn client() -> TrelloClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener));

    TrelloClient::with_base_url(
        Credentials {
            app_key: "key".to_string(),
            token: "token".to_string(),
        },
        format!("http://{addr}/1"),
    )
}

#[tokio::test]
async fn test_missing_list_yields_no_cards() {
    let c = client().await;
    let cards = finished_cards(&c, "b1", "Archive").await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn test_last_list_with_the_name_is_used() {
    let c = client().await;
    let list = c.find_list("b1", "Fini").await.unwrap().unwrap();
    assert_eq!(list.id, "L3");

    let cards = finished_cards(&c, "b1", "Fini").await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Ship");
    assert_eq!(cards[0].labels, vec!["ops"]);
    assert_eq!(cards[0].due_day().to_string(), "2024-03-04");
}

#[tokio::test]
async fn test_rejected_credentials_are_fatal() {
    let c = client().await;
    let err = c.board("denied").await.unwrap_err();
    assert!(matches!(err, TrelloError::Unauthorized { .. }), "{err}");

    let err = finished_cards(&c, "denied", "Fini").await.unwrap_err();
    let unauthorized = err
        .chain()
        .filter_map(|e| e.downcast_ref::<TrelloError>())
        .any(|e| matches!(e, TrelloError::Unauthorized { .. }));
    assert!(unauthorized, "{err:#}");
}

#[tokio::test]
async fn test_other_http_failures_carry_status() {
    let c = client().await;
    let err = c.cards("nope").await.unwrap_err();
    match err {
        TrelloError::Status { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}
