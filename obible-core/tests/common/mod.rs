//! Fixture backend serving a tiny two-translation corpus

use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct BooksQuery {
    translation: String,
}

#[derive(Deserialize)]
struct TextQuery {
    translation: String,
    book: String,
    chapter: u32,
}

#[derive(Deserialize)]
struct SearchQuery {
    translation: String,
    q: String,
    limit: usize,
}

fn books_for(translation: &str) -> Option<Value> {
    match translation {
        "KJV" => Some(json!([
            {"id": "GEN", "name": "Genesis", "chaptersCount": 50},
            {"id": "JUD", "name": "Jude", "chaptersCount": 1}
        ])),
        "LUT" => Some(json!([
            {"id": "GEN", "name": "1. Mose", "chaptersCount": 50},
            {"id": "JUD", "name": "Judas", "chaptersCount": 1}
        ])),
        "BROKEN" => Some(json!([
            {"id": "GEN", "name": "Genesis", "chaptersCount": 50}
        ])),
        _ => None,
    }
}

async fn translations() -> Json<Value> {
    Json(json!({"translations": ["KJV", "LUT"]}))
}

async fn books(Query(q): Query<BooksQuery>) -> Result<Json<Value>, StatusCode> {
    let books = books_for(&q.translation).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({"translation": q.translation, "books": books})))
}

async fn text(Query(q): Query<TextQuery>) -> Result<Json<Value>, StatusCode> {
    if q.translation == "BROKEN" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let books = books_for(&q.translation).ok_or(StatusCode::NOT_FOUND)?;
    let book = books
        .as_array()
        .and_then(|list| list.iter().find(|b| b["id"] == q.book.as_str()))
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    let count = book["chaptersCount"].as_u64().unwrap_or(0) as u32;
    if q.chapter < 1 || q.chapter > count {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(json!({
        "translation": q.translation,
        "book": book,
        "chapter": q.chapter,
        "verses": [
            {"v": 1, "t": format!("{} {} verse one", q.book, q.chapter)},
            {"v": 2, "t": format!("{} {} verse two", q.book, q.chapter)},
            {"v": 3, "t": format!("{} {} verse three", q.book, q.chapter)}
        ]
    })))
}

async fn search(Query(q): Query<SearchQuery>) -> Result<Json<Value>, StatusCode> {
    if books_for(&q.translation).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    let hits: Vec<Value> = if q.q == "nothing" {
        Vec::new()
    } else {
        (1..=3u32)
            .map(|verse| {
                json!({
                    "bookId": "GEN",
                    "bookName": "Genesis",
                    "chapter": 1,
                    "verse": verse,
                    "snippet": format!("... {} ...", q.q)
                })
            })
            .take(q.limit)
            .collect()
    };
    Ok(Json(json!({"translation": q.translation, "query": q.q, "results": hits})))
}

/// Start the fixture backend on an ephemeral port and return its base URL
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/translations", get(translations))
        .route("/api/books", get(books))
        .route("/api/text", get(text))
        .route("/api/search", get(search));
    spawn(app).await
}

/// A backend whose translation endpoint answers with a non-JSON body
#[allow(dead_code)]
pub async fn spawn_garbage_backend() -> String {
    async fn garbage() -> impl IntoResponse {
        "this is not json"
    }
    spawn(Router::new().route("/api/translations", get(garbage))).await
}

/// Serve `app` on an ephemeral port and return its base URL
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture backend");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fixture backend crashed");
    });

    format!("http://{}", addr)
}
