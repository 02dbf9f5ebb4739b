//! Blog post API contract, shared by the in-memory and PostgreSQL suites.
//!
//! Every scenario expects a state seeded with [`seed_posts`].

#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::test;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use uuid::Uuid;

use quill_core::domain::{Author, BlogPost, NewBlogPost};
use quill_core::ports::BlogPostStore;
use quill_server::AppState;

/// Build the application around `$state` as `main` does.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(quill_server::observability::RequestIdMiddleware)
                .app_data(actix_web::web::Data::new($state))
                .configure(quill_server::configure_routes),
        )
        .await
    };
}

pub const SEED_COUNT: usize = 5;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "magna", "aliqua",
];

fn pick(words: &[&'static str]) -> &'static str {
    words.choose(&mut rand::thread_rng()).copied().unwrap_or("quill")
}

fn words(count: usize) -> String {
    (0..count).map(|_| pick(WORDS)).collect::<Vec<_>>().join(" ")
}

/// A random, valid blog post.
pub fn generate_post_data() -> NewBlogPost {
    let sentence_len = rand::thread_rng().gen_range(6..12);
    NewBlogPost::new(
        Author::new(pick(FIRST_NAMES), pick(LAST_NAMES)),
        words(3),
        format!("{}.", words(sentence_len)),
    )
}

/// Wire form of a post, as a client would send it.
pub fn to_json(post: &NewBlogPost) -> Value {
    json!({
        "author": {
            "firstName": post.author.first_name,
            "lastName": post.author.last_name,
        },
        "title": post.title,
        "content": post.content,
    })
}

pub async fn seed_posts(store: &dyn BlogPostStore, count: usize) -> Vec<BlogPost> {
    let mut seeded = Vec::with_capacity(count);
    for _ in 0..count {
        seeded.push(store.insert(generate_post_data()).await.unwrap());
    }
    seeded
}

async fn any_post(state: &AppState) -> BlogPost {
    state
        .posts
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("store should be seeded")
}

pub async fn get_returns_all_posts(state: AppState) {
    let app = init_app!(state.clone());

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<Value> = test::read_body_json(resp).await;
    assert!(!body.is_empty(), "seeding should have stored posts");
    assert_eq!(body.len() as u64, state.posts.count().await.unwrap());
}

pub async fn get_returns_posts_with_correct_fields(state: AppState) {
    let app = init_app!(state.clone());

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );

    let body: Vec<Value> = test::read_body_json(resp).await;
    assert!(!body.is_empty());
    for post in &body {
        let post = post.as_object().expect("each post should be an object");
        for key in ["id", "author", "content", "title", "created"] {
            assert!(post.contains_key(key), "missing key {}", key);
        }
    }

    let listed = &body[0];
    let id = Uuid::parse_str(listed["id"].as_str().unwrap()).unwrap();
    let stored = state.posts.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(listed["id"], stored.id.to_string());
    assert!(
        listed["author"]
            .as_str()
            .unwrap()
            .contains(&stored.author.first_name)
    );
    assert_eq!(listed["content"], stored.content);
    assert_eq!(listed["title"], stored.title);
}

pub async fn post_adds_new_post(state: AppState) {
    let app = init_app!(state.clone());
    let new_post = generate_post_data();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(to_json(&new_post))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    for key in ["id", "author", "title", "content", "created"] {
        assert!(body.get(key).is_some(), "missing key {}", key);
    }
    assert!(!body["id"].is_null());
    assert!(
        body["author"]
            .as_str()
            .unwrap()
            .contains(&new_post.author.first_name)
    );
    assert_eq!(body["title"], new_post.title);
    assert_eq!(body["content"], new_post.content);

    let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
    let stored = state.posts.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.author.first_name, new_post.author.first_name);
    assert_eq!(stored.author.last_name, new_post.author.last_name);
    assert_eq!(stored.title, new_post.title);
    assert_eq!(stored.content, new_post.content);
}

pub async fn post_without_title_is_rejected(state: AppState) {
    let app = init_app!(state.clone());
    let before = state.posts.count().await.unwrap();

    let mut payload = to_json(&generate_post_data());
    payload.as_object_mut().unwrap().remove("title");

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 422);
    assert_eq!(body["errors"], json!(["title is required"]));

    assert_eq!(state.posts.count().await.unwrap(), before);
}

pub async fn put_updates_sent_fields(state: AppState) {
    let app = init_app!(state.clone());
    let post = any_post(&state).await;

    let update = json!({
        "id": post.id.to_string(),
        "title": "Test Testing Title",
        "content": "Test Testing Content",
    });

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", post.id))
        .set_json(update)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let stored = state.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.id, post.id);
    assert_eq!(stored.title, "Test Testing Title");
    assert_eq!(stored.content, "Test Testing Content");
    assert_eq!(stored.author, post.author);
    assert_eq!(stored.created, post.created);
}

pub async fn delete_removes_post(state: AppState) {
    let app = init_app!(state.clone());
    let post = any_post(&state).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert!(state.posts.find_by_id(post.id).await.unwrap().is_none());
}
