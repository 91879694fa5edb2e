//! API Module Tests
//!
//! Runs the full router on a real socket and speaks to it over HTTP,
//! covering both store backends.
//!
//! ## Test Scopes
//! - **Collection Reads**: The seeded startup state and list responses.
//! - **Create**: 200 with the persisted record; validation rejects with the
//!   uniform error envelope.
//! - **By-Id Operations**: Fetch, replace and delete, the empty-bodied 404
//!   and both delete policies.
//! - **Pages**: `/info`, the root landing page and the unknown-endpoint
//!   fallback.
//! - **Document Backend**: The same routes over a collection file,
//!   including malformed ids.

#[cfg(test)]
mod tests {
    use crate::api::{DeletePolicy, router};
    use crate::record::{Note, Person, PersonDraft};
    use crate::store::{DocumentStore, DynStore, MemoryStore};
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use std::net::SocketAddr;
    use std::sync::Arc;

    // Builds a person with a fixed id, bypassing the store.
    fn person(id: &str, name: &str, number: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    fn seeded_persons() -> Vec<Person> {
        vec![
            person("1", "Arto Hellas", "040-123456"),
            person("2", "Ada Lovelace", "39-44-5323523"),
            person("3", "Dan Abramov", "12-43-234345"),
            person("4", "Mary Poppendieck", "39-23-6423122"),
        ]
    }

    async fn spawn(
        persons: DynStore<Person>,
        notes: DynStore<Note>,
        policy: DeletePolicy,
    ) -> SocketAddr {
        let app = router(persons, notes, policy);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn spawn_seeded() -> SocketAddr {
        spawn(
            Arc::new(MemoryStore::with_records(seeded_persons())),
            Arc::new(MemoryStore::new()),
            DeletePolicy::Idempotent,
        )
        .await
    }

    async fn spawn_empty(policy: DeletePolicy) -> SocketAddr {
        spawn(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
            policy,
        )
        .await
    }

    fn persons_url(addr: SocketAddr) -> String {
        format!("http://{}/api/persons", addr)
    }

    fn person_url(addr: SocketAddr, id: &str) -> String {
        format!("http://{}/api/persons/{}", addr, id)
    }

    fn notes_url(addr: SocketAddr) -> String {
        format!("http://{}/api/notes", addr)
    }

    // ============================================================
    // COLLECTION READ TESTS
    // ============================================================

    #[tokio::test]
    async fn test_list_returns_the_seeded_collection() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client.get(persons_url(addr)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let records: Vec<Person> = response.json().await.unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].name, "Arto Hellas");
    }

    // ============================================================
    // CREATE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_create_returns_the_persisted_record() {
        let addr = spawn_empty(DeletePolicy::Idempotent).await;
        let client = reqwest::Client::new();

        let response = client
            .post(persons_url(addr))
            .json(&PersonDraft::new("Ada Lovelace", "39-44-5323523"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created: Person = response.json().await.unwrap();
        assert_eq!(created.id, "1");
        assert_eq!(created.name, "Ada Lovelace");
        assert_eq!(created.number, "39-44-5323523");

        let listed: Vec<Person> = client
            .get(persons_url(addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_create_without_number_is_rejected() {
        let addr = spawn_empty(DeletePolicy::Idempotent).await;
        let client = reqwest::Client::new();

        let response = client
            .post(persons_url(addr))
            .json(&json!({ "name": "Ada" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "content missing" }));

        let listed: Vec<Person> = client
            .get(persons_url(addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    // ============================================================
    // FETCH-BY-ID TESTS
    // ============================================================

    #[tokio::test]
    async fn test_fetch_known_id_returns_the_record() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client.get(person_url(addr, "2")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let found: Person = response.json().await.unwrap();
        assert_eq!(found.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_gives_an_empty_404() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client.get(person_url(addr, "1234")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.text().await.unwrap().is_empty());
    }

    // ============================================================
    // REPLACE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_replace_updates_the_number_and_keeps_the_id() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client
            .put(person_url(addr, "1"))
            .json(&PersonDraft::new("Arto Hellas", "040-999999"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let updated: Person = response.json().await.unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.number, "040-999999");

        let listed: Vec<Person> = client
            .get(persons_url(addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(listed.len(), 4);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_is_a_404() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client
            .put(person_url(addr, "99"))
            .json(&PersonDraft::new("Nobody", "000-000"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_replace_without_number_is_rejected() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client
            .put(person_url(addr, "1"))
            .json(&json!({ "name": "Arto Hellas" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "content missing");
    }

    // ============================================================
    // DELETE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_delete_is_idempotent_by_default() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let first = client.delete(person_url(addr, "3")).send().await.unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let lookup = client.get(person_url(addr, "3")).send().await.unwrap();
        assert_eq!(lookup.status(), StatusCode::NOT_FOUND);

        let second = client.delete(person_url(addr, "3")).send().await.unwrap();
        assert_eq!(second.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_deletes_of_absent_records() {
        let addr = spawn_empty(DeletePolicy::Strict).await;
        let client = reqwest::Client::new();

        let response = client.delete(person_url(addr, "7")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ============================================================
    // NOTES COLLECTION TESTS
    // ============================================================

    #[tokio::test]
    async fn test_notes_expose_the_same_operations() {
        let addr = spawn_empty(DeletePolicy::Idempotent).await;
        let client = reqwest::Client::new();

        let created: Note = client
            .post(notes_url(addr))
            .json(&json!({ "content": "HTML is easy", "important": true }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(created.content, "HTML is easy");
        assert!(created.important);

        let toggled: Note = client
            .put(format!("http://{}/api/notes/{}", addr, created.id))
            .json(&json!({ "content": "HTML is easy", "important": false }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(toggled.id, created.id);
        assert!(!toggled.important);
        assert_eq!(toggled.date, created.date);

        let deleted = client
            .delete(format!("http://{}/api/notes/{}", addr, created.id))
            .send()
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_note_created_without_flag_gets_defaults() {
        let addr = spawn_empty(DeletePolicy::Idempotent).await;
        let client = reqwest::Client::new();

        let body: Value = client
            .post(notes_url(addr))
            .json(&json!({ "content": "Browser can execute only Javascript" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(body["important"].is_boolean());
        let date = body["date"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(date).is_ok());
    }

    // ============================================================
    // PAGE AND FALLBACK TESTS
    // ============================================================

    #[tokio::test]
    async fn test_info_page_reports_the_entry_count() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client
            .get(format!("http://{}/info", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = response.text().await.unwrap();
        assert!(page.contains("Phonebook has info for 4 people"));
    }

    #[tokio::test]
    async fn test_unknown_endpoint_gets_the_json_fallback() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client
            .get(format!("http://{}/api/unknown", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "unknown endpoint" }));
    }

    #[tokio::test]
    async fn test_landing_page_answers_the_root() {
        let addr = spawn_seeded().await;
        let client = reqwest::Client::new();

        let response = client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.text().await.unwrap().contains("Phonebook"));
    }

    // ============================================================
    // DOCUMENT BACKEND TESTS
    // ============================================================

    #[tokio::test]
    async fn test_document_backend_serves_the_same_routes() {
        let dir = tempfile::tempdir().unwrap();
        let addr = spawn(
            Arc::new(DocumentStore::open(dir.path()).unwrap()),
            Arc::new(DocumentStore::open(dir.path()).unwrap()),
            DeletePolicy::Idempotent,
        )
        .await;
        let client = reqwest::Client::new();

        let created: Person = client
            .post(persons_url(addr))
            .json(&PersonDraft::new("Mary Poppendieck", "39-23-6423122"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(uuid::Uuid::parse_str(&created.id).is_ok());

        let fetched: Person = client
            .get(person_url(addr, &created.id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(fetched, created);

        let deleted = client
            .delete(person_url(addr, &created.id))
            .send()
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_document_backend_rejects_malformed_ids() {
        let dir = tempfile::tempdir().unwrap();
        let addr = spawn(
            Arc::new(DocumentStore::open(dir.path()).unwrap()),
            Arc::new(DocumentStore::open(dir.path()).unwrap()),
            DeletePolicy::Idempotent,
        )
        .await;
        let client = reqwest::Client::new();

        let response = client.get(person_url(addr, "123")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "malformatted id" }));
    }
}
