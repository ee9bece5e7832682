use staffdir::{notes::Store, Client, Error};
use std::collections::HashSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_keep_every_note() {
    let store = Store::new();

    let tasks: Vec<_> = (0..100)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.add("e-1", format!("note {}", i)) })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let notes = store.list("e-1");
    assert_eq!(notes.len(), 100);

    let contents: HashSet<String> = notes.iter().map(|n| n.content.clone()).collect();
    assert_eq!(contents.len(), 100);
    for i in 0..100 {
        assert!(contents.contains(&format!("note {}", i)));
    }

    let ids: HashSet<String> = notes.iter().map(|n| n.id.clone()).collect();
    assert_eq!(ids.len(), 100);
    assert!(notes
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[tokio::test]
async fn test_notes_through_client() {
    let client = Client::builder().no_env().build().unwrap();

    let note = client.notes().add("e-2", "Prefers mornings").unwrap();
    assert_eq!(client.notes().list("e-2")[0], note);

    match client.notes().add("e-2", "   ") {
        Err(e @ Error::EmptyContent) => {
            assert_eq!(e.status_code(), http::StatusCode::BAD_REQUEST);
            assert_eq!(e.public_message(), "Note content must not be empty");
        }
        res => panic!("Expected empty content error, got {:?}", res),
    }
    assert_eq!(client.notes().count("e-2"), 1);
}

#[test]
fn test_note_json() {
    let store = Store::new();
    let note = store.add("e-3", "hello").unwrap();

    let value = serde_json::to_value(&note).unwrap();
    assert_eq!(value["id"], note.id.as_str());
    assert_eq!(value["employeeId"], "e-3");
    assert_eq!(value["content"], "hello");
    assert!(value["createdAt"].is_string());
}
