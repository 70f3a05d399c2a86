//! Unit tests for FileSystemPromptStore
//!
//! These tests focus on persistence across reopen and on-disk edge cases.

use gallery_repository::{
    FileSystemPromptStore, NewPrompt, PromptQuery, PromptStore, PromptUpdate, RepositoryError,
};
use tempfile::TempDir;
use tokio::fs;

fn sample_prompt() -> NewPrompt {
    NewPrompt {
        service_type: "insurance".to_string(),
        prompt: "You are an insurance claims assistant.".to_string(),
        agent_type: "chat".to_string(),
        use_case: "claims".to_string(),
        language: "english".to_string(),
    }
}

#[tokio::test]
async fn test_missing_file_opens_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemPromptStore::open(temp_dir.path().join("library.json"))
        .await
        .unwrap();

    assert!(store.list_components().await.unwrap().is_empty());
    assert!(store.service_types().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_writes_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data/library.json");

    let (prompt_id, component_id) = {
        let store = FileSystemPromptStore::open(&path).await.unwrap();
        let prompt = store.insert_prompt(sample_prompt(), 81.25).await.unwrap();
        let component = store
            .insert_component("Always confirm the policy number.".to_string(), 64.0)
            .await
            .unwrap();
        (prompt.prompt_id, component.prompt_component_id)
    };

    assert!(path.exists());

    let reopened = FileSystemPromptStore::open(&path).await.unwrap();
    let prompts = reopened
        .find_prompts(&PromptQuery::new("insurance"))
        .await
        .unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].prompt_id, prompt_id);
    assert_eq!(prompts[0].service_type, "Insurance");
    assert_eq!(prompts[0].prompt_accuracy, 81.25);

    let components = reopened.list_components().await.unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].prompt_component_id, component_id);
}

#[tokio::test]
async fn test_update_and_delete_persist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library.json");

    let store = FileSystemPromptStore::open(&path).await.unwrap();
    let prompt = store.insert_prompt(sample_prompt(), 81.0).await.unwrap();
    let component = store
        .insert_component("Be polite.".to_string(), 50.0)
        .await
        .unwrap();

    store
        .update_prompt(
            &prompt.prompt_id,
            PromptUpdate {
                language: Some("Hindi".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    store.delete(&component.prompt_component_id).await.unwrap();

    let reopened = FileSystemPromptStore::open(&path).await.unwrap();
    assert_eq!(reopened.languages().await.unwrap(), vec!["Hindi"]);
    assert!(reopened.list_components().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_mutation_does_not_touch_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library.json");

    let store = FileSystemPromptStore::open(&path).await.unwrap();
    let err = store
        .delete("6f1c3a52-9d1e-4c55-a0ef-2b8f1d0c7e11")
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_corrupt_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library.json");
    fs::write(&path, "{ not json").await.unwrap();

    let result = FileSystemPromptStore::open(&path).await;
    assert!(matches!(result, Err(RepositoryError::Json(_))));
}

#[tokio::test]
async fn test_directory_path_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let result = FileSystemPromptStore::open(temp_dir.path()).await;
    assert!(matches!(result, Err(RepositoryError::InvalidPath { .. })));
}
